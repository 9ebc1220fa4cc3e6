/// Holds the mounted page and remembers an unmount that arrives while the
/// asynchronous mount is still waiting for the DOM.
#[derive(Debug)]
pub enum MountSlot<M> {
    Empty,
    Pending,
    Cancelled,
    Mounted(M),
}

impl<M> Default for MountSlot<M> {
    fn default() -> Self {
        MountSlot::Empty
    }
}

impl<M> MountSlot<M> {
    /// Start a mount. Returns a previously mounted page, which the caller
    /// must tear down.
    pub fn begin(&mut self) -> Option<M> {
        match std::mem::replace(self, MountSlot::Pending) {
            MountSlot::Mounted(m) => Some(m),
            _ => None,
        }
    }

    /// Whether the pending mount may go ahead. A cancelled mount resets the
    /// slot to empty and answers `false`.
    pub fn proceed(&mut self) -> bool {
        match self {
            MountSlot::Pending => true,
            MountSlot::Cancelled => {
                *self = MountSlot::Empty;
                false
            }
            _ => false,
        }
    }

    pub fn finish(&mut self, mounted: M) {
        *self = MountSlot::Mounted(mounted);
    }

    /// Unmount: hands back the mounted page, or cancels a pending mount.
    pub fn cancel(&mut self) -> Option<M> {
        match std::mem::replace(self, MountSlot::Empty) {
            MountSlot::Mounted(m) => Some(m),
            MountSlot::Pending | MountSlot::Cancelled => {
                *self = MountSlot::Cancelled;
                None
            }
            MountSlot::Empty => None,
        }
    }
}
