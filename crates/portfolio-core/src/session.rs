//! Component-local state of one mounted page.
//!
//! The browser layer owns a `Session` behind `Rc<RefCell<_>>` and routes every
//! event through it. Once `teardown` has run the session is inert: events are
//! dropped and `tick` asks the frame loop to stop rescheduling.

use crate::constants::GLOW_RADIUS_PX;
use crate::error::PortfolioError;
use crate::particles::ParticleField;
use glam::Vec2;

/// What the frame loop should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStep {
    Reschedule,
    Stop,
}

pub struct Session {
    field: Option<ParticleField>,
    pointer: Vec2,
    glitch_active: bool,
    loaded: bool,
    mounted: bool,
    frames: u64,
}

impl Session {
    /// Start a mounted session. `field` is `None` when there is no drawing
    /// surface; everything except the animation still works.
    pub fn mount(field: Option<ParticleField>) -> Self {
        log::debug!(
            "[session] mount particles={}",
            field.as_ref().map_or(0, |f| f.len())
        );
        Self {
            field,
            pointer: Vec2::ZERO,
            glitch_active: false,
            loaded: true,
            mounted: true,
            frames: 0,
        }
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn glitch_active(&self) -> bool {
        self.glitch_active
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    #[inline]
    pub fn has_animation(&self) -> bool {
        self.field.is_some()
    }

    /// Top-left corner of the glow element so that it is centred on the pointer.
    #[inline]
    pub fn glow_origin(&self) -> Vec2 {
        self.pointer - Vec2::splat(GLOW_RADIUS_PX)
    }

    /// Returns `false` if the event was dropped.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        if !self.mounted {
            return false;
        }
        self.pointer = Vec2::new(x, y);
        true
    }

    /// Returns `false` if the change was dropped.
    pub fn set_glitch(&mut self, active: bool) -> bool {
        if !self.mounted {
            return false;
        }
        self.glitch_active = active;
        true
    }

    pub fn on_resize(&mut self, width: f32, height: f32) -> Result<(), PortfolioError> {
        if !self.mounted {
            return Ok(());
        }
        match self.field.as_mut() {
            Some(field) => field.resize(width, height),
            None => Ok(()),
        }
    }

    /// Advance the particle field by one display frame.
    pub fn tick(&mut self) -> FrameStep {
        if !self.mounted {
            return FrameStep::Stop;
        }
        match self.field.as_mut() {
            Some(field) => {
                field.step();
                self.frames += 1;
                FrameStep::Reschedule
            }
            None => FrameStep::Stop,
        }
    }

    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        log::debug!("[session] teardown after {} frames", self.frames);
        self.mounted = false;
        self.glitch_active = false;
    }
}
