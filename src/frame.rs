use crate::render::CanvasPainter;
use portfolio_core::{FrameStep, Session};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub painter: CanvasPainter,
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameStep {
        let mut session = self.session.borrow_mut();
        let step = session.tick();
        if step == FrameStep::Reschedule {
            if let Some(field) = session.field() {
                self.painter.paint(field);
            }
        }
        step
    }
}

/// Handle to a running requestAnimationFrame chain.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Cancel the pending frame and release the callback.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's reference cycle through `tick`
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame: {:?}", e);
            None
        }
    }
}

/// Run `ctx.frame()` once per display frame until the session stops it.
pub fn start_loop(mut ctx: FrameContext) -> FrameLoop {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        if ctx.frame() == FrameStep::Stop {
            log::info!("[frame] loop stopped");
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            pending_clone.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(request_frame(cb));
    }
    FrameLoop { pending, tick }
}
