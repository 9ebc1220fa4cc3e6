use crate::constants::GLITCH_CLASS;
use portfolio_core::{GlitchCycle, Session};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Repeating timer that flashes the glitch class on the title.
///
/// Every `cycle.period` the flag is set and a one-shot timeout clears it
/// `cycle.active` later. `stop` clears both timers and the class.
pub struct GlitchTimer {
    window: web::Window,
    title: Option<web::Element>,
    interval_id: Option<i32>,
    pending_clear: Rc<Cell<Option<i32>>>,
    _fire: Closure<dyn FnMut()>,
    _clear: Rc<Closure<dyn FnMut()>>,
}

fn set_title_class(title: Option<&web::Element>, active: bool) {
    if let Some(el) = title {
        let cl = el.class_list();
        _ = if active {
            cl.add_1(GLITCH_CLASS)
        } else {
            cl.remove_1(GLITCH_CLASS)
        };
    }
}

/// Browser timer delay for a cycle duration.
#[inline]
fn timer_ms(d: Duration) -> i32 {
    d.as_millis().min(i32::MAX as u128) as i32
}

impl GlitchTimer {
    pub fn start(
        window: &web::Window,
        title: Option<web::Element>,
        session: Rc<RefCell<Session>>,
        cycle: GlitchCycle,
    ) -> anyhow::Result<Self> {
        let pending_clear: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let clear = {
            let session = session.clone();
            let title = title.clone();
            let pending = pending_clear.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                pending.set(None);
                let mut s = session.borrow_mut();
                let was_active = s.glitch_active();
                if s.set_glitch(false) && was_active {
                    set_title_class(title.as_ref(), false);
                }
            }) as Box<dyn FnMut()>))
        };

        let fire = {
            let title = title.clone();
            let clear = clear.clone();
            let pending = pending_clear.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                if !session.borrow_mut().set_glitch(true) {
                    return;
                }
                set_title_class(title.as_ref(), true);
                let clear_fn: &js_sys::Function = (*clear).as_ref().unchecked_ref();
                match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    clear_fn,
                    timer_ms(cycle.active()),
                ) {
                    Ok(id) => pending.set(Some(id)),
                    Err(e) => log::warn!("[glitch] setTimeout: {:?}", e),
                }
            }) as Box<dyn FnMut()>)
        };

        let interval_id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                fire.as_ref().unchecked_ref(),
                timer_ms(cycle.period()),
            )
            .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;

        Ok(Self {
            window: window.clone(),
            title,
            interval_id: Some(interval_id),
            pending_clear,
            _fire: fire,
            _clear: clear,
        })
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.interval_id.is_some()
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.interval_id.take() {
            self.window.clear_interval_with_handle(id);
        }
        if let Some(id) = self.pending_clear.take() {
            self.window.clear_timeout_with_handle(id);
        }
        set_title_class(self.title.as_ref(), false);
    }
}

impl Drop for GlitchTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
