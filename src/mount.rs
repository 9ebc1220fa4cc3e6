use crate::constants::{CANVAS_ID, GLOW_ID, ROOT_ID};
use crate::events::{self, GlitchTimer};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::listener::EventListener;
use crate::render::CanvasPainter;
use crate::reveal::{self, RevealObserver};
use crate::{dom, page};
use anyhow::anyhow;
use portfolio_core::markup::GLITCH_TITLE_ID;
use portfolio_core::{GlitchCycle, ParticleConfig, ParticleField, Profile, Session};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Every live browser registration owned by a mounted page.
///
/// Dropping a `Mount` tears it down; `teardown` can also be called directly.
pub struct Mount {
    session: Rc<RefCell<Session>>,
    listeners: Vec<EventListener>,
    glitch: Option<GlitchTimer>,
    reveal: Option<RevealObserver>,
    frame_loop: Option<FrameLoop>,
}

/// Canvas, painter and particle field, or `None` if there is nothing to draw on.
fn build_animation(
    document: &web::Document,
) -> Option<(web::HtmlCanvasElement, CanvasPainter, ParticleField)> {
    let Some(canvas) = dom::canvas_by_id(document, CANVAS_ID) else {
        log::warn!("[mount] missing #{}, particle animation disabled", CANVAS_ID);
        return None;
    };
    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let Some(painter) = CanvasPainter::new(canvas.clone()) else {
        log::warn!("[mount] no 2d context, particle animation disabled");
        return None;
    };
    match ParticleField::new(ParticleConfig::default(), w, h, rand::random()) {
        Ok(field) => Some((canvas, painter, field)),
        Err(e) => {
            log::warn!("[mount] particle field: {}", e);
            None
        }
    }
}

pub fn mount(document: &web::Document) -> anyhow::Result<Mount> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| anyhow!("missing #{}", ROOT_ID))?;

    let profile = Profile::default_profile();
    profile.validate()?;
    page::render_into(&root, profile);

    let animation = build_animation(document);
    let (canvas, painter, field) = match animation {
        Some((c, p, f)) => (Some(c), Some(p), Some(f)),
        None => (None, None, None),
    };
    let session = Rc::new(RefCell::new(Session::mount(field)));
    page::apply_loaded(document, session.borrow().is_loaded());

    let mut listeners = Vec::with_capacity(3);
    listeners.push(events::wire_pointer_glow(
        &window,
        session.clone(),
        dom::html_element_by_id(document, GLOW_ID),
    )?);
    listeners.push(events::wire_project_clicks(&root)?);
    if let Some(canvas) = canvas {
        listeners.push(events::wire_viewport_resize(
            &window,
            canvas,
            session.clone(),
        )?);
    }

    let glitch = GlitchTimer::start(
        &window,
        document.get_element_by_id(GLITCH_TITLE_ID),
        session.clone(),
        GlitchCycle::default(),
    )?;

    let reveal = match RevealObserver::observe(document) {
        Ok(r) => Some(r),
        Err(e) => {
            log::warn!("[mount] {:#}; revealing all sections", e);
            reveal::reveal_all(document);
            None
        }
    };

    let frame_loop = painter.map(|painter| {
        frame::start_loop(FrameContext {
            session: session.clone(),
            painter,
        })
    });

    log::info!(
        "[mount] listeners={} glitch={} animation={}",
        listeners.len(),
        glitch.is_running(),
        frame_loop.as_ref().is_some_and(|f| f.is_scheduled())
    );
    Ok(Mount {
        session,
        listeners,
        glitch: Some(glitch),
        reveal,
        frame_loop,
    })
}

impl Mount {
    #[inline]
    pub fn session(&self) -> &Rc<RefCell<Session>> {
        &self.session
    }

    pub fn teardown(&mut self) {
        if !self.session.borrow().is_mounted() {
            return;
        }
        // Stop sources of new work before marking the session inert
        for l in &mut self.listeners {
            l.remove();
            log::debug!("[mount] removed {} listener", l.kind());
        }
        if let Some(g) = self.glitch.as_mut() {
            g.stop();
        }
        if let Some(r) = &self.reveal {
            r.disconnect();
        }
        if let Some(f) = &self.frame_loop {
            f.cancel();
        }
        self.session.borrow_mut().teardown();
        log::info!("[mount] torn down");
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.teardown();
    }
}
