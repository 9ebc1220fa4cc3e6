#![cfg(target_arch = "wasm32")]
use portfolio_core::MountSlot;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod listener;
mod mount;
mod page;
mod render;
mod reveal;

thread_local! {
    static MOUNTED: RefCell<MountSlot<mount::Mount>> = const { RefCell::new(MountSlot::Empty) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let previous = MOUNTED.with(|slot| slot.borrow_mut().begin());
    if let Some(mut old) = previous {
        log::warn!("replacing an already mounted page");
        old.teardown();
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await?;

    // No await between this check and `finish`, so an unmount cannot slip in
    if !MOUNTED.with(|slot| slot.borrow_mut().proceed()) {
        log::info!("unmounted before the page was ready, skipping mount");
        return Ok(());
    }
    let mounted = mount::mount(&document)?;
    MOUNTED.with(|slot| slot.borrow_mut().finish(mounted));
    Ok(())
}

/// Tear the page down: listeners removed, timers cleared, frame loop stopped.
/// Called before the page is ready, it cancels the pending mount instead.
#[wasm_bindgen]
pub fn unmount() {
    let Some(mut m) = MOUNTED.with(|slot| slot.borrow_mut().cancel()) else {
        return;
    };
    let frames = m.session().borrow().frames();
    m.teardown();
    log::info!("unmounted after {} frames", frames);
}
