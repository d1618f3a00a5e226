#![cfg(target_arch = "wasm32")]
use magnet_core::MagnetField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod settings;
mod style;
mod surface;

pub(crate) type WebField = MagnetField<surface::DomSurface, frame::RafScheduler>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("magnet-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let root = dom::root_element(&document)?;
    let config = dom::read_config(&root);
    let viewport =
        dom::viewport_size(&window).ok_or_else(|| anyhow::anyhow!("viewport size unavailable"))?;

    let tick = frame::TickSlot::default();
    let field = MagnetField::new(
        surface::DomSurface::new(document, root),
        frame::RafScheduler::new(window.clone(), tick.clone()),
        config,
        viewport,
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    let field = Rc::new(RefCell::new(field));

    // the step callback must exist before any input can request a frame
    frame::bind_loop(&field, &tick);
    events::wire_input_handlers(&window, &field);
    events::wire_resize(&window, &field);
    Ok(())
}
