use crate::constants::ROOT_ELEMENT_ID;
use crate::settings;
use glam::Vec2;
use magnet_core::MagnetConfig;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Current inner size of the window in CSS px.
pub fn viewport_size(window: &web::Window) -> Option<Vec2> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(w as f32, h as f32))
}

pub fn root_element(document: &web::Document) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(ROOT_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ROOT_ELEMENT_ID))
}

pub fn read_config(root: &web::Element) -> MagnetConfig {
    settings::apply_overrides(MagnetConfig::default(), |name| root.get_attribute(name))
}
