use crate::constants::MARKER_CLASS;
use crate::style;
use glam::Vec2;
use magnet_core::Surface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Markers as absolutely positioned `<span>`s under the root element.
pub struct DomSurface {
    document: web::Document,
    root: web::Element,
}

impl DomSurface {
    pub fn new(document: web::Document, root: web::Element) -> Self {
        Self { document, root }
    }
}

impl Surface for DomSurface {
    type Handle = web::HtmlElement;
    type Error = JsValue;

    fn spawn_marker(&mut self, origin: Vec2, glyph: &str) -> Result<web::HtmlElement, JsValue> {
        let el: web::HtmlElement = self
            .document
            .create_element("span")?
            .dyn_into::<web::HtmlElement>()
            .map_err(JsValue::from)?;
        el.set_class_name(MARKER_CLASS);
        el.set_attribute("style", &style::marker_style(origin))?;
        el.set_text_content(Some(glyph));
        self.root.append_child(&el)?;
        Ok(el)
    }

    fn set_translation(&mut self, handle: &web::HtmlElement, offset: Vec2) {
        if let Err(e) = handle
            .style()
            .set_property("transform", &style::translate(offset))
        {
            log::warn!("[surface] transform write failed: {:?}", e);
        }
    }

    fn remove_marker(&mut self, handle: web::HtmlElement) {
        handle.remove();
    }
}
