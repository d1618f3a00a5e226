use crate::dom;
use crate::WebField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rebuild the grid whenever the window changes size.
pub fn wire_resize(window: &web::Window, field: &Rc<RefCell<WebField>>) {
    let field = field.clone();
    let window_for_size = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(size) = dom::viewport_size(&window_for_size) else {
            log::warn!("[resize] viewport size unavailable");
            return;
        };
        if let Err(e) = field.borrow_mut().resize(size.x, size.y) {
            log::error!("[resize] rebuild failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
