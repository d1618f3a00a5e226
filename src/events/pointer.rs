use crate::WebField;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(window: &web::Window, field: &Rc<RefCell<WebField>>) {
    wire_pointermove(window, field);
    wire_touchstart(window, field);
}

fn wire_pointermove(window: &web::Window, field: &Rc<RefCell<WebField>>) {
    let field = field.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        field
            .borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
fn touch_points(ev: &web::TouchEvent) -> Vec<Vec2> {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

fn wire_touchstart(window: &web::Window, field: &Rc<RefCell<WebField>>) {
    let field = field.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        field.borrow_mut().touch_started(&touch_points(&ev));
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}
