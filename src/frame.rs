use crate::WebField;
use magnet_core::FrameScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Holds the one animation-frame callback shared by every scheduled step.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn schedule_step(&mut self) -> Option<i32> {
        let tick = self.tick.borrow();
        let cb = tick.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_step(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Install the step callback. Must run before any input can trigger a step.
pub fn bind_loop(field: &Rc<RefCell<WebField>>, tick: &TickSlot) {
    let field_tick = field.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        field_tick.borrow_mut().step();
    }) as Box<dyn FnMut()>));
}
