pub mod pointer;
pub mod resize;

pub use pointer::wire_input_handlers;
pub use resize::wire_resize;
