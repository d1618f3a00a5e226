pub mod config;
pub mod constants;
pub mod driver;
pub mod field;
pub mod grid;
pub mod pointer;
pub mod schedule;
pub mod surface;

pub use config::*;
pub use driver::*;
pub use field::*;
pub use grid::*;
pub use pointer::*;
pub use schedule::*;
pub use surface::*;
