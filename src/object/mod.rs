mod core;
pub use core::*;

mod dims;
pub use dims::*;

mod vector;
pub use vector::*;
