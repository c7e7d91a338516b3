pub mod error;
pub mod renderer;
pub mod spec;
pub mod surface;
pub mod svg;
