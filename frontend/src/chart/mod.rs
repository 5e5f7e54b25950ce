pub mod draw;
pub mod model;
