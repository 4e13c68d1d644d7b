pub mod aircraft;
pub mod mesh;
pub mod model;
pub mod posable;
