pub mod flight;

pub use flight::{FlightScene, SceneTick};
