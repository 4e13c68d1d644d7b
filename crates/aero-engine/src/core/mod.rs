pub mod pose;
pub mod time;
