pub mod progress;
pub mod section;

pub use progress::{offset_from_scroll, ScrollState};
pub use section::Section;
