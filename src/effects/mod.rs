pub mod cursor;
pub mod images;
pub mod loading;
pub mod reveal;
pub mod scroll;
pub mod starfield;
pub mod stats;

pub use scroll::{wire_nav_progress, wire_parallax, wire_scroll_indicator, wire_smooth_scroll};
