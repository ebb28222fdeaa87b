pub mod assets;
pub mod constants;
pub mod counter;
pub mod cursor;
pub mod frame_gate;
pub mod orbit;
pub mod reveal;
pub mod scroll;
pub mod stars;
pub mod startup;

pub use constants::*;
