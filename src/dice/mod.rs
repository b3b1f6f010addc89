mod engine;
mod types;

pub use engine::{roll, roll_dice};
pub use types::*;
