pub mod human;

pub use human::{HumanMode, TickClock};
