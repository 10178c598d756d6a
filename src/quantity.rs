#[macro_use]
mod macros;

pub mod cost;
pub mod distance;
pub mod energy;
pub mod mass;
pub mod power;
pub mod rate;
pub mod time;
