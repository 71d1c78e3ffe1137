mod config;
mod graph;
mod schedule;
mod weight;

pub use config::*;
pub use graph::*;
pub use schedule::*;
pub use weight::*;
