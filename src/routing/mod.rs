mod dijkstra;

pub use dijkstra::*;
