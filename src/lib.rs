pub mod routing;
pub mod scheduling;
pub mod services;
pub mod structures;
