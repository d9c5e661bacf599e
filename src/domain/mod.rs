// Domain layer: grammar, models and ports. No I/O here.

pub mod grammar;
pub mod model;
pub mod ports;
