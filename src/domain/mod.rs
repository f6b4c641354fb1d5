// Domain layer: entities, flow state and ports. No I/O here.

pub mod model;
pub mod ports;
