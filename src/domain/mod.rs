// Domain layer: lesson model and the ports the core runs against.

pub mod model;
pub mod ports;
