// Domain layer: plain entities and the port the driver reads its scenario from.

pub mod model;
pub mod ports;
