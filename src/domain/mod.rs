// Domain layer: endpoint and cluster models plus the ports the core depends on.

pub mod model;
pub mod ports;
