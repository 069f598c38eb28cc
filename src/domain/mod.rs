// Domain layer: core models and ports. No network or runtime dependencies here.

pub mod model;
pub mod ports;
