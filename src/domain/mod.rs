// Domain layer: the normalized address, race outcome, and the ports providers and config implement.

pub mod model;
pub mod ports;
