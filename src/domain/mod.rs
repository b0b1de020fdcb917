// Domain layer: interface identity model and the ports the demo runs against.

pub mod model;
pub mod ports;
