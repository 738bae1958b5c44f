// Domain layer: job records and the seams the shell talks through.

pub mod model;
pub mod ports;
