mod signal;

pub use signal::*;
