pub mod decrypt;

pub use decrypt::*;
