pub mod approach;
pub mod bounds;
pub mod grid;
pub mod rng;
