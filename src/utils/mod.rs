pub mod assembler;
pub mod capacity;
pub mod distance;
