pub mod input;
pub mod solve;
