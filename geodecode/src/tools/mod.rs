pub mod dump;
mod input;
pub mod probe;
