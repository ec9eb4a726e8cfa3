#![warn(clippy::pedantic)]

pub mod memory;

pub use memory::Memory;
