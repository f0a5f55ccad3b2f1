#[macro_use]
extern crate tracing;

pub mod catalog;
mod check;
pub mod cli;
pub mod clock;
mod config;
mod engine;
mod error;
pub mod harvest;
pub mod ranking;

pub use check::*;
pub use config::*;
pub use engine::*;
pub use error::*;
