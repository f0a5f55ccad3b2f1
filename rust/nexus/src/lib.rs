#[macro_use]
extern crate tracing;

mod audit;
mod error;
mod leaderboards;
mod model;
mod snapshot;
mod store;

pub use audit::*;
pub use error::*;
pub use leaderboards::*;
pub use model::*;
pub use snapshot::*;
pub use store::*;
