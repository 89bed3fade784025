//! Headless match runner over the core rules: seat policies, batches and traces.

mod batch;
mod config;
mod error;
mod policy;
mod simulator;
mod trace;

pub use batch::*;
pub use config::*;
pub use error::*;
pub use policy::*;
pub use simulator::*;
pub use trace::*;
