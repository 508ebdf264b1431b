pub mod aggregate;
pub mod award;
pub mod commands;
pub mod contracts;
pub mod error;
pub mod filter;
pub mod geo;
pub mod session;
pub mod set_aside;
pub mod setup;
pub mod snapshot;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
