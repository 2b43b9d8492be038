pub mod config;
pub mod error;
mod shared;
pub mod submissions;
mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use shared::*;
pub use submissions::NewSubmission;
