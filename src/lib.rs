pub mod channel;
pub mod config;
mod error;
mod prelude;
pub mod skeleton;
mod types;

#[cfg(feature = "proptest-support")]
pub mod proptest;

pub use error::{Error, Result};
pub use prelude::*;
