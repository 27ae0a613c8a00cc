mod client;
mod types;

pub use client::{ActivityClient, DEFAULT_BASE_URL};
pub use types::{FetchError, Result};
