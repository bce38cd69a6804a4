pub mod catalog;
pub mod client;
pub mod errors;
pub mod transport;
pub mod types;

pub use client::IpApi;
pub use errors::IpApiError;
pub use types::{Config, LocationResult, Tier};
