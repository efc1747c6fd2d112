mod api_error;
mod client;
mod models;

pub use api_error::ApiError;
pub use client::RentcastClient;
pub use models::{ApiListing, RentEstimate};
