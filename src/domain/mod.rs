pub mod funnel;
pub mod listing;
pub mod metrics;

pub use listing::Listing;
