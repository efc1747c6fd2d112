use crate::config::ListingFilters;
use serde::Deserialize;

// Raw sale listing as the API returns it. Everything the API might omit is
// Option; the funnel decides what it can work with.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiListing {
    pub id: Option<String>,
    pub formatted_address: Option<String>,
    pub address_line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,

    pub price: Option<f64>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub square_footage: Option<f64>,
    pub year_built: Option<i32>,
    pub property_type: Option<String>,

    pub days_on_market: Option<i64>,
    pub listed_date: Option<String>,
    pub photo_url: Option<String>,
    pub listing_url: Option<String>,
}

impl ApiListing {
    /// Price window applied after the API call. Both ends are inclusive;
    /// a listing without a price never passes.
    pub fn in_price_range(&self, filters: &ListingFilters) -> bool {
        match self.price {
            Some(p) => p >= filters.min_price && p <= filters.max_price,
            None => false,
        }
    }
}

/// AVM long-term rent estimate. Only usable when `rent` is actually present;
/// the client returns None otherwise.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentEstimate {
    pub rent: Option<f64>,
    pub rent_range_low: Option<f64>,
    pub rent_range_high: Option<f64>,
}
