// src/domain/listing.rs

use crate::api::ApiListing;
use crate::config::Market;

/// The record flowing through the funnel. Built from a raw API listing plus
/// the market it was fetched for; derived fields start empty and are filled
/// stage by stage. Stages clone rather than mutate, so a listing that leaves
/// one stage is never changed by a later one.
#[derive(Debug, Clone)]
pub struct Listing {
    pub market_id: String,
    pub market_name: String,

    pub id: Option<String>,
    pub formatted_address: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,

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

    // Stage 2
    pub heuristic_yield: Option<f64>,

    // Enrichment
    pub rent_estimate: Option<f64>,
    pub rent_range_low: Option<f64>,
    pub rent_range_high: Option<f64>,

    // Stage 3
    pub annual_rent: Option<f64>,
    pub gross_yield: Option<f64>,
    pub monthly_cash_flow: Option<f64>,
    pub grm: Option<f64>,
    pub meets_one_percent_rule: Option<bool>,
}

impl Listing {
    pub fn from_api(raw: ApiListing, market: &Market) -> Self {
        Listing {
            market_id: market.id.clone(),
            market_name: market.name.clone(),
            id: raw.id,
            formatted_address: raw.formatted_address,
            address_line: raw.address_line1,
            city: raw.city,
            state: raw.state,
            zip: raw.zip_code,
            price: raw.price,
            bedrooms: raw.bedrooms,
            bathrooms: raw.bathrooms,
            square_footage: raw.square_footage,
            year_built: raw.year_built,
            property_type: raw.property_type,
            days_on_market: raw.days_on_market,
            listed_date: raw.listed_date,
            photo_url: raw.photo_url,
            listing_url: raw.listing_url,
            heuristic_yield: None,
            rent_estimate: None,
            rent_range_low: None,
            rent_range_high: None,
            annual_rent: None,
            gross_yield: None,
            monthly_cash_flow: None,
            grm: None,
            meets_one_percent_rule: None,
        }
    }

    /// Best address we can hand to the AVM endpoint.
    pub fn lookup_address(&self) -> Option<&str> {
        self.formatted_address
            .as_deref()
            .or(self.address_line.as_deref())
    }
}
