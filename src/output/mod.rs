// src/output/mod.rs
//
// Public-facing shapes persisted per market. Field names are camelCase on
// disk because the frontend consumes these files as-is.

use crate::config::Market;
use crate::domain::Listing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub rank: u32,
    pub id: String,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub price: f64,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub square_footage: Option<f64>,
    pub year_built: Option<i32>,
    pub property_type: Option<String>,
    pub days_on_market: Option<i64>,
    pub listed_date: Option<String>,
    pub photo: Option<String>,
    pub url: Option<String>,
    pub rent_estimate: f64,
    pub rent_range_low: Option<f64>,
    pub rent_range_high: Option<f64>,
    pub annual_rent: f64,
    pub gross_yield: f64,
    pub monthly_cash_flow: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grm: Option<f64>,
    pub meets_one_percent_rule: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub total_deals: usize,
    pub avg_yield: f64,
    pub avg_price: f64,
    pub avg_rent: f64,
    pub top_yield: f64,
    pub lowest_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOutput {
    pub market_id: String,
    pub market_name: String,
    pub generated_at: DateTime<Utc>,
    pub summary: MarketSummary,
    pub deals: Vec<Deal>,
}

impl Deal {
    /// Pure projection of a fully-enriched listing. `rank` is the 1-based
    /// position after the final sort/truncation.
    pub fn from_listing(listing: &Listing, rank: u32) -> Self {
        let id = listing.id.clone().unwrap_or_else(|| {
            format!(
                "{}-{}",
                listing.address_line.clone().unwrap_or_default(),
                listing.zip.clone().unwrap_or_default()
            )
        });
        let address = listing
            .formatted_address
            .clone()
            .or_else(|| listing.address_line.clone())
            .unwrap_or_default();

        Deal {
            rank,
            id,
            address,
            city: listing.city.clone(),
            state: listing.state.clone(),
            zip: listing.zip.clone(),
            price: listing.price.unwrap_or(0.0),
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            square_footage: listing.square_footage,
            year_built: listing.year_built,
            property_type: listing.property_type.clone(),
            days_on_market: listing.days_on_market,
            listed_date: listing.listed_date.clone(),
            photo: listing.photo_url.clone(),
            url: listing.listing_url.clone(),
            rent_estimate: listing.rent_estimate.unwrap_or(0.0),
            rent_range_low: listing.rent_range_low,
            rent_range_high: listing.rent_range_high,
            annual_rent: listing.annual_rent.unwrap_or(0.0),
            gross_yield: listing.gross_yield.unwrap_or(0.0),
            monthly_cash_flow: listing.monthly_cash_flow.unwrap_or(0.0),
            grm: listing.grm,
            meets_one_percent_rule: listing.meets_one_percent_rule.unwrap_or(false),
        }
    }
}

/// Wrap an already-ranked, already-truncated deal list with its summary.
/// An empty list produces an all-zero summary, never an error.
pub fn build_market_output(deals: Vec<Deal>, market: &Market) -> MarketOutput {
    let summary = summarize(&deals);
    MarketOutput {
        market_id: market.id.clone(),
        market_name: market.name.clone(),
        generated_at: Utc::now(),
        summary,
        deals,
    }
}

fn summarize(deals: &[Deal]) -> MarketSummary {
    if deals.is_empty() {
        return MarketSummary {
            total_deals: 0,
            avg_yield: 0.0,
            avg_price: 0.0,
            avg_rent: 0.0,
            top_yield: 0.0,
            lowest_price: 0.0,
        };
    }

    let n = deals.len() as f64;
    let avg_yield = deals.iter().map(|d| d.gross_yield).sum::<f64>() / n;
    let avg_price = deals.iter().map(|d| d.price).sum::<f64>() / n;
    let avg_rent = deals.iter().map(|d| d.rent_estimate).sum::<f64>() / n;
    let lowest_price = deals.iter().map(|d| d.price).fold(f64::INFINITY, f64::min);

    MarketSummary {
        total_deals: deals.len(),
        avg_yield: crate::domain::metrics::round1(avg_yield),
        avg_price: avg_price.round(),
        avg_rent: avg_rent.round(),
        // deals arrive sorted by yield, so the first one holds the top
        top_yield: deals[0].gross_yield,
        lowest_price,
    }
}
