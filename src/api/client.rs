// client.rs
//
// Blocking client for the listings + AVM rent endpoints. Strictly
// sequential: every request is followed by a fixed pause, and a per-run
// counter tracks how many calls were made.

use crate::api::{ApiError, ApiListing, RentEstimate};
use crate::config::{ApiConfig, ListingFilters};
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

// Hint defaults for the rent estimate when the listing is missing them.
const DEFAULT_BEDROOMS: f64 = 3.0;
const DEFAULT_BATHROOMS: f64 = 2.0;
const DEFAULT_SQFT: f64 = 1500.0;

pub struct RentcastClient {
    client: Client,
    base_url: String,
    api_key: String,
    request_delay: Duration,
    requests_made: u32,
}

impl RentcastClient {
    pub fn new(api: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            api_key: api.api_key.clone(),
            request_delay: Duration::from_millis(api.request_delay_ms),
            requests_made: 0,
        })
    }

    /// Requests issued since the last reset.
    pub fn requests_made(&self) -> u32 {
        self.requests_made
    }

    /// Called once at run start by the runner.
    pub fn reset_request_count(&mut self) {
        self.requests_made = 0;
    }

    /// Active sale listings for one city. The API takes the coarse filters
    /// and the result cap; the price window is applied here after the call.
    pub fn search_listings(
        &mut self,
        city: &str,
        state: &str,
        filters: &ListingFilters,
    ) -> Result<Vec<ApiListing>, ApiError> {
        let query = [
            ("city", city.to_string()),
            ("state", state.to_string()),
            ("status", filters.status.clone()),
            ("propertyType", filters.property_types.join(",")),
            ("bedrooms", filters.min_bedrooms.to_string()),
            ("limit", filters.limit.to_string()),
        ];

        let body = self.get("/listings/sale", &query)?;
        let listings: Vec<ApiListing> =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        let in_range: Vec<ApiListing> = listings
            .into_iter()
            .filter(|l| l.in_price_range(filters))
            .collect();

        debug!("{city}, {state}: {} listings in price range", in_range.len());
        Ok(in_range)
    }

    /// Long-term rent estimate for an address. Ok(None) when the response
    /// has no numeric rent; the caller drops that candidate.
    pub fn rent_estimate(
        &mut self,
        address: &str,
        bedrooms: Option<f64>,
        bathrooms: Option<f64>,
        square_footage: Option<f64>,
    ) -> Result<Option<RentEstimate>, ApiError> {
        let query = [
            ("address", address.to_string()),
            ("bedrooms", bedrooms.unwrap_or(DEFAULT_BEDROOMS).to_string()),
            (
                "bathrooms",
                bathrooms.unwrap_or(DEFAULT_BATHROOMS).to_string(),
            ),
            (
                "squareFootage",
                square_footage.unwrap_or(DEFAULT_SQFT).to_string(),
            ),
        ];

        let body = self.get("/avm/rent/long-term", &query)?;
        let estimate: RentEstimate =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        if estimate.rent.is_some() {
            Ok(Some(estimate))
        } else {
            Ok(None)
        }
    }

    fn get(&mut self, path: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        self.requests_made += 1;
        let outcome = self.send_request(path, query);

        // Fixed pause after every call, success or not.
        std::thread::sleep(self.request_delay);

        outcome
    }

    fn send_request(&self, path: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let resp = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}
