use crate::api::ApiListing;
use crate::config::{AnalysisParams, ApiConfig, ListingFilters, Market};
use crate::domain::Listing;
use crate::output::Deal;
use std::net::TcpListener;

/// Analysis constants used throughout the tests; matches the worked example
/// in the project docs (rent/sqft 1.00, threshold 6.0%).
pub fn test_params() -> AnalysisParams {
    AnalysisParams {
        tax_rate: 0.015,
        vacancy_rate: 0.08,
        management_fee: 0.10,
        min_yield_threshold: 6.0,
        heuristic_rent_per_sqft: 1.0,
        max_candidates: 20,
        top_deals_count: 10,
    }
}

pub fn test_filters() -> ListingFilters {
    ListingFilters {
        status: "Active".to_string(),
        property_types: vec!["Single Family".to_string()],
        min_price: 50_000.0,
        max_price: 350_000.0,
        min_bedrooms: 2,
        limit: 50,
    }
}

pub fn api_config(base_url: String, delay_ms: u64) -> ApiConfig {
    ApiConfig {
        base_url,
        api_key: "test-key".to_string(),
        request_delay_ms: delay_ms,
        timeout_secs: 5,
    }
}

/// A loopback URL with nothing listening on it, so connections are refused.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A raw API listing with only a price; everything else is absent.
pub fn api_listing(price: Option<f64>) -> ApiListing {
    ApiListing {
        id: Some("raw".to_string()),
        formatted_address: None,
        address_line1: None,
        city: None,
        state: None,
        zip_code: None,
        price,
        bedrooms: None,
        bathrooms: None,
        square_footage: None,
        year_built: None,
        property_type: None,
        days_on_market: None,
        listed_date: None,
        photo_url: None,
        listing_url: None,
    }
}

pub fn test_market() -> Market {
    Market {
        id: "testville".to_string(),
        name: "Testville, OH".to_string(),
        cities: vec![("Testville".to_string(), "OH".to_string())],
        zips: vec!["44100".to_string()],
    }
}

/// A listing with just enough fields to travel through the funnel.
pub fn listing(id: &str, price: Option<f64>, sqft: Option<f64>) -> Listing {
    Listing {
        market_id: "testville".to_string(),
        market_name: "Testville, OH".to_string(),
        id: Some(id.to_string()),
        formatted_address: Some(format!("{id} Main St, Testville, OH 44100")),
        address_line: Some(format!("{id} Main St")),
        city: Some("Testville".to_string()),
        state: Some("OH".to_string()),
        zip: Some("44100".to_string()),
        price,
        bedrooms: Some(3.0),
        bathrooms: Some(2.0),
        square_footage: sqft,
        year_built: Some(1955),
        property_type: Some("Single Family".to_string()),
        days_on_market: Some(12),
        listed_date: Some("2025-07-01T00:00:00Z".to_string()),
        photo_url: None,
        listing_url: None,
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

/// A ready-made deal for store/summary tests.
pub fn deal(rank: u32, price: f64, rent: f64, gross_yield: f64) -> Deal {
    Deal {
        rank,
        id: format!("deal-{rank}"),
        address: format!("{rank} Main St, Testville, OH 44100"),
        city: Some("Testville".to_string()),
        state: Some("OH".to_string()),
        zip: Some("44100".to_string()),
        price,
        bedrooms: Some(3.0),
        bathrooms: Some(2.0),
        square_footage: Some(1400.0),
        year_built: Some(1955),
        property_type: Some("Single Family".to_string()),
        days_on_market: Some(12),
        listed_date: Some("2025-07-01T00:00:00Z".to_string()),
        photo: None,
        url: None,
        rent_estimate: rent,
        rent_range_low: Some(rent - 100.0),
        rent_range_high: Some(rent + 100.0),
        annual_rent: rent * 12.0,
        gross_yield,
        monthly_cash_flow: 200.0,
        grm: Some(10.0),
        meets_one_percent_rule: rent >= price * 0.01,
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
