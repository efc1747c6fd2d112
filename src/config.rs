// src/config.rs
//
// Run configuration. Built once in main and passed by reference into every
// component; nothing reads ambient/global state.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub markets: Vec<Market>,
    pub filters: ListingFilters,
    pub analysis: AnalysisParams,
    pub output: OutputConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    /// Fixed pause after every outgoing request.
    pub request_delay_ms: u64,
    pub timeout_secs: u64,
}

/// A target metro area. Listings are fetched per (city, state) pair and
/// attributed back to the market they came from.
#[derive(Debug, Clone)]
pub struct Market {
    pub id: String,
    pub name: String,
    pub cities: Vec<(String, String)>,
    pub zips: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ListingFilters {
    pub status: String,
    pub property_types: Vec<String>,
    pub min_price: f64,
    pub max_price: f64,
    pub min_bedrooms: u32,
    /// Per-city result cap passed to the API.
    pub limit: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct AnalysisParams {
    /// Annual property tax as a fraction of purchase price.
    pub tax_rate: f64,
    /// Fractions of monthly rent.
    pub vacancy_rate: f64,
    pub management_fee: f64,
    /// Minimum heuristic gross yield (percent) to survive the cheap filter.
    pub min_yield_threshold: f64,
    /// Dollars per sqft per month used for the heuristic rent guess.
    pub heuristic_rent_per_sqft: f64,
    /// Cap on listings sent to the (expensive) rent-estimate lookup.
    pub max_candidates: usize,
    /// Cap on deals in the final ranked output.
    pub top_deals_count: usize,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// market id -> output filename
    pub files: Vec<(String, String)>,
}

impl OutputConfig {
    pub fn filename_for(&self, market_id: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(id, _)| id == market_id)
            .map(|(_, f)| f.as_str())
    }
}

impl Config {
    /// The deployed market set and thresholds. The API key is the only
    /// runtime input.
    pub fn builtin(api_key: String) -> Self {
        Config {
            api: ApiConfig {
                base_url: "https://api.rentcast.io/v1".to_string(),
                api_key,
                request_delay_ms: 1000,
                timeout_secs: 30,
            },
            markets: vec![
                Market {
                    id: "cleveland".to_string(),
                    name: "Cleveland, OH".to_string(),
                    cities: vec![
                        ("Cleveland".to_string(), "OH".to_string()),
                        ("Parma".to_string(), "OH".to_string()),
                        ("Lakewood".to_string(), "OH".to_string()),
                    ],
                    zips: vec![
                        "44102".to_string(),
                        "44109".to_string(),
                        "44111".to_string(),
                    ],
                },
                Market {
                    id: "memphis".to_string(),
                    name: "Memphis, TN".to_string(),
                    cities: vec![
                        ("Memphis".to_string(), "TN".to_string()),
                        ("Bartlett".to_string(), "TN".to_string()),
                    ],
                    zips: vec![
                        "38109".to_string(),
                        "38118".to_string(),
                        "38128".to_string(),
                    ],
                },
                Market {
                    id: "birmingham".to_string(),
                    name: "Birmingham, AL".to_string(),
                    cities: vec![
                        ("Birmingham".to_string(), "AL".to_string()),
                        ("Bessemer".to_string(), "AL".to_string()),
                    ],
                    zips: vec![
                        "35206".to_string(),
                        "35215".to_string(),
                        "35228".to_string(),
                    ],
                },
            ],
            filters: ListingFilters {
                status: "Active".to_string(),
                property_types: vec![
                    "Single Family".to_string(),
                    "Condo".to_string(),
                    "Townhouse".to_string(),
                ],
                min_price: 50_000.0,
                max_price: 350_000.0,
                min_bedrooms: 2,
                limit: 50,
            },
            analysis: AnalysisParams {
                tax_rate: 0.015,
                vacancy_rate: 0.08,
                management_fee: 0.10,
                min_yield_threshold: 6.0,
                heuristic_rent_per_sqft: 1.0,
                max_candidates: 20,
                top_deals_count: 10,
            },
            output: OutputConfig {
                dir: PathBuf::from("data"),
                files: vec![
                    ("cleveland".to_string(), "cleveland.json".to_string()),
                    ("memphis".to_string(), "memphis.json".to_string()),
                    ("birmingham".to_string(), "birmingham.json".to_string()),
                ],
            },
        }
    }
}
