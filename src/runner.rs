// src/runner.rs
//
// Drives one full batch run: every configured market through fetch, funnel,
// enrichment, ranking and persistence, strictly in sequence. A market that
// blows up is logged and written (or suppressed) as an empty result; the
// remaining markets are unaffected.

use crate::api::{ApiError, RentcastClient};
use crate::config::{Config, Market};
use crate::domain::{funnel, Listing};
use crate::errors::RunError;
use crate::output::{self, Deal, MarketOutput};
use crate::store;
use log::{debug, error, info, warn};

pub fn run(config: &Config, client: &mut RentcastClient) -> Result<(), RunError> {
    client.reset_request_count();

    for market in &config.markets {
        info!("📍 Processing market: {}", market.name);

        let market_output = match process_market(market, config, client) {
            Ok(out) => out,
            Err(e) => {
                error!("❌ {}: pipeline failed: {e}", market.id);
                output::build_market_output(Vec::new(), market)
            }
        };

        info!(
            "{}: {} deals",
            market.id,
            market_output.summary.total_deals
        );

        let fallback = format!("{}.json", market.id);
        let filename = config
            .output
            .filename_for(&market.id)
            .unwrap_or(fallback.as_str());
        store::persist_market_output(&config.output.dir, filename, &market_output)?;
    }

    info!("🏁 Run complete after {} API requests", client.requests_made());
    Ok(())
}

fn process_market(
    market: &Market,
    config: &Config,
    client: &mut RentcastClient,
) -> Result<MarketOutput, ApiError> {
    let listings = fetch_market_listings(market, config, client)?;
    info!("{}: {} listings fetched", market.id, listings.len());

    let passed = funnel::heuristic_filter(&listings, &config.analysis);
    let candidates = funnel::select_candidates(&passed, &config.analysis);
    info!(
        "{}: {} passed heuristic filter, {} candidates",
        market.id,
        passed.len(),
        candidates.len()
    );

    let enriched = enrich_with_rent_estimates(candidates, client);

    let with_metrics = funnel::compute_metrics(&enriched, &config.analysis);
    let ranked = funnel::rank_deals(&with_metrics, &config.analysis);

    let deals: Vec<Deal> = ranked
        .iter()
        .enumerate()
        .map(|(i, l)| Deal::from_listing(l, (i + 1) as u32))
        .collect();

    Ok(output::build_market_output(deals, market))
}

/// Fetch every city in the market, one call at a time. A failed city is
/// logged and contributes nothing; the rest of the market still runs. When
/// every city failed the whole market is treated as failed, so the error
/// reaches the market boundary instead of masquerading as an empty result.
fn fetch_market_listings(
    market: &Market,
    config: &Config,
    client: &mut RentcastClient,
) -> Result<Vec<Listing>, ApiError> {
    let mut listings = Vec::new();
    let mut any_succeeded = false;
    let mut last_err = None;

    for (city, state) in &market.cities {
        match client.search_listings(city, state, &config.filters) {
            Ok(raw) => {
                any_succeeded = true;
                listings.extend(raw.into_iter().map(|r| Listing::from_api(r, market)));
            }
            Err(e) => {
                warn!("⚠️ {city}, {state}: listings fetch failed: {e}");
                last_err = Some(e);
            }
        }
    }

    match last_err {
        Some(e) if !any_succeeded => Err(e),
        _ => Ok(listings),
    }
}

/// Sequential AVM lookups for each candidate. A candidate with no usable
/// address, a failed lookup, or an estimate without a rent figure is dropped
/// here and never retried.
fn enrich_with_rent_estimates(
    candidates: Vec<Listing>,
    client: &mut RentcastClient,
) -> Vec<Listing> {
    let mut enriched = Vec::new();

    for mut listing in candidates {
        let Some(address) = listing.lookup_address().map(str::to_string) else {
            debug!("candidate with no address skipped");
            continue;
        };

        match client.rent_estimate(
            &address,
            listing.bedrooms,
            listing.bathrooms,
            listing.square_footage,
        ) {
            Ok(Some(estimate)) => {
                listing.rent_estimate = estimate.rent;
                listing.rent_range_low = estimate.rent_range_low;
                listing.rent_range_high = estimate.rent_range_high;
                enriched.push(listing);
            }
            Ok(None) => {
                debug!("{address}: no rent figure in AVM response, dropping");
            }
            Err(e) => {
                warn!("⚠️ {address}: rent estimate failed: {e}");
            }
        }
    }

    enriched
}
