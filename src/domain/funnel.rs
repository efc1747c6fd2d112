// src/domain/funnel.rs
//
// The four-stage funnel: a cheap heuristic pass bounds how many listings hit
// the expensive rent-estimate lookup, then real metrics decide the ranking.
// Each stage is a single pass over its input and returns a new vector.

use crate::config::AnalysisParams;
use crate::domain::listing::Listing;
use crate::domain::metrics;
use std::cmp::Ordering;

/// Heuristic monthly-rent guess annualized into a yield. None when the
/// listing is missing price or square footage.
fn heuristic_yield(listing: &Listing, params: &AnalysisParams) -> Option<f64> {
    let price = listing.price.filter(|p| *p > 0.0)?;
    let sqft = listing.square_footage.filter(|s| *s > 0.0)?;
    let annual_rent = sqft * params.heuristic_rent_per_sqft * 12.0;
    Some(metrics::gross_yield(annual_rent, price))
}

/// Stage 1: drop listings missing price or square footage, then keep only
/// those whose heuristic yield clears the threshold. No ordering guarantee,
/// and the yield is not attached here.
pub fn heuristic_filter(listings: &[Listing], params: &AnalysisParams) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| match heuristic_yield(l, params) {
            Some(y) => y >= params.min_yield_threshold,
            None => false,
        })
        .cloned()
        .collect()
}

/// Stage 2: recompute the heuristic yield (same arithmetic as stage 1 —
/// recomputing keeps stage 1's output free of derived fields), attach it,
/// sort descending and keep the top candidates. The sort is stable, so
/// listings with equal yield keep their fetch order.
pub fn select_candidates(listings: &[Listing], params: &AnalysisParams) -> Vec<Listing> {
    let mut candidates: Vec<Listing> = listings
        .iter()
        .map(|l| {
            let mut c = l.clone();
            c.heuristic_yield = heuristic_yield(l, params);
            c
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.heuristic_yield
            .partial_cmp(&a.heuristic_yield)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(params.max_candidates);
    candidates
}

/// Stage 3: compute real metrics for every listing that came back from
/// enrichment with an actual rent estimate; anything without one is skipped.
/// Yields and GRM are rounded to one decimal here, cash flow to the nearest
/// dollar.
pub fn compute_metrics(listings: &[Listing], params: &AnalysisParams) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| l.rent_estimate.is_some())
        .map(|l| {
            let mut m = l.clone();
            let rent = l.rent_estimate.unwrap_or(0.0);
            let price = l.price.unwrap_or(0.0);
            let annual_rent = rent * 12.0;

            m.annual_rent = Some(annual_rent);
            m.gross_yield = Some(metrics::round1(metrics::gross_yield(annual_rent, price)));
            m.monthly_cash_flow =
                Some(metrics::monthly_cash_flow(rent, price, params).round());
            m.grm = metrics::grm(price, annual_rent).map(metrics::round1);
            m.meets_one_percent_rule = Some(metrics::meets_one_percent_rule(rent, price));
            m
        })
        .collect()
}

/// Stage 4: order by actual gross yield descending and keep the top deals.
/// Stable sort again; ties keep first-encountered order. This is the
/// canonical deal order — ranks are assigned from it at output time.
pub fn rank_deals(listings: &[Listing], params: &AnalysisParams) -> Vec<Listing> {
    let mut ranked = listings.to_vec();
    ranked.sort_by(|a, b| {
        b.gross_yield
            .partial_cmp(&a.gross_yield)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(params.top_deals_count);
    ranked
}
