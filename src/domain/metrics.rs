// src/domain/metrics.rs

use crate::config::AnalysisParams;

/// Annual rent over purchase price, as a percentage. Defined as 0 when the
/// price is missing or zero so a bad record can never produce an infinite
/// yield.
pub fn gross_yield(annual_rent: f64, price: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    (annual_rent / price) * 100.0
}

/// Monthly rent minus taxes, vacancy and management. Mortgage/financing
/// costs are excluded on purpose: they depend on the buyer, not the deal.
pub fn monthly_cash_flow(monthly_rent: f64, price: f64, params: &AnalysisParams) -> f64 {
    let monthly_tax = (price * params.tax_rate) / 12.0;
    let vacancy = monthly_rent * params.vacancy_rate;
    let management = monthly_rent * params.management_fee;
    monthly_rent - (monthly_tax + vacancy + management)
}

/// Gross rent multiplier: price over annual rent. None when annual rent is
/// not positive; the field is simply omitted from output in that case.
pub fn grm(price: f64, annual_rent: f64) -> Option<f64> {
    if annual_rent <= 0.0 {
        return None;
    }
    Some(price / annual_rent)
}

/// Monthly rent at least 1% of purchase price.
pub fn meets_one_percent_rule(monthly_rent: f64, price: f64) -> bool {
    monthly_rent >= price * 0.01
}

/// Round to one decimal place. Used for yields and GRM at the output
/// boundary; the raw metric functions never round.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
