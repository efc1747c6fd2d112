use crate::api::RentcastClient;
use crate::config::{Config, OutputConfig};
use crate::output::build_market_output;
use crate::runner;
use crate::store::{existing_deal_count, persist_market_output};
use crate::tests::utils::{api_config, deal, refused_url, test_filters, test_market, test_params};

/// Every city fetch failing is a market-level failure: the run produces an
/// empty result for that market, and the safeguard keeps the prior file.
#[test]
fn market_with_all_fetches_failing_keeps_prior_deals() {
    let dir = tempfile::tempdir().unwrap();
    let market = test_market();

    let five: Vec<_> = (1..=5)
        .map(|i| deal(i, 150_000.0, 1600.0, 12.8))
        .collect();
    persist_market_output(
        dir.path(),
        "testville.json",
        &build_market_output(five, &market),
    )
    .unwrap();

    let config = Config {
        api: api_config(refused_url(), 1),
        markets: vec![market],
        filters: test_filters(),
        analysis: test_params(),
        output: OutputConfig {
            dir: dir.path().to_path_buf(),
            files: vec![("testville".to_string(), "testville.json".to_string())],
        },
    };
    let mut client = RentcastClient::new(&config.api).unwrap();

    let result = runner::run(&config, &mut client);

    assert!(result.is_ok());
    // One city, one failed call, nothing enriched
    assert_eq!(client.requests_made(), 1);
    assert_eq!(existing_deal_count(&dir.path().join("testville.json")), 5);
}

/// With no prior file, a failed market still produces a valid (empty)
/// artifact rather than nothing at all.
#[test]
fn market_with_all_fetches_failing_writes_empty_output_when_no_prior() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config {
        api: api_config(refused_url(), 1),
        markets: vec![test_market()],
        filters: test_filters(),
        analysis: test_params(),
        output: OutputConfig {
            dir: dir.path().to_path_buf(),
            files: vec![("testville".to_string(), "testville.json".to_string())],
        },
    };
    let mut client = RentcastClient::new(&config.api).unwrap();

    runner::run(&config, &mut client).unwrap();

    let path = dir.path().join("testville.json");
    assert!(path.exists());
    assert_eq!(existing_deal_count(&path), 0);

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["summary"]["totalDeals"], serde_json::json!(0));
}
