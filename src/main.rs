use crate::api::RentcastClient;
use crate::config::Config;
use log::error;

mod api;
mod config;
mod domain;
mod errors;
mod output;
mod runner;
mod store;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init();

    // 1️⃣ Credential check before any work happens
    let api_key = match std::env::var("RENTCAST_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            error!("❌ RENTCAST_API_KEY is not set");
            std::process::exit(1);
        }
    };

    let config = Config::builtin(api_key);

    // 2️⃣ Build the API client
    let mut client = match RentcastClient::new(&config.api) {
        Ok(c) => c,
        Err(e) => {
            error!("❌ Failed to build API client: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Run every market
    if let Err(e) = runner::run(&config, &mut client) {
        error!("❌ Run failed: {e}");
        std::process::exit(1);
    }
}
