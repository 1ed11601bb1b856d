//! SafeScan demo binary - evaluate a UPI string from the command line.
//!
//! The wall clock is read here, at the process edge, and passed down as
//! an explicit hour so the scoring core stays deterministic.

use chrono::Timelike;

use safescan_core::{analyze_scan, constants, features, upi};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let raw = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            eprintln!("usage: scan <upi-deep-link>");
            std::process::exit(2);
        }
    };

    log::info!(
        "Starting {} v{}",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let params = match upi::parse_upi_string(&raw) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Not a valid payment code: {}", e);
            std::process::exit(1);
        }
    };

    log::debug!(
        "Extracted features: {}",
        features::extract(&params.payee_address).to_log_entry()
    );

    let hour_of_day = chrono::Local::now().hour();
    match analyze_scan(&raw, hour_of_day, constants::get_timeout_ms()).await {
        Ok(assessment) => {
            log::info!(
                "Verdict: {} ({}) via {}",
                assessment.risk_label,
                assessment.risk_score,
                assessment.source
            );
            match serde_json::to_string_pretty(&assessment) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Failed to encode assessment: {}", e);
                    std::process::exit(1);
                }
            }

            if assessment.is_safe() {
                log::info!("Hand-off link: {:?}", upi::build_upi_deeplink(&params));
                log::debug!("\n{}", upi::payment_instructions(&params));
            }
        }
        Err(e) => {
            eprintln!("Not a valid payment code: {}", e);
            std::process::exit(1);
        }
    }
}
