//! HTTP server for the shift payroll engine.
//!
//! Environment:
//! - `PAYROLL_CONFIG_DIR`: directory holding `payroll.yaml` (default `./config`)
//! - `PAYROLL_BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: tracing filter (default `shift_payroll=info`)

use std::env;

use tokio::net::TcpListener;
use tracing::info;

use shift_payroll::api::{AppState, create_router};
use shift_payroll::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shift_payroll=info".into()),
        )
        .init();

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        overtime_threshold = %config.rules().overtime_threshold_hours,
        tax_rate = %config.rules().tax_rate,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
