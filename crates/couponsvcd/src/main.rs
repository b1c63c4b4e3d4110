//! couponsvcd — the coupon service daemon.
//!
//! Startup runs in a fixed order and never goes back:
//! - Resolve config (flags, env, optional TOML file)
//! - Load the coupon table once
//! - Bind the listener and serve `CouponService` + `grpc.health.v1`
//!
//! A missing, malformed or empty coupon source is reported and the
//! service starts anyway with an empty table.
//!
//! # Usage
//!
//! ```text
//! PORT=60000 couponsvcd --coupons /etc/couponsvc/coupons.csv
//! ```

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use coupon_core::ServiceConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, LogFormat};

const DEFAULT_LOG_FILTER: &str = "info,couponsvcd=debug,coupon_core=debug,coupon_grpc=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = cli.resolve_config()?;
    info!(
        addr = %config.listen_addr(),
        coupons = ?config.coupons.path,
        "configuration resolved"
    );

    run(config).await
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    info!("coupon service starting");

    // ── Load coupon table ──────────────────────────────────────

    let path = &config.coupons.path;
    let (table, outcome) = coupon_core::load_file(path);
    if let Err(e) = outcome {
        warn!(path = ?path, error = %e, "coupon table not loaded, serving with no valid codes");
    }
    let table = Arc::new(table);

    // ── Start gRPC server ──────────────────────────────────────

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    coupon_grpc::serve(listener, table, shutdown_signal()).await?;

    info!("coupon service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
