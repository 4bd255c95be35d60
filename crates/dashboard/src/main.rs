//! Headless dashboard shell.
//!
//! Connects to the backend, keeps the view-model fresh on an interval, and
//! logs an inventory summary on every refresh. Rendering belongs to whatever
//! front end sits on top; this shell exists so the view-model can run against
//! a real backend from a terminal.

use std::time::Duration;

use anyhow::Context;

use stockroom_client::ApiClient;
use stockroom_dashboard::Dashboard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let api_url = std::env::var("STOCKROOM_API_URL").unwrap_or_else(|_| {
        tracing::warn!("STOCKROOM_API_URL not set; using http://localhost:5000");
        "http://localhost:5000".to_string()
    });

    let refresh_secs: u64 = std::env::var("STOCKROOM_REFRESH_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);

    let client = match std::env::var("STOCKROOM_AUTH_TOKEN") {
        Ok(token) => ApiClient::with_token(api_url, token),
        Err(_) => ApiClient::new(api_url),
    };

    let dashboard = Dashboard::new(client);

    dashboard
        .load_snapshot()
        .await
        .context("initial inventory load failed")?;
    if let Err(err) = dashboard.refresh_analytics().await {
        tracing::warn!(error = %err, "analytics unavailable");
    }
    if let Err(err) = dashboard.load_messages().await {
        tracing::warn!(error = %err, "message log unavailable");
    }

    log_summary(&dashboard);

    let mut ticker = tokio::time::interval(Duration::from_secs(refresh_secs));
    ticker.tick().await; // the first tick completes immediately
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if dashboard.load_snapshot().await.is_ok() {
                    log_summary(&dashboard);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

fn log_summary(dashboard: &Dashboard) {
    let agg = dashboard.aggregates();
    tracing::info!(
        total_quantity = agg.total_quantity,
        total_value = %agg.total_value,
        categories = agg.distinct_category_count,
        low_stock = agg.low_stock_count,
        "inventory snapshot"
    );
    for row in dashboard.table_rows().iter().filter(|r| r.low_stock) {
        tracing::warn!(item = %row.name, quantity = row.quantity, "low stock");
    }
}
