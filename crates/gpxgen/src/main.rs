use std::env;

use gpxgen::provider::RouteProvider;
use gpxgen::run_server;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let api_key = env::var("ORS_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("ORS_API_KEY not set, provider requests will be rejected upstream");
        String::new()
    });

    let mut provider = RouteProvider::new(api_key);
    if let Ok(base_url) = env::var("ORS_BASE_URL") {
        provider = provider.with_base_url(base_url);
    }

    let port = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or(8080);

    run_server(provider, port).await
}
