//! `starwars-client` -- samples the API at random intervals.
//!
//! Counts planets and people once, then forever picks a random kind and id,
//! fetches that record, pretty-prints it, and sleeps 1-5 seconds. Failed
//! fetches are logged and the loop carries on.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default | Description                          |
//! |-----------------------|----------|---------|--------------------------------------|
//! | `API_BASE_URL`        | no       | --      | Full base URL, overrides `NAMESPACE` |
//! | `NAMESPACE`           | no       | `default` | Cluster namespace of the API service |
//! | `POLL_MIN_SLEEP_SECS` | no       | `1`     | Lower sleep bound                    |
//! | `POLL_MAX_SLEEP_SECS` | no       | `5`     | Upper sleep bound                    |

use starwars_client::api::ApiClient;
use starwars_client::config::ClientConfig;
use starwars_client::poller::{self, Bounds};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starwars_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Starting starwars-client");

    let client = ApiClient::new(config.base_url.clone()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Could not build HTTP client");
        std::process::exit(1);
    });

    let bounds = Bounds::discover(&client).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Could not count records");
        std::process::exit(1);
    });
    tracing::info!(planets = bounds.planets, people = bounds.people, "Id ranges discovered");

    poller::run(&client, bounds, &config).await;
}
