use tracing_subscriber::EnvFilter;

use docket::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        database = %config.database_path.display(),
        "Starting docket v{}",
        env!("CARGO_PKG_VERSION")
    );

    docket::api::serve(config).await
}
