use std::sync::Arc;

use samsung_phone_advisor::{
    advisor::{Advisor, AdvisorSettings},
    api,
    catalog::Catalog,
    config::AdvisorConfig,
    init_tracing,
    provider::build_provider,
    AppState, SERVICE_NAME,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AdvisorConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let catalog = Arc::new(Catalog::open(&config.database.path).await?);
    let phones = catalog.count().await?;
    if phones == 0 {
        tracing::warn!(
            path = %config.database.path.display(),
            "catalog is empty; run `advisor-setup` to load the sample phones"
        );
    } else {
        tracing::info!(phones, "catalog ready");
    }

    let provider = build_provider(&config.provider)?;
    let advisor = Arc::new(Advisor::new(
        catalog.clone(),
        provider,
        AdvisorSettings::from(&config.provider),
    ));

    let app = api::router(AppState { catalog, advisor });

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("{} running on http://{}", SERVICE_NAME, addr);

    axum::serve(listener, app).await?;

    Ok(())
}
