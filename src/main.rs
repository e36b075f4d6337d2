use std::sync::Arc;

use anyhow::Context;
use retina_risk::common::config::AppCfg;
use retina_risk::common::log::init as init_logging;
use retina_risk::model::FsModelRepo;
use retina_risk::{router, RiskService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppCfg::load().context("invalid configuration")?;
    init_logging(&cfg.log_level);

    let repo = FsModelRepo::new(&cfg);
    let model = repo
        .load_classifier()
        .with_context(|| format!("cannot serve predictions without {}", repo.path().display()))?;

    let app = router(RiskService::new(Arc::new(model)));
    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;
    log::info!("retina-risk listening on http://{}", cfg.bind_addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
