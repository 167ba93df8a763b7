// corating-recommender - which items do the people who rated this one also rate?
//
// Entry point. Loads the whole dataset first, and only then opens the port.

use anyhow::Context;
use clap::Parser;
use corating_recommender_lib::{
    config::Config,
    logger,
    server::{self, AppState},
    Recommender, ReviewStore,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.validate()?;
    logger::init(&config.log_level)?;

    // A bad dataset means we never start serving
    let store = match ReviewStore::open(&config.file).await {
        Ok(store) => store,
        Err(e) => {
            error!("{}", e.user_message());
            return Err(e).with_context(|| format!("loading {}", config.file.display()));
        }
    };

    if store.is_empty() {
        warn!(path = %config.file.display(), "dataset is empty; every query will return nothing");
    }

    let engine = Recommender::with_mode(Arc::new(store), config.counting);
    info!(counting = %engine.mode(), "recommender ready");

    let state = AppState::new(Arc::new(engine), config.limit, config.max_limit);
    server::serve(&config.bind, state, shutdown_signal())
        .await
        .context("serving recommendations")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("could not listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
