//! Aniverse API service entry point

use aniverse_api::server::{run, AppState};
use aniverse_api::store::JsonStore;
use aniverse_core::{
    init_logging, load_dotenv, ConfigLoader, LogConfig, ServiceConfig, StoreConfig,
};
use aniverse_recs::Recommender;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let service_config = ServiceConfig::from_env()?;
    service_config.validate()?;
    let store_config = StoreConfig::from_env()?;
    store_config.validate()?;

    init_logging(&LogConfig {
        format: service_config.log_format,
        ..LogConfig::default()
    });

    let store = JsonStore::open(&store_config.path, &store_config.admin_password)?;
    let state = AppState {
        store,
        recommender: Recommender::with_default_config(),
    };

    run(service_config, state).await?;
    Ok(())
}
