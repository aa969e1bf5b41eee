use portfolio_db::Database;

use crate::app::SharedState;
use crate::config::AppConfig;
use crate::config::defaults::default_config;

/// Load environment, open the database and seed the site configuration.
pub fn init_foundation() -> Result<SharedState, anyhow::Error> {
    load_dotenv();
    let config = AppConfig::from_env();

    std::fs::create_dir_all(&config.data_dir)?;
    std::fs::create_dir_all(config.uploads_dir())?;

    let db_path = config.db_path();
    tracing::info!("Opening database at {}", db_path.display());
    let db = Database::open(&db_path)?;

    let state = SharedState::new(db, config, default_config());
    state.config_manager().initialize_defaults()?;

    tracing::info!(
        addr = %state.config().bind_addr(),
        data_dir = %state.data_dir().display(),
        "Foundation ready"
    );
    Ok(state)
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}
