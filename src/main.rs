use ambulance_vibe::config::{self, AppConfig};
use anyhow::Context;

/// Bundled config for builds without a `.env` file (web, iOS, Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // A missing .env is the normal case outside desktop development.
    let _ = dotenvy::dotenv();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

fn load_config() -> anyhow::Result<AppConfig> {
    load_dotenv();
    AppConfig::from_env_with_fallback(BUNDLED_CONFIG)
        .context("failed to load AMBULANCE_* settings")
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(level: tracing::Level) {
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging(level: tracing::Level) {
    let _ = dioxus::logger::init(level);
}

fn main() {
    let loaded = load_config();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };
    init_logging(config.log_level);
    if let Err(err) = loaded {
        tracing::error!("{err:#}; using default settings");
    }
    tracing::info!(language = %config.language, "starting Ambulance Vibe");

    config::install(config);
    dioxus::launch(ambulance_vibe::ui::App);
}
