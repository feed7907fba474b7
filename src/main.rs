//! file: main.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:01:37 Saturday
//! brief:

use gpui_match::{app, config};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = config::load_settings()?;
    app::run(settings);
    Ok(())
}
