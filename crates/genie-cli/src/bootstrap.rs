use std::path::PathBuf;

use anyhow::Context;
use genie_config::GenieConfig;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config() -> anyhow::Result<GenieConfig> {
    load_dotenv()?;
    GenieConfig::load().context("failed to load travel genie configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let env_path = PathBuf::from(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
