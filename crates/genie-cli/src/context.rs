use std::path::PathBuf;

use anyhow::Context;
use genie_config::GenieConfig;
use genie_store::AppStore;

use crate::cli::GlobalFlags;

/// Resources shared by client commands.
pub struct AppContext {
    pub config: GenieConfig,
    pub store: AppStore,
}

impl AppContext {
    /// Open the state file (`--state` wins over `storage.state_path`) and
    /// apply the configured map view, which is never persisted.
    pub fn init(config: GenieConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let path = flags
            .state
            .as_ref()
            .map_or_else(|| config.storage.resolved_state_path(), PathBuf::from);
        let mut store = AppStore::open(path.clone())
            .with_context(|| format!("failed to open state file {}", path.display()))?;

        store.set_map_center(config.map.default_center());
        store.set_map_zoom(config.map.default_zoom);

        Ok(Self { config, store })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.store.save().context("failed to save client state")
    }
}

#[cfg(test)]
impl AppContext {
    /// Context with default config and a state file under `dir`.
    pub(crate) fn in_dir(dir: &std::path::Path) -> Self {
        let flags = GlobalFlags {
            format: crate::cli::OutputFormat::Raw,
            quiet: true,
            verbose: false,
            state: Some(dir.join("state.json").display().to_string()),
        };
        Self::init(GenieConfig::default(), &flags).expect("context in temp dir")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use genie_config::MapConfig;

    fn flags_for(path: &std::path::Path) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            state: Some(path.display().to_string()),
        }
    }

    #[test]
    fn init_applies_map_defaults_and_saves_to_state_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let config = GenieConfig {
            map: MapConfig {
                default_lat: 15.2993,
                default_lng: 74.1240,
                default_zoom: 12,
            },
            ..GenieConfig::default()
        };

        let mut ctx = AppContext::init(config, &flags_for(&path)).unwrap();
        assert_eq!(ctx.store.state().map_zoom, 12);
        assert!((ctx.store.state().map_center.lat - 15.2993).abs() < 1e-9);

        ctx.store.toggle_dark_mode();
        ctx.save().unwrap();
        assert!(path.exists());

        let reopened = AppContext::init(GenieConfig::default(), &flags_for(&path)).unwrap();
        assert!(reopened.store.state().dark_mode);
    }
}
