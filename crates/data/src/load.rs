use crate::schema::CatalogFile;
use anyhow::{bail, Context};
use oracle_core::{Catalog, OracleConfig, MAX_DRAW};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const CATALOG_FILE: &str = "cards.json";
pub const CONFIG_FILE: &str = "oracle.json";

#[derive(Debug)]
pub struct Assets {
    pub catalog: Catalog,
    pub config: OracleConfig,
}

/// Loads `cards.json` and, when present, `oracle.json` from `dir`.
pub fn load_assets(dir: &Path) -> anyhow::Result<Assets> {
    let catalog = load_catalog(&dir.join(CATALOG_FILE))?;
    let config = load_config(dir)?;
    Ok(Assets { catalog, config })
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let file: CatalogFile = load_json(path)?;
    catalog_from_file(file).with_context(|| format!("validate {}", path.display()))
}

pub fn catalog_from_file(file: CatalogFile) -> anyhow::Result<Catalog> {
    let entries = file
        .cards
        .into_iter()
        .map(|entry| (entry.name, entry.meaning));
    let catalog = Catalog::new(file.title, file.description, entries)?;
    log::debug!("catalog {:?}: {} cards", catalog.title, catalog.len());
    Ok(catalog)
}

/// Settings from `oracle.json`, or defaults when the file is absent.
pub fn load_config(dir: &Path) -> anyhow::Result<OracleConfig> {
    let path = dir.join(CONFIG_FILE);
    let config: OracleConfig = if path.exists() {
        load_json(&path)?
    } else {
        log::info!("{} not found, using default settings", path.display());
        OracleConfig::default()
    };
    validate_config(&config).with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

pub fn validate_config(config: &OracleConfig) -> anyhow::Result<()> {
    if config.max_draw == 0 || config.max_draw > MAX_DRAW {
        bail!("max_draw must be between 1 and {MAX_DRAW}, got {}", config.max_draw);
    }
    if config.session_ttl_secs == 0 {
        bail!("session_ttl_secs must be positive");
    }
    let images = &config.images;
    for (field, value) in [
        ("images.host", &images.host),
        ("images.account", &images.account),
        ("images.repository", &images.repository),
        ("images.branch", &images.branch),
        ("images.folder", &images.folder),
        ("images.card_back", &images.card_back),
    ] {
        if value.trim().is_empty() {
            bail!("{field} must not be empty");
        }
        if value.contains(char::is_whitespace) {
            bail!("{field} must not contain whitespace: {value:?}");
        }
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
