use oracle_core::{card_slug, CardId, ImageExt};
use oracle_data::{load_assets, load_catalog, load_config, CATALOG_FILE, CONFIG_FILE};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

fn write(dir: &tempfile::TempDir, file: &str, body: &str) {
    fs::write(dir.path().join(file), body).expect("write fixture");
}

#[test]
fn bundled_assets_load() {
    let assets = load_assets(&assets_root()).expect("load assets");
    assert_eq!(assets.catalog.len(), 21);
    assert_eq!(assets.config.max_draw, 5);
    assert_eq!(assets.config.images.ext, ImageExt::Png);
    let fool = assets.catalog.get(CardId(0)).expect("fool");
    assert_eq!(fool.name, "The Fool");
    assert_eq!(fool.slug, "the-fool");
}

#[test]
fn bundled_slugs_are_unique_and_stable() {
    let catalog = load_catalog(&assets_root().join(CATALOG_FILE)).expect("catalog");
    let slugs: HashSet<_> = catalog.iter().map(|card| card.slug.clone()).collect();
    assert_eq!(slugs.len(), catalog.len());
    for card in catalog.iter() {
        assert_eq!(card_slug(&card.slug), card.slug);
    }
}

#[test]
fn duplicate_card_names_fail_to_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        &dir,
        CATALOG_FILE,
        r#"{"title":"Dup","cards":[
            {"name":"The Star","meaning":"Hope"},
            {"name":"The Star","meaning":"Faith"}
        ]}"#,
    );
    let err = load_catalog(&dir.path().join(CATALOG_FILE)).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate card name: The Star"));
}

#[test]
fn missing_catalog_names_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_assets(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains(CATALOG_FILE));
}

#[test]
fn missing_config_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = load_config(dir.path()).expect("config");
    assert_eq!(config, oracle_core::OracleConfig::default());
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        &dir,
        CONFIG_FILE,
        r#"{"images":{"ext":"jpg","folder":"art"},"auto_reshuffle":true,"seed":99}"#,
    );
    let config = load_config(dir.path()).expect("config");
    assert!(config.auto_reshuffle);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.session_ttl_secs, 300);
    assert_eq!(
        config.images.url_for("the-sun"),
        "https://raw.githubusercontent.com/Digital-Void-divo/Oracle-of-the-Moon/main/art/the-sun.jpg"
    );
}

#[test]
fn invalid_config_is_rejected() {
    for body in [
        r#"{"max_draw":6}"#,
        r#"{"max_draw":0}"#,
        r#"{"session_ttl_secs":0}"#,
        r#"{"images":{"branch":""}}"#,
        r#"{"images":{"folder":"card images"}}"#,
        r#"{"images":{"ext":"gif"}}"#,
    ] {
        let dir = tempfile::tempdir().expect("tempdir");
        write(&dir, CONFIG_FILE, body);
        assert!(load_config(dir.path()).is_err(), "accepted {body}");
    }
}
