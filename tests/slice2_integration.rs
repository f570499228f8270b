//! Integration tests for Slice 2 - SVG rendering
//!
//! fid → planet → SVG markup → files on disk

use zeta_planets::core::{generate_planet, load_planet, render_svg, save_planet};
use zeta_planets::types::{IdentityValue, Planet, PrimaryColor};
use zeta_planets::LAYOUT_VERSION;

fn planet(v: u64) -> Planet {
    generate_planet(IdentityValue::new(v).unwrap()).unwrap()
}

#[test]
fn test_fid_1_svg() {
    // gold, dot eyes, dash mouth, no accessory, no ring
    let svg = render_svg(&planet(1).traits);
    assert!(svg.contains(r##"fill="#ffd36a""##));
    assert_eq!(svg.matches(r#"font-size="18">.</text>"#).count(), 2);
    assert!(svg.contains(r#"font-size="18">-</text>"#));
    assert!(!svg.contains("<ellipse"));
    assert!(!svg.contains("<rect"));
}

#[test]
fn test_fid_12345_svg() {
    // charcoal, hat, ring
    let svg = render_svg(&planet(12345).traits);
    assert!(svg.contains(r##"fill="#222""##));
    assert!(svg.contains("<ellipse"));
    assert!(svg.contains("<rect"));
}

#[test]
fn test_render_is_deterministic() {
    assert_eq!(render_svg(&planet(42).traits), render_svg(&planet(42).traits));
    assert_ne!(render_svg(&planet(1).traits), render_svg(&planet(2).traits));
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let p = planet(12345);

    let svg_path = save_planet(&p, dir.path()).unwrap();
    assert!(svg_path.ends_with("planet_12345.svg"));

    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert_eq!(svg, render_svg(&p.traits));

    let loaded = load_planet(dir.path().join("planet_12345.json")).unwrap();
    assert_eq!(loaded, p);
    assert_eq!(loaded.layout_version, LAYOUT_VERSION);
}

#[test]
fn test_saved_json_carries_layout_version() {
    let dir = tempfile::tempdir().unwrap();
    save_planet(&planet(7), dir.path()).unwrap();

    let json = std::fs::read_to_string(dir.path().join("planet_7.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["layout_version"], LAYOUT_VERSION);
    assert_eq!(value["identity"], 7);
    assert!(value["dna"].as_str().unwrap().starts_with("0x"));
}

#[test]
fn test_load_refuses_other_layout() {
    let dir = tempfile::tempdir().unwrap();
    let mut p = planet(3);
    p.layout_version = LAYOUT_VERSION + 1;

    let path = dir.path().join("future.json");
    std::fs::write(&path, serde_json::to_string(&p).unwrap()).unwrap();

    let err = load_planet(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_load_refuses_traits_that_disagree_with_dna() {
    let dir = tempfile::tempdir().unwrap();
    let mut p = planet(12345);
    p.traits.primary_color = PrimaryColor::Mint;

    let path = dir.path().join("edited.json");
    std::fs::write(&path, serde_json::to_string(&p).unwrap()).unwrap();

    let err = load_planet(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_load_refuses_malformed_dna() {
    let dir = tempfile::tempdir().unwrap();
    let p = planet(4);
    let mut value = serde_json::to_value(&p).unwrap();
    value["dna"] = serde_json::Value::String("0x1234".to_string());

    let path = dir.path().join("short.json");
    std::fs::write(&path, value.to_string()).unwrap();

    let err = load_planet(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_save_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    save_planet(&planet(10), &nested).unwrap();
    assert!(nested.join("planet_10.svg").exists());
}
