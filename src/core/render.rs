//! SVG planet renderer
//!
//! Markup only. Rasterizing is someone else's job.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crate::LAYOUT_VERSION;
use crate::core::TraitDecoder;
use crate::types::{Accessory, Planet, TraitRecord};

/// Build the SVG document for a trait record
pub fn render_svg(traits: &TraitRecord) -> String {
    let color = traits.primary_color.hex();
    let eye = traits.eye_style.glyph();
    let mouth = traits.mouth.glyph();

    let mut svg = String::with_capacity(1024);
    svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200" width="200">"#);

    // aura
    let _ = write!(
        svg,
        r#"<circle cx="100" cy="100" r="78" fill="{}" opacity="0.15"/>"#,
        color
    );

    // ring sits behind the planet
    if traits.has_ring {
        svg.push_str(
            r##"<ellipse cx="100" cy="115" rx="90" ry="22" fill="none" stroke="#000" stroke-width="6" opacity="0.4"/>"##,
        );
    }

    // planet
    let _ = write!(
        svg,
        r##"<circle cx="100" cy="100" r="70" fill="{}" stroke="#000" stroke-width="6"/>"##,
        color
    );

    // face
    let _ = write!(svg, r#"<text x="70" y="95" font-size="18">{}</text>"#, eye);
    let _ = write!(svg, r#"<text x="120" y="95" font-size="18">{}</text>"#, eye);
    let _ = write!(svg, r#"<text x="95" y="120" font-size="18">{}</text>"#, mouth);

    match traits.accessory {
        Accessory::None => {}
        Accessory::Hat => {
            svg.push_str(r##"<rect x="60" y="35" width="80" height="20" fill="#000"/>"##);
        }
        Accessory::Smoke => {
            svg.push_str(r#"<text x="140" y="120" font-size="20">~</text>"#);
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Write `planet_<fid>.svg` and `planet_<fid>.json` into `dir`.
/// Returns the SVG path.
pub fn save_planet(planet: &Planet, dir: impl AsRef<Path>) -> io::Result<String> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let svg_path = dir.join(format!("planet_{}.svg", planet.identity));
    let json_path = dir.join(format!("planet_{}.json", planet.identity));

    let json = serde_json::to_string_pretty(planet)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    std::fs::write(&svg_path, render_svg(&planet.traits))?;
    std::fs::write(&json_path, json)?;

    tracing::debug!(path = %svg_path.display(), fid = %planet.identity, "planet saved");
    Ok(svg_path.display().to_string())
}

/// Load a saved planet JSON. Planets decoded under another layout, or
/// whose stored traits disagree with their DNA, are refused.
pub fn load_planet(path: impl AsRef<Path>) -> io::Result<Planet> {
    let json = std::fs::read_to_string(path)?;
    let planet: Planet = serde_json::from_str(&json)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    if planet.layout_version != LAYOUT_VERSION {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "planet uses layout v{}, this build decodes v{}",
                planet.layout_version, LAYOUT_VERSION
            ),
        ));
    }

    let decoded = TraitDecoder::new()
        .decode(&planet.dna)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if decoded != planet.traits {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "stored traits ({}) do not match dna {} ({})",
                planet.traits, planet.dna, decoded
            ),
        ));
    }
    Ok(planet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EyeStyle, Mouth, PrimaryColor};

    fn record(accessory: Accessory, has_ring: bool) -> TraitRecord {
        TraitRecord {
            primary_color: PrimaryColor::Violet,
            mouth: Mouth::Wavy,
            eye_style: EyeStyle::Bullet,
            accessory,
            has_ring,
        }
    }

    #[test]
    fn test_svg_envelope() {
        let svg = render_svg(&record(Accessory::None, false));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 200 200""#));
    }

    #[test]
    fn test_color_and_glyphs() {
        let svg = render_svg(&record(Accessory::None, false));
        assert_eq!(svg.matches("#b06aff").count(), 2); // aura + body
        assert_eq!(svg.matches(">•</text>").count(), 2);
        assert!(svg.contains(">~</text>"));
    }

    #[test]
    fn test_ring_only_when_set() {
        assert!(!render_svg(&record(Accessory::None, false)).contains("<ellipse"));
        let svg = render_svg(&record(Accessory::None, true));
        let ring = svg.find("<ellipse").unwrap();
        let body = svg.find(r#"r="70""#).unwrap();
        assert!(ring < body, "ring must be drawn behind the planet");
    }

    #[test]
    fn test_load_rejects_edited_traits() {
        let dir = tempfile::tempdir().unwrap();
        let mut planet =
            crate::core::generate_planet(crate::types::IdentityValue::new(1).unwrap()).unwrap();
        planet.traits.has_ring = !planet.traits.has_ring;
        save_planet(&planet, dir.path()).unwrap();

        let err = load_planet(dir.path().join("planet_1.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("do not match"));
    }

    #[test]
    fn test_accessories() {
        assert!(!render_svg(&record(Accessory::None, false)).contains("<rect"));
        assert!(render_svg(&record(Accessory::Hat, false)).contains("<rect"));
        let smoke = render_svg(&record(Accessory::Smoke, false));
        assert!(smoke.contains(r#"x="140" y="120""#));
        assert!(!smoke.contains("<rect"));
    }
}
