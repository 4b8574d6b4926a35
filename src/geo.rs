//! World geography asset: loaded once at startup, read-only afterwards.

use std::sync::OnceLock;

use crate::model::FeatureCollection;

static WORLD: OnceLock<FeatureCollection> = OnceLock::new();

const WORLD_GEOJSON: &str = include_str!("../assets/world.json");

/// Simplified continent outlines bundled with the app, parsed on first use.
pub fn world() -> &'static FeatureCollection {
    WORLD.get_or_init(|| {
        serde_json::from_str(WORLD_GEOJSON).expect("bundled world.json parses")
    })
}

#[cfg(test)]
mod tests {
    use super::world;

    #[test]
    fn bundled_world_parses_and_is_nonempty() {
        let collection = world();
        assert!(!collection.features.is_empty());
        for feature in &collection.features {
            assert!(feature.rings().next().is_some(), "feature without rings");
        }
    }

    #[test]
    fn bundled_world_has_finite_coordinates() {
        for feature in &world().features {
            for ring in feature.rings() {
                assert!(ring.len() >= 4, "degenerate ring in {}", feature.properties.name);
                for [lon, lat] in ring {
                    assert!(lon.is_finite() && lat.is_finite());
                    assert!((-180.0..=180.0).contains(lon));
                    assert!((-90.0..=90.0).contains(lat));
                }
            }
        }
    }
}
