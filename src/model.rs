//! Core data models for the launch tracker.
//! Plain serde-backed records mirroring the SpaceX v4 payloads, plus the
//! GeoJSON subset used by the bundled world geometry.

use serde::{Deserialize, Serialize};

/// One launch, as shown in the list pane. `launchpad` is the id of the site
/// it lifted off from and joins against [`Launchpad::id`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub launchpad: String,
}

/// A launch site with its geographic position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Launchpad {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------- World geometry (GeoJSON subset) -----------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<GeoFeature>,
}

/// Static polygon geometry for one country/region. Loaded once at startup,
/// never mutated.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GeoFeature {
    #[serde(default)]
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub name: String,
}

/// Only the geometry kinds present in the bundled asset are modelled.
/// Rings are sequences of `[longitude, latitude]` pairs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Vec<Vec<[f64; 2]>>),
    MultiPolygon(Vec<Vec<Vec<[f64; 2]>>>),
}

impl GeoFeature {
    /// Every ring of the feature, regardless of geometry kind.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &[[f64; 2]]> + '_> {
        match &self.geometry {
            Geometry::Polygon(rings) => Box::new(rings.iter().map(|r| r.as_slice())),
            Geometry::MultiPolygon(polygons) => {
                Box::new(polygons.iter().flat_map(|p| p.iter().map(|r| r.as_slice())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_deserializes_and_ignores_unknown_fields() {
        let raw = r#"{
            "id": "5eb87cd9ffd86e000604b32a",
            "name": "FalconSat",
            "launchpad": "5e9e4502f5090995de566f86",
            "date_utc": "2006-03-24T22:30:00.000Z",
            "success": false
        }"#;
        let launch: Launch = serde_json::from_str(raw).unwrap();
        assert_eq!(launch.name, "FalconSat");
        assert_eq!(launch.launchpad, "5e9e4502f5090995de566f86");
    }

    #[test]
    fn launchpad_deserializes_coordinates() {
        let raw = r#"{
            "id": "ksc",
            "name": "KSC LC 39A",
            "latitude": 28.6080585,
            "longitude": -80.6039558,
            "region": "Florida"
        }"#;
        let pad: Launchpad = serde_json::from_str(raw).unwrap();
        assert!((pad.latitude - 28.6080585).abs() < 1e-9);
        assert!((pad.longitude + 80.6039558).abs() < 1e-9);
    }

    #[test]
    fn geometry_tag_selects_variant() {
        let raw = r#"{
            "properties": { "name": "Square" },
            "geometry": { "type": "Polygon", "coordinates": [[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,1.0]]] }
        }"#;
        let feature: GeoFeature = serde_json::from_str(raw).unwrap();
        assert_eq!(feature.rings().count(), 1);

        let raw = r#"{
            "geometry": { "type": "MultiPolygon",
                          "coordinates": [[[[0.0,0.0],[1.0,0.0],[1.0,1.0]]], [[[5.0,5.0],[6.0,5.0],[6.0,6.0]]]] }
        }"#;
        let feature: GeoFeature = serde_json::from_str(raw).unwrap();
        assert_eq!(feature.rings().count(), 2);
        assert_eq!(feature.properties.name, "");
    }
}
