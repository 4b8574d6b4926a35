//! Path construction for the static country/region geometry.

use crate::model::GeoFeature;
use crate::state::projection::Projection;

/// SVG path data for one feature, or `None` when the geometry is malformed
/// (any non-finite coordinate rejects the whole feature, never the map).
pub fn feature_path(feature: &GeoFeature, projection: &Projection) -> Option<String> {
    let mut d = String::new();
    for ring in feature.rings() {
        for (i, [lon, lat]) in ring.iter().enumerate() {
            let (x, y) = projection.project(*lon, *lat)?;
            let op = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{op}{x:.2},{y:.2}"));
        }
        if !ring.is_empty() {
            d.push('Z');
        }
    }
    if d.is_empty() { None } else { Some(d) }
}
