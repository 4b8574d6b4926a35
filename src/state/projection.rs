//! Fixed-parameter Mercator projection from geographic coordinates to
//! surface coordinates. Parameters are set once when the surface is built
//! and never change; only the viewport transform moves afterwards.

use std::f64::consts::FRAC_PI_4;

/// Latitude band representable under Mercator; the poles diverge.
const MAX_LATITUDE_DEG: f64 = 85.05113;

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    scale: f64,
    /// Geographic point mapped onto `translate`, as (longitude, latitude).
    center: (f64, f64),
    /// Surface coordinates of `center`.
    translate: (f64, f64),
}

impl Projection {
    pub fn new(scale: f64, center: (f64, f64), translate: (f64, f64)) -> Self {
        Self { scale, center, translate }
    }

    /// Project a geographic coordinate. Pure and deterministic; `None` iff
    /// an input is non-finite. Latitudes beyond the Mercator band clamp to
    /// its edge rather than running off to infinity.
    pub fn project(&self, longitude: f64, latitude: f64) -> Option<(f64, f64)> {
        if !longitude.is_finite() || !latitude.is_finite() {
            return None;
        }
        let lon = longitude.to_radians();
        let lon0 = self.center.0.to_radians();
        let lat = latitude.clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG).to_radians();
        let lat0 = self.center.1.clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG).to_radians();

        let x = self.translate.0 + self.scale * (lon - lon0);
        // Screen y grows downward, so north of center means smaller y.
        let y = self.translate.1 + self.scale * (mercator_y(lat0) - mercator_y(lat));
        Some((x, y))
    }
}

fn mercator_y(lat_rad: f64) -> f64 {
    (FRAC_PI_4 + lat_rad / 2.0).tan().ln()
}
