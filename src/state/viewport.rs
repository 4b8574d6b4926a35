//! Pan/zoom state for the rendered map. A pure visual transform layered on
//! top of projected coordinates; projected positions are never recomputed.

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub scale_factor: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub panning: bool,
    pub last_x: f64,
    pub last_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            panning: false,
            last_x: 0.0,
            last_y: 0.0,
        }
    }
}

impl Viewport {
    /// Begin a drag at surface coordinates.
    pub fn begin_pan(&mut self, x: f64, y: f64) {
        self.panning = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Accumulate the pointer delta into the offset. No-op unless a drag is
    /// in progress.
    pub fn pan_to(&mut self, x: f64, y: f64) {
        if !self.panning {
            return;
        }
        self.offset_x += x - self.last_x;
        self.offset_y += y - self.last_y;
        self.last_x = x;
        self.last_y = y;
    }

    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    /// Zoom by `factor`, clamped to `[MIN_ZOOM, MAX_ZOOM]`, keeping the
    /// surface point `(x, y)` anchored under the cursor.
    pub fn zoom_about(&mut self, x: f64, y: f64, factor: f64) {
        let world_x = (x - self.offset_x) / self.scale_factor;
        let world_y = (y - self.offset_y) / self.scale_factor;
        self.scale_factor = (self.scale_factor * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.offset_x = x - world_x * self.scale_factor;
        self.offset_y = y - world_y * self.scale_factor;
    }

    /// On-surface position of a projected coordinate under this transform.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.offset_x + self.scale_factor * x,
            self.offset_y + self.scale_factor * y,
        )
    }

    /// The transform attribute applied to both render groups.
    pub fn transform_attr(&self) -> String {
        format!(
            "translate({},{}) scale({})",
            self.offset_x, self.offset_y, self.scale_factor
        )
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transform_is_identity() {
        let vp = Viewport::default();
        assert_eq!(vp.apply(123.0, -45.0), (123.0, -45.0));
        assert_eq!(vp.transform_attr(), "translate(0,0) scale(1)");
    }

    #[test]
    fn zoom_is_clamped_to_bounds() {
        let mut vp = Viewport::default();
        vp.zoom_about(0.0, 0.0, 1e9);
        assert_eq!(vp.scale_factor, MAX_ZOOM);
        vp.zoom_about(0.0, 0.0, 1e-9);
        assert_eq!(vp.scale_factor, MIN_ZOOM);
    }

    #[test]
    fn zoom_keeps_the_anchored_point_fixed() {
        let mut vp = Viewport::default();
        vp.begin_pan(0.0, 0.0);
        vp.pan_to(30.0, -10.0);
        vp.end_pan();
        // World point currently under the cursor at (200, 150).
        let world_x = (200.0 - vp.offset_x) / vp.scale_factor;
        let world_y = (150.0 - vp.offset_y) / vp.scale_factor;
        vp.zoom_about(200.0, 150.0, 2.0);
        let (sx, sy) = vp.apply(world_x, world_y);
        assert!((sx - 200.0).abs() < 1e-9);
        assert!((sy - 150.0).abs() < 1e-9);
    }

    #[test]
    fn pan_accumulates_pointer_deltas() {
        let mut vp = Viewport::default();
        vp.begin_pan(10.0, 10.0);
        vp.pan_to(15.0, 20.0);
        vp.pan_to(20.0, 20.0);
        assert_eq!((vp.offset_x, vp.offset_y), (10.0, 10.0));
        vp.end_pan();
        vp.pan_to(100.0, 100.0);
        assert_eq!((vp.offset_x, vp.offset_y), (10.0, 10.0));
    }

    #[test]
    fn apply_scales_then_offsets_projected_positions() {
        let mut vp = Viewport::default();
        vp.zoom_about(0.0, 0.0, 2.0);
        vp.begin_pan(0.0, 0.0);
        vp.pan_to(7.0, -3.0);
        vp.end_pan();
        let (x, y) = vp.apply(10.0, 20.0);
        assert_eq!((x, y), (7.0 + 2.0 * 10.0, -3.0 + 2.0 * 20.0));
    }

    #[test]
    fn reset_restores_the_identity() {
        let mut vp = Viewport::default();
        vp.zoom_about(50.0, 60.0, 3.0);
        vp.begin_pan(0.0, 0.0);
        vp.pan_to(12.0, 34.0);
        vp.reset();
        assert_eq!(vp, Viewport::default());
    }
}
