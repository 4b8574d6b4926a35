//! The imperatively managed SVG surface behind the map component, and the
//! capability handle the owning component drives it with. The surface owns
//! all marker/highlight/transform state; owners only ever go through
//! [`MapHandle`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::geo;
use crate::model::Launchpad;
use crate::state::geometry::feature_path;
use crate::state::markers::MarkerStyle;
use crate::state::{MarkerSet, Projection};
use crate::util::{clog, format_coord};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub struct MapSurface {
    document: Document,
    svg: Element,
    /// Base geography group; drawn once at mount.
    map_group: Element,
    /// Marker group; rewritten on every real `draw_markers`.
    marker_group: Element,
    projection: Projection,
    markers: MarkerSet,
}

impl MapSurface {
    /// Build the surface under `container`: the svg root, one path per
    /// world feature and the (initially empty) marker group. A malformed
    /// feature is skipped; the rest of the map still renders.
    pub fn mount(
        document: &Document,
        container: &Element,
        width: f64,
        height: f64,
        projection: Projection,
    ) -> Result<Self, JsValue> {
        let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
        svg.set_attribute("width", &format!("{width}"))?;
        svg.set_attribute("height", &format!("{height}"))?;
        container.append_child(&svg)?;

        let map_group = document.create_element_ns(Some(SVG_NS), "g")?;
        map_group.set_attribute("class", "topo")?;
        svg.append_child(&map_group)?;

        let mut skipped = 0usize;
        for feature in &geo::world().features {
            match feature_path(feature, &projection) {
                Some(d) => {
                    let path = document.create_element_ns(Some(SVG_NS), "path")?;
                    path.set_attribute("d", &d)?;
                    path.set_attribute("fill", "#22313f")?;
                    path.set_attribute("stroke", "#30363d")?;
                    path.set_attribute("opacity", "0.7")?;
                    map_group.append_child(&path)?;
                }
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            clog(&format!("map: skipped {skipped} malformed features"));
        }

        let marker_group = document.create_element_ns(Some(SVG_NS), "g")?;
        marker_group.set_attribute("class", "launchpads")?;
        svg.append_child(&marker_group)?;

        Ok(Self {
            document: document.clone(),
            svg,
            map_group,
            marker_group,
            projection,
            markers: MarkerSet::default(),
        })
    }

    pub fn svg(&self) -> &Element {
        &self.svg
    }

    /// Replace all markers with one circle per entry. Empty input leaves
    /// the current markers untouched. Entries with non-finite coordinates
    /// are skipped individually.
    pub fn draw_markers(&mut self, pads: &[Launchpad]) {
        if !self.markers.replace(pads) {
            return;
        }
        self.marker_group.set_inner_html("");
        for pad in self.markers.entries() {
            if let Err(err) = self.append_marker(pad) {
                clog(&format!("map: marker {} failed: {err:?}", pad.id));
            }
        }
    }

    fn append_marker(&self, pad: &Launchpad) -> Result<(), JsValue> {
        let Some((x, y)) = self.projection.project(pad.longitude, pad.latitude) else {
            clog(&format!("map: skipping marker {} with invalid coordinates", pad.id));
            return Ok(());
        };
        let circle = self.document.create_element_ns(Some(SVG_NS), "circle")?;
        circle.set_attribute("class", "launchpad-point")?;
        circle.set_attribute("data-id", &pad.id)?;
        circle.set_attribute("cx", &format!("{x:.2}"))?;
        circle.set_attribute("cy", &format!("{y:.2}"))?;
        apply_style(&circle, self.markers.style_of(&pad.id))?;

        let title = self.document.create_element_ns(Some(SVG_NS), "title")?;
        title.set_text_content(Some(&format!(
            "{} ({})",
            pad.name,
            format_coord(pad.latitude, pad.longitude)
        )));
        circle.append_child(&title)?;
        self.marker_group.append_child(&circle)?;
        Ok(())
    }

    /// Reset every marker to the default style, then emphasize the match.
    pub fn highlight(&mut self, id: &str) {
        self.markers.highlight(id);
        self.sync_styles();
    }

    /// Restore every marker to the default style, unconditionally.
    pub fn reset_highlight(&mut self) {
        self.markers.reset_highlight();
        self.sync_styles();
    }

    fn sync_styles(&self) {
        let circles = self.marker_group.children();
        for i in 0..circles.length() {
            let Some(circle) = circles.item(i) else { continue };
            let id = circle.get_attribute("data-id").unwrap_or_default();
            let _ = apply_style(&circle, self.markers.style_of(&id));
        }
    }

    /// Apply the same pan/zoom transform to geography and markers, so both
    /// move together without reprojection.
    pub fn apply_transform(&self, attr: &str) {
        let _ = self.map_group.set_attribute("transform", attr);
        let _ = self.marker_group.set_attribute("transform", attr);
    }

    /// Tear the surface out of the page on unmount.
    pub fn unmount(&self) {
        if let Some(parent) = self.svg.parent_node() {
            let _ = parent.remove_child(&self.svg);
        }
    }
}

fn apply_style(circle: &Element, style: MarkerStyle) -> Result<(), JsValue> {
    circle.set_attribute("r", &format!("{}", style.radius))?;
    circle.set_attribute("fill", style.fill)?;
    circle.set_attribute("opacity", &format!("{}", style.opacity))?;
    Ok(())
}

/// Capability bundle handed to the owning component once the surface is up.
/// Every operation is a silent no-op before readiness (and again after
/// teardown); callers re-issue once readiness is observed. Clones share the
/// same surface.
#[derive(Clone)]
pub struct MapHandle {
    surface: Rc<RefCell<Option<MapSurface>>>,
}

impl MapHandle {
    pub(crate) fn new(surface: Rc<RefCell<Option<MapSurface>>>) -> Self {
        Self { surface }
    }

    /// Replace all markers with one per entry; empty input is ignored.
    pub fn draw_markers(&self, pads: &[Launchpad]) {
        if let Some(surface) = self.surface.borrow_mut().as_mut() {
            surface.draw_markers(pads);
        }
    }

    /// Reset every marker, then emphasize the one with `id` (if present).
    pub fn highlight(&self, id: &str) {
        if let Some(surface) = self.surface.borrow_mut().as_mut() {
            surface.highlight(id);
        }
    }

    /// Restore every marker to the default style.
    pub fn reset_highlight(&self) {
        if let Some(surface) = self.surface.borrow_mut().as_mut() {
            surface.reset_highlight();
        }
    }
}

impl PartialEq for MapHandle {
    // Handles are equal when they drive the same surface.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.surface, &other.surface)
    }
}
