//! Launchpad marker layer state: which markers exist and which one, if any,
//! is emphasized. DOM mutation lives in the map surface; this module is the
//! state machine behind it (Empty → Populated → Highlighted → Populated).

use crate::model::Launchpad;

/// Visual attributes of one marker circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill: &'static str,
    pub opacity: f64,
}

/// Default style for every launch-site marker.
pub const DEFAULT_MARKER: MarkerStyle = MarkerStyle {
    radius: 6.0,
    fill: "#f85149",
    opacity: 0.85,
};

/// Style of the single emphasized marker.
pub const HIGHLIGHT_MARKER: MarkerStyle = MarkerStyle {
    radius: 10.0,
    fill: "#f0883e",
    opacity: 1.0,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerSet {
    entries: Vec<Launchpad>,
    highlighted: Option<String>,
}

impl MarkerSet {
    /// Replace the whole marker set with `pads`. An empty input sequence is
    /// "no update", not a clear: prior markers stay untouched and `false`
    /// comes back. A real replacement discards any highlight.
    pub fn replace(&mut self, pads: &[Launchpad]) -> bool {
        if pads.is_empty() {
            return false;
        }
        self.entries = pads.to_vec();
        self.highlighted = None;
        true
    }

    /// Emphasize the marker with `id`. Styling is always "reset all, then
    /// apply emphasis to the match", so an id that matches nothing leaves
    /// every marker default, the same state `reset_highlight` produces.
    pub fn highlight(&mut self, id: &str) {
        self.highlighted = self
            .entries
            .iter()
            .find(|pad| pad.id == id)
            .map(|pad| pad.id.clone());
    }

    pub fn reset_highlight(&mut self) {
        self.highlighted = None;
    }

    pub fn style_of(&self, id: &str) -> MarkerStyle {
        if self.highlighted.as_deref() == Some(id) {
            HIGHLIGHT_MARKER
        } else {
            DEFAULT_MARKER
        }
    }

    pub fn entries(&self) -> &[Launchpad] {
        &self.entries
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(id: &str, name: &str, latitude: f64, longitude: f64) -> Launchpad {
        Launchpad {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
        }
    }

    fn two_pads() -> Vec<Launchpad> {
        vec![
            pad("1", "A", 28.5, -80.6),
            pad("2", "B", 34.6, -120.6),
        ]
    }

    #[test]
    fn empty_input_is_a_no_op_not_a_clear() {
        let mut markers = MarkerSet::default();
        assert!(markers.replace(&two_pads()));
        assert!(!markers.replace(&[]));
        assert_eq!(markers.entries(), two_pads().as_slice());
    }

    #[test]
    fn redraw_fully_replaces_the_previous_set() {
        let mut markers = MarkerSet::default();
        markers.replace(&two_pads());
        let fresh = vec![pad("3", "C", 9.0, 167.7)];
        markers.replace(&fresh);
        assert_eq!(markers.entries(), fresh.as_slice());
    }

    #[test]
    fn replace_discards_a_stale_highlight() {
        let mut markers = MarkerSet::default();
        markers.replace(&two_pads());
        markers.highlight("1");
        markers.replace(&[pad("3", "C", 9.0, 167.7)]);
        assert_eq!(markers.highlighted(), None);
        assert_eq!(markers.style_of("1"), DEFAULT_MARKER);
    }

    #[test]
    fn highlight_is_idempotent() {
        let mut markers = MarkerSet::default();
        markers.replace(&two_pads());
        markers.highlight("2");
        let once = markers.clone();
        markers.highlight("2");
        assert_eq!(markers, once);
        assert_eq!(markers.style_of("2"), HIGHLIGHT_MARKER);
    }

    #[test]
    fn unknown_id_equals_reset() {
        let mut highlighted_unknown = MarkerSet::default();
        highlighted_unknown.replace(&two_pads());
        highlighted_unknown.highlight("1");
        highlighted_unknown.highlight("no-such-pad");

        let mut reset = MarkerSet::default();
        reset.replace(&two_pads());
        reset.highlight("1");
        reset.reset_highlight();

        assert_eq!(highlighted_unknown, reset);
    }

    #[test]
    fn reset_after_highlight_restores_every_marker() {
        let mut markers = MarkerSet::default();
        markers.replace(&two_pads());
        markers.highlight("1");
        markers.reset_highlight();
        for entry in markers.entries() {
            assert_eq!(markers.style_of(&entry.id), DEFAULT_MARKER);
        }
    }

    #[test]
    fn end_to_end_highlight_scenario() {
        let mut markers = MarkerSet::default();
        markers.replace(&two_pads());
        assert_eq!(markers.entries().len(), 2);

        markers.highlight("2");
        assert_eq!(markers.style_of("2"), HIGHLIGHT_MARKER);
        assert_eq!(markers.style_of("1"), DEFAULT_MARKER);

        markers.reset_highlight();
        assert_eq!(markers.style_of("1"), DEFAULT_MARKER);
        assert_eq!(markers.style_of("2"), DEFAULT_MARKER);
    }
}
