//! Readiness gate for the first draw. The capability handle and the
//! launchpad data arrive from independently-timed events with no fixed
//! order; markers are drawn once both have happened, whichever came last.

use crate::model::Launchpad;

#[derive(Clone, Debug, Default)]
pub struct DrawGate {
    surface_ready: bool,
    data: Option<Vec<Launchpad>>,
}

impl DrawGate {
    /// Record that the rendering surface is up. Returns the data to draw
    /// when the gate is complete.
    pub fn surface_ready(&mut self) -> Option<Vec<Launchpad>> {
        self.surface_ready = true;
        self.pending()
    }

    /// Record a data arrival. A later arrival replaces the sequence, so the
    /// draw always uses the latest data.
    pub fn data_arrived(&mut self, pads: Vec<Launchpad>) -> Option<Vec<Launchpad>> {
        self.data = Some(pads);
        self.pending()
    }

    fn pending(&self) -> Option<Vec<Launchpad>> {
        if self.surface_ready {
            self.data.clone()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Launchpad;

    fn pads() -> Vec<Launchpad> {
        vec![Launchpad {
            id: "ksc".into(),
            name: "KSC LC 39A".into(),
            latitude: 28.6,
            longitude: -80.6,
        }]
    }

    #[test]
    fn readiness_then_data_fires_once_data_lands() {
        let mut gate = DrawGate::default();
        assert_eq!(gate.surface_ready(), None);
        assert_eq!(gate.data_arrived(pads()), Some(pads()));
    }

    #[test]
    fn data_then_readiness_fires_once_surface_is_up() {
        let mut gate = DrawGate::default();
        assert_eq!(gate.data_arrived(pads()), None);
        assert_eq!(gate.surface_ready(), Some(pads()));
    }

    #[test]
    fn both_orders_converge_on_the_same_draw() {
        let mut a = DrawGate::default();
        a.surface_ready();
        let drawn_a = a.data_arrived(pads());

        let mut b = DrawGate::default();
        b.data_arrived(pads());
        let drawn_b = b.surface_ready();

        assert_eq!(drawn_a, drawn_b);
    }

    #[test]
    fn a_fresh_arrival_redraws_with_the_latest_sequence() {
        let mut gate = DrawGate::default();
        gate.surface_ready();
        gate.data_arrived(pads());
        let mut fresh = pads();
        fresh[0].id = "vafb".into();
        assert_eq!(gate.data_arrived(fresh.clone()), Some(fresh));
    }
}
