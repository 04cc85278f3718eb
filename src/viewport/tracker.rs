use log::{debug, warn};

use super::geometry::{Bounds, Viewport, ViewportBand};

pub type BoundsProvider = Box<dyn Fn() -> Option<Bounds>>;

/// A named screen area whose position is measured on demand.
pub struct Region {
    pub key: String,
    bounds: BoundsProvider,
}

impl Region {
    pub fn new(key: impl Into<String>, bounds: impl Fn() -> Option<Bounds> + 'static) -> Self {
        Self {
            key: key.into(),
            bounds: Box::new(bounds),
        }
    }

    pub fn measure(&self) -> Option<Bounds> {
        (self.bounds)()
    }
}

/// One region's geometry for a single recomputation, in document order.
#[derive(Clone, Copy, Debug)]
pub struct Measurement<'a> {
    pub key: &'a str,
    pub bounds: Bounds,
}

/// Chooses which measured region should become active.
///
/// Returns the index of the winner in `measurements`, or `None` when no
/// region qualifies; the tracker then keeps whatever was active before.
pub trait ActivationPolicy {
    fn select(
        &self,
        measurements: &[Measurement<'_>],
        viewport: Viewport,
        current: Option<&str>,
    ) -> Option<usize>;
}

/// Picks the region with the largest visible fraction inside `band`.
/// On a tie the currently active region wins.
#[derive(Clone, Copy, Debug)]
pub struct HighestRatio {
    pub band: ViewportBand,
}

impl Default for HighestRatio {
    fn default() -> Self {
        Self {
            band: ViewportBand::center(),
        }
    }
}

impl ActivationPolicy for HighestRatio {
    fn select(
        &self,
        measurements: &[Measurement<'_>],
        viewport: Viewport,
        current: Option<&str>,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, measurement) in measurements.iter().enumerate() {
            let ratio = self.band.visible_ratio(measurement.bounds, viewport);
            if ratio <= 0.0 {
                continue;
            }
            best = match best {
                None => Some((index, ratio)),
                Some((_, best_ratio)) if ratio > best_ratio => Some((index, ratio)),
                Some((_, best_ratio))
                    if ratio == best_ratio && current == Some(measurement.key) =>
                {
                    Some((index, ratio))
                }
                keep => keep,
            };
        }
        best.map(|(index, _)| index)
    }
}

/// Picks the first region, in document order, that straddles a horizontal
/// line at `line` (fraction of viewport height).
#[derive(Clone, Copy, Debug)]
pub struct FirstIntersecting {
    pub line: f64,
}

impl Default for FirstIntersecting {
    fn default() -> Self {
        Self { line: 0.5 }
    }
}

impl ActivationPolicy for FirstIntersecting {
    fn select(
        &self,
        measurements: &[Measurement<'_>],
        viewport: Viewport,
        _current: Option<&str>,
    ) -> Option<usize> {
        let line = viewport.height * self.line;
        measurements
            .iter()
            .position(|m| m.bounds.top <= line && m.bounds.bottom > line)
    }
}

/// Keeps a single active key in sync with the viewport.
///
/// The tracker knows nothing about the DOM: regions bring their own bounds
/// providers and the caller decides when to call [`on_viewport_change`].
///
/// [`on_viewport_change`]: ActivationTracker::on_viewport_change
pub struct ActivationTracker<P> {
    policy: P,
    regions: Vec<Region>,
    active: Option<String>,
}

impl<P: ActivationPolicy> ActivationTracker<P> {
    pub fn new(policy: P, initial: Option<String>) -> Self {
        Self {
            policy,
            regions: Vec::new(),
            active: initial,
        }
    }

    pub fn register(&mut self, regions: Vec<Region>) {
        if regions.is_empty() {
            debug!("No regions to observe, tracker stays idle");
            return;
        }
        debug!("Observing {} regions", regions.len());
        self.regions = regions;
    }

    pub fn deregister(&mut self) {
        self.regions.clear();
    }

    pub fn is_observing(&self) -> bool {
        !self.regions.is_empty()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.regions.iter().any(|region| region.key == key)
    }

    /// Re-measures every region and lets the policy pick. Returns `true`
    /// when the active key changed.
    pub fn on_viewport_change(&mut self, viewport: Viewport) -> bool {
        if !self.is_observing() {
            return false;
        }

        let measured: Vec<(&str, Bounds)> = self
            .regions
            .iter()
            .filter_map(|region| region.measure().map(|bounds| (region.key.as_str(), bounds)))
            .collect();
        let measurements: Vec<Measurement<'_>> = measured
            .iter()
            .map(|&(key, bounds)| Measurement { key, bounds })
            .collect();

        let winner = self
            .policy
            .select(&measurements, viewport, self.active.as_deref())
            .and_then(|index| measurements.get(index))
            .map(|m| m.key.to_string());

        match winner {
            Some(key) => self.set_active(key),
            None => false,
        }
    }

    /// Explicit selection, e.g. a click. Unknown keys are ignored.
    pub fn activate(&mut self, key: &str) -> bool {
        if !self.is_registered(key) {
            warn!("Ignoring activation of unknown region '{}'", key);
            return false;
        }
        self.set_active(key.to_string())
    }

    fn set_active(&mut self, key: String) -> bool {
        if self.active.as_deref() == Some(key.as_str()) {
            return false;
        }
        debug!("Active region -> {}", key);
        self.active = Some(key);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 1000.0,
    };

    /// Regions whose tops can be moved from the test, all 300px tall.
    fn movable(keys: &[&str]) -> (Vec<Region>, Vec<Rc<Cell<f64>>>) {
        let mut regions = Vec::new();
        let mut tops = Vec::new();
        for key in keys {
            let top = Rc::new(Cell::new(2000.0));
            let handle = top.clone();
            regions.push(Region::new(*key, move || {
                Some(Bounds::new(handle.get(), handle.get() + 300.0))
            }));
            tops.push(top);
        }
        (regions, tops)
    }

    #[test]
    fn empty_registration_is_a_no_op() {
        let mut tracker = ActivationTracker::new(HighestRatio::default(), Some("a".into()));
        tracker.register(Vec::new());
        assert!(!tracker.is_observing());
        assert!(!tracker.on_viewport_change(VIEWPORT));
        assert_eq!(tracker.active(), Some("a"));
    }

    #[test]
    fn highest_ratio_picks_most_visible_region_in_band() {
        let (regions, tops) = movable(&["da40-xl", "da20", "da40"]);
        let mut tracker = ActivationTracker::new(HighestRatio::default(), None);
        tracker.register(regions);

        // band is 400..600; da20 covers 150px of it, da40 only 50px
        tops[1].set(250.0);
        tops[2].set(550.0);
        assert!(tracker.on_viewport_change(VIEWPORT));
        assert_eq!(tracker.active(), Some("da20"));
    }

    #[test]
    fn highest_ratio_tie_keeps_current_key() {
        let (regions, tops) = movable(&["a", "b"]);
        let mut tracker = ActivationTracker::new(HighestRatio::default(), Some("b".into()));
        tracker.register(regions);

        // both regions show 100px of 300px inside the band
        tops[0].set(200.0);
        tops[1].set(500.0);
        assert!(!tracker.on_viewport_change(VIEWPORT));
        assert_eq!(tracker.active(), Some("b"));
    }

    #[test]
    fn nothing_intersecting_retains_last_active_key() {
        let (regions, tops) = movable(&["a", "b"]);
        let mut tracker = ActivationTracker::new(HighestRatio::default(), None);
        tracker.register(regions);

        tops[0].set(400.0);
        tracker.on_viewport_change(VIEWPORT);
        assert_eq!(tracker.active(), Some("a"));

        tops[0].set(-5000.0);
        assert!(!tracker.on_viewport_change(VIEWPORT));
        assert_eq!(tracker.active(), Some("a"));
    }

    #[test]
    fn first_intersecting_scans_in_document_order() {
        let (regions, tops) = movable(&["programs", "fleet", "faq"]);
        let mut tracker = ActivationTracker::new(FirstIntersecting::default(), None);
        tracker.register(regions);

        // both fleet and faq straddle the 500px line; fleet comes first
        tops[1].set(300.0);
        tops[2].set(450.0);
        tracker.on_viewport_change(VIEWPORT);
        assert_eq!(tracker.active(), Some("fleet"));

        tops[1].set(-1000.0);
        tracker.on_viewport_change(VIEWPORT);
        assert_eq!(tracker.active(), Some("faq"));
    }

    #[test]
    fn region_touching_line_only_at_bottom_edge_does_not_cross() {
        let (regions, tops) = movable(&["a"]);
        let mut tracker = ActivationTracker::new(FirstIntersecting::default(), None);
        tracker.register(regions);

        tops[0].set(200.0); // bottom exactly on the 500px line
        assert!(!tracker.on_viewport_change(VIEWPORT));
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn activate_is_idempotent() {
        let (regions, _tops) = movable(&["a", "b"]);
        let mut tracker = ActivationTracker::new(HighestRatio::default(), Some("a".into()));
        tracker.register(regions);

        assert!(tracker.activate("b"));
        assert!(!tracker.activate("b"));
        assert_eq!(tracker.active(), Some("b"));
    }

    #[test]
    fn activate_overrides_scroll_position_until_next_change() {
        let (regions, tops) = movable(&["a", "b"]);
        let mut tracker = ActivationTracker::new(HighestRatio::default(), None);
        tracker.register(regions);

        tops[0].set(400.0);
        tracker.on_viewport_change(VIEWPORT);
        assert!(tracker.activate("b"));
        assert_eq!(tracker.active(), Some("b"));

        assert!(tracker.on_viewport_change(VIEWPORT));
        assert_eq!(tracker.active(), Some("a"));
    }

    #[test]
    fn unknown_key_is_ignored() {
        let (regions, _tops) = movable(&["a"]);
        let mut tracker = ActivationTracker::new(HighestRatio::default(), Some("a".into()));
        tracker.register(regions);

        assert!(!tracker.activate("zzz"));
        assert_eq!(tracker.active(), Some("a"));
    }

    #[test]
    fn missing_render_targets_are_skipped() {
        let mut tracker = ActivationTracker::new(HighestRatio::default(), None);
        tracker.register(vec![
            Region::new("gone", || None),
            Region::new("here", || Some(Bounds::new(450.0, 550.0))),
        ]);

        assert!(tracker.on_viewport_change(VIEWPORT));
        assert_eq!(tracker.active(), Some("here"));
    }

    #[test]
    fn active_key_is_always_registered_once_something_intersected() {
        let keys = ["a", "b", "c", "d"];
        let (regions, tops) = movable(&keys);
        let mut tracker = ActivationTracker::new(HighestRatio::default(), None);
        tracker.register(regions);

        let mut scroll = 0.0;
        while scroll < 3000.0 {
            for (i, top) in tops.iter().enumerate() {
                top.set(i as f64 * 700.0 - scroll);
            }
            tracker.on_viewport_change(VIEWPORT);
            if let Some(active) = tracker.active() {
                assert!(keys.contains(&active));
            }
            scroll += 37.0;
        }
        assert!(tracker.active().is_some());
    }

    #[test]
    fn deregister_stops_observation() {
        let (regions, tops) = movable(&["a"]);
        let mut tracker = ActivationTracker::new(HighestRatio::default(), None);
        tracker.register(regions);
        tracker.deregister();

        tops[0].set(400.0);
        assert!(!tracker.on_viewport_change(VIEWPORT));
        assert_eq!(tracker.active(), None);
    }
}
