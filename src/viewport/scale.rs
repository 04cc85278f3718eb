use crate::config::{CARD_MAX_SCALE, CARD_MIN_SCALE};

/// Maps a region's top offset inside a moving window to a scale factor.
///
/// The window runs from `entry` (progress 0) down to `exit` (progress 1);
/// offsets outside it clamp to the nearest end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleWindow {
    pub entry: f64,
    pub exit: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl ScaleWindow {
    /// Window used by the career cards: a card grows while its own height
    /// scrolls in from the bottom edge of the viewport.
    pub fn for_card(viewport_height: f64, card_height: f64) -> Self {
        Self {
            entry: viewport_height,
            exit: viewport_height - card_height,
            min_scale: CARD_MIN_SCALE,
            max_scale: CARD_MAX_SCALE,
        }
    }

    pub fn progress(&self, top: f64) -> f64 {
        let span = self.entry - self.exit;
        if span <= 0.0 {
            return if top <= self.exit { 1.0 } else { 0.0 };
        }
        ((self.entry - top) / span).clamp(0.0, 1.0)
    }

    pub fn scale_at(&self, top: f64) -> f64 {
        match self.progress(top) {
            p if p <= 0.0 => self.min_scale,
            p if p >= 1.0 => self.max_scale,
            p => self.min_scale + (self.max_scale - self.min_scale) * p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> ScaleWindow {
        ScaleWindow::for_card(900.0, 500.0)
    }

    #[test]
    fn scale_is_minimal_at_entry_point() {
        assert_eq!(card().scale_at(900.0), 0.9);
        assert_eq!(card().scale_at(1500.0), 0.9);
    }

    #[test]
    fn scale_is_maximal_at_and_beyond_exit_point() {
        assert_eq!(card().scale_at(400.0), 1.0);
        assert_eq!(card().scale_at(-200.0), 1.0);
    }

    #[test]
    fn halfway_through_window_is_halfway_scale() {
        assert!((card().scale_at(650.0) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn scale_never_shrinks_as_top_decreases() {
        let window = card();
        let mut previous = window.scale_at(1200.0);
        let mut top = 1200.0;
        while top > -300.0 {
            let scale = window.scale_at(top);
            assert!(scale >= previous);
            assert!((0.9..=1.0).contains(&scale));
            previous = scale;
            top -= 13.0;
        }
    }

    #[test]
    fn zero_height_window_snaps_between_bounds() {
        let window = ScaleWindow::for_card(900.0, 0.0);
        assert_eq!(window.scale_at(901.0), 0.9);
        assert_eq!(window.scale_at(900.0), 1.0);
    }
}
