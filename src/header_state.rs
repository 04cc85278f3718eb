use std::collections::VecDeque;

use crate::config::{HEADER_REVEAL_TOP_PX, REVEAL_MIN_DISTANCE_PX, REVEAL_WINDOW_MS};

/// Mobile header that slides away while scrolling down and comes back near
/// the top of the page or after a quick upward flick.
#[derive(Clone, Debug)]
pub struct HideOnScroll {
    visible: bool,
    last_y: f64,
    upward: VecDeque<(f64, f64)>,
}

impl Default for HideOnScroll {
    fn default() -> Self {
        Self {
            visible: true,
            last_y: 0.0,
            upward: VecDeque::new(),
        }
    }
}

impl HideOnScroll {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one scroll sample (`y` in px, `now_ms` wall clock) and returns
    /// whether the header should be shown. Desktop headers never hide.
    pub fn on_scroll(&mut self, y: f64, now_ms: f64, is_mobile: bool) -> bool {
        if !is_mobile {
            self.visible = true;
        } else if y < HEADER_REVEAL_TOP_PX {
            self.visible = true;
            self.upward.clear();
        } else if y > self.last_y && y > HEADER_REVEAL_TOP_PX {
            self.visible = false;
            self.upward.clear();
        } else if y < self.last_y {
            self.upward.push_back((y, now_ms));
            let cutoff = now_ms - REVEAL_WINDOW_MS;
            while self.upward.front().is_some_and(|&(_, t)| t <= cutoff) {
                self.upward.pop_front();
            }
            if let (Some(&(oldest, _)), Some(&(newest, _))) =
                (self.upward.front(), self.upward.back())
            {
                if self.upward.len() >= 2 && oldest - newest >= REVEAL_MIN_DISTANCE_PX {
                    self.visible = true;
                }
            }
        }
        self.last_y = y;
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_header_is_always_visible() {
        let mut header = HideOnScroll::default();
        assert!(header.on_scroll(400.0, 0.0, false));
        assert!(header.on_scroll(900.0, 16.0, false));
    }

    #[test]
    fn scrolling_down_hides_and_top_of_page_reveals() {
        let mut header = HideOnScroll::default();
        assert!(!header.on_scroll(300.0, 0.0, true));
        assert!(!header.on_scroll(600.0, 16.0, true));
        assert!(header.on_scroll(20.0, 32.0, true));
    }

    #[test]
    fn stays_visible_at_exactly_the_reveal_line() {
        let mut header = HideOnScroll::default();
        assert!(header.on_scroll(10.0, 0.0, true));
        assert!(header.on_scroll(50.0, 16.0, true));
        assert!(header.is_visible());
        assert!(!header.on_scroll(51.0, 32.0, true));
        assert!(!header.is_visible());
    }

    #[test]
    fn fast_upward_flick_reveals() {
        let mut header = HideOnScroll::default();
        header.on_scroll(1000.0, 0.0, true);
        assert!(!header.on_scroll(1200.0, 10.0, true));

        assert!(!header.on_scroll(1170.0, 20.0, true));
        assert!(!header.on_scroll(1130.0, 60.0, true));
        assert!(header.on_scroll(1080.0, 100.0, true));
    }

    #[test]
    fn slow_upward_drift_stays_hidden() {
        let mut header = HideOnScroll::default();
        header.on_scroll(2000.0, 0.0, true);
        assert!(!header.on_scroll(2100.0, 10.0, true));

        let mut y = 2100.0;
        let mut t = 10.0;
        for _ in 0..10 {
            y -= 30.0;
            t += 200.0;
            assert!(!header.on_scroll(y, t, true));
        }
    }
}
