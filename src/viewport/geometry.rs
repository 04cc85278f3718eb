use web_sys::{DomRect, Element};

/// Vertical extent of a rendered region, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn of_element(element: &Element) -> Self {
        Self::from(element.get_bounding_client_rect())
    }
}

impl From<DomRect> for Bounds {
    fn from(rect: DomRect) -> Self {
        Self::new(rect.top(), rect.bottom())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reads the window's inner size. `None` outside a browser.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Self::new(width, height))
    }

    pub fn is_mobile(&self) -> bool {
        self.width < crate::config::MOBILE_BREAKPOINT_PX
    }
}

/// A horizontal slice of the viewport, as fractions of its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBand {
    pub start: f64,
    pub end: f64,
}

impl ViewportBand {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The middle 20% of the viewport.
    pub fn center() -> Self {
        Self::new(0.4, 0.6)
    }

    pub fn to_pixels(&self, viewport: Viewport) -> Bounds {
        Bounds::new(viewport.height * self.start, viewport.height * self.end)
    }

    /// Fraction of `region` that lies inside the band, 0.0 when disjoint.
    pub fn visible_ratio(&self, region: Bounds, viewport: Viewport) -> f64 {
        let height = region.height();
        if height <= 0.0 {
            return 0.0;
        }
        let band = self.to_pixels(viewport);
        let overlap = region.bottom.min(band.bottom) - region.top.max(band.top);
        (overlap / height).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_fully_inside_band_is_fully_visible() {
        let viewport = Viewport::new(1280.0, 1000.0);
        let ratio = ViewportBand::center().visible_ratio(Bounds::new(450.0, 550.0), viewport);
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn partial_overlap_is_a_fraction_of_the_region() {
        let viewport = Viewport::new(1280.0, 1000.0);
        // region 500..900, band 400..600 => 100px of 400px visible
        let ratio = ViewportBand::center().visible_ratio(Bounds::new(500.0, 900.0), viewport);
        assert!((ratio - 0.25).abs() < 1e-9);
    }

    #[test]
    fn disjoint_or_empty_regions_have_zero_ratio() {
        let viewport = Viewport::new(1280.0, 1000.0);
        let band = ViewportBand::center();
        assert_eq!(band.visible_ratio(Bounds::new(700.0, 900.0), viewport), 0.0);
        assert_eq!(band.visible_ratio(Bounds::new(500.0, 500.0), viewport), 0.0);
    }
}
