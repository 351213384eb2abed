use std::fmt;

/// Viewport width below which the mobile sizing applies.
pub const TABLET_MIN_WIDTH: f64 = 600.0;
/// Viewport width at or above which the desktop sizing applies.
pub const DESKTOP_MIN_WIDTH: f64 = 992.0;
/// Container height while minimized, identical across tiers.
pub const COLLAPSED_HEIGHT: f64 = 50.0;

/// Width-based sizing tier for the overlay container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportTier {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportTier {
    /// Classify a viewport width into its sizing tier.
    pub fn for_width(width: f64) -> Self {
        if width < TABLET_MIN_WIDTH {
            ViewportTier::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            ViewportTier::Tablet
        } else {
            ViewportTier::Desktop
        }
    }
}

/// A horizontal measurement, absolute or relative to the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Px(f64),
    Percent(f64),
}

impl Dimension {
    /// Resolve to pixels against a viewport width.
    pub fn resolve(&self, viewport_width: f64) -> f64 {
        match *self {
            Dimension::Px(px) => px,
            Dimension::Percent(pct) => viewport_width * pct / 100.0,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Dimension::Px(px) => write!(f, "{}px", px),
            Dimension::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

/// Container placement and size. Heights and bottom offsets are always
/// pixel-valued; the width and right offset are percent-valued on mobile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: Dimension,
    pub height: f64,
    pub right: Dimension,
    pub bottom: f64,
}

impl Geometry {
    /// Placement used before any resize event has been observed.
    pub fn initial() -> Self {
        Self {
            width: Dimension::Px(300.0),
            height: 500.0,
            right: Dimension::Px(20.0),
            bottom: 20.0,
        }
    }

    /// Placement for a sizing tier, honoring the collapsed height when
    /// minimized.
    pub fn for_tier(tier: ViewportTier, minimized: bool) -> Self {
        let (width, expanded_height, right, bottom) = match tier {
            ViewportTier::Mobile => (Dimension::Percent(90.0), 300.0, Dimension::Percent(5.0), 10.0),
            ViewportTier::Tablet => (Dimension::Px(250.0), 400.0, Dimension::Px(10.0), 15.0),
            ViewportTier::Desktop => (Dimension::Px(300.0), 500.0, Dimension::Px(20.0), 20.0),
        };
        Self {
            width,
            height: if minimized { COLLAPSED_HEIGHT } else { expanded_height },
            right,
            bottom,
        }
    }

    /// Expanded height for a tier, regardless of the current state.
    pub fn expanded_height(tier: ViewportTier) -> f64 {
        Self::for_tier(tier, false).height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(ViewportTier::for_width(0.0), ViewportTier::Mobile);
        assert_eq!(ViewportTier::for_width(599.0), ViewportTier::Mobile);
        assert_eq!(ViewportTier::for_width(600.0), ViewportTier::Tablet);
        assert_eq!(ViewportTier::for_width(991.0), ViewportTier::Tablet);
        assert_eq!(ViewportTier::for_width(992.0), ViewportTier::Desktop);
        assert_eq!(ViewportTier::for_width(2560.0), ViewportTier::Desktop);
    }

    #[test]
    fn mobile_geometry() {
        let geometry = Geometry::for_tier(ViewportTier::Mobile, false);
        assert_eq!(geometry.width, Dimension::Percent(90.0));
        assert_eq!(geometry.height, 300.0);
        assert_eq!(geometry.right, Dimension::Percent(5.0));
        assert_eq!(geometry.bottom, 10.0);
    }

    #[test]
    fn tablet_geometry() {
        let geometry = Geometry::for_tier(ViewportTier::Tablet, false);
        assert_eq!(geometry.width, Dimension::Px(250.0));
        assert_eq!(geometry.height, 400.0);
        assert_eq!(geometry.right, Dimension::Px(10.0));
        assert_eq!(geometry.bottom, 15.0);
    }

    #[test]
    fn desktop_geometry() {
        let geometry = Geometry::for_tier(ViewportTier::Desktop, false);
        assert_eq!(geometry.width, Dimension::Px(300.0));
        assert_eq!(geometry.height, 500.0);
        assert_eq!(geometry.right, Dimension::Px(20.0));
        assert_eq!(geometry.bottom, 20.0);
    }

    #[test]
    fn collapsed_height_is_tier_independent() {
        for tier in [ViewportTier::Mobile, ViewportTier::Tablet, ViewportTier::Desktop] {
            assert_eq!(Geometry::for_tier(tier, true).height, COLLAPSED_HEIGHT);
        }
    }

    #[test]
    fn dimension_resolves_against_viewport() {
        assert_eq!(Dimension::Px(250.0).resolve(400.0), 250.0);
        assert_eq!(Dimension::Percent(90.0).resolve(400.0), 360.0);
    }

    #[test]
    fn dimension_renders_css_units() {
        assert_eq!(Dimension::Px(300.0).to_string(), "300px");
        assert_eq!(Dimension::Percent(5.0).to_string(), "5%");
    }
}
