// src/views/layout.rs
//
// Window-to-region layout. The globe takes the window minus a bottom
// strip holding the two sliders; the stats panel anchors top-left.

use nannou::prelude::*;
use std::f32::consts::PI;

use crate::config::LayoutConfig;

const SLIDER_PADDING: f32 = 16.0;

#[derive(Debug, Clone)]
pub struct Layout {
    pub window: Rect,
    pub map: Rect,
    pub slider_import: Rect,
    pub slider_export: Rect,
    pub stats_origin: Point2,
}

/// Projection scale for a given map width. Small (mobile-ish) windows get
/// a proportionally larger globe.
pub fn globe_scale(width: f32, mobile_breakpoint: f32) -> f64 {
    if width > mobile_breakpoint {
        (width * 0.56 / PI) as f64
    } else {
        (width * 1.2 / PI) as f64
    }
}

impl Layout {
    pub fn compute(window: Rect, config: &LayoutConfig) -> Self {
        let strip_height = config.slider_strip_height.min(window.h() / 2.0);
        let map = Rect::from_x_y_w_h(
            window.x(),
            window.y() + strip_height / 2.0,
            window.w(),
            window.h() - strip_height,
        );

        let half_width = window.w() / 2.0 - SLIDER_PADDING * 1.5;
        let strip_y = window.bottom() + strip_height / 2.0;
        let slider_import = Rect::from_x_y_w_h(
            window.left() + SLIDER_PADDING + half_width / 2.0,
            strip_y,
            half_width,
            strip_height - SLIDER_PADDING,
        );
        let slider_export = Rect::from_x_y_w_h(
            window.right() - SLIDER_PADDING - half_width / 2.0,
            strip_y,
            half_width,
            strip_height - SLIDER_PADDING,
        );

        let stats_origin = pt2(window.left() + 20.0, window.top() - 24.0);

        Self {
            window,
            map,
            slider_import,
            slider_export,
            stats_origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig {
            mobile_breakpoint: 480.0,
            slider_strip_height: 72.0,
        }
    }

    #[test]
    fn test_globe_scale_breakpoint_rule() {
        let c = config();
        let wide = globe_scale(960.0, c.mobile_breakpoint);
        let narrow = globe_scale(480.0, c.mobile_breakpoint);
        assert!((wide - (960.0 * 0.56 / PI) as f64).abs() < 1e-6);
        assert!((narrow - (480.0 * 1.2 / PI) as f64).abs() < 1e-6);
    }

    #[test]
    fn test_regions_fit_inside_window() {
        let window = Rect::from_x_y_w_h(0.0, 0.0, 960.0, 640.0);
        let layout = Layout::compute(window, &config());

        assert!(layout.map.h() < window.h());
        assert!(layout.slider_import.right() <= layout.slider_export.left());
        assert!(layout.slider_import.bottom() >= window.bottom());
        assert!(layout.slider_export.right() <= window.right());
    }
}
