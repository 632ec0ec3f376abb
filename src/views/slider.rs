// src/views/slider.rs
//
// The slider gauge widget: a row of color blocks with a marker line and
// two arrowheads tweening toward the current country's bag count. Two
// instances exist, one per trade direction.

use nannou::prelude::*;

use crate::animation::EasingType;
use crate::utilities::LinearScale;
use crate::views::palette;

const GUTTER_SIDE: f32 = 8.0;
const GUTTER_TOP: f32 = 8.0;
const GUTTER_BOTTOM: f32 = 8.0;
const ARROW_HALF_WIDTH: f32 = 8.0;

pub struct SliderWidget {
    rect: Rect,
    colors: Vec<Rgb8>,
    x: LinearScale,
    duration: f32,
    easing: EasingType,
    // Marker tween: displayed value moves from `from` to `target`
    from: f32,
    target: f32,
    tween_start: f32,
}

impl SliderWidget {
    pub fn new(
        rect: Rect,
        colors: Vec<Rgb8>,
        domain_max: u64,
        duration: f32,
        easing: EasingType,
    ) -> Self {
        Self {
            rect,
            colors,
            x: LinearScale::new(
                domain_max as f32,
                (rect.left() + GUTTER_SIDE, rect.right() - GUTTER_SIDE),
            ),
            duration,
            easing,
            from: 0.0,
            target: 0.0,
            tween_start: f32::MIN,
        }
    }

    /// Starts tweening the marker toward `value`.
    pub fn update(&mut self, value: u64, now: f32) {
        self.from = self.displayed_value(now);
        self.target = value as f32;
        self.tween_start = now;
    }

    /// Rescales the pixel range for a new region. The marker keeps its
    /// last-known value; only its pixel position changes.
    pub fn resize(&mut self, rect: Rect) {
        self.rect = rect;
        self.x
            .set_range((rect.left() + GUTTER_SIDE, rect.right() - GUTTER_SIDE));
    }

    fn displayed_value(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.target;
        }
        let t = ((now - self.tween_start) / self.duration).clamp(0.0, 1.0);
        self.from + (self.target - self.from) * self.easing.apply(t)
    }

    pub fn marker_x(&self, now: f32) -> f32 {
        self.x.map(self.displayed_value(now))
    }

    pub fn draw(&self, draw: &Draw, now: f32) {
        let inner_width = self.rect.w() - 2.0 * GUTTER_SIDE;
        let block_width = inner_width / self.colors.len() as f32;
        let block_height = self.rect.h() - GUTTER_TOP - GUTTER_BOTTOM;
        let center_y = self.rect.bottom() + GUTTER_BOTTOM + block_height / 2.0;

        for (i, color) in self.colors.iter().enumerate() {
            let x = self.rect.left() + GUTTER_SIDE + block_width * (i as f32 + 0.5);
            draw.rect()
                .x_y(x, center_y)
                .w_h(block_width, block_height)
                .color(*color);
        }

        let x = self.marker_x(now);
        let top = self.rect.top() - GUTTER_TOP;
        let bottom = self.rect.bottom() + GUTTER_BOTTOM;

        draw.line()
            .points(pt2(x, bottom), pt2(x, top))
            .color(palette::marker())
            .stroke_weight(1.0);

        // Arrowheads point at the marker from outside the block row
        draw.tri()
            .points(
                pt2(x, top),
                pt2(x + ARROW_HALF_WIDTH, self.rect.top()),
                pt2(x - ARROW_HALF_WIDTH, self.rect.top()),
            )
            .color(palette::marker());
        draw.tri()
            .points(
                pt2(x, bottom),
                pt2(x + ARROW_HALF_WIDTH, self.rect.bottom()),
                pt2(x - ARROW_HALF_WIDTH, self.rect.bottom()),
            )
            .color(palette::marker());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::palette::import_scale;

    fn widget() -> SliderWidget {
        let rect = Rect::from_x_y_w_h(0.0, 0.0, 216.0, 56.0);
        SliderWidget::new(rect, import_scale(), 1000, 4.0, EasingType::Linear)
    }

    #[test]
    fn test_marker_starts_at_domain_zero() {
        let slider = widget();
        // Range start is rect.left() + gutter
        assert!((slider.marker_x(0.0) - -100.0).abs() < 1e-4);
    }

    #[test]
    fn test_marker_position_is_monotonic_in_value() {
        let mut slider = widget();
        let mut last = f32::MIN;
        for value in (0..=1000).step_by(50) {
            slider.update(value, 0.0);
            // Sample after the tween settles
            let x = slider.marker_x(10.0);
            assert!(x >= last);
            last = x;
        }
    }

    #[test]
    fn test_tween_moves_smoothly_toward_target() {
        let mut slider = widget();
        slider.update(1000, 0.0);

        let start = slider.marker_x(0.0);
        let mid = slider.marker_x(2.0);
        let done = slider.marker_x(4.0);

        assert!(start < mid && mid < done);
        // Fully tweened marker sits at the range end
        assert!((done - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_resize_keeps_value_and_rescales() {
        let mut slider = widget();
        slider.update(500, 0.0);
        let settled = slider.marker_x(10.0);

        slider.resize(Rect::from_x_y_w_h(0.0, 0.0, 416.0, 56.0));
        let rescaled = slider.marker_x(10.0);

        // Same midpoint value, twice the inner width
        assert!((settled - 0.0).abs() < 1e-4);
        assert!((rescaled - 0.0).abs() < 1e-4);
        assert!((slider.marker_x(10.0) - rescaled).abs() < 1e-6);
    }

    #[test]
    fn test_empty_dataset_pins_marker() {
        let rect = Rect::from_x_y_w_h(0.0, 0.0, 216.0, 56.0);
        let mut slider = SliderWidget::new(rect, import_scale(), 0, 4.0, EasingType::Linear);
        slider.update(123, 0.0);
        assert!((slider.marker_x(10.0) - (rect.left() + 8.0)).abs() < 1e-4);
    }
}
