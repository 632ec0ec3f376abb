// src/views/globe.rs
//
// The four-layer globe: water disc, undifferentiated land, then the
// export and import overlays with quantized fills. Everything reprojects
// from scratch each frame, including the highlight strokes, so the view
// never goes stale against the projection.

use nannou::prelude::*;

use crate::geo::Orthographic;
use crate::models::{CoffeeData, Feature};
use crate::utilities::quantize;
use crate::views::palette;

const EXPORT_BUCKETS: usize = 8;
const IMPORT_BUCKETS: usize = 7;
const HIGHLIGHT_WEIGHT: f32 = 2.0;

struct OverlayShape {
    name: String,
    rings: Vec<Vec<[f64; 2]>>,
    fill: Rgb8,
}

pub struct GlobeView {
    land: Vec<Vec<[f64; 2]>>,
    exports: Vec<OverlayShape>,
    imports: Vec<OverlayShape>,
    export_stroke: Rgb8,
    import_stroke: Rgb8,
}

impl GlobeView {
    /// `features` is the full boundary set (the land layer shows every
    /// country); the overlays come from the merged records.
    pub fn new(features: &[Feature], data: &CoffeeData) -> Self {
        let export_colors = palette::export_scale();
        let import_colors = palette::import_scale();

        let land = features
            .iter()
            .flat_map(|f| f.rings.iter().cloned())
            .collect();

        let exports = data
            .records
            .iter()
            .filter(|r| r.export_bags > 0)
            .map(|r| OverlayShape {
                name: r.name.clone(),
                rings: r.rings.clone(),
                fill: export_colors
                    [quantize(r.export_bags, data.max_export_bags, EXPORT_BUCKETS)],
            })
            .collect();

        let imports = data
            .records
            .iter()
            .filter(|r| r.import_bags > 0)
            .map(|r| OverlayShape {
                name: r.name.clone(),
                rings: r.rings.clone(),
                fill: import_colors
                    [quantize(r.import_bags, data.max_import_bags, IMPORT_BUCKETS)],
            })
            .collect();

        Self {
            land,
            exports,
            imports,
            export_stroke: export_colors[export_colors.len() - 1],
            import_stroke: import_colors[import_colors.len() - 1],
        }
    }

    /// Redraws all four layers for the current projection. `current` is
    /// the country owning this cycle's highlight.
    pub fn draw(&self, draw: &Draw, projection: &Orthographic, current: Option<&str>) {
        // water
        draw.ellipse()
            .x_y(projection.translate().x, projection.translate().y)
            .radius(projection.scale() as f32)
            .color(palette::water());

        // land
        for ring in &self.land {
            if let Some(points) = project_ring(projection, ring) {
                draw.polygon().points(points).color(palette::land());
            }
        }

        // exports, then imports on top
        draw_overlay(draw, projection, &self.exports, self.export_stroke, current);
        draw_overlay(draw, projection, &self.imports, self.import_stroke, current);
    }
}

fn draw_overlay(
    draw: &Draw,
    projection: &Orthographic,
    shapes: &[OverlayShape],
    stroke: Rgb8,
    current: Option<&str>,
) {
    for shape in shapes {
        let highlighted = is_highlighted(&shape.name, current);
        for ring in &shape.rings {
            if let Some(points) = project_ring(projection, ring) {
                let polygon = draw.polygon();
                if highlighted {
                    polygon
                        .stroke(stroke)
                        .stroke_weight(HIGHLIGHT_WEIGHT)
                        .points(points)
                        .color(shape.fill);
                } else {
                    polygon.points(points).color(shape.fill);
                }
            }
        }
    }
}

/// Overlay membership already implies bags > 0, so name equality is the
/// whole highlight test.
fn is_highlighted(shape_name: &str, current: Option<&str>) -> bool {
    current == Some(shape_name)
}

/// Projects a boundary ring, dropping far-hemisphere vertices. Rings left
/// with fewer than three visible points are culled entirely.
fn project_ring(projection: &Orthographic, ring: &[[f64; 2]]) -> Option<Vec<Point2>> {
    let points: Vec<Point2> = ring
        .iter()
        .filter_map(|p| projection.project(p[0], p[1]))
        .collect();
    if points.len() < 3 {
        None
    } else {
        Some(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryRecord;

    fn ring(lon: f64) -> Vec<[f64; 2]> {
        vec![[lon, 0.0], [lon + 4.0, 0.0], [lon + 4.0, 4.0], [lon, 0.0]]
    }

    fn sample_data() -> (Vec<Feature>, CoffeeData) {
        let features: Vec<Feature> = ["Brazil", "Finland", "Chad"]
            .iter()
            .enumerate()
            .map(|(i, name)| Feature {
                name: name.to_string(),
                rings: vec![ring(i as f64 * 20.0)],
            })
            .collect();

        let records = vec![
            CountryRecord {
                name: "Brazil".to_string(),
                rings: vec![ring(0.0)],
                export_bags: 100,
                import_bags: 5,
                cups: None,
            },
            CountryRecord {
                name: "Finland".to_string(),
                rings: vec![ring(20.0)],
                export_bags: 0,
                import_bags: 10,
                cups: Some(2000),
            },
            CountryRecord {
                name: "Chad".to_string(),
                rings: vec![ring(40.0)],
                export_bags: 0,
                import_bags: 0,
                cups: None,
            },
        ];
        let data = CoffeeData {
            records,
            max_export_bags: 100,
            max_import_bags: 10,
        };
        (features, data)
    }

    #[test]
    fn test_overlays_require_positive_bags() {
        let (features, data) = sample_data();
        let globe = GlobeView::new(&features, &data);

        // Chad has a zero row on both sides: land only
        assert_eq!(globe.exports.len(), 1);
        assert_eq!(globe.imports.len(), 2);
        assert_eq!(globe.land.len(), 3);
    }

    #[test]
    fn test_fills_use_quantized_buckets() {
        let (features, data) = sample_data();
        let globe = GlobeView::new(&features, &data);

        // Max export lands in the last green; max import in the last red
        assert_eq!(globe.exports[0].fill, palette::export_scale()[7]);
        assert_eq!(globe.imports[1].fill, palette::import_scale()[6]);
    }

    #[test]
    fn test_at_most_one_highlight_per_overlay() {
        let (features, data) = sample_data();
        let globe = GlobeView::new(&features, &data);

        for current in ["Brazil", "Finland", "Chad", "Atlantis"] {
            let highlighted_exports = globe
                .exports
                .iter()
                .filter(|s| is_highlighted(&s.name, Some(current)))
                .count();
            let highlighted_imports = globe
                .imports
                .iter()
                .filter(|s| is_highlighted(&s.name, Some(current)))
                .count();
            assert!(highlighted_exports <= 1);
            assert!(highlighted_imports <= 1);
        }
    }

    #[test]
    fn test_far_side_rings_are_culled() {
        let projection = Orthographic::new(100.0, nannou::prelude::pt2(0.0, 0.0));
        assert!(project_ring(&projection, &ring(0.0)).is_some());
        assert!(project_ring(&projection, &ring(175.0)).is_none());
    }
}
