// src/models/topology.rs
// the JSON-based world geometry data model
//
// Country boundaries arrive as a topology: every geometry references
// shared arcs by index, a negative index meaning the bitwise complement
// of the arc walked backwards. When a quantization transform is present
// the arc points are delta-encoded.

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Topology {
    pub objects: Objects,
    pub arcs: Vec<Vec<[f64; 2]>>,
    pub transform: Option<Transform>,
}

#[derive(Debug, Deserialize)]
pub struct Objects {
    pub countries: GeometryCollection,
}

#[derive(Debug, Deserialize)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        arcs: Vec<Vec<i64>>,
        properties: Properties,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        properties: Properties,
    },
}

#[derive(Debug, Deserialize)]
pub struct Properties {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

/// A decoded per-country feature: boundary rings in (lon, lat) degrees.
#[derive(Debug, Clone)]
pub struct Feature {
    pub name: String,
    pub rings: Vec<Vec<[f64; 2]>>,
}

impl Topology {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let topology: Topology = serde_json::from_str(&content)?;
        Ok(topology)
    }

    /// Decodes every country geometry into absolute-coordinate rings,
    /// preserving file order.
    pub fn features(&self) -> Vec<Feature> {
        self.objects
            .countries
            .geometries
            .iter()
            .map(|geometry| match geometry {
                Geometry::Polygon { arcs, properties } => Feature {
                    name: properties.name.clone(),
                    rings: arcs.iter().map(|ring| self.ring(ring)).collect(),
                },
                Geometry::MultiPolygon { arcs, properties } => Feature {
                    name: properties.name.clone(),
                    rings: arcs
                        .iter()
                        .flat_map(|polygon| polygon.iter().map(|ring| self.ring(ring)))
                        .collect(),
                },
            })
            .collect()
    }

    fn ring(&self, arc_indices: &[i64]) -> Vec<[f64; 2]> {
        let mut points: Vec<[f64; 2]> = Vec::new();
        for &index in arc_indices {
            let arc = self.decode_arc(index);
            // Consecutive arcs share their junction point
            let skip = usize::from(!points.is_empty());
            points.extend(arc.into_iter().skip(skip));
        }
        points
    }

    fn decode_arc(&self, index: i64) -> Vec<[f64; 2]> {
        let (arc_index, reverse) = if index < 0 {
            (!index as usize, true)
        } else {
            (index as usize, false)
        };
        let arc = &self.arcs[arc_index];

        let mut points = match &self.transform {
            Some(transform) => {
                let mut x = 0.0;
                let mut y = 0.0;
                arc.iter()
                    .map(|delta| {
                        x += delta[0];
                        y += delta[1];
                        [
                            x * transform.scale[0] + transform.translate[0],
                            y * transform.scale[1] + transform.translate[1],
                        ]
                    })
                    .collect()
            }
            None => arc.clone(),
        };

        if reverse {
            points.reverse();
        }
        points
    }
}
