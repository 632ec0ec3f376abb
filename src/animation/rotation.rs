// src/animation/rotation.rs
//
// The rotation animator, the main updating entity in the visualisation.
//
// Each cycle has two phases: an instantaneous START that advances the
// cursor and reports the new country, and a timed ROTATE that swings the
// projection onto that country's centroid. ROTATE completion triggers the
// next START, indefinitely. The cursor and the in-flight tween are the
// only animation state; scale and translate belong to the resize path and
// are never touched here.

use crate::animation::EasingType;
use crate::geo::{interpolate_rotation, spherical_centroid, Orthographic};
use crate::models::CoffeeData;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Rotating {
        from: [f64; 2],
        target: [f64; 2],
        started: f32,
    },
}

pub struct RotationAnimator {
    cursor: usize,
    duration: f32,
    easing: EasingType,
    phase: Phase,
    stopped: bool,
    // Elapsed rotation time frozen by stop(), so resume() can rebase
    held_elapsed: Option<f32>,
}

impl RotationAnimator {
    pub fn new(duration: f32, easing: EasingType) -> Self {
        Self {
            cursor: 0,
            duration,
            easing,
            phase: Phase::Idle,
            stopped: false,
            held_elapsed: None,
        }
    }

    /// Index of the country currently being shown.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn stop(&mut self, now: f32) {
        if let Phase::Rotating { started, .. } = self.phase {
            self.held_elapsed = Some(now - started);
        }
        self.stopped = true;
    }

    pub fn resume(&mut self, now: f32) {
        if let (Phase::Rotating { started, .. }, Some(elapsed)) =
            (&mut self.phase, self.held_elapsed)
        {
            *started = now - elapsed;
        }
        self.stopped = false;
        self.held_elapsed = None;
    }

    /// Advances the animation to `now`. Returns the cursor index when a new
    /// cycle starts, so the caller can refresh the sliders and stats panel.
    /// With no records the animator stays idle forever.
    pub fn update(
        &mut self,
        data: &CoffeeData,
        projection: &mut Orthographic,
        now: f32,
    ) -> Option<usize> {
        if self.stopped || data.records.is_empty() {
            return None;
        }

        match self.phase {
            Phase::Idle => {
                // First cycle shows record 0 without advancing
                Some(self.begin_cycle(data, projection, now))
            }
            Phase::Rotating {
                from,
                target,
                started,
            } => {
                let elapsed = now - started;
                let t = if self.duration > 0.0 {
                    (elapsed / self.duration).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let eased = self.easing.apply(t) as f64;
                projection.set_rotation(interpolate_rotation(from, target, eased));

                if elapsed >= self.duration {
                    self.cursor = (self.cursor + 1) % data.records.len();
                    Some(self.begin_cycle(data, projection, now))
                } else {
                    None
                }
            }
        }
    }

    fn begin_cycle(&mut self, data: &CoffeeData, projection: &Orthographic, now: f32) -> usize {
        let record = &data.records[self.cursor];
        let centroid = spherical_centroid(&record.rings);
        self.phase = Phase::Rotating {
            from: projection.rotation(),
            target: [-centroid[0], -centroid[1]],
            started: now,
        };
        self.cursor
    }
}
