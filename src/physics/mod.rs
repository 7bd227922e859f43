use nalgebra::Vector2;

use crate::model::SpaceObject;

/// Gravitational constant, in SI units.
pub const G: f64 = 6.67408e-11;

/// Anything that can move a set of objects forward in time.
///
/// Implementations must be deterministic: the same objects and the same `dt`
/// always give the same result.
pub trait Integrator {
    fn advance(&mut self, objects: &mut [SpaceObject], dt: f64);
}

/// Plain Newtonian gravity, summed over every pair of objects.
///
/// Each step computes all accelerations first, then kicks velocities and
/// drifts positions (semi-implicit Euler). Good enough to watch planets go
/// around, and nothing more.
#[derive(Debug, Clone, Copy)]
pub struct DirectGravity {
    /// Distance added in quadrature to avoid blowing up on close approaches.
    pub softening: f64,
}

impl DirectGravity {
    pub fn new() -> Self {
        Self { softening: 0.0 }
    }

    pub fn with_softening(softening: f64) -> Self {
        Self { softening }
    }

    pub fn accelerations(&self, objects: &[SpaceObject]) -> Vec<Vector2<f64>> {
        let eps2 = self.softening * self.softening;
        let mut accels = vec![Vector2::zeros(); objects.len()];

        for (i, obj) in objects.iter().enumerate() {
            for (j, other) in objects.iter().enumerate() {
                if i == j {
                    continue;
                }
                let r = other.position - obj.position;
                let r2 = r.norm_squared() + eps2;
                // Coincident objects don't pull on each other
                if r2 == 0.0 {
                    continue;
                }
                accels[i] += r * (G * other.mass / (r2 * r2.sqrt()));
            }
        }

        accels
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for DirectGravity {
    fn advance(&mut self, objects: &mut [SpaceObject], dt: f64) {
        let accels = self.accelerations(objects);
        for (obj, a) in objects.iter_mut().zip(accels.iter()) {
            obj.velocity += a * dt;
            obj.position += obj.velocity * dt;
        }
    }
}
