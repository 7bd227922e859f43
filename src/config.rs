/// Size of the drawing area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Viewport { width, height }
    }

    /// How far from the center we can draw before falling off the screen.
    /// A zero-sized viewport counts as one pixel across.
    pub fn half_extent(&self) -> f64 {
        0.5 * f64::from(self.width.min(self.height).max(1))
    }

    /// Pixels per physical unit, chosen so that something `max_extent` away
    /// from the origin lands right at the edge of the view.
    pub fn scale_factor(&self, max_extent: f64) -> f64 {
        // Everything sitting at the origin would give an infinite scale
        let max_extent = if max_extent > 0.0 && max_extent.is_finite() {
            max_extent
        } else {
            1.0
        };
        self.half_extent() / max_extent
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(800, 800)
    }
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub viewport: Viewport,
    /// Physical seconds per tick.
    pub time_step: f64,
    /// Playback rate, from 1 (slowest) to 100 (fastest).
    pub speed: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            viewport: Viewport::default(),
            time_step: 1.0,
            speed: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_scale_factor() {
        let viewport = Viewport::new(1000, 800);
        assert_relative_eq!(viewport.half_extent(), 400.0);
        assert_relative_eq!(viewport.scale_factor(2.0e11), 2.0e-9);
        assert_relative_eq!(viewport.scale_factor(0.0), 400.0);

        // Further out means smaller
        assert!(viewport.scale_factor(10.0) > viewport.scale_factor(20.0));
    }

    #[test]
    fn test_scale_factor_stays_positive() {
        let viewport = Viewport::default();
        assert_relative_eq!(viewport.scale_factor(f64::INFINITY), 400.0);
        assert_relative_eq!(viewport.scale_factor(f64::NAN), 400.0);
        assert!(viewport.scale_factor(f64::MAX) > 0.0);

        for viewport in [Viewport::new(0, 800), Viewport::new(800, 0), Viewport::new(0, 0)].iter() {
            assert_relative_eq!(viewport.half_extent(), 0.5);
            assert_relative_eq!(viewport.scale_factor(2.0), 0.25);
        }
    }
}
