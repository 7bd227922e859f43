use nalgebra::Point2;

use crate::model::SpaceObject;

mod track_recorder;

pub use track_recorder::{Track, TrackRecorder};

/// Opaque handle to whatever a renderer uses to draw one object.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImageId(pub usize);

/// Everything the simulation needs from a display.
///
/// Renderers don't own any simulation data, they only get to look at it.
pub trait Renderer {
    fn create(&mut self, object: &SpaceObject, scale_factor: f64) -> ImageId;
    /// Moves an existing image to wherever `object` is now.
    fn update(&mut self, image: ImageId, object: &SpaceObject, scale_factor: f64);
    fn dispose(&mut self, image: ImageId);
    fn show_time(&mut self, physical_time: f64);
}

/// Projects a physical position into screen units, with the origin at the
/// center of the view and y pointing up.
pub fn to_screen(object: &SpaceObject, scale_factor: f64) -> Point2<f64> {
    object.position * scale_factor
}
