use std::collections::BTreeMap;

use nalgebra::Point2;

use super::{to_screen, ImageId, Renderer};
use crate::model::{ObjectKind, SpaceObject};

/// The screen-space path one image took.
#[derive(Debug, Clone)]
pub struct Track {
    pub kind: ObjectKind,
    pub color: String,
    pub points: Vec<Point2<f64>>,
    /// Set once the image has been disposed; the track is kept around for plotting.
    pub disposed: bool,
}

/// A renderer that draws nothing, and instead remembers every position it was
/// asked to show.
#[derive(Debug, Default)]
pub struct TrackRecorder {
    tracks: BTreeMap<ImageId, Track>,
    next_id: usize,
    last_time: Option<f64>,
}

impl TrackRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> impl Iterator<Item = (&ImageId, &Track)> {
        self.tracks.iter()
    }

    pub fn get(&self, image: ImageId) -> Option<&Track> {
        self.tracks.get(&image)
    }

    pub fn live_images(&self) -> usize {
        self.tracks.values().filter(|t| !t.disposed).count()
    }

    /// Last physical time we were asked to display.
    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }

    /// Smallest box containing every recorded point, as `(min, max)`.
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let mut points = self.tracks.values().flat_map(|t| t.points.iter());
        let first = *points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

impl Renderer for TrackRecorder {
    fn create(&mut self, object: &SpaceObject, scale_factor: f64) -> ImageId {
        let id = ImageId(self.next_id);
        self.next_id += 1;
        self.tracks.insert(
            id,
            Track {
                kind: object.kind,
                color: object.color.clone(),
                points: vec![to_screen(object, scale_factor)],
                disposed: false,
            },
        );
        id
    }

    fn update(&mut self, image: ImageId, object: &SpaceObject, scale_factor: f64) {
        match self.tracks.get_mut(&image) {
            Some(track) if !track.disposed => track.points.push(to_screen(object, scale_factor)),
            _ => log::warn!("Asked to move unknown image {:?}", image),
        }
    }

    fn dispose(&mut self, image: ImageId) {
        if let Some(track) = self.tracks.get_mut(&image) {
            track.disposed = true;
        }
    }

    fn show_time(&mut self, physical_time: f64) {
        self.last_time = Some(physical_time);
    }
}
