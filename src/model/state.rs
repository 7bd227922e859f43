use super::SpaceObject;
use crate::render::ImageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Never started since the process began.
    Idle,
    Running,
    /// Stopped partway through; physical time is kept.
    Paused,
}

impl RunState {
    /// Text for the start/pause control, which always offers the other action.
    pub fn button_label(&self) -> &'static str {
        match self {
            RunState::Running => "Pause",
            RunState::Idle | RunState::Paused => "Start",
        }
    }
}

#[derive(Debug)]
pub struct SimulationState {
    // Invariants:
    //   - `images` is either empty or has one entry per object, in the same order
    //   - `time_step` is positive and finite
    //   - `scale_factor` is positive
    pub(crate) objects: Vec<SpaceObject>,
    pub(crate) images: Vec<ImageId>,
    pub(crate) physical_time: f64,
    pub(crate) time_step: f64,
    pub(crate) speed: i32,
    pub(crate) scale_factor: f64,
    pub(crate) run_state: RunState,
}

impl SimulationState {
    pub fn new(time_step: f64, speed: i32) -> Self {
        SimulationState {
            objects: vec![],
            images: vec![],
            physical_time: 0.0,
            time_step,
            speed,
            scale_factor: 1.0,
            run_state: RunState::Idle,
        }
    }

    pub fn objects(&self) -> &[SpaceObject] {
        &self.objects
    }

    pub fn physical_time(&self) -> f64 {
        self.physical_time
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Biggest `max(|x|, |y|)` over all objects, or `None` if there aren't any.
    pub fn max_extent(&self) -> Option<f64> {
        max_extent(&self.objects)
    }
}

pub(crate) fn max_extent(objects: &[SpaceObject]) -> Option<f64> {
    objects.iter().map(SpaceObject::extent).fold(None, |acc, e| match acc {
        None => Some(e),
        Some(m) => Some(f64::max(m, e)),
    })
}

/// How the elapsed physical time is shown to the user.
pub fn format_physical_time(physical_time: f64) -> String {
    format!("{:.1} seconds gone", physical_time)
}
