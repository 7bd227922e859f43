use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::config::{SimConfig, Viewport};
use crate::error::{Error, Result};
use crate::file;
use crate::model::{max_extent, RunState, SimulationState, SpaceObject};
use crate::physics::Integrator;
use crate::render::Renderer;

mod timer;

pub use timer::{TaskQueue, Timer, TimerHandle};

pub const MIN_SPEED: i32 = 1;
pub const MAX_SPEED: i32 = 100;

/// Time between two automatic ticks. Faster speeds mean shorter waits.
pub fn tick_delay(speed: i32) -> Duration {
    let millis = (101 - i64::from(speed)).clamp(1, 100);
    Duration::from_millis(millis as u64)
}

/// Drives a simulation: owns its state, and decides when it moves forward.
///
/// Everything happens on one thread. A tick always runs to completion, and
/// any tick that has been scheduled but hasn't started yet can be called off.
pub struct Scheduler<T: Timer = TaskQueue> {
    state: SimulationState,
    viewport: Viewport,
    integrator: Box<dyn Integrator>,
    timer: T,
    // The one tick we're waiting on, if any. Anything else the timer hands
    // back is stale.
    pending: Option<TimerHandle>,
}

impl Scheduler<TaskQueue> {
    pub fn new(config: &SimConfig, integrator: impl Integrator + 'static) -> Self {
        Self::with_timer(config, integrator, TaskQueue::new())
    }
}

impl<T: Timer> Scheduler<T> {
    pub fn with_timer(config: &SimConfig, integrator: impl Integrator + 'static, timer: T) -> Self {
        let time_step = if config.time_step > 0.0 && config.time_step.is_finite() {
            config.time_step
        } else {
            log::warn!("Ignoring bad time step {}, using 1", config.time_step);
            1.0
        };
        let speed = config.speed.clamp(MIN_SPEED, MAX_SPEED);

        Scheduler {
            state: SimulationState::new(time_step, speed),
            viewport: config.viewport,
            integrator: Box::new(integrator),
            timer,
            pending: None,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_tick_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.state.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn set_time_step(&mut self, time_step: f64) -> Result<()> {
        if !(time_step > 0.0 && time_step.is_finite()) {
            return Err(Error::InvalidTimeStep(time_step));
        }
        self.state.time_step = time_step;
        Ok(())
    }

    /// Starts (or resumes) automatic ticking, with one tick right away.
    pub fn start(&mut self, renderer: &mut dyn Renderer) {
        if self.state.run_state == RunState::Running {
            return;
        }
        self.state.run_state = RunState::Running;
        log::info!("Started execution...");
        self.tick(renderer);
    }

    pub fn pause(&mut self) {
        if self.state.run_state != RunState::Running {
            return;
        }
        self.state.run_state = RunState::Paused;
        self.cancel_pending();
        log::info!("Paused execution.");
    }

    /// What the start/pause button does.
    pub fn toggle(&mut self, renderer: &mut dyn Renderer) {
        match self.state.run_state {
            RunState::Running => self.pause(),
            RunState::Idle | RunState::Paused => self.start(renderer),
        }
    }

    /// Advances the simulation by one time step and redraws everything.
    ///
    /// If we're running, the next tick gets scheduled too.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) {
        let state = &mut self.state;
        self.integrator.advance(&mut state.objects, state.time_step);

        for (obj, image) in state.objects.iter().zip(state.images.iter()) {
            renderer.update(*image, obj, state.scale_factor);
        }

        state.physical_time += state.time_step;
        renderer.show_time(state.physical_time);
        log::trace!("Tick done, physical time is now {}", state.physical_time);

        if state.run_state == RunState::Running {
            self.reschedule();
        }
    }

    /// Tells the timer what time it is, so that a tick scheduled before the
    /// next `run_due` is timed from `now`.
    pub fn advance_clock(&mut self, now: Duration) {
        self.timer.advance_to(now);
    }

    /// Runs whatever tick has come due by `now`, and returns how many ran.
    pub fn run_due(&mut self, now: Duration, renderer: &mut dyn Renderer) -> usize {
        let mut num_ticks = 0;
        while let Some(handle) = self.timer.pop_due(now) {
            if self.pending != Some(handle) {
                log::debug!("Dropping stale tick {:?}", handle);
                continue;
            }
            self.pending = None;
            self.tick(renderer);
            num_ticks += 1;
        }
        num_ticks
    }

    /// Swaps in a new set of objects, and pauses.
    ///
    /// An empty set is refused, and leaves everything exactly as it was.
    pub fn load(&mut self, objects: Vec<SpaceObject>, renderer: &mut dyn Renderer) -> Result<()> {
        let extent = max_extent(&objects).ok_or(Error::EmptyDataset)?;

        // From here on, no tick can see the old objects
        self.cancel_pending();
        if self.state.run_state == RunState::Running {
            log::info!("Paused execution.");
        }
        self.state.run_state = RunState::Paused;

        for image in self.state.images.drain(..) {
            renderer.dispose(image);
        }

        let scale_factor = self.viewport.scale_factor(extent);
        self.state.objects = objects;
        self.state.scale_factor = scale_factor;
        self.state.images = self
            .state
            .objects
            .iter()
            .map(|obj| renderer.create(obj, scale_factor))
            .collect();

        log::info!(
            "Loaded {} space objects, scale factor {:e} px/m",
            self.state.objects.len(),
            scale_factor
        );
        Ok(())
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>, renderer: &mut dyn Renderer) -> Result<()> {
        let objects = file::read_file(path)?;
        self.load(objects, renderer)
    }

    pub fn save(&self, destination: impl Write) -> Result<()> {
        file::write(destination, &self.state.objects)
    }

    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<()> {
        file::write_file(path, &self.state.objects)
    }

    fn reschedule(&mut self) {
        self.cancel_pending();
        let delay = tick_delay(self.state.speed);
        self.pending = Some(self.timer.schedule(delay));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }
}
