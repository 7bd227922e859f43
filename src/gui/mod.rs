use std::path::PathBuf;
use std::time::Instant;

use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer as KissRenderer;
use kiss3d::text::Font;
use kiss3d::window::{State, Window};
use nalgebra::{Point2, Point3};

use self::canvas::{Canvas, SceneImages};
use self::controller::{command_for, help_text, Command};
use crate::scheduler::Scheduler;

mod canvas;
mod colors;
mod controller;

pub use colors::parse_color;

/// Where the user's open and save actions go. There are no file dialogs, so
/// both paths are fixed when the app starts.
#[derive(Debug, Clone)]
pub struct DataFiles {
    pub input: Option<PathBuf>,
    pub output: PathBuf,
}

pub struct SolarApp {
    scheduler: Scheduler,
    images: SceneImages,
    files: DataFiles,
    clock: Instant,
    // Last thing worth telling the user about, e.g. a failed save
    status: String,
}

impl SolarApp {
    pub fn new(scheduler: Scheduler, files: DataFiles, window: &mut Window) -> Self {
        let images = SceneImages::new(scheduler.state().physical_time());
        let mut app = SolarApp {
            scheduler,
            images,
            files,
            clock: Instant::now(),
            status: String::new(),
        };
        if app.files.input.is_some() {
            app.open(window);
        }
        app
    }

    fn open(&mut self, window: &mut Window) {
        let path = match &self.files.input {
            Some(path) => path.clone(),
            None => {
                self.status = String::from("No input file given");
                return;
            }
        };

        let mut canvas = Canvas::new(window, &mut self.images);
        self.status = match self.scheduler.load_file(&path, &mut canvas) {
            Ok(()) => format!("Loaded {}", path.display()),
            Err(e) => {
                log::error!("Could not load {}: {}", path.display(), e);
                format!("Load failed: {}", e)
            }
        };
    }

    fn save(&mut self) {
        let path = &self.files.output;
        self.status = match self.scheduler.save_file(path) {
            Ok(()) => format!("Saved to {}", path.display()),
            Err(e) => {
                log::error!("Could not save to {}: {}", path.display(), e);
                format!("Save failed: {}", e)
            }
        };
    }

    fn process_command(&mut self, command: Command, window: &mut Window) {
        match command {
            Command::ToggleRun => {
                let mut canvas = Canvas::new(window, &mut self.images);
                self.scheduler.toggle(&mut canvas);
            }
            Command::ChangeSpeed(delta) => {
                let speed = self.scheduler.state().speed() + delta;
                self.scheduler.set_speed(speed);
                log::info!("Speed is {}", self.scheduler.state().speed());
            }
            Command::ScaleTimeStep(coarser) => {
                let time_step = self.scheduler.state().time_step();
                let time_step = if coarser { time_step * 2.0 } else { time_step / 2.0 };
                if let Err(e) = self.scheduler.set_time_step(time_step) {
                    self.status = e.to_string();
                }
                log::info!("Time step is {} s", self.scheduler.state().time_step());
            }
            Command::Open => self.open(window),
            Command::Save => self.save(),
        }
    }

    fn status_text(&self) -> String {
        let state = self.scheduler.state();
        format!(
            "{}
[{}]  speed: {}  time step: {} s
{}
{}",
            self.images.time_label(),
            state.run_state().button_label(),
            state.speed(),
            state.time_step(),
            help_text(),
            self.status,
        )
    }
}

impl State for SolarApp {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn KissRenderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (None, None, None, None)
    }

    fn step(&mut self, window: &mut Window) {
        let now = self.clock.elapsed();
        self.scheduler.advance_clock(now);

        let commands: Vec<Command> = window
            .events()
            .iter()
            .filter_map(|event| command_for(&event.value))
            .collect();
        for command in commands {
            self.process_command(command, window);
        }

        let mut canvas = Canvas::new(window, &mut self.images);
        self.scheduler.run_due(now, &mut canvas);

        window.draw_text(
            &self.status_text(),
            &Point2::origin(),
            40.0,
            &Font::default(),
            &Point3::new(1.0, 1.0, 1.0),
        );
    }
}
