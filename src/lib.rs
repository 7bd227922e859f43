pub mod codec;
pub mod config;
pub mod error;
pub mod file;
pub mod gui;
pub mod model;
pub mod physics;
pub mod render;
pub mod scheduler;

pub use error::{Error, Result};
