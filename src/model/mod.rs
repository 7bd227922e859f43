mod object;
mod state;

pub use object::{ObjectKind, SpaceObject, NUM_FIELDS};
pub use state::{format_physical_time, RunState, SimulationState};

pub(crate) use state::max_extent;
