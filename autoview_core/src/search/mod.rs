//! Search module — the space-filling lattice survey.

mod flood;

pub use flood::{flood_fill, FloodResult, LATTICE_STEP};
