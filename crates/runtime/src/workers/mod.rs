//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker is the only owner of the live game state; every
//! call reaches it through its command queue.

mod simulation;

pub use simulation::{Command, SimulationWorker};
