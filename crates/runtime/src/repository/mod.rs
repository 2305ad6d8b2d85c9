//! Repository layer for committed game state.
//!
//! The game core only asks for "durable keyed storage"; this module provides
//! it as snapshots keyed by nonce, in memory for tests and on disk for the
//! client.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use traits::StateRepository;
