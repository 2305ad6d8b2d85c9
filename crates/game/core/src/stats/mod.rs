//! Stat records shared by bosses and characters.
//!
//! A [`StatRecord`] is a plain value bundle (`health`, `attack_power`,
//! `defense`, `is_boss`). It has no lifecycle of its own: it is always
//! embedded in a boss or a character and validated against [`StatBounds`]
//! before it is stored.
//!
//! Character records are synthesized by [`roll_character_stats`], a
//! deterministic procedure keyed by the actor identity and a monotonic
//! generation counter.

mod generate;
mod record;

pub use generate::roll_character_stats;
pub use record::{StatBounds, StatError, StatField, StatRecord};
