//! Battle resolution.
//!
//! Damage arithmetic is pure ([`calculate_damage`], [`apply_damage`]); the
//! resolver reads the ruling boss and the caller's character from live state
//! and writes the boss's new health back.
//!
//! # Formula
//!
//! ```text
//! damage       = max(0, attack_power - boss.defense)
//! boss.health' = max(0, boss.health - damage)
//! ```
//!
//! Both floors keep the arithmetic inside the unsigned domain: defense can
//! absorb an attack completely but never heals the boss, and health stops at
//! zero. A boss at zero health stays attackable and simply takes no more damage.

pub mod damage;
pub mod resolve;
pub mod result;

pub use damage::{apply_damage, calculate_damage};
pub use resolve::resolve_attack;
pub use result::AttackOutcome;
