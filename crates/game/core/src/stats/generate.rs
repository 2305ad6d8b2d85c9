use crate::rng::{PcgRng, RngOracle, compute_seed};
use crate::state::ActorId;

use super::{StatField, StatRecord};

/// Synthesizes a character record with every numeric field in `[1, max_value]`.
///
/// Field `i` is drawn from `seed_i = compute_seed(game_seed, serial, actor.key(), i)`,
/// so the result depends only on the game seed, the generation counter and the
/// actor identity.
pub fn roll_character_stats(
    game_seed: u64,
    serial: u64,
    actor: &ActorId,
    max_value: u32,
) -> StatRecord {
    let rng = PcgRng;
    let actor_key = actor.key();
    let mut record = StatRecord::character(0, 0, 0);

    for (context, field) in StatField::ALL.into_iter().enumerate() {
        let seed = compute_seed(game_seed, serial, actor_key, context as u32);
        record.set(field, rng.range(seed, 1, max_value.max(1)));
    }

    record
}
