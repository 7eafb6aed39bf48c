/// Question selection: a per-guild cursor walks the pool in natural order,
/// or through a shuffled play order when one is installed.
use rand::seq::SliceRandom;

use crate::models::GuildSchedule;
use crate::questions::QuestionPool;

/// Pool index the cursor currently points at. A stored order only applies
/// when it covers the whole pool; anything else falls back to natural order.
fn resolve_index(schedule: &GuildSchedule, pool: &QuestionPool) -> usize {
    match &schedule.order {
        Some(order) if order.len() == pool.len() => order[schedule.current_index % order.len()],
        _ => schedule.current_index % pool.len(),
    }
}

/// Length of one full cycle through the pool
fn cycle_len(schedule: &GuildSchedule, pool: &QuestionPool) -> usize {
    match &schedule.order {
        Some(order) if order.len() == pool.len() => order.len(),
        _ => pool.len(),
    }
}

/// Question the cursor points at, without advancing it
pub fn peek_question<'a>(schedule: &GuildSchedule, pool: &'a QuestionPool) -> &'a str {
    pool.get(resolve_index(schedule, pool))
}

/// Question the cursor points at; advances the cursor one step, wrapping
/// at the end of the cycle
pub fn next_question<'a>(schedule: &mut GuildSchedule, pool: &'a QuestionPool) -> &'a str {
    let text = pool.get(resolve_index(schedule, pool));
    schedule.current_index = (schedule.current_index + 1) % cycle_len(schedule, pool);
    text
}

/// Explicit lookup for one-shot overrides. Out-of-range indexes clamp to
/// the last question instead of erroring.
pub fn question_at(pool: &QuestionPool, index: usize) -> &str {
    pool.get(index.min(pool.len() - 1))
}

/// A fresh uniformly random play order over the whole pool
pub fn shuffled_order(len: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(&mut rand::thread_rng());
    order
}
