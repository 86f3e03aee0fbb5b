//! Weight/mix allocation engine.
//!
//! Pure functions over (selection, weight map) pairs. Every function is
//! total: empty or inconsistent input degrades to an empty map or an
//! unchanged copy, never an error. These run synchronously on every
//! adjustment click, so they must not allocate surprises or panic.

use newsloom_model::{CategoryId, MixQuota, WeightMap};

use crate::constants::mix::{MIN_WEIGHT, TOTAL_WEIGHT};

/// Default even split for a fresh selection: each category gets
/// floor(100/k) and the remainder goes entirely to the first category in
/// selection order, keeping the sum at exactly 100.
pub fn normalize_weights(selection: &[CategoryId]) -> WeightMap {
    let mut weights = WeightMap::new();
    if selection.is_empty() {
        return weights;
    }

    let count = selection.len() as i64;
    let base = TOTAL_WEIGHT / count;
    let rest = TOTAL_WEIGHT - base * count;

    for (i, category) in selection.iter().enumerate() {
        let extra = if i == 0 { rest } else { 0 };
        weights.insert(*category, base + extra);
    }

    weights
}

/// Move `target`'s weight by `delta` and rebalance the rest of the
/// selection so the total stays at 100.
///
/// The clamped decrease is shared uniformly (floor division) across the
/// other categories, each held at [`MIN_WEIGHT`]; whatever the clamping
/// leaves over is absorbed by `target` as the final residual. A clamped
/// neighbor's shortfall therefore rolls into `target`, which can move it
/// further than the nominal `delta`; accepted behavior, kept on purpose.
pub fn adjust_weight(
    selection: &[CategoryId],
    weights: &WeightMap,
    target: CategoryId,
    delta: i64,
) -> WeightMap {
    let current = weights.get(&target).copied().unwrap_or(0);
    let next_value = (current + delta).clamp(MIN_WEIGHT, TOTAL_WEIGHT);
    let diff = next_value - current;
    if diff == 0 {
        return weights.clone();
    }

    let others: Vec<CategoryId> = selection
        .iter()
        .copied()
        .filter(|category| *category != target)
        .collect();
    // A single-category selection has nowhere to redistribute.
    if others.is_empty() {
        return weights.clone();
    }

    let share = diff.div_euclid(others.len() as i64);

    let mut next = weights.clone();
    next.insert(target, next_value);
    for category in &others {
        let value = next.get(category).copied().unwrap_or(0) - share;
        next.insert(*category, value.max(MIN_WEIGHT));
    }

    let total: i64 = next.values().sum();
    let fix = TOTAL_WEIGHT - total;
    if fix != 0 {
        if let Some(value) = next.get_mut(&target) {
            *value += fix;
        }
    }

    next
}

/// Convert a weight distribution into per-category item quotas for a
/// result set of `size` items.
///
/// Every category present in the map gets at least one item no matter how
/// small its share, even when that pushes the quota sum past `size`: a
/// selected category must never be invisible in the resulting feed.
pub fn weights_to_mix(weights: &WeightMap, size: u32) -> MixQuota {
    let mut mix = MixQuota::new();
    if weights.is_empty() {
        return mix;
    }

    let total: i64 = weights.values().sum();
    if total <= 0 {
        return mix;
    }

    for (category, weight) in weights {
        let share = (*weight as f64 / total as f64) * size as f64;
        mix.insert(*category, share.round().max(1.0) as u32);
    }

    mix
}

/// Even quota split for an unweighted selection: `size` divided as evenly
/// as possible, with the remainder handed out one item at a time to the
/// first categories in selection order. Note the remainder policy differs
/// from [`normalize_weights`] (which gives it all to the first category);
/// the two feed different paths and each keeps its own behavior.
pub fn selected_to_mix(selection: &[CategoryId], size: u32) -> MixQuota {
    let mut mix = MixQuota::new();
    if selection.is_empty() {
        return mix;
    }

    let count = selection.len() as u32;
    let base = size / count;
    let rem = size - base * count;

    for (i, category) in selection.iter().enumerate() {
        let extra = if (i as u32) < rem { 1 } else { 0 };
        mix.insert(*category, base + extra);
    }

    mix
}
