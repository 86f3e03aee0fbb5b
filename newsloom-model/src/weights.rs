use std::collections::BTreeMap;

use crate::category::CategoryId;

/// Integer percentage per selected category. Over any non-empty selection
/// the values sum to exactly 100.
pub type WeightMap = BTreeMap<CategoryId, i64>;

/// Integer item-count target per category, derived from a [`WeightMap`]
/// and a result-set size.
pub type MixQuota = BTreeMap<CategoryId, u32>;
