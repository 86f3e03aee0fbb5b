use crate::category::CategoryId;
use crate::ids::FeedId;
use crate::weights::WeightMap;

/// A saved category mix: the ordered selection plus its weight split.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feed {
    pub id: FeedId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected: Vec<CategoryId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weights: WeightMap,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            rename = "mixLabel",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub mix_label: Option<String>,
    /// Epoch milliseconds of the last edit.
    #[cfg_attr(feature = "serde", serde(default, rename = "updatedAt"))]
    pub updated_at: i64,
}

impl Feed {
    pub fn new(
        name: impl Into<String>,
        selected: Vec<CategoryId>,
        weights: WeightMap,
        updated_at: i64,
    ) -> Self {
        Feed {
            id: FeedId::generate(),
            name: name.into(),
            selected,
            weights,
            mix_label: None,
            updated_at,
        }
    }
}

#[cfg(feature = "serde")]
impl Feed {
    /// Validating decoder for untrusted persisted feeds.
    ///
    /// Requires a string id and name; unknown categories are dropped from
    /// both the selection and the weight map, and weight values are coerced
    /// from numbers or numeric strings. Returns None as the discard signal
    /// instead of erroring.
    pub fn decode(raw: &serde_json::Value) -> Option<Feed> {
        use serde_json::Value;

        let obj = raw.as_object()?;
        let id = obj.get("id")?.as_str()?;
        let name = obj.get("name")?.as_str()?;

        let selected: Vec<CategoryId> = obj
            .get("selected")
            .and_then(Value::as_array)
            .map(|items| {
                items.iter().filter_map(decode_category).collect()
            })
            .unwrap_or_default();

        let mut weights = WeightMap::new();
        if let Some(map) = obj.get("weights").and_then(Value::as_object) {
            for (key, value) in map {
                let Some(category) = CategoryId::parse_lenient(key) else {
                    continue;
                };
                let Some(weight) = decode_weight(value) else {
                    continue;
                };
                weights.insert(category, weight);
            }
        }

        let updated_at = obj
            .get("updatedAt")
            .and_then(Value::as_i64)
            .unwrap_or(0);

        let mix_label = obj
            .get("mixLabel")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Feed {
            id: FeedId::from_raw(id),
            name: name.to_string(),
            selected,
            weights,
            mix_label,
            updated_at,
        })
    }
}

/// Accepts a bare id/label string or an object carrying `id` or `label`.
#[cfg(feature = "serde")]
fn decode_category(raw: &serde_json::Value) -> Option<CategoryId> {
    use serde_json::Value;

    match raw {
        Value::String(s) => CategoryId::parse_lenient(s),
        Value::Object(obj) => {
            if let Some(id) = obj.get("id").and_then(Value::as_str) {
                if let Some(category) = CategoryId::from_id(id) {
                    return Some(category);
                }
            }
            obj.get("label")
                .and_then(Value::as_str)
                .and_then(CategoryId::from_label)
        }
        _ => None,
    }
}

#[cfg(feature = "serde")]
fn decode_weight(raw: &serde_json::Value) -> Option<i64> {
    use serde_json::Value;

    match raw {
        Value::Number(n) => {
            n.as_i64().or_else(|| {
                n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)
            })
        }
        Value::String(s) => {
            s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64)
        }
        _ => None,
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_requires_id_and_name() {
        assert!(Feed::decode(&json!({ "name": "Morning" })).is_none());
        assert!(Feed::decode(&json!({ "id": "f1" })).is_none());
        assert!(Feed::decode(&json!(null)).is_none());
    }

    #[test]
    fn decode_drops_unknown_categories() {
        let feed = Feed::decode(&json!({
            "id": "f1",
            "name": "Morning",
            "selected": ["economy", "astrology", "Politics"],
            "weights": { "economy": 60, "astrology": 30, "politics": "40" },
        }))
        .unwrap();

        assert_eq!(
            feed.selected,
            vec![CategoryId::Economy, CategoryId::Politics]
        );
        assert_eq!(feed.weights.get(&CategoryId::Economy), Some(&60));
        assert_eq!(feed.weights.get(&CategoryId::Politics), Some(&40));
        assert_eq!(feed.weights.len(), 2);
        assert_eq!(feed.updated_at, 0);
    }

    #[test]
    fn decode_accepts_object_category_entries() {
        let feed = Feed::decode(&json!({
            "id": "f2",
            "name": "Mixed",
            "selected": [
                { "id": "markets" },
                { "label": "Sports / NBA" },
                { "other": true },
            ],
        }))
        .unwrap();
        assert_eq!(
            feed.selected,
            vec![CategoryId::Markets, CategoryId::SportsNba]
        );
    }

    #[test]
    fn decode_coerces_and_drops_weight_values() {
        let feed = Feed::decode(&json!({
            "id": "f3",
            "name": "Odd weights",
            "weights": {
                "economy": 33.9,
                "markets": "not a number",
                "politics": null,
            },
        }))
        .unwrap();
        // Fractional weights truncate toward zero.
        assert_eq!(feed.weights.get(&CategoryId::Economy), Some(&33));
        assert_eq!(feed.weights.len(), 1);
    }
}
