#[cfg(feature = "serde")]
use uuid::Uuid;

/// A single feed item as shown in the stream and the saved rail.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Article {
    pub id: String,
    pub title: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub source_name: Option<String>,
    /// ISO timestamp or an already-formatted relative string.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub published_at: Option<String>,
    pub url: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image_url: Option<String>,
}

#[cfg(feature = "serde")]
impl Article {
    /// Validating decoder for untrusted article payloads (storage entries
    /// and API items). Entries without a url are discarded; a missing id
    /// falls back to the url, then to a fresh UUID.
    pub fn decode(raw: &serde_json::Value) -> Option<Article> {
        let obj = raw.as_object()?;
        let url = obj.get("url")?.as_str()?.to_string();

        let id = obj
            .get("id")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| url.clone());
        let id = if id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            id
        };

        Some(Article {
            id,
            title: string_field(obj, "title").unwrap_or_default(),
            description: string_field(obj, "description"),
            source_name: string_field(obj, "sourceName"),
            published_at: string_field(obj, "publishedAt"),
            url,
            image_url: string_field(obj, "imageUrl"),
        })
    }
}

#[cfg(feature = "serde")]
fn string_field(
    obj: &serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Option<String> {
    obj.get(key)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}
