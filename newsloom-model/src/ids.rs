use uuid::Uuid;

/// Strongly typed ID for feeds.
///
/// Persisted ids come from external storage and are kept as opaque strings;
/// freshly created feeds get a v4 UUID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeedId(String);

impl FeedId {
    pub fn generate() -> Self {
        FeedId(Uuid::new_v4().to_string())
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        FeedId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FeedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FeedId {
    fn from(raw: &str) -> Self {
        FeedId(raw.to_string())
    }
}
