use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::error::ModelError;

/// Closed catalog of topic categories a feed can mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CategoryId {
    Economy,
    Markets,
    PersonalFinance,
    Politics,
    Technology,
    Science,
    Health,
    Entertainment,
    CultureArt,
    SportsNfl,
    SportsNba,
    SportsMlb,
    SportsFootball,
    SportsOther,
}

/// Every known category, in catalog order.
pub const ALL_CATEGORIES: [CategoryId; 14] = [
    CategoryId::Economy,
    CategoryId::Markets,
    CategoryId::PersonalFinance,
    CategoryId::Politics,
    CategoryId::Technology,
    CategoryId::Science,
    CategoryId::Health,
    CategoryId::Entertainment,
    CategoryId::CultureArt,
    CategoryId::SportsNfl,
    CategoryId::SportsNba,
    CategoryId::SportsMlb,
    CategoryId::SportsFootball,
    CategoryId::SportsOther,
];

impl CategoryId {
    /// Wire identifier used in persisted data and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Economy => "economy",
            CategoryId::Markets => "markets",
            CategoryId::PersonalFinance => "personal_finance",
            CategoryId::Politics => "politics",
            CategoryId::Technology => "technology",
            CategoryId::Science => "science",
            CategoryId::Health => "health",
            CategoryId::Entertainment => "entertainment",
            CategoryId::CultureArt => "culture_art",
            CategoryId::SportsNfl => "sports_nfl",
            CategoryId::SportsNba => "sports_nba",
            CategoryId::SportsMlb => "sports_mlb",
            CategoryId::SportsFootball => "sports_football",
            CategoryId::SportsOther => "sports_other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryId::Economy => "Economy",
            CategoryId::Markets => "Markets",
            CategoryId::PersonalFinance => "Personal Finance",
            CategoryId::Politics => "Politics",
            CategoryId::Technology => "Technology",
            CategoryId::Science => "Science",
            CategoryId::Health => "Health",
            CategoryId::Entertainment => "Entertainment",
            CategoryId::CultureArt => "Culture & Arts",
            CategoryId::SportsNfl => "Sports / NFL",
            CategoryId::SportsNba => "Sports / NBA",
            CategoryId::SportsMlb => "Sports / MLB",
            CategoryId::SportsFootball => "Sports / Football",
            CategoryId::SportsOther => "Sports / Other",
        }
    }

    /// Look up a category by its wire identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.as_str() == id)
    }

    /// Look up a category by its display label.
    pub fn from_label(label: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.label() == label)
    }

    /// Lenient lookup for untrusted input: wire id first, then label.
    /// Returns None for anything outside the catalog.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        Self::from_id(value).or_else(|| Self::from_label(value))
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}
