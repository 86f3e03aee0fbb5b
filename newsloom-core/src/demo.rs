//! Canned articles for offline development, keyed by a feed seed so
//! different feeds show recognizably different content.

use newsloom_model::Article;

fn make(
    id: String,
    url: &str,
    title: &str,
    description: &str,
    source_name: &str,
    published_at: &str,
    image_url: Option<&str>,
) -> Article {
    Article {
        id,
        title: title.to_string(),
        description: Some(description.to_string()),
        source_name: Some(source_name.to_string()),
        published_at: Some(published_at.to_string()),
        url: url.to_string(),
        image_url: image_url.map(str::to_string),
    }
}

/// A small fixed article set, with ids varied by the feed seed.
pub fn demo_articles(feed_seed: &str) -> Vec<Article> {
    let seed: String = feed_seed.chars().take(6).collect();
    let seed = if seed.is_empty() { "default".to_string() } else { seed };

    vec![
        make(
            format!("a-{seed}-1"),
            "https://example.com/articles/rate-outlook",
            "Central banks signal a slower path for rate cuts this year",
            "Policy makers point to sticky services inflation as the reason \
             for keeping rates higher for longer.",
            "Ledger Daily",
            "15h ago",
            Some("https://images.example.com/rate-outlook.jpg"),
        ),
        make(
            format!("a-{seed}-2"),
            "https://example.com/articles/chip-fab",
            "Inside the decade-long bet on a domestic chip fabrication plant",
            "A look at the supply-chain math behind the largest industrial \
             construction project in the region.",
            "The Circuit",
            "2026-02-28T09:30:00Z",
            None,
        ),
        make(
            format!("a-{seed}-3"),
            "https://example.com/articles/marathon-science",
            "What elite marathoners can teach the rest of us about pacing",
            "Researchers tracked 400 amateur runners to test whether even \
             splits really beat a fast start.",
            "Field Notes",
            "1 d ago",
            Some("https://images.example.com/marathon.jpg"),
        ),
    ]
}
