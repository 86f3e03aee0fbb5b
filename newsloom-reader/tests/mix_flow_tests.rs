// The dashboard-to-feed-screen flow: build a weighted mix, save it as a
// feed, and verify the feed screen turns it into the right fetch plan and
// caches the results.

use newsloom_core::constants::mix::WEIGHT_STEP;
use newsloom_model::{Article, CategoryId::*, Feed};
use newsloom_reader::{Dashboard, FeedScreen};

fn article(id: &str) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {id}"),
        description: None,
        source_name: Some("Wire".to_string()),
        published_at: Some("2h ago".to_string()),
        url: format!("https://example.com/{id}"),
        image_url: None,
    }
}

#[test]
fn built_mix_flows_into_a_proportional_fetch_plan() {
    let mut dash = Dashboard::new(Vec::new());
    dash.toggle_category(Economy);
    dash.toggle_category(Politics);
    dash.toggle_category(Science);

    // Lean the mix toward economy: 34/33/33 -> 44/28/28.
    dash.adjust(Economy, WEIGHT_STEP);
    dash.adjust(Economy, WEIGHT_STEP);
    let weights = dash.mix_weights().clone();
    assert_eq!(weights.values().sum::<i64>(), 100);

    dash.save_draft("Econ first", 1_700_000_000_000).unwrap();
    let feeds: Vec<Feed> = dash.feeds().to_vec();

    let mut screen = FeedScreen::new(feeds, Vec::new());
    let plan = screen.initial_fetch_plan().unwrap();
    assert_eq!(plan.size, 50);

    // Quotas follow the weights and every category is represented.
    let economy = *plan.mix.get(&Economy).unwrap();
    let politics = *plan.mix.get(&Politics).unwrap();
    let science = *plan.mix.get(&Science).unwrap();
    assert!(economy > politics);
    assert!(politics >= 1 && science >= 1);

    // Completing the load fills the stream; replanning is unnecessary.
    screen.articles_loaded(
        &plan.feed_id,
        vec![article("a1"), article("a2")],
    );
    assert_eq!(screen.active_articles().len(), 2);
    assert!(screen.initial_fetch_plan().is_none());
}

#[test]
fn unweighted_legacy_feeds_fall_back_to_an_even_split() {
    // A feed decoded from old persisted data may carry a selection but no
    // weight map.
    let raw = serde_json::json!({
        "id": "legacy-1",
        "name": "Legacy",
        "selected": ["technology", "science", "health"],
    });
    let feed = Feed::decode(&raw).unwrap();

    let screen = FeedScreen::new(vec![feed], Vec::new());
    let plan = screen.initial_fetch_plan().unwrap();

    assert_eq!(plan.mix.values().sum::<u32>(), 50);
    assert_eq!(*plan.mix.get(&Technology).unwrap(), 17);
    assert_eq!(*plan.mix.get(&Science).unwrap(), 17);
    assert_eq!(*plan.mix.get(&Health).unwrap(), 16);
}

#[test]
fn edited_weights_change_the_next_plan() {
    let mut dash = Dashboard::new(Vec::new());
    dash.toggle_category(Markets);
    dash.toggle_category(Health);
    dash.save_draft("Balanced", 0).unwrap();
    let id = dash.feeds()[0].id.clone();

    dash.open_for_edit(&id);
    dash.adjust(Markets, 4 * WEIGHT_STEP);
    dash.save_changes(1_000).unwrap();

    let screen = FeedScreen::new(dash.feeds().to_vec(), Vec::new());
    let plan = screen.initial_fetch_plan().unwrap();
    let markets = *plan.mix.get(&Markets).unwrap();
    let health = *plan.mix.get(&Health).unwrap();
    assert_eq!(markets + health, 50);
    assert_eq!(markets, 35);
    assert_eq!(health, 15);
}
