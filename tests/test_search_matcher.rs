//! Integration tests for the cross-entity matcher.
//!
//! These exercise the matcher's observable laws: the empty-query law,
//! AND semantics across terms, monotonicity under dataset growth,
//! per-group score ordering, highlight correctness and determinism.

use decor_search::search::plain_text;
use decor_search::{search, Client, Dataset, Event, Inquiry, PortfolioItem, SearchError, Service};

fn event(id: &str, title: &str, category: &str) -> Event {
    let mut event = Event::new(id, title);
    event.category = category.to_string();
    event
}

fn service(id: &str, name: &str, category: &str) -> Service {
    let mut service = Service::new(id, name);
    service.category = category.to_string();
    service
}

fn sample_dataset() -> Dataset {
    let mut client = Client::new("c1", "Maria Santos");
    client.company = Some("Santos Garden Estates".to_string());

    let mut inquiry = Inquiry::new("i1", "Ana Lopez");
    inquiry.event_type = "Wedding".to_string();
    inquiry.message = "We would love a garden ceremony".to_string();

    let mut portfolio = PortfolioItem::new("p1", "Rose Garden Wedding");
    portfolio.category = "Weddings".to_string();
    portfolio.tags = vec!["garden".to_string(), "roses".to_string()];

    Dataset {
        events: vec![
            event("e1", "Elegant Garden Wedding", "Weddings"),
            event("e2", "Corporate Spring Gala", "Corporate"),
        ],
        services: vec![
            service("s1", "Garden Lighting Package", "Lighting"),
            service("s2", "Balloon Arches", "Decor"),
        ],
        clients: vec![client],
        inquiries: vec![inquiry],
        portfolio: vec![portfolio],
    }
}

#[test]
fn test_empty_query_law() {
    let dataset = sample_dataset();
    for query in ["", "   ", "\t\n"] {
        let results = search(&dataset, query).unwrap();
        assert_eq!(results.total_results, 0, "query {:?}", query);
        assert!(results.is_empty());
    }
}

#[test]
fn test_empty_dataset_is_not_an_error() {
    let results = search(&Dataset::default(), "garden").unwrap();
    assert_eq!(results.total_results, 0);
}

#[test]
fn test_concrete_garden_scenario() {
    // The two-record scenario: one event and one service, both matching.
    let dataset = Dataset {
        events: vec![event("1", "Elegant Garden Wedding", "Weddings")],
        services: vec![service("2", "Garden Lighting Package", "Lighting")],
        ..Default::default()
    };

    let results = search(&dataset, "garden").unwrap();
    assert_eq!(results.total_results, 2);
    assert_eq!(results.events.len(), 1);
    assert_eq!(results.services.len(), 1);

    for hit in results.iter() {
        assert!(
            hit.title
                .iter()
                .any(|span| span.matched && span.text == "Garden"),
            "expected a highlighted \"Garden\" in {:?}",
            hit.title
        );
    }
}

#[test]
fn test_and_semantics() {
    let dataset = sample_dataset();
    let results = search(&dataset, "wedding garden").unwrap();

    // "Garden Lighting Package" contains "garden" but "wedding" nowhere.
    assert!(results.services.is_empty());
    // The event and portfolio item contain both terms.
    assert_eq!(results.events.len(), 1);
    assert_eq!(results.events[0].id, "e1");
    assert_eq!(results.portfolio.len(), 1);
    // The inquiry matches across fields: "wedding" in event_type,
    // "garden" in the message.
    assert_eq!(results.inquiries.len(), 1);
}

#[test]
fn test_monotonicity() {
    let mut dataset = sample_dataset();
    let before = search(&dataset, "garden").unwrap().total_results;

    dataset
        .events
        .push(event("e3", "Secret Garden Party", "Parties"));
    let after = search(&dataset, "garden").unwrap().total_results;

    assert!(after >= before);
    assert_eq!(after, before + 1);
}

#[test]
fn test_score_ordering_within_groups() {
    let mut dataset = sample_dataset();
    dataset.events.push(event("e4", "Garden", "Gardens"));
    dataset.events.push(event("e5", "Party in the Garden", "Parties"));

    let results = search(&dataset, "garden").unwrap();
    for group in [
        &results.events,
        &results.services,
        &results.clients,
        &results.inquiries,
        &results.portfolio,
    ] {
        for pair in group.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "descending order violated: {} < {}",
                pair[0].score,
                pair[1].score
            );
        }
    }
    // The exact-title match ranks first in its group.
    assert_eq!(results.events[0].id, "e4");
}

#[test]
fn test_highlight_correctness() {
    let dataset = Dataset {
        portfolio: vec![{
            let mut item = PortfolioItem::new("p1", "Rose Garden Wedding");
            item.category = "Weddings".to_string();
            item
        }],
        ..Default::default()
    };

    let results = search(&dataset, "rose").unwrap();
    let title = &results.portfolio[0].title;

    let matched: Vec<&str> = title
        .iter()
        .filter(|s| s.matched)
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(matched, vec!["Rose"], "exactly one wrapped occurrence");

    let unmatched: String = title
        .iter()
        .filter(|s| !s.matched)
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(unmatched, " Garden Wedding");

    assert_eq!(plain_text(title), "Rose Garden Wedding");
}

#[test]
fn test_idempotence() {
    let dataset = sample_dataset();
    let first = search(&dataset, "garden wedding").unwrap();
    let second = search(&dataset, "garden wedding").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_hit_maps_to_a_source_record() {
    let dataset = sample_dataset();
    let results = search(&dataset, "garden").unwrap();

    for hit in results.iter() {
        let found = dataset
            .records()
            .any(|r| r.id() == hit.id && r.record_type() == hit.record_type);
        assert!(found, "hit {}/{:?} has no source record", hit.id, hit.record_type);
        assert!(hit.score > 0.0);
    }
}

#[test]
fn test_missing_optional_fields_are_not_errors() {
    // Records with all optional fields absent still match on title.
    let dataset = Dataset {
        clients: vec![Client::new("c9", "Garden Grove Hotels")],
        ..Default::default()
    };
    let results = search(&dataset, "garden").unwrap();
    assert_eq!(results.clients.len(), 1);
    assert!(results.clients[0].description.is_empty());
}

#[test]
fn test_over_long_query_rejected() {
    let dataset = sample_dataset();
    let query = "garden ".repeat(200);
    match search(&dataset, &query) {
        Err(SearchError::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_metadata_carries_status_and_category() {
    let dataset = sample_dataset();
    let results = search(&dataset, "elegant").unwrap();
    let meta = &results.events[0].metadata;
    assert_eq!(meta["category"], "Weddings");
    assert_eq!(meta["status"], "planned");
}
