use crate::{normalize_confidence, PartyPair};

#[test]
fn confidence_endpoints() {
    assert_eq!(normalize_confidence(0.0), 0);
    assert_eq!(normalize_confidence(14.0), 100);
}

#[test]
fn confidence_is_quadratic_in_the_raw_score() {
    // (7/14)^2 * 100 = 25
    assert_eq!(normalize_confidence(7.0), 25);
    // (10/14)^2 * 100 = 51.02...
    assert_eq!(normalize_confidence(10.0), 51);
}

#[test]
fn confidence_caps_at_one_hundred() {
    assert_eq!(normalize_confidence(20.0), 100);
}

#[test]
fn party_pair_normalizes_both_scores() {
    let pair = PartyPair {
        them: "West".to_string(),
        you: "Subscriber".to_string(),
        confidence: (14.0, 7.0),
    };

    assert_eq!(pair.normalized_confidence(), (100, 25));
}
