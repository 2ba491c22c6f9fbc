use crate::{Mention, MentionCluster};

#[test]
fn add_form_keeps_insertion_order() {
    let mut cluster = MentionCluster::new();
    cluster.add_form("Acme Corp.");
    cluster.add_form("Acme");
    cluster.add_form("the Company");

    assert_eq!(cluster.all_forms(), ["Acme Corp.", "Acme", "the Company"]);
}

#[test]
fn add_form_is_noop_for_duplicates() {
    let mut cluster = MentionCluster::singleton("Acme");
    cluster.add_form("Acme");

    assert_eq!(cluster.len(), 1);
}

#[test]
fn contains_is_exact_match() {
    let cluster = MentionCluster::from_forms(["Acme Corp.", "Acme"]);

    assert!(cluster.contains("Acme"));
    assert!(!cluster.contains("acme"));
    assert!(!cluster.contains("Acme Corp"));
}

#[test]
fn merge_is_a_superset_of_both_sides() {
    let mut a = MentionCluster::from_forms(["Acme", "the Company"]);
    let b = MentionCluster::from_forms(["Acme Corp.", "Acme"]);

    a.merge(&b);

    for form in ["Acme", "the Company", "Acme Corp."] {
        assert!(a.contains(form), "merged cluster is missing {:?}", form);
    }
}

#[test]
fn merge_is_idempotent() {
    let mut a = MentionCluster::from_forms(["Acme", "the Company"]);
    let b = MentionCluster::from_forms(["Acme Corp."]);

    a.merge(&b);
    let once = a.clone();
    a.merge(&b);

    assert_eq!(a, once);
}

#[test]
fn merge_with_empty_is_a_noop() {
    let mut a = MentionCluster::from_forms(["Acme"]);
    let before = a.clone();

    a.merge(&MentionCluster::new());

    assert_eq!(a, before);
}

#[test]
fn merge_returns_self_for_chaining() {
    let mut a = MentionCluster::from_forms(["Acme"]);
    let b = MentionCluster::from_forms(["the Company"]);
    let c = MentionCluster::from_forms(["Licensor"]);

    a.merge(&b).merge(&c);

    assert_eq!(a.len(), 3);
}

#[test]
fn mention_holds_its_surface_form() {
    let mention = Mention::new("the Company");
    assert_eq!(mention.form, "the Company");
}
