use crate::{MentionCluster, PartyPattern};

#[test]
fn single_name_covers_four_case_variants() {
    let pattern = PartyPattern::for_name("West");

    assert!(pattern.is_match("West shall deliver"));
    assert!(pattern.is_match("west shall deliver"));
    assert!(pattern.is_match("WEST shall deliver"));
}

#[test]
fn variant_duplicates_collapse() {
    // "Acme" title-cases to itself, so only three distinct variants remain.
    let pattern = PartyPattern::for_name("Acme");
    insta::assert_debug_snapshot!(pattern.pattern(), @r###""\\bAcme\\b|\\bacme\\b|\\bACME\\b""###);
}

#[test]
fn matches_whole_words_only() {
    let pattern = PartyPattern::for_name("West");

    assert!(!pattern.is_match("Western Union"));
    assert!(!pattern.is_match("Midwest"));
    assert!(pattern.is_match("by West."));
}

#[test]
fn cluster_pattern_covers_every_alias() {
    let cluster = MentionCluster::from_forms(["Acme Corp.", "Acme", "the Company"]);
    let pattern = PartyPattern::for_cluster(&cluster);

    assert!(pattern.is_match("Acme Corp. shall"));
    assert!(pattern.is_match("the Company shall"));
    assert!(pattern.is_match("ACME shall"));
    assert!(!pattern.is_match("Acmeco shall"));
}

#[test]
fn longer_aliases_win_the_alternation() {
    let cluster = MentionCluster::from_forms(["Acme", "Acme Corp."]);
    let pattern = PartyPattern::for_cluster(&cluster);

    let text = pattern.pattern();
    assert!(text.find("Corp").unwrap() < text.rfind("Acme").unwrap());
}

#[test]
fn aliases_ending_in_punctuation_remain_matchable() {
    let cluster = MentionCluster::from_forms(["Acme Corp."]);
    let pattern = PartyPattern::for_cluster(&cluster);

    // No trailing boundary assertion after the dot: the full alias must
    // match both mid-sentence and at end of text.
    let anchored = regex::Regex::new(&format!("(?i)^(?:{})$", pattern.pattern())).unwrap();
    assert!(anchored.is_match("Acme Corp."));
    assert!(pattern.is_match("signed by Acme Corp. today"));
}

#[test]
fn empty_cluster_never_matches_and_never_crashes() {
    let pattern = PartyPattern::for_cluster(&MentionCluster::new());

    assert!(pattern.never_matches());
    assert!(!pattern.is_match("anything at all"));
    assert!(!pattern.is_match(""));
}
