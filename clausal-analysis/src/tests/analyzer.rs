use clausal::{MentionCluster, TaggedWord};

use crate::{cluster_for, AnalyzerKind, ClauseAnalyzer, BOTH_PARTIES};

fn tagged(pairs: &str) -> Vec<TaggedWord> {
    pairs.split_whitespace()
        .map(|pair| {
            let (word, tag) = pair.rsplit_once('/').expect("word/TAG pair");
            TaggedWord::new(word, tag)
        })
        .collect()
}

fn sample_analyzer() -> ClauseAnalyzer {
    let sentences = vec![
        tagged("Acme/NNP shall/MD deliver/VB goods/NNS ./."),
        tagged("Zenith/NNP shall/MD pay/VB the/DT price/NN ./."),
    ];
    ClauseAnalyzer::responsibility(sentences, vec![], "Acme", "Zenith")
}

#[test]
fn repeated_access_returns_an_identical_mapping() {
    let mut analyzer = sample_analyzer();

    let first = analyzer.results("Acme").unwrap().clone();
    let second = analyzer.results("Acme").unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[test]
fn computing_both_does_not_disturb_other_cached_keys() {
    let mut analyzer = sample_analyzer();

    let before = analyzer.results("Acme").unwrap().clone();
    analyzer.results(BOTH_PARTIES).unwrap();
    let after = analyzer.results("Acme").unwrap().clone();

    assert_eq!(before, after);
}

#[test]
fn each_party_sees_only_its_own_sentences() {
    let mut analyzer = sample_analyzer();

    let them: Vec<usize> = analyzer.results("Acme").unwrap().keys().copied().collect();
    assert_eq!(them, [0]);

    let you: Vec<usize> = analyzer.results("Zenith").unwrap().keys().copied().collect();
    assert_eq!(you, [1]);
}

#[test]
fn unknown_key_falls_back_to_a_singleton_cluster() {
    let mut analyzer = sample_analyzer();

    // "Nobody" appears in no cluster and no sentence.
    assert!(analyzer.results("Nobody").unwrap().is_empty());

    let cluster = analyzer.party_cluster_for("Nobody");
    assert_eq!(cluster.all_forms(), ["Nobody"]);
}

#[test]
fn both_cluster_reuses_existing_clusters() {
    let clusters = vec![
        MentionCluster::from_forms(["Acme Corp.", "Acme"]),
        MentionCluster::from_forms(["Zenith", "the Customer"]),
    ];
    let analyzer =
        ClauseAnalyzer::new(AnalyzerKind::Liability, vec![], clusters, "Acme", "Zenith");

    let union = analyzer.party_cluster_for(BOTH_PARTIES);
    for form in ["Acme Corp.", "Acme", "Zenith", "the Customer"] {
        assert!(union.contains(form), "union is missing {:?}", form);
    }
}

#[test]
fn cluster_for_prefers_the_first_containing_cluster() {
    let clusters = vec![
        MentionCluster::from_forms(["Zenith"]),
        MentionCluster::from_forms(["Acme", "the Company"]),
        MentionCluster::from_forms(["Acme", "the Seller"]),
    ];

    let found = cluster_for(&clusters, "Acme");
    assert!(found.contains("the Company"));
    assert!(!found.contains("the Seller"));
}

#[test]
fn analyzers_report_their_construction_inputs() {
    let analyzer = sample_analyzer();

    assert_eq!(analyzer.kind(), AnalyzerKind::Responsibility);
    assert_eq!(analyzer.them_party(), "Acme");
    assert_eq!(analyzer.you_party(), "Zenith");
}
