use crate::{GrammarTemplateRenderer, MentionCluster, TemplateError};

fn cluster() -> MentionCluster {
    MentionCluster::from_forms(["Acme"])
}

#[test]
fn interpolates_party_alternation() {
    let renderer = GrammarTemplateRenderer::new(r#"PARTY: {"{{ party_mentions }}"}"#);
    let rendered = renderer.render(&cluster(), false).unwrap();

    assert_eq!(rendered, r#"PARTY: {"\bAcme\b"}"#);
}

#[test]
fn both_branch_renders_only_in_both_mode() {
    let renderer = GrammarTemplateRenderer::new(
        "A: {<X>}\n{% if both %}\nB: {<Y>}\n{% endif %}\n",
    );

    let single = renderer.render(&cluster(), false).unwrap();
    let both = renderer.render(&cluster(), true).unwrap();

    assert!(!single.contains("B: {<Y>}"));
    assert!(both.contains("B: {<Y>}"));
}

#[test]
fn else_branch_renders_when_condition_is_false() {
    let renderer = GrammarTemplateRenderer::new(
        "{% if both %}JOINT: {<J>}{% else %}SINGLE: {<S>}{% endif %}",
    );

    assert_eq!(renderer.render(&cluster(), false).unwrap(), "SINGLE: {<S>}");
    assert_eq!(renderer.render(&cluster(), true).unwrap(), "JOINT: {<J>}");
}

#[test]
fn negated_conditions_are_supported() {
    let renderer =
        GrammarTemplateRenderer::new("{% if not both %}SINGLE: {<S>}{% endif %}");

    assert_eq!(renderer.render(&cluster(), false).unwrap(), "SINGLE: {<S>}");
    assert_eq!(renderer.render(&cluster(), true).unwrap(), "");
}

#[test]
fn unknown_interpolation_variable_is_named() {
    let renderer = GrammarTemplateRenderer::new("X: {{ parties }}");

    assert_eq!(
        renderer.render(&cluster(), false),
        Err(TemplateError::UnknownVariable {
            name: "parties".to_string()
        })
    );
}

#[test]
fn unknown_variable_in_dead_branch_still_fails() {
    let renderer = GrammarTemplateRenderer::new(
        "{% if both %}{{ grammar_mode }}{% endif %}",
    );

    // both=false, so the branch would never render; the authoring bug is
    // reported anyway.
    assert_eq!(
        renderer.render(&cluster(), false),
        Err(TemplateError::UnknownVariable {
            name: "grammar_mode".to_string()
        })
    );
}

#[test]
fn unknown_condition_variable_is_named() {
    let renderer = GrammarTemplateRenderer::new("{% if them %}X{% endif %}");

    assert_eq!(
        renderer.render(&cluster(), false),
        Err(TemplateError::UnknownVariable {
            name: "them".to_string()
        })
    );
}

#[test]
fn unclosed_interpolation_is_rejected() {
    let renderer = GrammarTemplateRenderer::new("X: {{ party_mentions");

    assert_eq!(
        renderer.render(&cluster(), false),
        Err(TemplateError::UnclosedTag {
            open: "{{".to_string()
        })
    );
}

#[test]
fn missing_endif_is_rejected() {
    let renderer = GrammarTemplateRenderer::new("{% if both %}X");

    assert_eq!(
        renderer.render(&cluster(), false),
        Err(TemplateError::MissingEndIf)
    );
}

#[test]
fn stray_else_is_rejected() {
    let renderer = GrammarTemplateRenderer::new("{% else %}");

    assert_eq!(
        renderer.render(&cluster(), false),
        Err(TemplateError::UnexpectedDirective {
            directive: "else".to_string()
        })
    );
}

#[test]
fn empty_cluster_renders_a_never_matching_pattern() {
    let renderer = GrammarTemplateRenderer::new("{{ party_mentions }}");
    let rendered = renderer.render(&MentionCluster::new(), false).unwrap();

    assert_eq!(rendered, "$^");
}

#[test]
fn single_braces_pass_through() {
    let renderer = GrammarTemplateRenderer::new("RULE: {<A> <B>?}");

    assert_eq!(renderer.render(&cluster(), false).unwrap(), "RULE: {<A> <B>?}");
}
