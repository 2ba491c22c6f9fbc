//! Built-in grammar templates and result-label sets.
//!
//! Templates are fixed text constants compiled into each analyzer
//! (configuration, not user input). Each references exactly the two
//! template variables `party_mentions` and `both`. Rule order inside a
//! template matters: negated/conditional rules come first so they consume
//! their spans before the plainer rules get a chance.
//!
//! The `both` variant deliberately contains only joint rules - rules whose
//! match requires the two parties conjoined - so single-party sentences
//! never show up under the `"both"` key.

/// Grammar template for the responsibility analyzer.
pub const RESPONSIBILITY_TEMPLATE: &str = r#"
PARTY: {"{{ party_mentions }}"}
{% if both %}
BOTH_PARTIES: {<PARTY> ","? "and|or" <PARTY>}
JOINT_RESPONSIBILITY: {<BOTH_PARTIES> <MD> <RB>? <VB.*>+}
JOINT_RESPONSIBILITY: {<BOTH_PARTIES> "agree|agrees" <TO>? <VB.*>*}
{% else %}
CONDITIONAL_RESPONSIBILITY: {"if|unless|provided|where" ","? <DT>? <PARTY> <MD> <RB>? <VB.*>+}
ABSOLUTE_RESPONSIBILITY: {<PARTY> <MD> <RB>? <VB.*>+}
ABSOLUTE_RESPONSIBILITY: {<PARTY> "agrees|agree|undertakes|undertake|warrants|warrant" <TO>? <VB.*>*}
{% endif %}
"#;

/// Labels the responsibility analyzer reports as findings.
pub const RESPONSIBILITY_LABELS: &[&str] = &[
    "ABSOLUTE_RESPONSIBILITY",
    "CONDITIONAL_RESPONSIBILITY",
    "JOINT_RESPONSIBILITY",
];

/// Grammar template for the liability analyzer.
pub const LIABILITY_TEMPLATE: &str = r#"
PARTY: {"{{ party_mentions }}"}
{% if both %}
BOTH_PARTIES: {<PARTY> ","? "and|or" <PARTY>}
JOINT_LIABILITY: {<BOTH_PARTIES> <MD>? <RB>* <VB.*>* <RB>* "liable|responsible"}
{% else %}
NO_LIABILITY: {"in" "no" "event" <MD> <DT>? <PARTY> <RB>* <VB.*>* "liable|responsible"}
NO_LIABILITY: {<PARTY> <MD> <RB>? "not|never" <RB>? <VB.*>* "liable|responsible"}
LIABILITY: {<PARTY> <MD> <RB>* <VB.*>* "liable|responsible"}
LIABILITY: {<PARTY> "is|are|was|were|remains|remain" <RB>* "liable|responsible"}
{% endif %}
"#;

/// Labels the liability analyzer reports as findings.
pub const LIABILITY_LABELS: &[&str] = &["NO_LIABILITY", "LIABILITY", "JOINT_LIABILITY"];

/// Grammar template for the termination analyzer.
pub const TERMINATION_TEMPLATE: &str = r#"
PARTY: {"{{ party_mentions }}"}
{% if both %}
BOTH_PARTIES: {<PARTY> ","? "and|or" <PARTY>}
JOINT_TERMINATION: {<BOTH_PARTIES> <MD> <RB>? "terminate|cancel|rescind|suspend"}
{% else %}
NO_TERMINATION: {<PARTY> <MD> <RB>? "not|never" <RB>? "terminate|cancel|rescind|suspend"}
TERMINATION: {<PARTY> <MD> <RB>? "terminate|cancel|rescind|suspend"}
TERMINATION: {<PARTY> "reserves|reserve|retains|retain" <DT>? "right" <TO> "terminate|cancel|rescind|suspend"}
{% endif %}
"#;

/// Labels the termination analyzer reports as findings.
pub const TERMINATION_LABELS: &[&str] = &["NO_TERMINATION", "TERMINATION", "JOINT_TERMINATION"];
