use crate::validation::AstNodeKind;
use crate::validation::ValidationRule;
use crate::validation::tests::test_utils::expect_messages;
use crate::validation::tests::test_utils::expect_passes;
use crate::validation::tests::test_utils::run_rule;

const RULE: ValidationRule = ValidationRule::NoFragmentCycles;

#[test]
fn single_reference() {
    expect_passes(RULE, "
        fragment fragA on Dog { ...fragB }
        fragment fragB on Dog { name }
    ");
}

#[test]
fn spreading_twice_is_not_a_cycle() {
    expect_passes(RULE, "
        fragment fragA on Dog { ...fragB, ...fragB }
        fragment fragB on Dog { name }
    ");
}

#[test]
fn diamond_is_not_a_cycle() {
    expect_passes(RULE, "
        fragment fragA on Dog { ...fragB, ...fragC }
        fragment fragB on Dog { ...fragD }
        fragment fragC on Dog { ...fragD }
        fragment fragD on Dog { name }
    ");
}

#[test]
fn unknown_fragments_are_ignored() {
    expect_passes(RULE, "fragment fragA on Dog { ...nope }");
}

#[test]
fn spreading_itself_directly() {
    let diagnostics = run_rule(RULE, "fragment fragA on Dog { ...fragA }");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Cannot spread fragment \"fragA\" within itself.");
    assert_eq!(diagnostics[0].nodes.len(), 1);
    assert_eq!(diagnostics[0].nodes[0].kind, AstNodeKind::FragmentSpread);
}

#[test]
fn spreading_itself_within_nested_selections() {
    expect_messages(RULE, "
        fragment fragA on Pet { ... on Dog { ...fragA } }
        fragment fragB on Human { relatives { ...fragB } }
    ", &[
        "Cannot spread fragment \"fragA\" within itself.",
        "Cannot spread fragment \"fragB\" within itself.",
    ]);
}

#[test]
fn spreading_back_through_one_fragment() {
    let diagnostics = run_rule(RULE, "
        fragment fragA on Dog { ...fragB }
        fragment fragB on Dog { ...fragA }
    ");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Cannot spread fragment \"fragA\" within itself via \"fragB\".",
    );
    // The spread of fragB inside fragA, then the spread of fragA closing
    // the loop.
    assert_eq!(diagnostics[0].nodes.len(), 2);
}

#[test]
fn spreading_itself_deeply() {
    expect_messages(RULE, "
        fragment fragA on Dog { ...fragB }
        fragment fragB on Dog { ...fragC }
        fragment fragC on Dog { ...fragO }
        fragment fragX on Dog { ...fragY }
        fragment fragY on Dog { ...fragZ }
        fragment fragZ on Dog { ...fragO }
        fragment fragO on Dog { ...fragP }
        fragment fragP on Dog { ...fragA, ...fragX }
    ", &[
        "Cannot spread fragment \"fragA\" within itself via \"fragB\", \"fragC\", \"fragO\", \"fragP\".",
        "Cannot spread fragment \"fragO\" within itself via \"fragP\", \"fragX\", \"fragY\", \"fragZ\".",
    ]);
}

#[test]
fn spreading_itself_along_two_paths() {
    expect_messages(RULE, "
        fragment fragA on Dog { ...fragB, ...fragC }
        fragment fragB on Dog { ...fragA }
        fragment fragC on Dog { ...fragA }
    ", &[
        "Cannot spread fragment \"fragA\" within itself via \"fragB\".",
        "Cannot spread fragment \"fragA\" within itself via \"fragC\".",
    ]);
}

#[test]
fn cycle_found_from_a_later_fragment() {
    expect_messages(RULE, "
        fragment fragA on Dog { ...fragC }
        fragment fragB on Dog { ...fragC }
        fragment fragC on Dog { ...fragA, ...fragB }
    ", &[
        "Cannot spread fragment \"fragA\" within itself via \"fragC\".",
        "Cannot spread fragment \"fragC\" within itself via \"fragB\".",
    ]);
}
