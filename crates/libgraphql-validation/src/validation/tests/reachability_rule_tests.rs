use crate::validation::AstNodeKind;
use crate::validation::OperationKind;
use crate::validation::ValidationRule;
use crate::validation::tests::test_utils::expect_messages;
use crate::validation::tests::test_utils::expect_passes;
use crate::validation::tests::test_utils::run_rule;

mod no_undefined_variables {
    use super::*;

    const RULE: ValidationRule = ValidationRule::NoUndefinedVariables;

    #[test]
    fn all_variables_defined() {
        expect_passes(RULE, "
            query Foo($a: String, $b: String, $c: String) {
              field(a: $a, b: $b, c: $c)
            }
        ");
    }

    #[test]
    fn variables_in_directives_and_nested_values() {
        expect_passes(RULE, "
            query Foo($cond: Boolean!, $x: Int) {
              dog @include(if: $cond) { isAtLocation(x: $x) }
              complicatedArgs { stringListArgField(stringListArg: [$cond]) }
            }
        ");
    }

    #[test]
    fn variables_used_through_fragments() {
        expect_passes(RULE, "
            query Foo($a: Boolean) { dog { ...FragA } }
            fragment FragA on Dog { ...FragB }
            fragment FragB on Dog { name(surname: $a) }
        ");
    }

    #[test]
    fn undefined_in_anonymous_operation() {
        let diagnostics = run_rule(RULE, "{ field(arg: $y) }");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Variable \"$y\" is not defined.");
        assert_eq!(
            diagnostics[0].nodes.iter().map(|n| n.kind).collect::<Vec<_>>(),
            vec![AstNodeKind::Variable, AstNodeKind::Operation(OperationKind::Query)],
        );
    }

    #[test]
    fn undefined_in_named_operation() {
        expect_messages(RULE, "query Foo($a: String) { field(a: $a, b: $b) }", &[
            "Variable \"$b\" is not defined by operation \"Foo\".",
        ]);
    }

    #[test]
    fn shared_fragment_only_fails_the_operation_missing_the_variable() {
        expect_messages(RULE, "
            query Foo($a: Boolean) { dog { ...FragA } }
            query Bar { dog { ...FragA } }
            fragment FragA on Dog { name(surname: $a) }
        ", &["Variable \"$a\" is not defined by operation \"Bar\"."]);
    }

    #[test]
    fn unspread_fragments_are_not_checked() {
        expect_passes(RULE, "
            query Foo { dog { name } }
            fragment Orphan on Dog { name(surname: $nowhere) }
        ");
    }
}

mod no_unused_variables {
    use super::*;

    const RULE: ValidationRule = ValidationRule::NoUnusedVariables;

    #[test]
    fn all_variables_used() {
        expect_passes(RULE, "
            query Foo($a: Boolean, $b: Int, $c: Boolean!) {
              dog @skip(if: $c) { name(surname: $a) isAtLocation(x: $b) }
            }
        ");
    }

    #[test]
    fn variables_used_by_fragments() {
        expect_passes(RULE, "
            query Foo($a: Boolean) { dog { ...FragA } }
            fragment FragA on Dog { ... on Pet { name(surname: $a) } }
        ");
    }

    #[test]
    fn unused_in_named_operation() {
        let diagnostics = run_rule(RULE, "query Foo($a: Boolean, $x: Int) { dog { name(surname: $a) } }");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Variable \"$x\" is never used in operation \"Foo\".");
        assert_eq!(diagnostics[0].nodes[0].kind, AstNodeKind::VariableDefinition);
    }

    #[test]
    fn unused_in_anonymous_operation() {
        expect_messages(RULE, "query ($a: Boolean) { dog { name } }", &[
            "Variable \"$a\" is never used.",
        ]);
    }

    #[test]
    fn each_operation_is_checked_separately() {
        expect_messages(RULE, "
            query Foo($a: Boolean) { dog { ...FragA } }
            query Bar($a: Boolean) { dog { name } }
            fragment FragA on Dog { name(surname: $a) }
        ", &["Variable \"$a\" is never used in operation \"Bar\"."]);
    }
}

mod no_unused_fragments {
    use super::*;

    const RULE: ValidationRule = ValidationRule::NoUnusedFragments;

    #[test]
    fn all_fragments_used() {
        expect_passes(RULE, "
            { human(id: 4) { ...HumanFields1 ... on Human { ...HumanFields2 } } }
            fragment HumanFields1 on Human { name ...HumanFields3 }
            fragment HumanFields2 on Human { name }
            fragment HumanFields3 on Human { name }
        ");
    }

    #[test]
    fn unused_fragments() {
        let diagnostics = run_rule(RULE, "
            query Foo { human(id: 4) { ...HumanFields1 } }
            fragment HumanFields1 on Human { name }
            fragment HumanFields2 on Human { name }
            fragment Unused on Human { name }
        ");

        assert_eq!(
            diagnostics.iter().map(|d| d.message.as_str()).collect::<Vec<_>>(),
            vec![
                "Fragment \"HumanFields2\" is never used.",
                "Fragment \"Unused\" is never used.",
            ],
        );
        assert!(diagnostics.iter().all(|d| d.nodes[0].kind == AstNodeKind::FragmentDefinition));
    }

    #[test]
    fn spreads_inside_unused_fragments_still_count() {
        expect_messages(RULE, "
            { dog { name } }
            fragment Unused1 on Dog { ...Unused2 }
            fragment Unused2 on Dog { name }
        ", &["Fragment \"Unused1\" is never used."]);
    }
}
