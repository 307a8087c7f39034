use crate::loc;
use crate::validation::AstNodeKind;
use crate::validation::ValidationRule;
use crate::validation::tests::test_utils::expect_messages;
use crate::validation::tests::test_utils::expect_passes;
use crate::validation::tests::test_utils::run_rule;

mod unique_operation_names {
    use super::*;

    const RULE: ValidationRule = ValidationRule::UniqueOperationNames;

    #[test]
    fn distinct_names() {
        expect_passes(RULE, "
            query Foo { dog { name } }
            query Bar { dog { name } }
            { cat { name } }
        ");
    }

    #[test]
    fn same_name_twice() {
        let diagnostics = run_rule(RULE, "query Foo { dog { name } }\nquery Foo { dog { nickname } }");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "There can be only one operation named \"Foo\".");
        assert_eq!(
            diagnostics[0].locations().cloned().collect::<Vec<_>>(),
            vec![
                loc::FilePosition { col: 1, file: None, line: 1 },
                loc::FilePosition { col: 1, file: None, line: 2 },
            ],
        );
    }

    #[test]
    fn same_name_across_operation_kinds() {
        expect_messages(RULE, "
            query Foo { dog { name } }
            subscription Foo { newMessage }
        ", &["There can be only one operation named \"Foo\"."]);
    }

    #[test]
    fn fragment_may_share_an_operation_name() {
        expect_passes(RULE, "
            query Foo { dog { ...Foo } }
            fragment Foo on Dog { name }
        ");
    }
}

mod unique_fragment_names {
    use super::*;

    const RULE: ValidationRule = ValidationRule::UniqueFragmentNames;

    #[test]
    fn distinct_names() {
        expect_passes(RULE, "
            { dog { ...fragA ...fragB } }
            fragment fragA on Dog { name }
            fragment fragB on Dog { nickname }
        ");
    }

    #[test]
    fn same_name_twice() {
        let diagnostics = run_rule(RULE, "
            { dog { ...fragA } }
            fragment fragA on Dog { name }
            fragment fragA on Dog { nickname }
        ");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "There can be only one fragment named \"fragA\".");
        assert_eq!(diagnostics[0].nodes.len(), 2);
        assert!(diagnostics[0].nodes.iter().all(|n| n.kind == AstNodeKind::FragmentDefinition));
    }
}

mod unique_variable_names {
    use super::*;

    const RULE: ValidationRule = ValidationRule::UniqueVariableNames;

    #[test]
    fn distinct_names() {
        expect_passes(RULE, "
            query A($x: Int, $y: String) { __typename }
            query B($x: String, $y: Int) { __typename }
        ");
    }

    #[test]
    fn each_repeat_is_reported() {
        expect_messages(RULE, "query A($x: Int, $x: Int, $x: String) { __typename }", &[
            "There can be only one variable named \"x\".",
            "There can be only one variable named \"x\".",
        ]);
    }
}

mod unique_argument_names {
    use super::*;

    const RULE: ValidationRule = ValidationRule::UniqueArgumentNames;

    #[test]
    fn distinct_names() {
        expect_passes(RULE, "{ dog { isAtLocation(x: 1, y: 2) } }");
    }

    #[test]
    fn same_name_on_different_fields() {
        expect_passes(RULE, "{ dog { a: isAtLocation(x: 1) b: isAtLocation(x: 2) } }");
    }

    #[test]
    fn repeated_field_argument() {
        expect_messages(RULE, "{ dog { isAtLocation(x: 1, x: 2) } }", &[
            "There can be only one argument named \"x\".",
        ]);
    }

    #[test]
    fn repeated_directive_argument() {
        expect_messages(RULE, "{ dog @include(if: true, if: false) { name } }", &[
            "There can be only one argument named \"if\".",
        ]);
    }

    #[test]
    fn repeated_argument_reports_the_owning_node_once() {
        let diagnostics = run_rule(RULE, "{ dog { isAtLocation(x: 1, x: 2) } }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].nodes.len(), 1);
        assert_eq!(diagnostics[0].nodes[0].kind, AstNodeKind::Argument);
        assert_eq!(diagnostics[0].nodes[0].position.line, 1);
    }
}

mod unique_directives_per_location {
    use super::*;

    const RULE: ValidationRule = ValidationRule::UniqueDirectivesPerLocation;

    #[test]
    fn distinct_directives() {
        expect_passes(RULE, "{ dog { name @include(if: true) @onField } }");
    }

    #[test]
    fn same_directive_in_different_locations() {
        expect_passes(RULE, "
            { dog @onField { name @onField } }
            fragment F on Dog @onFragmentDefinition { name @onField }
        ");
    }

    #[test]
    fn repeated_directive() {
        expect_messages(RULE, "{ dog { name @onField @onField } }", &[
            "The directive \"onField\" can only be used once at this location.",
        ]);
    }

    #[test]
    fn repeatable_directive_may_repeat() {
        expect_passes(RULE, "{ dog { name @repeatable @repeatable @repeatable } }");
    }
}

mod unique_input_field_names {
    use super::*;

    const RULE: ValidationRule = ValidationRule::UniqueInputFieldNames;

    #[test]
    fn distinct_fields() {
        expect_passes(RULE, "
            { complicatedArgs { complexArgField(complexArg: { requiredField: true, intField: 1 }) } }
        ");
    }

    #[test]
    fn same_name_at_different_depths() {
        expect_passes(RULE, "{ dog { name(arg: { f: { f: true } }) } }");
    }

    #[test]
    fn same_name_in_sibling_objects() {
        expect_passes(RULE, "{ dog { name(arg: [{ f: 1 }, { f: 2 }]) } }");
    }

    #[test]
    fn repeated_field() {
        expect_messages(RULE, "
            { complicatedArgs { complexArgField(complexArg: { requiredField: true, intField: 1, intField: 2 }) } }
        ", &[
            "There can be only one input field named \"intField\".",
        ]);
    }

    #[test]
    fn field_repeated_many_times() {
        expect_messages(RULE, "{ dog { name(arg: { f: true, f: false, f: true }) } }", &[
            "There can be only one input field named \"f\".",
            "There can be only one input field named \"f\".",
        ]);
    }

    #[test]
    fn repeated_field_in_nested_object() {
        expect_messages(RULE, "{ dog { name(arg: { f: { g: 1, g: 2 }, g: 3 }) } }", &[
            "There can be only one input field named \"g\".",
        ]);
    }

    #[test]
    fn repeated_field_in_variable_default() {
        expect_messages(RULE, "
            query Q($arg: ComplexInput = { requiredField: true, requiredField: false }) {
              complicatedArgs { complexArgField(complexArg: $arg) }
            }
        ", &[
            "There can be only one input field named \"requiredField\".",
        ]);
    }

    #[test]
    fn repeated_field_points_at_both_occurrences() {
        let diagnostics = run_rule(RULE, "{ dog { name(arg: { f: 1, f: 2 }) } }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].nodes.iter().map(|node| node.kind).collect::<Vec<_>>(),
            vec![AstNodeKind::Value, AstNodeKind::Value],
        );
        assert_eq!(
            diagnostics[0].nodes.iter().map(|node| node.position.clone()).collect::<Vec<_>>(),
            vec![
                loc::FilePosition { col: 21, file: None, line: 1 },
                loc::FilePosition { col: 27, file: None, line: 1 },
            ],
        );
    }
}
