use crate::ast;
use crate::types::GraphQLType;
use crate::validation::AstNodeKind;
use crate::validation::AstWalker;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::tests::test_utils::parse;
use crate::validation::tests::test_utils::test_schema;
use std::cell::RefCell;
use std::rc::Rc;

type Events = Rc<RefCell<Vec<String>>>;

fn type_name(graphql_type: Option<&GraphQLType>) -> &str {
    graphql_type.map_or("<none>", |t| t.name())
}

/// Records the type scope the walker reports at each field and directive.
struct ScopeRecorder {
    events: Events,
}
impl<'a> Rule<'a> for ScopeRecorder {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a ast::operation::Field,
    ) {
        self.events.borrow_mut().push(format!(
            "{}: {} -> {}",
            field.name,
            type_name(ctx.parent_type()),
            type_name(ctx.current_type()),
        ));
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a ast::operation::Directive,
    ) {
        self.events.borrow_mut().push(format!(
            "@{} at {}",
            directive.name,
            ctx.directive_location().as_str(),
        ));
    }

    fn exit_document(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _document: &'a ast::operation::Document,
    ) {
        self.events.borrow_mut().push(format!("exit document: {:?}", ctx.ancestors()));
    }
}

fn walk(query: &str) -> Vec<String> {
    let document = parse(query);
    let events = Events::default();
    let mut ctx = ValidationContext::new(test_schema(), &document);
    let mut rules: Vec<Box<dyn Rule<'_> + '_>> = vec![
        Box::new(ScopeRecorder { events: Rc::clone(&events) }),
    ];

    AstWalker::new(rules.as_mut_slice()).walk(&mut ctx, &document);

    assert!(ctx.ancestors().is_empty());
    assert!(ctx.current_type().is_none());
    assert!(ctx.parent_type().is_none());
    assert!(ctx.current_field().is_none());
    let recorded = events.borrow().clone();
    recorded
}

#[test]
fn tracks_parent_and_field_types() {
    assert_eq!(walk("{ dog { name ... on Pet { name } } catOrDog { ... on Cat { meows } } }"), vec![
        "dog: QueryRoot -> Dog",
        "name: Dog -> String",
        "name: Pet -> String",
        "catOrDog: QueryRoot -> CatOrDog",
        "meows: Cat -> Boolean",
        "exit document: [Document]",
    ]);
}

#[test]
fn list_types_are_unwrapped() {
    assert_eq!(walk("{ human { pets { name } } }"), vec![
        "human: QueryRoot -> Human",
        "pets: Human -> Pet",
        "name: Pet -> String",
        "exit document: [Document]",
    ]);
}

#[test]
fn fragment_definitions_scope_to_their_type_condition() {
    assert_eq!(walk("fragment F on Cat { furColor __typename }"), vec![
        "furColor: Cat -> FurColor",
        "__typename: Cat -> String",
        "exit document: [Document]",
    ]);
}

#[test]
fn unknown_fields_clear_the_scope_below_them() {
    assert_eq!(walk("{ dog { mystery { name } } }"), vec![
        "dog: QueryRoot -> Dog",
        "mystery: Dog -> <none>",
        "name: <none> -> <none>",
        "exit document: [Document]",
    ]);
}

#[test]
fn leaf_types_are_not_parents() {
    assert_eq!(walk("{ dog { name { length } } }"), vec![
        "dog: QueryRoot -> Dog",
        "name: Dog -> String",
        "length: <none> -> <none>",
        "exit document: [Document]",
    ]);
}

#[test]
fn subscriptions_use_the_subscription_root() {
    assert_eq!(walk("subscription { newMessage }"), vec![
        "newMessage: SubscriptionRoot -> String",
        "exit document: [Document]",
    ]);
}

#[test]
fn undefined_root_type_leaves_no_scope() {
    assert_eq!(walk("mutation { anything }"), vec![
        "anything: <none> -> <none>",
        "exit document: [Document]",
    ]);
}

#[test]
fn directive_locations_follow_their_owner() {
    let events = walk("
        query Q @onQuery {
          dog @onField {
            ...F @onFragmentSpread
            ... @onInlineFragment { name }
          }
        }
        fragment F on Dog @onFragmentDefinition { name }
    ");
    let directive_events: Vec<&str> = events.iter()
        .map(String::as_str)
        .filter(|event| event.starts_with('@'))
        .collect();

    assert_eq!(directive_events, vec![
        "@onQuery at QUERY",
        "@onField at FIELD",
        "@onFragmentSpread at FRAGMENT_SPREAD",
        "@onInlineFragment at INLINE_FRAGMENT",
        "@onFragmentDefinition at FRAGMENT_DEFINITION",
    ]);
}

#[test]
fn fragment_spreads_are_not_followed() {
    let events = walk("
        { dog { ...F } }
        fragment F on Dog { barks }
    ");

    assert_eq!(events.iter().filter(|event| event.starts_with("barks")).count(), 1);
}

#[test]
#[should_panic(expected = "No directive location")]
fn directive_location_without_an_owning_node() {
    let document = parse("{ dog { name } }");
    let mut ctx = ValidationContext::new(test_schema(), &document);
    ctx.enter_node(AstNodeKind::SelectionSet);
    ctx.enter_node(AstNodeKind::Directive);
    ctx.directive_location();
}

#[test]
fn operation_kinds_map_to_directive_locations() {
    use crate::types::DirectiveLocation;
    use crate::validation::OperationKind;

    assert_eq!(
        AstNodeKind::Operation(OperationKind::Mutation).directive_location(),
        Some(DirectiveLocation::Mutation),
    );
    assert_eq!(
        AstNodeKind::VariableDefinition.directive_location(),
        Some(DirectiveLocation::VariableDefinition),
    );
    assert_eq!(AstNodeKind::SelectionSet.directive_location(), None);
    assert_eq!(AstNodeKind::Argument.directive_location(), None);
}
