use crate::ast;
use crate::types::Parameter;
use crate::validation::ArgumentNode;
use crate::validation::AstNodeKind;
use crate::validation::OperationKind;
use crate::validation::OperationNode;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use indexmap::IndexMap;

macro_rules! dispatch {
    ($self:ident, $ctx:ident, $hook:ident $(, $arg:expr)*) => {
        for rule in $self.rules.iter_mut() {
            rule.$hook($ctx, $($arg),*);
        }
    };
}

/// Walks an executable document once, keeping the [`ValidationContext`]'s
/// type scope in step with the traversal and invoking the matching hook on
/// every rule (in rule order) at each node.
///
/// Fields, arguments and directives are visited in source order. Fragment
/// spreads are not followed; each fragment definition is walked once, in
/// its own position within the document.
pub struct AstWalker<'r, 'a> {
    rules: &'r mut [Box<dyn Rule<'a> + 'a>],
}
impl<'r, 'a> AstWalker<'r, 'a> {
    pub fn new(rules: &'r mut [Box<dyn Rule<'a> + 'a>]) -> Self {
        Self { rules }
    }

    pub fn walk(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        document: &'a ast::operation::Document,
    ) {
        use ast::operation::Definition;

        ctx.enter_node(AstNodeKind::Document);
        dispatch!(self, ctx, enter_document, document);

        let mut operation_index = 0;
        for def in &document.definitions {
            match def {
                Definition::Fragment(fragment)
                    => self.walk_fragment_definition(ctx, fragment),

                Definition::Operation(op) => {
                    let operation = OperationNode::from_ast(operation_index, op);
                    operation_index += 1;
                    self.walk_operation(ctx, &operation);
                },
            }
        }

        dispatch!(self, ctx, exit_document, document);
        ctx.exit_node();
    }

    fn walk_arguments(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        arguments: &'a [(String, ast::operation::Value)],
        position: graphql_parser::Pos,
        parameters: Option<&'a IndexMap<String, Parameter>>,
    ) {
        dispatch!(self, ctx, enter_arguments, arguments, position);
        for (name, value) in arguments {
            let argument = ArgumentNode {
                name: name.as_str(),
                position,
                value,
            };
            ctx.enter_node(AstNodeKind::Argument);
            ctx.set_argument(parameters.and_then(|params| params.get(name.as_str())));
            dispatch!(self, ctx, enter_argument, argument);
            self.walk_value(ctx, value, position);
            dispatch!(self, ctx, exit_argument, argument);
            ctx.set_argument(None);
            ctx.exit_node();
        }
    }

    fn walk_directives(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directives: &'a [ast::operation::Directive],
    ) {
        dispatch!(self, ctx, enter_directives, directives);
        for directive in directives {
            let directive_def = ctx.schema().directive_by_name(&directive.name);
            ctx.enter_node(AstNodeKind::Directive);
            ctx.set_directive(directive_def);
            dispatch!(self, ctx, enter_directive, directive);
            self.walk_arguments(
                ctx,
                &directive.arguments,
                directive.position,
                directive_def.map(|def| def.parameters()),
            );
            dispatch!(self, ctx, exit_directive, directive);
            ctx.set_directive(None);
            ctx.exit_node();
        }
    }

    fn walk_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a ast::operation::Field,
    ) {
        let field_def = ctx.field_definition(ctx.parent_type(), &field.name);
        let field_type = field_def.and_then(|def| {
            ctx.schema().type_by_name(def.type_annotation().innermost_type_name())
        });

        ctx.enter_node(AstNodeKind::Field);
        ctx.push_field(field_def);
        ctx.push_type(field_type);
        dispatch!(self, ctx, enter_field, field);

        self.walk_arguments(
            ctx,
            &field.arguments,
            field.position,
            field_def.map(|def| def.parameters()),
        );
        self.walk_directives(ctx, &field.directives);
        if !field.selection_set.items.is_empty() {
            self.walk_selection_set(ctx, &field.selection_set);
        }

        dispatch!(self, ctx, exit_field, field);
        ctx.pop_type();
        ctx.pop_field();
        ctx.exit_node();
    }

    fn walk_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::operation::FragmentDefinition,
    ) {
        let ast::operation::TypeCondition::On(type_name) = &fragment.type_condition;
        let fragment_type = ctx.schema().type_by_name(type_name);

        ctx.enter_node(AstNodeKind::FragmentDefinition);
        ctx.push_type(fragment_type);
        dispatch!(self, ctx, enter_fragment_definition, fragment);

        self.walk_directives(ctx, &fragment.directives);
        self.walk_selection_set(ctx, &fragment.selection_set);

        dispatch!(self, ctx, exit_fragment_definition, fragment);
        ctx.pop_type();
        ctx.exit_node();
    }

    fn walk_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a ast::operation::FragmentSpread,
    ) {
        ctx.enter_node(AstNodeKind::FragmentSpread);
        dispatch!(self, ctx, enter_fragment_spread, spread);
        self.walk_directives(ctx, &spread.directives);
        dispatch!(self, ctx, exit_fragment_spread, spread);
        ctx.exit_node();
    }

    fn walk_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        inline_fragment: &'a ast::operation::InlineFragment,
    ) {
        let fragment_type = match &inline_fragment.type_condition {
            Some(ast::operation::TypeCondition::On(type_name))
                => ctx.schema().type_by_name(type_name),
            None => ctx.current_type(),
        };

        ctx.enter_node(AstNodeKind::InlineFragment);
        ctx.push_type(fragment_type);
        dispatch!(self, ctx, enter_inline_fragment, inline_fragment);

        self.walk_directives(ctx, &inline_fragment.directives);
        self.walk_selection_set(ctx, &inline_fragment.selection_set);

        dispatch!(self, ctx, exit_inline_fragment, inline_fragment);
        ctx.pop_type();
        ctx.exit_node();
    }

    fn walk_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &OperationNode<'a>,
    ) {
        let schema = ctx.schema();
        let root_type = match operation.kind {
            OperationKind::Mutation => schema.mutation_type(),
            OperationKind::Query => schema.query_type(),
            OperationKind::Subscription => schema.subscription_type(),
        };

        ctx.enter_node(AstNodeKind::Operation(operation.kind));
        ctx.push_type(root_type);
        dispatch!(self, ctx, enter_operation, operation);

        for var_def in operation.variable_definitions {
            self.walk_variable_definition(ctx, var_def);
        }
        self.walk_directives(ctx, operation.directives);
        self.walk_selection_set(ctx, operation.selection_set);

        dispatch!(self, ctx, exit_operation, operation);
        ctx.pop_type();
        ctx.exit_node();
    }

    fn walk_selection_set(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        selection_set: &'a ast::operation::SelectionSet,
    ) {
        use ast::operation::Selection;

        let parent_type = ctx.current_type().filter(|t| t.is_composite());
        ctx.enter_node(AstNodeKind::SelectionSet);
        ctx.push_parent_type(parent_type);
        dispatch!(self, ctx, enter_selection_set, selection_set);

        for selection in &selection_set.items {
            match selection {
                Selection::Field(field)
                    => self.walk_field(ctx, field),
                Selection::FragmentSpread(spread)
                    => self.walk_fragment_spread(ctx, spread),
                Selection::InlineFragment(inline_fragment)
                    => self.walk_inline_fragment(ctx, inline_fragment),
            }
        }

        dispatch!(self, ctx, exit_selection_set, selection_set);
        ctx.pop_parent_type();
        ctx.exit_node();
    }

    fn walk_value(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        value: &'a ast::operation::Value,
        position: graphql_parser::Pos,
    ) {
        use ast::operation::Value;

        let kind = match value {
            Value::Variable(_) => AstNodeKind::Variable,
            _ => AstNodeKind::Value,
        };
        ctx.enter_node(kind);
        dispatch!(self, ctx, enter_value, value, position);

        match value {
            Value::List(items) => {
                for item in items {
                    self.walk_value(ctx, item, position);
                }
            },
            Value::Object(fields) => {
                for field_value in fields.values() {
                    self.walk_value(ctx, field_value, position);
                }
            },
            _ => (),
        }

        dispatch!(self, ctx, exit_value, value, position);
        ctx.exit_node();
    }

    fn walk_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a ast::operation::VariableDefinition,
    ) {
        ctx.enter_node(AstNodeKind::VariableDefinition);
        dispatch!(self, ctx, enter_variable_definition, var_def);
        if let Some(default_value) = &var_def.default_value {
            self.walk_value(ctx, default_value, var_def.position);
        }
        dispatch!(self, ctx, exit_variable_definition, var_def);
        ctx.exit_node();
    }
}
