use crate::ast;
use crate::validation::ArgumentNode;
use crate::validation::OperationNode;
use crate::validation::ValidationContext;

/// The per-node-kind hooks a validation rule may implement.
///
/// Every hook defaults to a no-op. The [`AstWalker`](crate::validation::AstWalker)
/// calls each `enter_*` hook after it has pushed the node's type scope onto
/// the [`ValidationContext`], and each `exit_*` hook before popping it.
#[allow(unused_variables)]
pub trait Rule<'a> {
    fn enter_document(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        document: &'a ast::operation::Document,
    ) {}

    fn exit_document(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        document: &'a ast::operation::Document,
    ) {}

    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &OperationNode<'a>,
    ) {}

    fn exit_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &OperationNode<'a>,
    ) {}

    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a ast::operation::VariableDefinition,
    ) {}

    fn exit_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a ast::operation::VariableDefinition,
    ) {}

    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::operation::FragmentDefinition,
    ) {}

    fn exit_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::operation::FragmentDefinition,
    ) {}

    fn enter_selection_set(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        selection_set: &'a ast::operation::SelectionSet,
    ) {}

    fn exit_selection_set(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        selection_set: &'a ast::operation::SelectionSet,
    ) {}

    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a ast::operation::Field,
    ) {}

    fn exit_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a ast::operation::Field,
    ) {}

    /// Called once per field or directive with its complete argument list,
    /// before the individual arguments are entered.
    fn enter_arguments(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        arguments: &'a [(String, ast::operation::Value)],
        position: graphql_parser::Pos,
    ) {}

    fn enter_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: ArgumentNode<'a>,
    ) {}

    fn exit_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: ArgumentNode<'a>,
    ) {}

    /// Called for every literal value nested inside an argument or a
    /// variable's default value, outermost first.
    fn enter_value(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        value: &'a ast::operation::Value,
        position: graphql_parser::Pos,
    ) {}

    fn exit_value(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        value: &'a ast::operation::Value,
        position: graphql_parser::Pos,
    ) {}

    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a ast::operation::FragmentSpread,
    ) {}

    fn exit_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a ast::operation::FragmentSpread,
    ) {}

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        inline_fragment: &'a ast::operation::InlineFragment,
    ) {}

    fn exit_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        inline_fragment: &'a ast::operation::InlineFragment,
    ) {}

    /// Called once per node with its complete directive list, before the
    /// individual directives are entered.
    fn enter_directives(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directives: &'a [ast::operation::Directive],
    ) {}

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a ast::operation::Directive,
    ) {}

    fn exit_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a ast::operation::Directive,
    ) {}
}
