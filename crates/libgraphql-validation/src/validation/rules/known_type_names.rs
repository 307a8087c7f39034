use crate::ast;
use crate::suggestion;
use crate::types::TypeAnnotation;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Every type named by a variable definition or a type condition must be
/// defined by the schema.
#[derive(Debug, Default)]
pub struct KnownTypeNames;
impl KnownTypeNames {
    fn check_type_name(
        ctx: &mut ValidationContext<'_>,
        type_name: &str,
        node: AstNodeRef,
    ) {
        let schema = ctx.schema();
        if schema.type_by_name(type_name).is_some() {
            return;
        }
        let suggestions = suggestion::suggestion_list(type_name, schema.type_names());
        ctx.report(
            ValidationRule::KnownTypeNames,
            format!(
                "Unknown type \"{type_name}\".{}",
                suggestion::did_you_mean(&suggestions),
            ),
            vec![node],
        );
    }
}
impl<'a> Rule<'a> for KnownTypeNames {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::operation::FragmentDefinition,
    ) {
        let ast::operation::TypeCondition::On(type_name) = &fragment.type_condition;
        Self::check_type_name(
            ctx,
            type_name,
            AstNodeRef::new(AstNodeKind::TypeCondition, fragment.position),
        );
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        inline_fragment: &'a ast::operation::InlineFragment,
    ) {
        if let Some(ast::operation::TypeCondition::On(type_name)) = &inline_fragment.type_condition {
            Self::check_type_name(
                ctx,
                type_name,
                AstNodeRef::new(AstNodeKind::TypeCondition, inline_fragment.position),
            );
        }
    }

    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a ast::operation::VariableDefinition,
    ) {
        let var_type = TypeAnnotation::from_ast_type(&var_def.var_type);
        Self::check_type_name(
            ctx,
            var_type.innermost_type_name(),
            AstNodeRef::new(AstNodeKind::VariableDefinition, var_def.position),
        );
    }
}
