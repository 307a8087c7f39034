use crate::validation::ArgumentNode;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::value;

/// Every literal argument value must be valid for the argument's declared
/// type.
#[derive(Debug, Default)]
pub struct ArgumentsOfCorrectType;
impl<'a> Rule<'a> for ArgumentsOfCorrectType {
    fn enter_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: ArgumentNode<'a>,
    ) {
        let Some(param) = ctx.current_argument() else {
            return;
        };
        let errors = value::is_valid_literal_value(
            ctx.schema(),
            param.type_annotation(),
            argument.value,
        );
        if errors.is_empty() {
            return;
        }

        ctx.report(
            ValidationRule::ArgumentsOfCorrectType,
            format!(
                "Argument \"{}\" has invalid value {}.\n{}",
                argument.name,
                value::print_value(argument.value),
                errors.join("\n"),
            ),
            vec![AstNodeRef::new(AstNodeKind::Argument, argument.position)],
        );
    }
}
