use crate::ast;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeprecationState {
    Deprecated(String),
    NotDeprecated,
}
impl DeprecationState {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => Some(reason.as_str()),
            Self::NotDeprecated => None,
        }
    }
}
impl std::convert::From<&[ast::operation::Directive]> for DeprecationState {
    fn from(directives: &[ast::operation::Directive]) -> Self {
        let Some(deprecated) = directives.iter().find(|d| d.name == "deprecated") else {
            return Self::NotDeprecated;
        };
        let reason = deprecated.arguments.iter().find_map(|(name, value)| {
            match (name.as_str(), value) {
                ("reason", ast::operation::Value::String(reason))
                    => Some(reason.to_string()),
                _ => None,
            }
        });
        Self::Deprecated(
            reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()),
        )
    }
}
