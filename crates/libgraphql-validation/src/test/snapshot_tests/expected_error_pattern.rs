/// One expectation declared by a comment at the top of a fixture file.
#[derive(Clone, Debug, PartialEq)]
pub enum ExpectedErrorPattern {
    /// `# EXPECTED_ERROR_CONTAINS: text`, matching any error whose text
    /// contains `text`.
    Contains(String),

    /// `# EXPECTED_ERROR_RULE: ScalarLeafs`, matching any diagnostic raised
    /// by the named validation rule.
    Rule(String),

    /// `# EXPECTED_ERROR_TYPE: DuplicateTypeDefinition`, matching a schema
    /// build error whose debug form names that variant.
    Type(String),
}
impl ExpectedErrorPattern {
    const CONTAINS_PREFIX: &'static str = "# EXPECTED_ERROR_CONTAINS:";
    const RULE_PREFIX: &'static str = "# EXPECTED_ERROR_RULE:";
    const TYPE_PREFIX: &'static str = "# EXPECTED_ERROR_TYPE:";

    /// Reads every expectation comment out of a fixture's source.
    pub fn parse_all(source: &str) -> Vec<Self> {
        source.lines()
            .filter_map(|line| {
                let line = line.trim_start();
                if let Some(text) = line.strip_prefix(Self::CONTAINS_PREFIX) {
                    Some(Self::Contains(text.trim().to_string()))
                } else if let Some(rule_name) = line.strip_prefix(Self::RULE_PREFIX) {
                    Some(Self::Rule(rule_name.trim().to_string()))
                } else {
                    line.strip_prefix(Self::TYPE_PREFIX)
                        .map(|type_name| Self::Type(type_name.trim().to_string()))
                }
            })
            .collect()
    }

    /// Whether `actual` (formatted as `"<rule>: <message>"` for document
    /// diagnostics, or as a debug string for schema errors) satisfies this
    /// expectation.
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            Self::Contains(text) => actual.contains(text.as_str()),
            Self::Rule(rule_name) => actual.strip_prefix(rule_name.as_str())
                .is_some_and(|rest| rest.starts_with(": ")),
            Self::Type(type_name) => actual.contains(type_name.as_str()),
        }
    }
}
impl std::fmt::Display for ExpectedErrorPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contains(text) => write!(f, "ERROR_CONTAINS: {text}"),
            Self::Rule(rule_name) => write!(f, "ERROR_RULE: {rule_name}"),
            Self::Type(type_name) => write!(f, "ERROR_TYPE: {type_name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExpectedErrorPattern;

    #[test]
    fn parses_each_comment_kind() {
        let patterns = ExpectedErrorPattern::parse_all(
            "# EXPECTED_ERROR_RULE: ScalarLeafs\n\
             #   not an expectation\n\
               # EXPECTED_ERROR_CONTAINS:  must have a selection \n\
             # EXPECTED_ERROR_TYPE: DuplicateTypeDefinition\n\
             { dog }",
        );
        assert_eq!(patterns, vec![
            ExpectedErrorPattern::Rule("ScalarLeafs".to_string()),
            ExpectedErrorPattern::Contains("must have a selection".to_string()),
            ExpectedErrorPattern::Type("DuplicateTypeDefinition".to_string()),
        ]);
    }

    #[test]
    fn rule_patterns_match_whole_rule_names() {
        let pattern = ExpectedErrorPattern::Rule("NoUnusedVariables".to_string());
        assert!(pattern.matches("NoUnusedVariables: Variable \"$a\" is never used."));
        assert!(!pattern.matches("NoUnusedVariablesX: whatever"));
        assert!(!pattern.matches("KnownTypeNames: NoUnusedVariables: nope"));
    }
}
