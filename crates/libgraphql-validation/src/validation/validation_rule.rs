use crate::validation::Rule;
use crate::validation::rules;

/// Names every validation rule this crate implements.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum ValidationRule {
    ArgumentsOfCorrectType,
    DefaultValuesOfCorrectType,
    FieldsOnCorrectType,
    FragmentsOnCompositeTypes,
    KnownArgumentNames,
    KnownDirectives,
    KnownFragmentNames,
    KnownTypeNames,
    LoneAnonymousOperation,
    NoFragmentCycles,
    NoUndefinedVariables,
    NoUnusedFragments,
    NoUnusedVariables,
    OverlappingFieldsCanBeMerged,
    PossibleFragmentSpreads,
    ProvidedNonNullArguments,
    ScalarLeafs,
    SingleFieldSubscriptions,
    UniqueArgumentNames,
    UniqueDirectivesPerLocation,
    UniqueFragmentNames,
    UniqueInputFieldNames,
    UniqueOperationNames,
    UniqueVariableNames,
    VariablesAreInputTypes,
    VariablesInAllowedPositions,
}
impl ValidationRule {
    /// Every rule, in the order a full validation run executes them.
    pub const ALL: &'static [ValidationRule] = &[
        Self::UniqueOperationNames,
        Self::LoneAnonymousOperation,
        Self::SingleFieldSubscriptions,
        Self::KnownTypeNames,
        Self::FragmentsOnCompositeTypes,
        Self::VariablesAreInputTypes,
        Self::ScalarLeafs,
        Self::FieldsOnCorrectType,
        Self::UniqueFragmentNames,
        Self::KnownFragmentNames,
        Self::NoUnusedFragments,
        Self::PossibleFragmentSpreads,
        Self::NoFragmentCycles,
        Self::UniqueVariableNames,
        Self::NoUndefinedVariables,
        Self::NoUnusedVariables,
        Self::KnownDirectives,
        Self::UniqueDirectivesPerLocation,
        Self::KnownArgumentNames,
        Self::UniqueArgumentNames,
        Self::ArgumentsOfCorrectType,
        Self::ProvidedNonNullArguments,
        Self::DefaultValuesOfCorrectType,
        Self::VariablesInAllowedPositions,
        Self::OverlappingFieldsCanBeMerged,
        Self::UniqueInputFieldNames,
    ];

    /// Looks a rule up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rule| rule.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ArgumentsOfCorrectType => "ArgumentsOfCorrectType",
            Self::DefaultValuesOfCorrectType => "DefaultValuesOfCorrectType",
            Self::FieldsOnCorrectType => "FieldsOnCorrectType",
            Self::FragmentsOnCompositeTypes => "FragmentsOnCompositeTypes",
            Self::KnownArgumentNames => "KnownArgumentNames",
            Self::KnownDirectives => "KnownDirectives",
            Self::KnownFragmentNames => "KnownFragmentNames",
            Self::KnownTypeNames => "KnownTypeNames",
            Self::LoneAnonymousOperation => "LoneAnonymousOperation",
            Self::NoFragmentCycles => "NoFragmentCycles",
            Self::NoUndefinedVariables => "NoUndefinedVariables",
            Self::NoUnusedFragments => "NoUnusedFragments",
            Self::NoUnusedVariables => "NoUnusedVariables",
            Self::OverlappingFieldsCanBeMerged => "OverlappingFieldsCanBeMerged",
            Self::PossibleFragmentSpreads => "PossibleFragmentSpreads",
            Self::ProvidedNonNullArguments => "ProvidedNonNullArguments",
            Self::ScalarLeafs => "ScalarLeafs",
            Self::SingleFieldSubscriptions => "SingleFieldSubscriptions",
            Self::UniqueArgumentNames => "UniqueArgumentNames",
            Self::UniqueDirectivesPerLocation => "UniqueDirectivesPerLocation",
            Self::UniqueFragmentNames => "UniqueFragmentNames",
            Self::UniqueInputFieldNames => "UniqueInputFieldNames",
            Self::UniqueOperationNames => "UniqueOperationNames",
            Self::UniqueVariableNames => "UniqueVariableNames",
            Self::VariablesAreInputTypes => "VariablesAreInputTypes",
            Self::VariablesInAllowedPositions => "VariablesInAllowedPositions",
        }
    }

    /// Creates fresh per-run state for this rule.
    pub(crate) fn instantiate<'a>(&self) -> Box<dyn Rule<'a> + 'a> {
        match self {
            Self::ArgumentsOfCorrectType
                => Box::new(rules::ArgumentsOfCorrectType),
            Self::DefaultValuesOfCorrectType
                => Box::new(rules::DefaultValuesOfCorrectType),
            Self::FieldsOnCorrectType
                => Box::new(rules::FieldsOnCorrectType),
            Self::FragmentsOnCompositeTypes
                => Box::new(rules::FragmentsOnCompositeTypes),
            Self::KnownArgumentNames
                => Box::new(rules::KnownArgumentNames),
            Self::KnownDirectives
                => Box::new(rules::KnownDirectives),
            Self::KnownFragmentNames
                => Box::new(rules::KnownFragmentNames),
            Self::KnownTypeNames
                => Box::new(rules::KnownTypeNames),
            Self::LoneAnonymousOperation
                => Box::new(rules::LoneAnonymousOperation),
            Self::NoFragmentCycles
                => Box::new(rules::NoFragmentCycles::default()),
            Self::NoUndefinedVariables
                => Box::new(rules::NoUndefinedVariables),
            Self::NoUnusedFragments
                => Box::new(rules::NoUnusedFragments::default()),
            Self::NoUnusedVariables
                => Box::new(rules::NoUnusedVariables),
            Self::OverlappingFieldsCanBeMerged
                => Box::new(rules::OverlappingFieldsCanBeMerged::default()),
            Self::PossibleFragmentSpreads
                => Box::new(rules::PossibleFragmentSpreads),
            Self::ProvidedNonNullArguments
                => Box::new(rules::ProvidedNonNullArguments),
            Self::ScalarLeafs
                => Box::new(rules::ScalarLeafs),
            Self::SingleFieldSubscriptions
                => Box::new(rules::SingleFieldSubscriptions),
            Self::UniqueArgumentNames
                => Box::new(rules::UniqueArgumentNames),
            Self::UniqueDirectivesPerLocation
                => Box::new(rules::UniqueDirectivesPerLocation),
            Self::UniqueFragmentNames
                => Box::new(rules::UniqueFragmentNames::default()),
            Self::UniqueInputFieldNames
                => Box::new(rules::UniqueInputFieldNames),
            Self::UniqueOperationNames
                => Box::new(rules::UniqueOperationNames::default()),
            Self::UniqueVariableNames
                => Box::new(rules::UniqueVariableNames),
            Self::VariablesAreInputTypes
                => Box::new(rules::VariablesAreInputTypes),
            Self::VariablesInAllowedPositions
                => Box::new(rules::VariablesInAllowedPositions),
        }
    }
}
impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
