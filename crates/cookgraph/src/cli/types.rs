//! CLI value enums and domain type conversions.

use clap::ValueEnum;

use crate::domain::RelationshipType;

/// Relationship type for CLI arguments.
///
/// Accepts kebab-case names (`contains-step`) as well as the raw codes used
/// in the relationships table (`CONTAINS_STEP`).
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipTypeArg {
    /// Recipe needs an ingredient
    #[value(alias = "REQUIRES")]
    Requires,
    /// Recipe contains a step
    #[value(alias = "CONTAINS_STEP")]
    ContainsStep,
    /// Step is followed by another step
    #[value(alias = "NEXT_STEP")]
    NextStep,
    /// Node belongs to a category or concept
    #[value(alias = "BELONGS_TO")]
    BelongsTo,
    /// Recipe belongs to a recipe category
    #[value(alias = "BELONGS_TO_CATEGORY")]
    BelongsToCategory,
    /// Node is an instance of a concept type
    #[value(alias = "HAS_CONCEPT_TYPE")]
    HasConceptType,
    /// Recipes are similar
    #[value(alias = "SIMILAR")]
    Similar,
    /// Recipes share a tool
    #[value(alias = "USES_SAME_TOOL")]
    UsesSameTool,
    /// Recipes share a method
    #[value(alias = "USES_SAME_METHOD")]
    UsesSameMethod,
    /// Recipe has a difficulty level
    #[value(alias = "DIFFICULTY_LEVEL")]
    DifficultyLevel,
}

impl std::fmt::Display for RelationshipTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", RelationshipType::from(*self))
    }
}

impl From<RelationshipTypeArg> for RelationshipType {
    fn from(arg: RelationshipTypeArg) -> Self {
        match arg {
            RelationshipTypeArg::Requires => RelationshipType::Requires,
            RelationshipTypeArg::ContainsStep => RelationshipType::ContainsStep,
            RelationshipTypeArg::NextStep => RelationshipType::NextStep,
            RelationshipTypeArg::BelongsTo => RelationshipType::BelongsTo,
            RelationshipTypeArg::BelongsToCategory => RelationshipType::BelongsToCategory,
            RelationshipTypeArg::HasConceptType => RelationshipType::HasConceptType,
            RelationshipTypeArg::Similar => RelationshipType::Similar,
            RelationshipTypeArg::UsesSameTool => RelationshipType::UsesSameTool,
            RelationshipTypeArg::UsesSameMethod => RelationshipType::UsesSameMethod,
            RelationshipTypeArg::DifficultyLevel => RelationshipType::DifficultyLevel,
        }
    }
}

impl From<RelationshipType> for RelationshipTypeArg {
    fn from(t: RelationshipType) -> Self {
        match t {
            RelationshipType::Requires => RelationshipTypeArg::Requires,
            RelationshipType::ContainsStep => RelationshipTypeArg::ContainsStep,
            RelationshipType::NextStep => RelationshipTypeArg::NextStep,
            RelationshipType::BelongsTo => RelationshipTypeArg::BelongsTo,
            RelationshipType::BelongsToCategory => RelationshipTypeArg::BelongsToCategory,
            RelationshipType::HasConceptType => RelationshipTypeArg::HasConceptType,
            RelationshipType::Similar => RelationshipTypeArg::Similar,
            RelationshipType::UsesSameTool => RelationshipTypeArg::UsesSameTool,
            RelationshipType::UsesSameMethod => RelationshipTypeArg::UsesSameMethod,
            RelationshipType::DifficultyLevel => RelationshipTypeArg::DifficultyLevel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_round_trips_every_type() {
        for rel_type in RelationshipType::ALL {
            assert_eq!(RelationshipType::from(RelationshipTypeArg::from(rel_type)), rel_type);
        }
    }

    #[test]
    fn display_uses_table_codes() {
        assert_eq!(
            RelationshipTypeArg::BelongsToCategory.to_string(),
            "BELONGS_TO_CATEGORY"
        );
    }

    #[test]
    fn accepts_kebab_case_and_raw_codes() {
        for input in ["uses-same-tool", "USES_SAME_TOOL"] {
            assert_eq!(
                RelationshipTypeArg::from_str(input, false).unwrap(),
                RelationshipTypeArg::UsesSameTool
            );
        }
    }
}
