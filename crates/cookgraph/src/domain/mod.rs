//! Domain types for the cooking knowledge graph.
//!
//! This module contains the node and relationship records produced by the
//! loader, plus the closed set of relationship types the dataset uses.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Well-known node labels.
///
/// Labels outside this list are legal and kept verbatim; these constants
/// only name the ones the semantic rules refer to.
pub mod labels {
    /// A dish with ingredients and steps.
    pub const RECIPE: &str = "Recipe";
    /// Something a recipe requires.
    pub const INGREDIENT: &str = "Ingredient";
    /// A single numbered step of a recipe.
    pub const COOKING_STEP: &str = "CookingStep";
    /// A difficulty bucket recipes link to.
    pub const DIFFICULTY_LEVEL: &str = "DifficultyLevel";
    /// A generic category.
    pub const CATEGORY: &str = "Category";
    /// A recipe category.
    pub const RECIPE_CATEGORY: &str = "RecipeCategory";
    /// A concept type node (entity, process, tool...).
    pub const CONCEPT_TYPE: &str = "ConceptType";
    /// The root of the category hierarchy.
    pub const ROOT: &str = "Root";
}

/// Unique identifier for a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a relationship
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipId(pub String);

impl RelationshipId {
    /// Create a new relationship ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RelationshipId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for RelationshipId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// An entity in the graph: recipe, ingredient, step, method, tool...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier
    #[serde(rename = "nodeId")]
    pub id: NodeId,

    /// Display label
    pub name: String,

    /// Type labels; a node may carry several
    pub labels: BTreeSet<String>,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Categories the node belongs to
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub category: BTreeSet<String>,

    /// Concept type (entity, process, tool...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept_type: Option<String>,

    /// Recipe difficulty, verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,

    /// Recipe preparation time, verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,

    /// Recipe cooking time, verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,

    /// Position of a cooking step within its recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_number: Option<u32>,

    /// Cooking methods mentioned by the node
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub methods: BTreeSet<String>,

    /// Cooking tools mentioned by the node
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tools: BTreeSet<String>,

    /// Alternative names
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub synonyms: BTreeSet<String>,

    /// Source document the node was extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl Node {
    /// Create a node with the required fields; everything else is empty.
    pub fn new<I, S>(id: impl Into<NodeId>, name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            description: None,
            category: BTreeSet::new(),
            concept_type: None,
            difficulty: None,
            prep_time: None,
            cook_time: None,
            step_number: None,
            methods: BTreeSet::new(),
            tools: BTreeSet::new(),
            synonyms: BTreeSet::new(),
            file_path: None,
        }
    }

    /// Returns `true` if the node carries `label`.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Returns `true` if the node carries any of `labels`.
    #[must_use]
    pub fn has_any_label(&self, labels: &[&str]) -> bool {
        labels.iter().any(|l| self.has_label(l))
    }

    /// Returns `true` if any of the recipe-only fields is set.
    #[must_use]
    pub fn has_recipe_fields(&self) -> bool {
        self.difficulty.is_some() || self.prep_time.is_some() || self.cook_time.is_some()
    }
}

/// A typed, directed connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier
    #[serde(rename = "relationshipId")]
    pub id: RelationshipId,

    /// Relationship type
    #[serde(rename = "relationshipType")]
    pub rel_type: RelationshipType,

    /// Source node
    #[serde(rename = "startNodeId")]
    pub start: NodeId,

    /// Target node
    #[serde(rename = "endNodeId")]
    pub end: NodeId,

    /// Ingredient amount (REQUIRES only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Ingredient unit (REQUIRES only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Step ordering (CONTAINS_STEP / NEXT_STEP only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_order: Option<u32>,
}

impl Relationship {
    /// Create a relationship without optional attributes.
    pub fn new(
        id: impl Into<RelationshipId>,
        rel_type: RelationshipType,
        start: impl Into<NodeId>,
        end: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            rel_type,
            start: start.into(),
            end: end.into(),
            amount: None,
            unit: None,
            step_order: None,
        }
    }
}

/// Type of a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    /// Recipe needs an ingredient
    Requires,

    /// Recipe contains a step
    ContainsStep,

    /// Step is followed by another step
    NextStep,

    /// Node belongs to a category or concept
    BelongsTo,

    /// Recipe belongs to a recipe category
    BelongsToCategory,

    /// Node is an instance of a concept type
    HasConceptType,

    /// Recipes are similar
    Similar,

    /// Recipes share a tool
    UsesSameTool,

    /// Recipes share a method
    UsesSameMethod,

    /// Recipe has a difficulty level
    DifficultyLevel,
}

impl RelationshipType {
    /// Every relationship type, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Requires,
        Self::ContainsStep,
        Self::NextStep,
        Self::BelongsTo,
        Self::BelongsToCategory,
        Self::HasConceptType,
        Self::Similar,
        Self::UsesSameTool,
        Self::UsesSameMethod,
        Self::DifficultyLevel,
    ];

    /// The code used for this type in the relationships table.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requires => "REQUIRES",
            Self::ContainsStep => "CONTAINS_STEP",
            Self::NextStep => "NEXT_STEP",
            Self::BelongsTo => "BELONGS_TO",
            Self::BelongsToCategory => "BELONGS_TO_CATEGORY",
            Self::HasConceptType => "HAS_CONCEPT_TYPE",
            Self::Similar => "SIMILAR",
            Self::UsesSameTool => "USES_SAME_TOOL",
            Self::UsesSameMethod => "USES_SAME_METHOD",
            Self::DifficultyLevel => "DIFFICULTY_LEVEL",
        }
    }

    /// Whether `amount` / `unit` are meaningful for this type.
    #[must_use]
    pub fn carries_quantity(self) -> bool {
        self == Self::Requires
    }

    /// Whether `step_order` is meaningful for this type.
    #[must_use]
    pub fn carries_step_order(self) -> bool {
        matches!(self, Self::ContainsStep | Self::NextStep)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a relationship type code is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown relationship type '{0}'")]
pub struct UnknownRelationshipType(pub String);

impl FromStr for RelationshipType {
    type Err = UnknownRelationshipType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownRelationshipType(s.to_string()))
    }
}
