//! Core data types: recipes, their nested ingredient lists, and the draft/patch
//! shapes callers use to create and edit them.
//!
//! Every optional field is an `Option`; partial edits use [`Change`] so that
//! "leave this field alone" and "clear this field" are distinct.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(Uuid);

impl RecipeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecipeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecipeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(Uuid);

impl IngredientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for IngredientId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for IngredientId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for IngredientId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub name: String,
}

impl Ingredient {
    /// Single display line, e.g. "2 cup flour".
    pub fn line(&self) -> String {
        [self.quantity.as_deref(), self.unit.as_deref(), Some(self.name.as_str())]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Builds a recipe from a draft, assigning ingredient ids where the draft
    /// has none (or repeats one).
    pub fn new(id: RecipeId, draft: RecipeDraft) -> Self {
        let mut recipe = Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
            category: draft.category,
            tags: draft.tags,
            ingredients: Vec::with_capacity(draft.ingredients.len()),
        };
        for ingredient in draft.ingredients {
            recipe.push_ingredient(ingredient);
        }
        recipe
    }

    /// Prep plus cook time in minutes; `None` when both are unset or zero.
    /// Saturates at `u32::MAX`.
    pub fn total_time(&self) -> Option<u32> {
        let total = self
            .prep_time
            .unwrap_or(0)
            .saturating_add(self.cook_time.unwrap_or(0));
        (total > 0).then_some(total)
    }

    pub fn ingredient(&self, id: &IngredientId) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| &i.id == id)
    }

    /// Appends an ingredient and returns the id it was stored under.
    ///
    /// A caller-supplied id that is already taken in this recipe is replaced
    /// with a fresh one.
    pub fn push_ingredient(&mut self, draft: IngredientDraft) -> IngredientId {
        let id = match draft.id {
            Some(id) if self.ingredient(&id).is_none() => id,
            Some(taken) => {
                tracing::debug!(
                    %taken,
                    recipe = %self.id,
                    "ingredient id already in use, assigning a new one"
                );
                IngredientId::new()
            }
            None => IngredientId::new(),
        };
        self.ingredients.push(Ingredient {
            id,
            quantity: draft.quantity,
            unit: draft.unit,
            name: draft.name,
        });
        id
    }
}

/// A recipe without an id, as handed to `create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub ingredients: Vec<IngredientDraft>,
}

impl RecipeDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// An ingredient as handed to `add_ingredient`; the id is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDraft {
    #[serde(default)]
    pub id: Option<IngredientId>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    pub name: String,
}

impl IngredientDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_id(mut self, id: IngredientId) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<Ingredient> for IngredientDraft {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: Some(ingredient.id),
            quantity: ingredient.quantity,
            unit: ingredient.unit,
            name: ingredient.name,
        }
    }
}

/// Parses the compact `quantity|unit|name` form used on the command line.
///
/// - `flour` → name only
/// - `2|flour` → quantity and name
/// - `2|cup|flour` → all three
///
/// Parts are trimmed; empty quantity or unit parts are absent. The name is
/// required.
impl FromStr for IngredientDraft {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('|').map(str::trim).collect();
        let (quantity, unit, name) = match parts.as_slice() {
            [name] => (None, None, *name),
            [quantity, name] => (normalize_text(quantity), None, *name),
            [quantity, unit, name] => (normalize_text(quantity), normalize_text(unit), *name),
            _ => return Err(format!("Invalid ingredient '{}': expected quantity|unit|name", s)),
        };
        if name.is_empty() {
            return Err(format!("Invalid ingredient '{}': name is required", s));
        }
        Ok(Self {
            id: None,
            quantity,
            unit,
            name: name.to_string(),
        })
    }
}

/// Edit to a single optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Change<T> {
    #[default]
    Unchanged,
    Clear,
    Set(T),
}

impl<T> Change<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Change::Unchanged)
    }

    /// `None` means "not mentioned", never "clear".
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Change::Unchanged, Change::Set)
    }

    pub fn apply(self, slot: &mut Option<T>) {
        match self {
            Change::Unchanged => {}
            Change::Clear => *slot = None,
            Change::Set(value) => *slot = Some(value),
        }
    }
}

/// Field-by-field edit of a recipe. Fields left at their default are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Change<String>,
    pub image_url: Change<String>,
    pub prep_time: Change<u32>,
    pub cook_time: Change<u32>,
    pub servings: Change<u32>,
    pub category: Change<String>,
    pub tags: Change<Vec<String>>,
    pub ingredients: Change<Vec<IngredientDraft>>,
}

impl RecipePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges the patch into `recipe`. The id never changes.
    pub fn apply_to(self, recipe: &mut Recipe) {
        if let Some(title) = self.title {
            recipe.title = title;
        }
        self.description.apply(&mut recipe.description);
        self.image_url.apply(&mut recipe.image_url);
        self.prep_time.apply(&mut recipe.prep_time);
        self.cook_time.apply(&mut recipe.cook_time);
        self.servings.apply(&mut recipe.servings);
        self.category.apply(&mut recipe.category);
        self.tags.apply(&mut recipe.tags);
        match self.ingredients {
            Change::Unchanged => {}
            Change::Clear => recipe.ingredients.clear(),
            Change::Set(drafts) => {
                recipe.ingredients.clear();
                for draft in drafts {
                    recipe.push_ingredient(draft);
                }
            }
        }
    }
}

/// Field-by-field edit of an ingredient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientPatch {
    pub quantity: Change<String>,
    pub unit: Change<String>,
    pub name: Option<String>,
}

impl IngredientPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply_to(self, ingredient: &mut Ingredient) {
        self.quantity.apply(&mut ingredient.quantity);
        self.unit.apply(&mut ingredient.unit);
        if let Some(name) = self.name {
            ingredient.name = name;
        }
    }
}

/// Trims form input; blank input is absent.
pub fn normalize_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Splits comma-separated tag input. Returns `None` when no tag survives trimming.
pub fn parse_tags(input: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = input
        .split(',')
        .filter_map(normalize_text)
        .collect();
    (!tags.is_empty()).then_some(tags)
}
