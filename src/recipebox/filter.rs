//! Search and category filtering over a snapshot of the collection.
//!
//! Everything here is a pure function of its inputs: no store access, no
//! hidden state. Views call these with whatever snapshot they hold and
//! recompute whenever the collection changes.
//!
//! ## Matching
//!
//! - **Text query**: empty matches everything; otherwise a case-insensitive
//!   substring of the title, the description, or any tag.
//! - **Category**: empty/unset matches everything; otherwise exact,
//!   case-sensitive equality with the recipe's category.
//!
//! Results keep collection order unless a [`RecipeSort`] other than
//! `Insertion` is requested; sorting is stable.

use crate::model::Recipe;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecipeSort {
    #[default]
    Insertion,
    Title,
    TotalTime,
}

impl fmt::Display for RecipeSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecipeSort::Insertion => "added",
            RecipeSort::Title => "title",
            RecipeSort::TotalTime => "time",
        };
        f.write_str(name)
    }
}

impl FromStr for RecipeSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "added" | "insertion" => Ok(RecipeSort::Insertion),
            "title" => Ok(RecipeSort::Title),
            "time" | "total-time" => Ok(RecipeSort::TotalTime),
            other => Err(format!(
                "Unknown sort '{}' (expected added, title or time)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub query: String,
    pub category: Option<String>,
    pub sort: RecipeSort,
}

impl RecipeFilter {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn in_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        matches_query(recipe, &self.query)
            && matches_category(recipe, self.category.as_deref())
    }
}

pub fn matches_query(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    hit(&recipe.title)
        || recipe.description.as_deref().is_some_and(hit)
        || recipe
            .tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| hit(t)))
}

pub fn matches_category(recipe: &Recipe, category: Option<&str>) -> bool {
    match category {
        None | Some("") => true,
        Some(wanted) => recipe.category.as_deref() == Some(wanted),
    }
}

/// Orders two recipes for `sort`. `Insertion` treats everything as equal so
/// a stable sort keeps collection order.
pub fn compare(sort: RecipeSort, a: &Recipe, b: &Recipe) -> Ordering {
    match sort {
        RecipeSort::Insertion => Ordering::Equal,
        RecipeSort::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        // Recipes without a time go last
        RecipeSort::TotalTime => match (a.total_time(), b.total_time()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// The recipes matching `filter`, in collection order (or `filter.sort` order).
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &RecipeFilter) -> Vec<&'a Recipe> {
    let mut matched: Vec<&Recipe> = recipes.iter().filter(|r| filter.matches(r)).collect();
    matched.sort_by(|a, b| compare(filter.sort, a, b));
    matched
}

/// Distinct non-empty categories, sorted ascending.
pub fn categories(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .filter_map(|r| r.category.as_deref())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
