//! # Display Indexes
//!
//! Recipes and ingredients are identified by UUIDs, which nobody wants to type.
//! Listings therefore number entries 1, 2, 3... by their position in the
//! collection (or in a recipe's ingredient list), and every command that takes
//! a recipe or ingredient accepts either form:
//!
//! - `3` → the third recipe in collection order
//! - `0b9c6a0e-...` → the recipe with that id
//!
//! Indexes are always computed from the **unfiltered** collection, so a recipe
//! keeps its number when a search hides its neighbours. They are only stable
//! until the next create or delete; ids are stable for the whole session.

use crate::model::{Ingredient, Recipe};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct DisplayRecipe {
    pub index: usize,
    #[serde(flatten)]
    pub recipe: Recipe,
}

pub fn index_recipes(recipes: Vec<Recipe>) -> Vec<DisplayRecipe> {
    recipes
        .into_iter()
        .enumerate()
        .map(|(i, recipe)| DisplayRecipe {
            index: i + 1,
            recipe,
        })
        .collect()
}

/// A user's way of pointing at a recipe or ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// 1-based position
    Index(usize),
    Id(Uuid),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(n) => write!(f, "{}", n),
            Selector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Indexes start at 1".to_string());
            }
            return Ok(Selector::Index(n));
        }
        Uuid::parse_str(s)
            .map(Selector::Id)
            .map_err(|_| format!("Invalid selector '{}': expected an index or an id", s))
    }
}

impl Selector {
    pub fn find_recipe<'a>(&self, recipes: &'a [Recipe]) -> Option<&'a Recipe> {
        match self {
            Selector::Index(n) => n.checked_sub(1).and_then(|i| recipes.get(i)),
            Selector::Id(id) => recipes.iter().find(|r| r.id.as_uuid() == id),
        }
    }

    pub fn find_ingredient<'a>(&self, ingredients: &'a [Ingredient]) -> Option<&'a Ingredient> {
        match self {
            Selector::Index(n) => n.checked_sub(1).and_then(|i| ingredients.get(i)),
            Selector::Id(id) => ingredients.iter().find(|i| i.id.as_uuid() == id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecipeDraft, RecipeId};

    fn recipes(titles: &[&str]) -> Vec<Recipe> {
        titles
            .iter()
            .map(|t| Recipe::new(RecipeId::new(), RecipeDraft::new(*t)))
            .collect()
    }

    #[test]
    fn indexes_start_at_one() {
        let indexed = index_recipes(recipes(&["A", "B"]));
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[1].index, 2);
        assert_eq!(indexed[1].recipe.title, "B");
    }

    #[test]
    fn parses_index_and_uuid() {
        assert_eq!("2".parse::<Selector>(), Ok(Selector::Index(2)));

        let id = Uuid::new_v4();
        assert_eq!(id.to_string().parse::<Selector>(), Ok(Selector::Id(id)));

        assert!("0".parse::<Selector>().is_err());
        assert!("soup".parse::<Selector>().is_err());
    }

    #[test]
    fn finds_recipes_by_either_form() {
        let list = recipes(&["A", "B", "C"]);
        assert_eq!(Selector::Index(3).find_recipe(&list).unwrap().title, "C");
        assert!(Selector::Index(4).find_recipe(&list).is_none());
        assert!(Selector::Index(0).find_recipe(&list).is_none());

        let id = *list[1].id.as_uuid();
        assert_eq!(Selector::Id(id).find_recipe(&list).unwrap().title, "B");
    }

    #[test]
    fn index_zero_finds_no_ingredient() {
        let mut recipe = Recipe::new(RecipeId::new(), RecipeDraft::new("Bread"));
        recipe.push_ingredient(crate::model::IngredientDraft::new("flour"));
        let ingredients = &recipe.ingredients;
        assert!(Selector::Index(0).find_ingredient(ingredients).is_none());
        assert_eq!(Selector::Index(1).find_ingredient(ingredients).unwrap().name, "flour");
    }
}
