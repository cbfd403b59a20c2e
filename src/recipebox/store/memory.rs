use super::DataStore;
use crate::error::{RecipeBoxError, Result};
use crate::model::{Recipe, RecipeDraft, RecipeId};

/// Session-local storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    recipes: Vec<Recipe>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `drafts` in order, each under a fresh id.
    pub fn from_drafts(drafts: impl IntoIterator<Item = RecipeDraft>) -> Self {
        Self {
            recipes: drafts
                .into_iter()
                .map(|draft| Recipe::new(RecipeId::new(), draft))
                .collect(),
        }
    }

    fn position(&self, id: &RecipeId) -> Option<usize> {
        self.recipes.iter().position(|r| &r.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn list_recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }

    fn get_recipe(&self, id: &RecipeId) -> Result<Option<Recipe>> {
        Ok(self.recipes.iter().find(|r| &r.id == id).cloned())
    }

    fn insert_recipe(&mut self, recipe: Recipe) -> Result<()> {
        if self.position(&recipe.id).is_some() {
            return Err(RecipeBoxError::DuplicateId(*recipe.id.as_uuid()));
        }
        self.recipes.push(recipe);
        Ok(())
    }

    fn replace_recipe(&mut self, recipe: Recipe) -> Result<bool> {
        match self.position(&recipe.id) {
            Some(pos) => {
                self.recipes[pos] = recipe;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_recipe(&mut self, id: &RecipeId) -> Result<Option<Recipe>> {
        Ok(self.position(id).map(|pos| self.recipes.remove(pos)))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.recipes.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::IngredientDraft;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_recipes(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut draft = RecipeDraft::new(format!("Test Recipe {}", i + 1));
                draft.description = Some(format!("Description for recipe {}", i + 1));
                self.store
                    .insert_recipe(Recipe::new(RecipeId::new(), draft))
                    .unwrap();
            }
            self
        }

        pub fn with_recipe(mut self, title: &str, category: Option<&str>) -> Self {
            let mut draft = RecipeDraft::new(title);
            draft.category = category.map(str::to_string);
            self.store
                .insert_recipe(Recipe::new(RecipeId::new(), draft))
                .unwrap();
            self
        }

        pub fn with_ingredients(mut self, title: &str, names: &[&str]) -> Self {
            let mut draft = RecipeDraft::new(title);
            draft.ingredients = names.iter().map(|n| IngredientDraft::new(*n)).collect();
            self.store
                .insert_recipe(Recipe::new(RecipeId::new(), draft))
                .unwrap();
            self
        }

        pub fn id_of(&self, title: &str) -> RecipeId {
            self.store
                .recipes
                .iter()
                .find(|r| r.title == title)
                .map(|r| r.id)
                .unwrap()
        }
    }
}
