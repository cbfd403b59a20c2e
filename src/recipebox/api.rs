//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for recipe operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the store**: one `RecipeBoxApi` per session, constructed once and
//!   passed to whoever needs it. There is no global instance.
//! - **Dispatches** to the appropriate command function
//! - **Resolves selectors** (display indexes or UUIDs) to ids
//! - **Returns structured types** (`Result<CmdResult>`, or plain records for reads)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Validation of drafts**: callers check titles and names before calling
//! - **I/O**: no stdout, stderr, or formatting
//!
//! ## Missing ids
//!
//! `update_recipe`, `delete_recipe` and the ingredient operations treat an
//! unknown id as a no-op (`CmdResult::is_noop`). Only `resolve_*` and
//! `view_recipes` report unknown targets as errors, because a human typed them.
//!
//! ## Generic Over DataStore
//!
//! `RecipeBoxApi<S: DataStore>` is generic over the storage backend; the
//! session uses `InMemoryStore`, seeded with the sample collection.

use crate::commands;
use crate::error::{RecipeBoxError, Result};
use crate::filter::RecipeFilter;
use crate::index::Selector;
use crate::model::{
    IngredientDraft, IngredientId, IngredientPatch, Recipe, RecipeDraft, RecipeId, RecipePatch,
};
use crate::seed;
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct RecipeBoxApi<S: DataStore> {
    store: S,
    config_dir: Option<PathBuf>,
}

impl RecipeBoxApi<InMemoryStore> {
    /// A session starting from the sample recipes.
    pub fn with_samples() -> Self {
        Self::new(InMemoryStore::from_drafts(seed::sample_recipes()))
    }
}

impl<S: DataStore> RecipeBoxApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            config_dir: None,
        }
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    // --- Reads ---

    pub fn recipes(&self) -> Result<Vec<Recipe>> {
        self.store.list_recipes()
    }

    pub fn recipe(&self, id: &RecipeId) -> Result<Option<Recipe>> {
        self.store.get_recipe(id)
    }

    pub fn list_recipes(&self, filter: &RecipeFilter) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, filter)
    }

    pub fn view_recipes(&self, ids: &[RecipeId]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.store)
    }

    pub fn basket(&self, ids: &[RecipeId]) -> Result<commands::CmdResult> {
        commands::basket::run(&self.store, ids)
    }

    // --- Recipe mutations ---

    pub fn create_recipe(&mut self, draft: RecipeDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_recipe(
        &mut self,
        id: &RecipeId,
        patch: RecipePatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_recipe(&mut self, id: &RecipeId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, std::slice::from_ref(id))
    }

    pub fn delete_recipes(&mut self, ids: &[RecipeId]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    // --- Ingredient mutations ---

    pub fn add_ingredient(
        &mut self,
        recipe_id: &RecipeId,
        draft: IngredientDraft,
    ) -> Result<commands::CmdResult> {
        commands::ingredients::add(&mut self.store, recipe_id, draft)
    }

    pub fn update_ingredient(
        &mut self,
        recipe_id: &RecipeId,
        ingredient_id: &IngredientId,
        patch: IngredientPatch,
    ) -> Result<commands::CmdResult> {
        commands::ingredients::update(&mut self.store, recipe_id, ingredient_id, patch)
    }

    pub fn remove_ingredient(
        &mut self,
        recipe_id: &RecipeId,
        ingredient_id: &IngredientId,
    ) -> Result<commands::CmdResult> {
        commands::ingredients::remove(&mut self.store, recipe_id, ingredient_id)
    }

    // --- Selectors ---

    pub fn resolve_recipe(&self, input: &str) -> Result<RecipeId> {
        let selector = parse_selector(input)?;
        let recipes = self.store.list_recipes()?;
        selector
            .find_recipe(&recipes)
            .map(|r| r.id)
            .ok_or_else(|| RecipeBoxError::RecipeNotFound(input.to_string()))
    }

    pub fn resolve_recipes<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<RecipeId>> {
        let mut ids: Vec<RecipeId> = Vec::with_capacity(inputs.len());
        for input in inputs {
            let id = self.resolve_recipe(input.as_ref())?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    pub fn resolve_ingredient(&self, recipe_id: &RecipeId, input: &str) -> Result<IngredientId> {
        let selector = parse_selector(input)?;
        let recipe = self
            .store
            .get_recipe(recipe_id)?
            .ok_or_else(|| RecipeBoxError::RecipeNotFound(recipe_id.to_string()))?;
        selector
            .find_ingredient(&recipe.ingredients)
            .map(|i| i.id)
            .ok_or_else(|| {
                RecipeBoxError::IngredientNotFound(format!("{} in {}", input, recipe.title))
            })
    }

    // --- Config ---

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        let dir = self
            .config_dir
            .as_deref()
            .ok_or_else(|| RecipeBoxError::Config("No config directory set".to_string()))?;
        commands::config::run(dir, action)
    }
}

fn parse_selector(input: &str) -> Result<Selector> {
    input.parse().map_err(RecipeBoxError::InvalidSelector)
}

pub use crate::commands::config::ConfigAction;
pub use crate::filter::RecipeSort;
pub use commands::{BasketLine, CmdMessage, CmdResult, MessageLevel};
