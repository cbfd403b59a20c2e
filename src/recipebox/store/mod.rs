//! # Storage Layer
//!
//! This module defines the storage abstraction for recipebox. The [`DataStore`]
//! trait is the only place the recipe collection lives; commands read and write
//! through it and never hold on to stored records.
//!
//! ## Contract
//!
//! - The collection is **ordered**: `list_recipes` returns records in insertion
//!   order, `replace_recipe` keeps a record where it is, and only
//!   `remove_recipe` changes positions.
//! - Ids are **unique**: inserting an id that is already stored is an error.
//! - Reads hand out **clones**. Mutating a returned `Recipe` has no effect until
//!   it is written back, so collaborators cannot bypass the command layer.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: an ordered `Vec`, discarded with the session.
//!   This is the only backend; there is no persistence.
//!
//! Mutation takes `&mut self`, so a store owned by one `RecipeBoxApi` is
//! serialized by the borrow checker. Sharing one across threads means wrapping
//! the whole API in a single lock.

use crate::error::Result;
use crate::model::{Recipe, RecipeId};

pub mod memory;

/// Abstract interface for recipe storage.
pub trait DataStore {
    /// All recipes, in insertion order.
    fn list_recipes(&self) -> Result<Vec<Recipe>>;

    /// A recipe by id, or `None`.
    fn get_recipe(&self, id: &RecipeId) -> Result<Option<Recipe>>;

    /// Append a new recipe to the end of the collection.
    fn insert_recipe(&mut self, recipe: Recipe) -> Result<()>;

    /// Replace the stored recipe with the same id, in place.
    /// Returns `false` (and stores nothing) if no such recipe exists.
    fn replace_recipe(&mut self, recipe: Recipe) -> Result<bool>;

    /// Remove a recipe and its ingredients. Returns the removed record, if any.
    fn remove_recipe(&mut self, id: &RecipeId) -> Result<Option<Recipe>>;

    fn count(&self) -> Result<usize> {
        Ok(self.list_recipes()?.len())
    }
}
