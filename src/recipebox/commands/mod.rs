use crate::config::RecipeBoxConfig;
use crate::index::DisplayRecipe;
use crate::model::{Recipe, RecipeId};

pub mod basket;
pub mod categories;
pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod ingredients;
pub mod update;
pub mod view;

pub use basket::BasketLine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Recipes as they stand after a mutation (or before, for deletes).
    pub affected_recipes: Vec<Recipe>,
    pub listed_recipes: Vec<DisplayRecipe>,
    pub categories: Vec<String>,
    pub basket: Vec<BasketLine>,
    pub config: Option<RecipeBoxConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<DisplayRecipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_basket(mut self, lines: Vec<BasketLine>) -> Self {
        self.basket = lines;
        self
    }

    pub fn with_config(mut self, config: RecipeBoxConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Id of the recipe a `create` just stored.
    pub fn created_id(&self) -> Option<RecipeId> {
        self.affected_recipes.first().map(|r| r.id)
    }

    /// True when the command changed nothing (e.g. it targeted a missing id).
    pub fn is_noop(&self) -> bool {
        self.affected_recipes.is_empty()
    }
}
