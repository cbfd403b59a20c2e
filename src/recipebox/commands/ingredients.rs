//! Ingredient operations. Ingredients only exist inside their recipe, so every
//! operation is a read-modify-replace of the parent. A missing recipe or
//! ingredient is a no-op.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{IngredientDraft, IngredientId, IngredientPatch, RecipeId};
use crate::store::DataStore;

/// Appends `draft` to the recipe's list, assigning an id if it has none.
pub fn add<S: DataStore>(
    store: &mut S,
    recipe_id: &RecipeId,
    draft: IngredientDraft,
) -> Result<CmdResult> {
    let Some(mut recipe) = store.get_recipe(recipe_id)? else {
        tracing::debug!(%recipe_id, "add ingredient skipped, no such recipe");
        return Ok(CmdResult::default());
    };

    let name = draft.name.clone();
    let ingredient_id = recipe.push_ingredient(draft);
    store.replace_recipe(recipe.clone())?;
    tracing::debug!(%recipe_id, %ingredient_id, "ingredient added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} to {}",
        name, recipe.title
    )));
    result.affected_recipes.push(recipe);
    Ok(result)
}

pub fn update<S: DataStore>(
    store: &mut S,
    recipe_id: &RecipeId,
    ingredient_id: &IngredientId,
    patch: IngredientPatch,
) -> Result<CmdResult> {
    let Some(mut recipe) = store.get_recipe(recipe_id)? else {
        tracing::debug!(%recipe_id, "update ingredient skipped, no such recipe");
        return Ok(CmdResult::default());
    };
    let Some(ingredient) = recipe
        .ingredients
        .iter_mut()
        .find(|i| &i.id == ingredient_id)
    else {
        tracing::debug!(
            %recipe_id,
            %ingredient_id,
            "update ingredient skipped, no such ingredient"
        );
        return Ok(CmdResult::default());
    };

    patch.apply_to(ingredient);
    let line = ingredient.line();
    store.replace_recipe(recipe.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Ingredient updated: {}",
        line
    )));
    result.affected_recipes.push(recipe);
    Ok(result)
}

pub fn remove<S: DataStore>(
    store: &mut S,
    recipe_id: &RecipeId,
    ingredient_id: &IngredientId,
) -> Result<CmdResult> {
    let Some(mut recipe) = store.get_recipe(recipe_id)? else {
        tracing::debug!(%recipe_id, "remove ingredient skipped, no such recipe");
        return Ok(CmdResult::default());
    };
    let Some(pos) = recipe.ingredients.iter().position(|i| &i.id == ingredient_id) else {
        tracing::debug!(
            %recipe_id,
            %ingredient_id,
            "remove ingredient skipped, no such ingredient"
        );
        return Ok(CmdResult::default());
    };

    let removed = recipe.ingredients.remove(pos);
    store.replace_recipe(recipe.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} from {}",
        removed.name, recipe.title
    )));
    result.affected_recipes.push(recipe);
    Ok(result)
}
