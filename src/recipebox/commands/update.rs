use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{RecipeId, RecipePatch};
use crate::store::DataStore;

/// Merges `patch` into the recipe with `id`, keeping its position.
///
/// An unknown id is a no-op: the result has no affected recipes and the
/// collection is untouched.
pub fn run<S: DataStore>(store: &mut S, id: &RecipeId, patch: RecipePatch) -> Result<CmdResult> {
    let Some(mut recipe) = store.get_recipe(id)? else {
        tracing::debug!(%id, "update skipped, no such recipe");
        return Ok(CmdResult::default());
    };

    patch.apply_to(&mut recipe);
    store.replace_recipe(recipe.clone())?;
    tracing::debug!(%id, "recipe updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe updated: {}",
        recipe.title
    )));
    result.affected_recipes.push(recipe);
    Ok(result)
}
