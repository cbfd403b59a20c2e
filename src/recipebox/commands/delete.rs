use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecipeId;
use crate::store::DataStore;

/// Removes each recipe (with its ingredients). Missing ids are skipped.
pub fn run<S: DataStore>(store: &mut S, ids: &[RecipeId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        match store.remove_recipe(id)? {
            Some(recipe) => {
                tracing::info!(%id, title = %recipe.title, "recipe deleted");
                result.add_message(CmdMessage::success(format!(
                    "Recipe deleted: {}",
                    recipe.title
                )));
                result.affected_recipes.push(recipe);
            }
            None => tracing::debug!(%id, "delete skipped, no such recipe"),
        }
    }

    Ok(result)
}
