use crate::commands::CmdResult;
use crate::error::{RecipeBoxError, Result};
use crate::index::index_recipes;
use crate::model::RecipeId;
use crate::store::DataStore;

/// Full records for `ids`, in the order asked for.
///
/// Unlike the mutating commands, viewing a missing id is an error: there is
/// nothing sensible to show.
pub fn run<S: DataStore>(store: &S, ids: &[RecipeId]) -> Result<CmdResult> {
    let indexed = index_recipes(store.list_recipes()?);

    let listed = ids
        .iter()
        .map(|id| {
            indexed
                .iter()
                .find(|dp| &dp.recipe.id == id)
                .cloned()
                .ok_or_else(|| RecipeBoxError::RecipeNotFound(id.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_listed_recipes(listed))
}
