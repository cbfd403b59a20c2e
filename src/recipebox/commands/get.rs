use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{compare, RecipeFilter};
use crate::index::{index_recipes, DisplayRecipe};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, filter: &RecipeFilter) -> Result<CmdResult> {
    // Index before filtering so numbers match the unfiltered listing
    let indexed = index_recipes(store.list_recipes()?);

    let mut listed: Vec<DisplayRecipe> = indexed
        .into_iter()
        .filter(|dp| filter.matches(&dp.recipe))
        .collect();
    listed.sort_by(|a, b| compare(filter.sort, &a.recipe, &b.recipe));

    tracing::debug!(
        query = %filter.query,
        category = ?filter.category,
        matched = listed.len(),
        "recipes filtered"
    );
    Ok(CmdResult::default().with_listed_recipes(listed))
}
