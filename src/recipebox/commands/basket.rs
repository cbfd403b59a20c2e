//! Grocery basket: a shopping list derived from a set of recipes.
//!
//! Nothing is stored. Lines are merged when name (case-insensitively) and unit
//! agree; quantities are free text, so they are collected rather than summed.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::RecipeId;
use crate::store::DataStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasketLine {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub quantities: Vec<String>,
    pub recipes: Vec<String>,
}

impl BasketLine {
    fn same_item(&self, name: &str, unit: Option<&str>) -> bool {
        self.name.to_lowercase() == name.to_lowercase() && self.unit.as_deref() == unit
    }
}

/// Basket lines for `ids` in recipe order, then ingredient order. Unknown ids
/// contribute nothing.
pub fn run<S: DataStore>(store: &S, ids: &[RecipeId]) -> Result<CmdResult> {
    let mut lines: Vec<BasketLine> = Vec::new();

    for id in ids {
        let Some(recipe) = store.get_recipe(id)? else {
            tracing::debug!(%id, "basket skipped unknown recipe");
            continue;
        };

        for ingredient in &recipe.ingredients {
            let unit = ingredient.unit.as_deref();
            let existing = lines
                .iter()
                .position(|l| l.same_item(&ingredient.name, unit));
            let line = match existing {
                Some(pos) => &mut lines[pos],
                None => {
                    lines.push(BasketLine {
                        name: ingredient.name.clone(),
                        unit: ingredient.unit.clone(),
                        quantities: Vec::new(),
                        recipes: Vec::new(),
                    });
                    let last = lines.len() - 1;
                    &mut lines[last]
                }
            };
            if let Some(quantity) = &ingredient.quantity {
                line.quantities.push(quantity.clone());
            }
            if !line.recipes.contains(&recipe.title) {
                line.recipes.push(recipe.title.clone());
            }
        }
    }

    Ok(CmdResult::default().with_basket(lines))
}
