use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Recipe, RecipeDraft, RecipeId};
use crate::store::DataStore;

/// Stores `draft` under a fresh id at the end of the collection.
///
/// The draft is not validated here; callers check the title first.
pub fn run<S: DataStore>(store: &mut S, draft: RecipeDraft) -> Result<CmdResult> {
    let recipe = Recipe::new(RecipeId::new(), draft);
    store.insert_recipe(recipe.clone())?;
    tracing::info!(id = %recipe.id, title = %recipe.title, "recipe created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe created: {}",
        recipe.title
    )));
    result.affected_recipes.push(recipe);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngredientDraft, IngredientId};
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    #[test]
    fn appends_with_fresh_id() {
        let mut store = InMemoryStore::new();
        run(&mut store, RecipeDraft::new("First")).unwrap();
        let result = run(&mut store, RecipeDraft::new("Second")).unwrap();

        let id = result.created_id().unwrap();
        let all = store.list_recipes().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].id, id);
        assert_eq!(all[1].title, "Second");
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let mut store = InMemoryStore::new();
        let ids: HashSet<_> = (0..50)
            .map(|i| {
                run(&mut store, RecipeDraft::new(format!("R{}", i)))
                    .unwrap()
                    .created_id()
                    .unwrap()
            })
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn stored_record_equals_draft_plus_id() {
        let mut store = InMemoryStore::new();
        let ingredient_id = IngredientId::new();
        let draft = RecipeDraft {
            title: "Pie".into(),
            description: Some("Sweet".into()),
            image_url: Some("data:image/png;base64,AAAA".into()),
            prep_time: Some(20),
            cook_time: Some(40),
            servings: Some(6),
            category: Some("Dessert".into()),
            tags: Some(vec!["baking".into()]),
            ingredients: vec![IngredientDraft::new("apples")
                .quantity("4")
                .with_id(ingredient_id)],
        };

        let id = run(&mut store, draft.clone())
            .unwrap()
            .created_id()
            .unwrap();
        let stored = store.get_recipe(&id).unwrap().unwrap();

        assert_eq!(stored, Recipe::new(id, draft));
        assert_eq!(stored.ingredients[0].id, ingredient_id);
    }

    #[test]
    fn assigns_ingredient_ids() {
        let mut store = InMemoryStore::new();
        let mut draft = RecipeDraft::new("Bread");
        draft.ingredients = vec![IngredientDraft::new("flour"), IngredientDraft::new("water")];

        let id = run(&mut store, draft).unwrap().created_id().unwrap();
        let stored = store.get_recipe(&id).unwrap().unwrap();
        assert_ne!(stored.ingredients[0].id, stored.ingredients[1].id);
    }
}
