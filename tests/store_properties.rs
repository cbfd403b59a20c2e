use recipebox::api::RecipeBoxApi;
use recipebox::filter::{categories, filter_recipes, RecipeFilter};
use recipebox::model::{
    Change, IngredientDraft, IngredientId, IngredientPatch, Recipe, RecipeDraft, RecipeId,
    RecipePatch,
};
use recipebox::store::memory::InMemoryStore;
use std::collections::HashSet;

fn empty_api() -> RecipeBoxApi<InMemoryStore> {
    RecipeBoxApi::new(InMemoryStore::new())
}

fn create(api: &mut RecipeBoxApi<InMemoryStore>, draft: RecipeDraft) -> RecipeId {
    api.create_recipe(draft).unwrap().created_id().unwrap()
}

fn full_draft() -> RecipeDraft {
    RecipeDraft {
        title: "Shakshuka".into(),
        description: Some("Eggs poached in spiced tomato sauce.".into()),
        image_url: Some("https://example.com/shakshuka.jpg".into()),
        prep_time: Some(10),
        cook_time: Some(20),
        servings: Some(2),
        category: Some("Breakfast".into()),
        tags: Some(vec!["eggs".into(), "one-pan".into()]),
        ingredients: vec![
            IngredientDraft::new("eggs").quantity("4"),
            IngredientDraft::new("tomatoes").quantity("400").unit("g"),
        ],
    }
}

#[test]
fn created_ids_are_pairwise_distinct() {
    let mut api = empty_api();
    let ids: Vec<RecipeId> = (0..50)
        .map(|i| create(&mut api, RecipeDraft::new(format!("Recipe {}", i))))
        .collect();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn create_then_get_returns_the_fields_plus_id() {
    let mut api = empty_api();
    let draft = full_draft();
    let id = create(&mut api, draft.clone());

    let stored = api.recipe(&id).unwrap().unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.title, draft.title);
    assert_eq!(stored.description, draft.description);
    assert_eq!(stored.image_url, draft.image_url);
    assert_eq!(stored.prep_time, draft.prep_time);
    assert_eq!(stored.cook_time, draft.cook_time);
    assert_eq!(stored.servings, draft.servings);
    assert_eq!(stored.category, draft.category);
    assert_eq!(stored.tags, draft.tags);

    let names: Vec<&str> = stored.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["eggs", "tomatoes"]);
    assert_eq!(stored.ingredients[1].unit.as_deref(), Some("g"));
}

#[test]
fn update_touches_only_the_fields_it_names() {
    let mut api = empty_api();
    let id = create(&mut api, full_draft());
    let before = api.recipe(&id).unwrap().unwrap();

    api.update_recipe(
        &id,
        RecipePatch {
            servings: Change::Set(6),
            description: Change::Clear,
            ..Default::default()
        },
    )
    .unwrap();

    let after = api.recipe(&id).unwrap().unwrap();
    assert_eq!(after.servings, Some(6));
    assert_eq!(after.description, None);

    let expected = Recipe {
        servings: Some(6),
        description: None,
        ..before
    };
    assert_eq!(after, expected);
}

#[test]
fn operations_on_missing_ids_leave_the_collection_unchanged() {
    let mut api = RecipeBoxApi::with_samples();
    let snapshot = api.recipes().unwrap();
    let ghost = RecipeId::new();
    let ghost_ingredient = IngredientId::new();
    let real = snapshot[0].id;

    let results = vec![
        api.update_recipe(
            &ghost,
            RecipePatch {
                title: Some("Ghost".into()),
                ..Default::default()
            },
        )
        .unwrap(),
        api.delete_recipe(&ghost).unwrap(),
        api.add_ingredient(&ghost, IngredientDraft::new("salt")).unwrap(),
        api.update_ingredient(&ghost, &ghost_ingredient, IngredientPatch::default()).unwrap(),
        api.update_ingredient(
            &real,
            &ghost_ingredient,
            IngredientPatch {
                name: Some("pepper".into()),
                ..Default::default()
            },
        )
        .unwrap(),
        api.remove_ingredient(&ghost, &ghost_ingredient).unwrap(),
        api.remove_ingredient(&real, &ghost_ingredient).unwrap(),
    ];

    assert!(results.iter().all(|r| r.is_noop()));
    assert_eq!(api.recipes().unwrap(), snapshot);
}

#[test]
fn remove_drops_the_recipe_and_its_ingredients() {
    let mut api = RecipeBoxApi::with_samples();
    let before = api.recipes().unwrap();
    let target = before[1].clone();
    assert!(!target.ingredients.is_empty());

    api.delete_recipe(&target.id).unwrap();

    let after = api.recipes().unwrap();
    assert!(api.recipe(&target.id).unwrap().is_none());
    assert_eq!(after.len(), before.len() - 1);

    let remaining: HashSet<IngredientId> = after
        .iter()
        .flat_map(|r| r.ingredients.iter().map(|i| i.id))
        .collect();
    assert!(target.ingredients.iter().all(|i| !remaining.contains(&i.id)));
}

#[test]
fn add_ingredient_appends_in_order() {
    let mut api = empty_api();
    let id = create(&mut api, full_draft());
    let before = api.recipe(&id).unwrap().unwrap().ingredients;

    let result = api
        .add_ingredient(&id, IngredientDraft::new("feta").quantity("50").unit("g"))
        .unwrap();
    assert!(!result.is_noop());

    let after = api.recipe(&id).unwrap().unwrap();
    assert_eq!(after.ingredients.len(), before.len() + 1);
    assert_eq!(&after.ingredients[..before.len()], &before[..]);

    let added = after.ingredients.last().unwrap();
    assert_eq!(after.ingredient(&added.id).unwrap().name, "feta");
}

#[test]
fn filtering_and_categories() {
    let mut api = empty_api();
    let mut soup = RecipeDraft::new("Tomato Soup");
    soup.category = Some("Soup".into());
    let mut pie = RecipeDraft::new("Apple Pie");
    pie.category = Some("Dessert".into());
    create(&mut api, soup);
    create(&mut api, pie);

    let recipes = api.recipes().unwrap();
    let titles = |found: Vec<&Recipe>| -> Vec<String> {
        found.into_iter().map(|r| r.title.clone()).collect()
    };

    assert_eq!(
        titles(filter_recipes(&recipes, &RecipeFilter::search("soup"))),
        vec!["Tomato Soup"]
    );
    assert_eq!(
        titles(filter_recipes(&recipes, &RecipeFilter::in_category("Dessert"))),
        vec!["Apple Pie"]
    );
    assert_eq!(
        titles(filter_recipes(&recipes, &RecipeFilter::default())),
        vec!["Tomato Soup", "Apple Pie"]
    );

    create(&mut api, RecipeDraft::new("Toast"));
    assert_eq!(categories(&api.recipes().unwrap()), vec!["Dessert", "Soup"]);
    assert_eq!(
        api.categories().unwrap().categories,
        vec!["Dessert".to_string(), "Soup".to_string()]
    );
}

#[test]
fn full_update_keeps_position() {
    let mut api = empty_api();
    let first = create(&mut api, RecipeDraft::new("First"));
    let middle = create(&mut api, RecipeDraft::new("Middle"));
    let last = create(&mut api, RecipeDraft::new("Last"));

    api.update_recipe(
        &middle,
        RecipePatch {
            title: Some("Renamed".into()),
            description: Change::Set("Now with a description".into()),
            image_url: Change::Set("data:image/png;base64,AA==".into()),
            prep_time: Change::Set(5),
            cook_time: Change::Set(5),
            servings: Change::Set(1),
            category: Change::Set("Snack".into()),
            tags: Change::Set(vec!["new".into()]),
            ingredients: Change::Set(vec![IngredientDraft::new("bread")]),
        },
    )
    .unwrap();

    let order: Vec<RecipeId> = api.recipes().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(order, vec![first, middle, last]);
    assert_eq!(api.recipe(&middle).unwrap().unwrap().title, "Renamed");
}
