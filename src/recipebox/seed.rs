//! The sample collection every session starts from.

use crate::model::{IngredientDraft, RecipeDraft};

/// Stand-in for an authenticated user; there is no auth.
pub const DEFAULT_USER: &str = "Home Cook";

pub fn sample_recipes() -> Vec<RecipeDraft> {
    vec![
        RecipeDraft {
            title: "Tomato Soup".into(),
            description: Some("Silky roasted tomato soup with basil.".into()),
            prep_time: Some(10),
            cook_time: Some(30),
            servings: Some(4),
            category: Some("Soup".into()),
            tags: Some(vec!["vegetarian".into(), "comfort".into()]),
            ingredients: vec![
                IngredientDraft::new("tomatoes").quantity("1").unit("kg"),
                IngredientDraft::new("onion").quantity("1"),
                IngredientDraft::new("garlic cloves").quantity("3"),
                IngredientDraft::new("vegetable stock").quantity("500").unit("ml"),
                IngredientDraft::new("basil").quantity("1").unit("handful"),
            ],
            ..Default::default()
        },
        RecipeDraft {
            title: "Apple Pie".into(),
            description: Some("Classic double-crust pie with cinnamon apples.".into()),
            prep_time: Some(40),
            cook_time: Some(50),
            servings: Some(8),
            category: Some("Dessert".into()),
            tags: Some(vec!["baking".into(), "autumn".into()]),
            ingredients: vec![
                IngredientDraft::new("apples").quantity("6"),
                IngredientDraft::new("flour").quantity("2 1/2").unit("cup"),
                IngredientDraft::new("butter").quantity("250").unit("g"),
                IngredientDraft::new("sugar").quantity("3/4").unit("cup"),
                IngredientDraft::new("cinnamon").quantity("1").unit("tsp"),
            ],
            ..Default::default()
        },
        RecipeDraft {
            title: "Fluffy Pancakes".into(),
            description: Some("Weekend breakfast pancakes.".into()),
            prep_time: Some(10),
            cook_time: Some(15),
            servings: Some(4),
            category: Some("Breakfast".into()),
            tags: Some(vec!["quick".into(), "vegetarian".into()]),
            ingredients: vec![
                IngredientDraft::new("flour").quantity("1 1/2").unit("cup"),
                IngredientDraft::new("milk").quantity("1 1/4").unit("cup"),
                IngredientDraft::new("eggs").quantity("1"),
                IngredientDraft::new("butter").quantity("3").unit("tbsp"),
            ],
            ..Default::default()
        },
        RecipeDraft {
            title: "Greek Salad".into(),
            description: Some("Tomato, cucumber, olives and feta.".into()),
            prep_time: Some(15),
            servings: Some(2),
            category: Some("Salad".into()),
            tags: Some(vec!["quick".into(), "no-cook".into()]),
            ingredients: vec![
                IngredientDraft::new("tomatoes").quantity("3"),
                IngredientDraft::new("cucumber").quantity("1"),
                IngredientDraft::new("feta").quantity("200").unit("g"),
                IngredientDraft::new("kalamata olives"),
            ],
            ..Default::default()
        },
        RecipeDraft {
            title: "Spaghetti Carbonara".into(),
            description: Some("Eggs, pecorino, guanciale and black pepper.".into()),
            prep_time: Some(10),
            cook_time: Some(15),
            servings: Some(2),
            category: Some("Main".into()),
            tags: Some(vec!["pasta".into(), "quick".into()]),
            ingredients: vec![
                IngredientDraft::new("spaghetti").quantity("200").unit("g"),
                IngredientDraft::new("guanciale").quantity("100").unit("g"),
                IngredientDraft::new("eggs").quantity("2"),
                IngredientDraft::new("pecorino").quantity("50").unit("g"),
            ],
            ..Default::default()
        },
    ]
}
