use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let recipes = store.list_recipes()?;
    Ok(CmdResult::default().with_categories(filter::categories(&recipes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, delete};
    use crate::model::RecipeDraft;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn derives_sorted_distinct_categories() {
        let fixture = StoreFixture::new()
            .with_recipe("Tomato Soup", Some("Soup"))
            .with_recipe("Apple Pie", Some("Dessert"))
            .with_recipe("Toast", None);

        let result = run(&fixture.store).unwrap();
        assert_eq!(result.categories, vec!["Dessert", "Soup"]);
    }

    #[test]
    fn recomputed_after_changes() {
        let mut fixture = StoreFixture::new().with_recipe("Apple Pie", Some("Dessert"));
        let pie = fixture.id_of("Apple Pie");

        let mut draft = RecipeDraft::new("Omelette");
        draft.category = Some("Breakfast".into());
        create::run(&mut fixture.store, draft).unwrap();
        assert_eq!(
            run(&fixture.store).unwrap().categories,
            vec!["Breakfast", "Dessert"]
        );

        delete::run(&mut fixture.store, &[pie]).unwrap();
        assert_eq!(run(&fixture.store).unwrap().categories, vec!["Breakfast"]);
    }
}
