use crate::{Collection, Recipe};

/// The title of every recipe, in collection order.
#[must_use]
pub fn titles(collection: &Collection) -> Vec<&str> {
    collection.recipes().map(Recipe::title).collect()
}

/// Finds the first recipe whose title is exactly `title`.
///
/// Unlike ingredient names, titles are not matched as substrings.
#[must_use]
pub fn recipe_by_title<'a>(collection: &'a Collection, title: &str) -> Option<&'a Recipe> {
    collection.recipes().find(|recipe| recipe.title() == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::collection;

    #[test]
    fn titles_follow_collection_order() {
        assert_eq!(
            titles(&collection()),
            ["Egg Bread", "Zuppa Inglese", "Garden Salad", "Toast"]
        );
    }

    #[test]
    fn titles_of_empty_collection() {
        assert!(titles(&Collection::default()).is_empty());
    }

    #[test]
    fn title_lookup_is_exact() {
        let collection = collection();
        assert_eq!(
            recipe_by_title(&collection, "Toast").map(Recipe::title),
            Some("Toast")
        );
        assert!(recipe_by_title(&collection, "toast").is_none());
        assert!(recipe_by_title(&collection, "Zuppa").is_none());
    }
}
