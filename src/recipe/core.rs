//! The recipe model and the collection-level operations on it.

use serde::{Deserialize, Serialize};

/// Alias for recipe record IDs.
pub type RecipeId = i64;

/// A recipe in the user's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// The record's unique ID within the recipe collection.
    pub id: RecipeId,
    /// The recipe's title.
    pub title: String,
    /// The ingredient list, free text.
    pub ingredients: String,
    /// The preparation steps.
    pub instructions: String,
    /// The cuisine, free text.
    pub cuisine: String,
    /// Preparation time in minutes. Always positive.
    pub time_minutes: u32,
    /// A URL for a photo of the dish. May be empty.
    #[serde(default)]
    pub image: String,
}

/// The ID to assign to the next recipe, one more than the largest existing
/// ID.
pub fn next_recipe_id(recipes: &[Recipe]) -> RecipeId {
    recipes.iter().map(|recipe| recipe.id).max().unwrap_or(0) + 1
}

/// Find the recipe with `id`.
pub fn find_recipe(recipes: &[Recipe], id: RecipeId) -> Option<&Recipe> {
    recipes.iter().find(|recipe| recipe.id == id)
}

/// Replace the recipe whose ID matches `replacement.id`.
///
/// Returns false if no record has that ID, in which case the collection is
/// unchanged.
pub fn replace_recipe(recipes: &mut [Recipe], replacement: Recipe) -> bool {
    match recipes
        .iter_mut()
        .find(|recipe| recipe.id == replacement.id)
    {
        Some(recipe) => {
            *recipe = replacement;
            true
        }
        None => false,
    }
}

/// Remove the recipe with `id`. Removing a missing ID is a no-op.
pub fn remove_recipe(recipes: &mut Vec<Recipe>, id: RecipeId) {
    recipes.retain(|recipe| recipe.id != id);
}

#[cfg(test)]
mod recipe_tests {
    use super::{Recipe, next_recipe_id, remove_recipe, replace_recipe};

    pub(crate) fn recipe(id: i64, title: &str) -> Recipe {
        Recipe {
            id,
            title: title.to_owned(),
            ingredients: "Rice, saffron, chicken".to_owned(),
            instructions: "Cook the rice with everything else.".to_owned(),
            cuisine: "Spanish".to_owned(),
            time_minutes: 45,
            image: String::new(),
        }
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_recipe_id(&[]), 1);
        assert_eq!(next_recipe_id(&[recipe(3, "a"), recipe(7, "b")]), 8);
    }

    #[test]
    fn replace_targets_only_the_matching_id() {
        let mut recipes = vec![recipe(1, "a"), recipe(2, "b")];
        let replacement = Recipe {
            time_minutes: 90,
            ..recipe(2, "b")
        };

        assert!(replace_recipe(&mut recipes, replacement.clone()));
        assert_eq!(recipes[1], replacement);
        assert_eq!(recipes[0], recipe(1, "a"));
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut recipes = vec![recipe(1, "a")];

        remove_recipe(&mut recipes, 9);

        assert_eq!(recipes, vec![recipe(1, "a")]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json =
            serde_json::to_string(&recipe(1, "Paella")).expect("could not serialize recipe");

        assert!(json.contains("\"timeMinutes\":45"), "got {json}");
    }
}
