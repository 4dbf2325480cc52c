//! Parsing, validation and markup of the recipe form, shared by create and
//! edit.

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

use super::{Recipe, RecipeId};

/// The minimum title length, matching the creation form's validation hint.
const MIN_TITLE_LENGTH: usize = 3;

/// The raw form data for creating or editing a recipe.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeForm {
    /// The recipe's title.
    pub title: String,
    /// The ingredient list.
    pub ingredients: String,
    /// The preparation steps.
    pub instructions: String,
    /// The cuisine.
    pub cuisine: String,
    /// The preparation time in minutes, as entered.
    pub time_minutes: String,
    /// An optional photo URL.
    #[serde(default)]
    pub image: String,
}

/// Validate `form` into a [Recipe] with the given `id`.
///
/// All fields except the image are required, the title must be at least
/// three characters long and the preparation time must be a positive whole
/// number of minutes.
pub fn parse_recipe_form(form: RecipeForm, id: RecipeId) -> Result<Recipe, Error> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(Error::MissingField("title"));
    }
    if title.chars().count() < MIN_TITLE_LENGTH {
        return Err(Error::TitleTooShort);
    }
    if form.ingredients.trim().is_empty() {
        return Err(Error::MissingField("ingredients"));
    }
    if form.instructions.trim().is_empty() {
        return Err(Error::MissingField("instructions"));
    }
    if form.cuisine.trim().is_empty() {
        return Err(Error::MissingField("cuisine"));
    }
    if form.time_minutes.trim().is_empty() {
        return Err(Error::MissingField("time"));
    }

    let time_minutes = form
        .time_minutes
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::NonPositiveTime)?;

    if time_minutes == 0 {
        return Err(Error::NonPositiveTime);
    }

    Ok(Recipe {
        id,
        title: title.to_owned(),
        ingredients: form.ingredients,
        instructions: form.instructions,
        cuisine: form.cuisine,
        time_minutes,
        image: form.image,
    })
}

/// The input fields of the recipe form, prefilled from `recipe` when
/// editing.
pub(super) fn recipe_form_fields(recipe: Option<&Recipe>) -> Markup {
    html!(
        div
        {
            label for="title" class=(FORM_LABEL_STYLE) { "Title" }
            input
                id="title"
                type="text"
                name="title"
                value=[recipe.map(|recipe| recipe.title.as_str())]
                minlength="3"
                required
                autofocus
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="cuisine" class=(FORM_LABEL_STYLE) { "Cuisine" }
            input
                id="cuisine"
                type="text"
                name="cuisine"
                value=[recipe.map(|recipe| recipe.cuisine.as_str())]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="time_minutes" class=(FORM_LABEL_STYLE) { "Time (minutes)" }
            input
                id="time_minutes"
                type="number"
                name="time_minutes"
                min="1"
                step="1"
                value=[recipe.map(|recipe| recipe.time_minutes.to_string())]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="image" class=(FORM_LABEL_STYLE) { "Photo URL (optional)" }
            input
                id="image"
                type="url"
                name="image"
                value=[recipe.map(|recipe| recipe.image.as_str())]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div class="md:col-span-2"
        {
            label for="ingredients" class=(FORM_LABEL_STYLE) { "Ingredients" }
            textarea
                id="ingredients"
                name="ingredients"
                rows="3"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @if let Some(recipe) = recipe { (recipe.ingredients) }
            }
        }

        div class="md:col-span-2"
        {
            label for="instructions" class=(FORM_LABEL_STYLE) { "Instructions" }
            textarea
                id="instructions"
                name="instructions"
                rows="4"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @if let Some(recipe) = recipe { (recipe.instructions) }
            }
        }
    )
}

#[cfg(test)]
mod recipe_form_tests {
    use crate::Error;

    use super::{RecipeForm, parse_recipe_form};

    fn valid_form() -> RecipeForm {
        RecipeForm {
            title: "Paella".to_owned(),
            ingredients: "Rice, saffron, chicken".to_owned(),
            instructions: "Cook the rice with everything else.".to_owned(),
            cuisine: "Spanish".to_owned(),
            time_minutes: "45".to_owned(),
            image: String::new(),
        }
    }

    #[test]
    fn parses_a_valid_form() {
        let recipe = parse_recipe_form(valid_form(), 3).expect("form should parse");

        assert_eq!(recipe.id, 3);
        assert_eq!(recipe.time_minutes, 45);
    }

    #[test]
    fn rejects_short_titles() {
        let form = RecipeForm {
            title: "Pa".to_owned(),
            ..valid_form()
        };

        assert_eq!(parse_recipe_form(form, 1), Err(Error::TitleTooShort));
    }

    #[test]
    fn rejects_zero_time() {
        let form = RecipeForm {
            time_minutes: "0".to_owned(),
            ..valid_form()
        };

        assert_eq!(parse_recipe_form(form, 1), Err(Error::NonPositiveTime));
    }

    #[test]
    fn rejects_negative_and_non_numeric_time() {
        for time in ["-20", "soon", "1.5"] {
            let form = RecipeForm {
                time_minutes: time.to_owned(),
                ..valid_form()
            };

            assert_eq!(
                parse_recipe_form(form, 1),
                Err(Error::NonPositiveTime),
                "time {time:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_missing_ingredients() {
        let form = RecipeForm {
            ingredients: " ".to_owned(),
            ..valid_form()
        };

        assert_eq!(
            parse_recipe_form(form, 1),
            Err(Error::MissingField("ingredients"))
        );
    }
}
