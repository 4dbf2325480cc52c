//! Defines the route handlers for the recipe detail and edit pages.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, link,
    },
    navigation::NavBar,
    store::JsonStore,
};

use super::{Recipe, RecipeId, core::find_recipe, form::recipe_form_fields};

/// The state needed for the recipe detail and edit pages.
#[derive(Debug, Clone)]
pub struct RecipeDetailState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for RecipeDetailState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Render the detail page for a single recipe.
///
/// A missing ID renders an explicit not-found state rather than the generic
/// 404 page.
pub async fn get_recipe_detail_page(
    State(state): State<RecipeDetailState>,
    Path(recipe_id): Path<RecipeId>,
) -> Result<Response, Error> {
    let recipes = {
        let store = state.store.lock().map_err(|_| Error::StoreLock)?;
        store.recipes()
    };

    let response = match find_recipe(&recipes, recipe_id) {
        Some(recipe) => recipe_detail_view(recipe).into_response(),
        None => (StatusCode::NOT_FOUND, recipe_missing_view()).into_response(),
    };

    Ok(response)
}

/// Render the edit page for a single recipe.
pub async fn get_edit_recipe_page(
    State(state): State<RecipeDetailState>,
    Path(recipe_id): Path<RecipeId>,
) -> Result<Response, Error> {
    let recipes = {
        let store = state.store.lock().map_err(|_| Error::StoreLock)?;
        store.recipes()
    };

    let response = match find_recipe(&recipes, recipe_id) {
        Some(recipe) => edit_recipe_view(recipe).into_response(),
        None => (StatusCode::NOT_FOUND, recipe_missing_view()).into_response(),
    };

    Ok(response)
}

fn recipe_detail_view(recipe: &Recipe) -> Markup {
    let nav_bar = NavBar::new(endpoints::RECIPES_VIEW).into_html();
    let edit_url = format_endpoint(endpoints::EDIT_RECIPE_VIEW, recipe.id);
    let delete_url = format_endpoint(endpoints::DELETE_RECIPE, recipe.id);

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            article class="w-full max-w-screen-md" data-recipe-detail="true" data-recipe-id=(recipe.id)
            {
                @if !recipe.image.is_empty() {
                    img
                        src=(recipe.image)
                        alt=(format!("Photo of {}", recipe.title))
                        class="h-64 w-full object-cover rounded mb-4";
                }

                h1 class="text-2xl font-bold mb-2" { (recipe.title) }

                p class="text-gray-500 dark:text-gray-400 mb-4"
                {
                    (recipe.cuisine) " · " (recipe.time_minutes) " minutes"
                }

                h2 class="text-lg font-semibold mb-1" { "Ingredients" }
                p class="mb-4 whitespace-pre-line" { (recipe.ingredients) }

                h2 class="text-lg font-semibold mb-1" { "Instructions" }
                p class="mb-6 whitespace-pre-line" { (recipe.instructions) }

                div class="flex gap-4 items-center"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    button
                        class=(BUTTON_DELETE_STYLE)
                        hx-delete=(delete_url)
                        hx-confirm=(format!(
                            "Are you sure you want to delete '{}'? This cannot be undone.",
                            recipe.title
                        ))
                    {
                        "Delete"
                    }

                    (link(endpoints::RECIPES_VIEW, "Back to recipes"))
                }
            }
        }
    );

    base(&recipe.title, &[], &content)
}

fn edit_recipe_view(recipe: &Recipe) -> Markup {
    let nav_bar = NavBar::new(endpoints::RECIPES_VIEW).into_html();
    let save_url = format_endpoint(endpoints::PUT_RECIPE, recipe.id);
    let detail_url = format_endpoint(endpoints::RECIPE_DETAIL_VIEW, recipe.id);

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-md"
            {
                h1 class="text-2xl font-bold mb-4" { "Edit Recipe" }

                form
                    hx-put=(save_url)
                    hx-target-error="#alert-container"
                    class="grid grid-cols-1 gap-4 md:grid-cols-2 w-full p-4 bg-white \
                        rounded shadow dark:bg-gray-800 text-gray-900 dark:text-white"
                {
                    (recipe_form_fields(Some(recipe)))

                    div class="md:col-span-2"
                    {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
                    }
                }

                p class="mt-4" { (link(&detail_url, "Cancel")) }
            }
        }
    );

    base("Edit Recipe", &[], &content)
}

fn recipe_missing_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::RECIPES_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-md text-center py-16" data-recipe-missing="true"
            {
                h1 class="text-2xl font-bold mb-4" { "Recipe not found." }

                p { (link(endpoints::RECIPES_VIEW, "Back to recipes")) }
            }
        }
    );

    base("Recipe not found", &[], &content)
}
