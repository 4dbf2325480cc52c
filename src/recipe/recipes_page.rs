//! Defines the route handler for the recipes page, which combines the
//! creation form, the search box and the card list.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, base, link,
    },
    navigation::NavBar,
    store::JsonStore,
};

use super::{Recipe, form::recipe_form_fields};

/// A free-text search over the recipe collection.
///
/// A recipe matches when its cuisine or its ingredient list contains the
/// term, ignoring case. An empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeSearch {
    /// The text to look for.
    pub term: String,
}

impl RecipeSearch {
    /// Whether `recipe` matches the search term.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self.term.is_empty() {
            return true;
        }

        let term = self.term.to_lowercase();

        recipe.cuisine.to_lowercase().contains(&term)
            || recipe.ingredients.to_lowercase().contains(&term)
    }

    /// The recipes matching the search, in their input order.
    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        recipes
            .iter()
            .filter(|recipe| self.matches(recipe))
            .cloned()
            .collect()
    }
}

/// The raw query parameters of the recipes page.
#[derive(Debug, Default, Deserialize)]
pub struct RecipesQuery {
    /// Keep recipes whose cuisine or ingredients contain this text.
    pub search: Option<String>,
}

/// The state needed for the recipes page.
#[derive(Debug, Clone)]
pub struct RecipesViewState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for RecipesViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Render the recipes page.
pub async fn get_recipes_page(
    State(state): State<RecipesViewState>,
    Query(query): Query<RecipesQuery>,
) -> Result<Response, Error> {
    let recipes = {
        let store = state.store.lock().map_err(|_| Error::StoreLock)?;
        store.recipes()
    };

    let search = RecipeSearch {
        term: query.search.unwrap_or_default(),
    };
    let visible = search.apply(&recipes);

    Ok(recipes_view(&search, &visible).into_response())
}

fn recipes_view(search: &RecipeSearch, recipes: &[Recipe]) -> Markup {
    let nav_bar = NavBar::new(endpoints::RECIPES_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                h1 class="text-2xl font-bold mb-4" { "Recipes" }

                details class="mb-4"
                {
                    summary class=(LINK_STYLE) { "Add a recipe" }

                    form
                        hx-post=(endpoints::POST_RECIPE)
                        hx-target-error="#alert-container"
                        class="grid grid-cols-1 gap-4 mt-2 md:grid-cols-2 w-full p-4 bg-white \
                            rounded shadow dark:bg-gray-800 text-gray-900 dark:text-white"
                    {
                        (recipe_form_fields(None))

                        div class="md:col-span-2"
                        {
                            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Recipe" }
                        }
                    }
                }

                (search_form(search))

                @if recipes.is_empty() {
                    p class="mt-8" data-empty-state="true"
                    {
                        "No recipes match the current search."
                    }
                } @else {
                    div class="grid grid-cols-1 gap-4 mt-4 md:grid-cols-2 xl:grid-cols-3"
                    {
                        @for recipe in recipes {
                            (recipe_card(recipe))
                        }
                    }
                }
            }
        }
    );

    base("Recipes", &[], &content)
}

fn search_form(search: &RecipeSearch) -> Markup {
    html!(
        form
            method="get"
            action=(endpoints::RECIPES_VIEW)
            class="flex gap-2 items-center w-full p-4 bg-white rounded shadow \
                dark:bg-gray-800 text-gray-900 dark:text-white"
        {
            input
                type="search"
                name="search"
                value=(search.term)
                placeholder="Search by cuisine or ingredient"
                aria-label="Search recipes"
                class=(FORM_TEXT_INPUT_STYLE);

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Search" }

            a href=(endpoints::RECIPES_VIEW) class=(LINK_STYLE) { "Clear" }
        }
    )
}

fn recipe_card(recipe: &Recipe) -> Markup {
    let detail_url = format_endpoint(endpoints::RECIPE_DETAIL_VIEW, recipe.id);
    let delete_url = format_endpoint(endpoints::DELETE_RECIPE, recipe.id);

    html!(
        div class=(CARD_STYLE) data-recipe-card="true" data-recipe-id=(recipe.id)
        {
            @if !recipe.image.is_empty() {
                img
                    src=(recipe.image)
                    alt=(format!("Photo of {}", recipe.title))
                    class="h-48 w-full object-cover rounded";
            }

            h2 class="text-lg font-semibold"
            {
                a href=(detail_url) class="hover:underline" { (recipe.title) }
            }

            p class="text-sm text-gray-500 dark:text-gray-400"
            {
                (recipe.cuisine) " · " (recipe.time_minutes) " min"
            }

            div class="mt-auto flex gap-4 items-center"
            {
                a href=(detail_url) class=(LINK_STYLE) { "Details" }

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
            }
        }
    )
}
