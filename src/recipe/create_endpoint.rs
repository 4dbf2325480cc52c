//! Defines the endpoint for adding a recipe.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{AppState, Error, endpoints, store::JsonStore};

use super::{
    core::next_recipe_id,
    form::{RecipeForm, parse_recipe_form},
};

/// The state needed to add a recipe.
#[derive(Debug, Clone)]
pub struct CreateRecipeState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for CreateRecipeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for adding a recipe, redirects back to the recipes page
/// on success.
pub async fn create_recipe_endpoint(
    State(state): State<CreateRecipeState>,
    Form(form): Form<RecipeForm>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLock.into_alert_response();
        }
    };

    let mut recipes = store.recipes();

    let recipe = match parse_recipe_form(form, next_recipe_id(&recipes)) {
        Ok(recipe) => recipe,
        Err(error) => return error.into_alert_response(),
    };

    recipes.push(recipe);

    if let Err(error) = store.set_recipes(recipes) {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::RECIPES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
