//! Defines the endpoint for deleting a recipe.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{AppState, Error, endpoints, store::JsonStore};

use super::{RecipeId, core::remove_recipe};

/// The state needed to delete a recipe.
#[derive(Debug, Clone)]
pub struct DeleteRecipeState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for DeleteRecipeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting the recipe with the ID given in the URL.
///
/// Deleting a recipe that does not exist is treated as a no-op. The delete
/// button appears both on the cards and on the detail page, so the handler
/// redirects to the recipes page rather than returning a partial.
pub async fn delete_recipe_endpoint(
    State(state): State<DeleteRecipeState>,
    Path(recipe_id): Path<RecipeId>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLock.into_alert_response();
        }
    };

    let mut recipes = store.recipes();
    remove_recipe(&mut recipes, recipe_id);

    if let Err(error) = store.set_recipes(recipes) {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::RECIPES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
