//! Defines the endpoint for updating a recipe.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    store::JsonStore,
};

use super::{
    RecipeId,
    core::replace_recipe,
    form::{RecipeForm, parse_recipe_form},
};

/// The state needed to update a recipe.
#[derive(Debug, Clone)]
pub struct EditRecipeState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for EditRecipeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for updating the recipe with the ID given in the URL.
///
/// Redirects to the detail page on success.
pub async fn edit_recipe_endpoint(
    State(state): State<EditRecipeState>,
    Path(recipe_id): Path<RecipeId>,
    Form(form): Form<RecipeForm>,
) -> Response {
    let recipe = match parse_recipe_form(form, recipe_id) {
        Ok(recipe) => recipe,
        Err(error) => return error.into_alert_response(),
    };

    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLock.into_alert_response();
        }
    };

    let mut recipes = store.recipes();

    if !replace_recipe(&mut recipes, recipe) {
        return Error::UpdateMissingRecipe.into_alert_response();
    }

    if let Err(error) = store.set_recipes(recipes) {
        return error.into_alert_response();
    }

    (
        HxRedirect(format_endpoint(endpoints::RECIPE_DETAIL_VIEW, recipe_id)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod edit_recipe_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Form,
        extract::{Path, State},
        http::{HeaderValue, StatusCode},
    };
    use axum_htmx::HX_REDIRECT;

    use crate::{
        endpoints::{self, format_endpoint},
        recipe::{Recipe, form::RecipeForm},
        store::JsonStore,
    };

    use super::{EditRecipeState, edit_recipe_endpoint};

    fn seeded_state() -> EditRecipeState {
        let mut store = JsonStore::open_in_memory();
        store
            .set_recipes(vec![Recipe {
                id: 1,
                title: "Paella".to_owned(),
                ingredients: "Rice, saffron, chicken".to_owned(),
                instructions: "Cook the rice with everything else.".to_owned(),
                cuisine: "Spanish".to_owned(),
                time_minutes: 45,
                image: String::new(),
            }])
            .expect("could not seed recipes");

        EditRecipeState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn updated_form() -> RecipeForm {
        RecipeForm {
            title: "Seafood Paella".to_owned(),
            ingredients: "Rice, saffron, prawns".to_owned(),
            instructions: "Cook the rice with everything else.".to_owned(),
            cuisine: "Spanish".to_owned(),
            time_minutes: "60".to_owned(),
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn updates_recipe_and_redirects_to_the_detail_page() {
        let state = seeded_state();

        let response =
            edit_recipe_endpoint(State(state.clone()), Path(1), Form(updated_form())).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let want_url = format_endpoint(endpoints::RECIPE_DETAIL_VIEW, 1);
        assert_eq!(
            response.headers().get(HX_REDIRECT),
            Some(&HeaderValue::from_str(&want_url).unwrap())
        );

        let recipes = state.store.lock().unwrap().recipes();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Seafood Paella");
        assert_eq!(recipes[0].time_minutes, 60);
    }

    #[tokio::test]
    async fn missing_recipe_is_an_error_and_changes_nothing() {
        let state = seeded_state();

        let response =
            edit_recipe_endpoint(State(state.clone()), Path(42), Form(updated_form())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let recipes = state.store.lock().unwrap().recipes();
        assert_eq!(recipes[0].title, "Paella");
    }

    #[tokio::test]
    async fn invalid_form_changes_nothing() {
        let state = seeded_state();
        let form = RecipeForm {
            time_minutes: "-5".to_owned(),
            ..updated_form()
        };

        let response = edit_recipe_endpoint(State(state.clone()), Path(1), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let recipes = state.store.lock().unwrap().recipes();
        assert_eq!(recipes[0].time_minutes, 45);
    }
}
