//! The recipe collection: the model, the searchable card list and the
//! detail, edit and delete flows.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod detail_page;
mod edit_endpoint;
mod form;
mod recipes_page;

pub use self::core::{Recipe, RecipeId, find_recipe, next_recipe_id, remove_recipe, replace_recipe};
pub use create_endpoint::create_recipe_endpoint;
pub use delete_endpoint::delete_recipe_endpoint;
pub use detail_page::{get_edit_recipe_page, get_recipe_detail_page};
pub use edit_endpoint::edit_recipe_endpoint;
pub use recipes_page::{RecipeSearch, get_recipes_page};
