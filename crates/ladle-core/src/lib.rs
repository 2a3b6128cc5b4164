//! # ladle-core
//!
//! Core data model for ladle: recipe-book table records, the tagged
//! [`Value`] result type, insertion-ordered lookup tables, and the
//! approximate key matcher.

pub mod lookup;
pub mod matcher;
pub mod record;
pub mod value;

pub use lookup::{LookupTable, Lookups};
pub use matcher::find_match;
pub use record::{Dish, DishIngredient, IngredientCost, RecipeBook, SummaryRow};
pub use value::{Value, UNDEFINED_TOKEN};
