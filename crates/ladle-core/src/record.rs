//! Recipe-book table records

use serde::Deserialize;

use crate::value::Value;

/// One row of the `dish` table
#[derive(Debug, Clone, Deserialize)]
pub struct Dish {
    /// Unique dish identifier
    #[serde(rename = "dish")]
    pub name: String,
    /// Cost formula over the variables bound by the join table, e.g. `A+B*2`
    #[serde(rename = "recipe_cost")]
    pub formula: String,
    /// Raw temperature key, resolved fuzzily against the temperature table
    pub temperature: String,
    /// Raw duration key, resolved by exact lookup only
    pub duration: String,
}

/// One row of the `dish_ingredient` join table: binds a formula variable to
/// a real ingredient for one dish.
///
/// A row whose dish id has no counterpart in the dish table is tolerated; it
/// simply never contributes to any cost.
#[derive(Debug, Clone, Deserialize)]
pub struct DishIngredient {
    pub dish: String,
    pub ingredient: String,
    /// Formula variable name the ingredient's cost is bound to
    #[serde(rename = "ingredient_map")]
    pub variable: String,
}

/// One row of the `ingredient_cost` table
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientCost {
    pub ingredient: String,
    pub cost: f64,
}

/// The loaded dataset: all three tables, row order preserved
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    pub dishes: Vec<Dish>,
    pub ingredient_links: Vec<DishIngredient>,
    pub ingredient_costs: Vec<IngredientCost>,
}

/// One row of the output summary table
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub dish: String,
    pub recipe_cash_cost: Value,
    pub temp_deg_c: Value,
    pub time_mins: Value,
    pub most_energy: bool,
}
