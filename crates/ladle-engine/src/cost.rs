//! Recipe cost computation

use indexmap::IndexMap;
use tracing::{info, warn};

use ladle_core::{RecipeBook, Value};
use ladle_formula::{evaluate_formula, VariableMap};

/// Per-dish recipe cost, keyed by dish id in dish-table order
pub type CostMap = IndexMap<String, Value>;

/// Compute each dish's recipe cost from its formula and the ingredient
/// bindings in the join table.
///
/// A join row whose ingredient has no cost entry binds its variable to
/// `Undefined` (logged, not fatal) so the formula fails visibly instead of
/// evaluating against a silently incomplete mapping. A dish with no join
/// rows evaluates against an empty mapping. Join rows for unknown dishes
/// are tolerated; their bindings are simply never used.
pub fn compute_costs(book: &RecipeBook) -> CostMap {
    // Ingredient id -> unit cost; a duplicate row overwrites
    let cost_index: IndexMap<&str, f64> = book
        .ingredient_costs
        .iter()
        .map(|row| (row.ingredient.as_str(), row.cost))
        .collect();

    // Dish id -> variable bindings, in join-table row order
    let mut bindings: IndexMap<&str, VariableMap> = IndexMap::new();
    for link in &book.ingredient_links {
        let vars = bindings.entry(link.dish.as_str()).or_default();
        match cost_index.get(link.ingredient.as_str()) {
            Some(&cost) => {
                vars.insert(link.variable.clone(), Value::Number(cost));
            }
            None => {
                warn!(
                    "Missing ingredient cost for '{}' in dish '{}' (mapped as '{}')",
                    link.ingredient, link.dish, link.variable
                );
                vars.insert(link.variable.clone(), Value::Undefined);
            }
        }
    }

    let empty = VariableMap::new();
    let mut costs = CostMap::new();
    for dish in &book.dishes {
        let vars = bindings.get(dish.name.as_str()).unwrap_or(&empty);
        costs.insert(dish.name.clone(), evaluate_formula(&dish.formula, vars));
    }

    info!("Calculated recipe costs: {:?}", costs);
    costs
}
