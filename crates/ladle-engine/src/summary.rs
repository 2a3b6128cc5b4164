//! Summary table assembly

use ladle_core::{RecipeBook, SummaryRow, Value};

use crate::cost::CostMap;
use crate::energy::EnergyReport;

/// Merge costs and the energy report into one row per dish, in the dish
/// table's original row order.
///
/// A dish absent from any computed map renders the undefined marker (or an
/// unset flag); rows are never dropped, whatever the undefined density.
pub fn build_summary(
    book: &RecipeBook,
    costs: &CostMap,
    report: &EnergyReport,
) -> Vec<SummaryRow> {
    book.dishes
        .iter()
        .map(|dish| SummaryRow {
            dish: dish.name.clone(),
            recipe_cash_cost: costs.get(&dish.name).copied().unwrap_or(Value::Undefined),
            temp_deg_c: report
                .temperatures
                .get(&dish.name)
                .copied()
                .unwrap_or(Value::Undefined),
            time_mins: report
                .durations
                .get(&dish.name)
                .copied()
                .unwrap_or(Value::Undefined),
            most_energy: report
                .most_energy
                .get(&dish.name)
                .copied()
                .unwrap_or(false),
        })
        .collect()
}
