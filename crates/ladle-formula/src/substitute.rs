//! Variable substitution for cost formulas

use indexmap::IndexMap;

use ladle_core::Value;

/// Variable → cost bindings for one dish, in join-table row order
pub type VariableMap = IndexMap<String, Value>;

/// Textually substitute each variable's rendered value into `formula`.
///
/// Substitution runs in the map's insertion order and each replacement
/// operates on the output of the previous one. A variable name occurring
/// inside another variable name, or inside an already-substituted numeric
/// literal, therefore corrupts the text. That order dependence is part of
/// the defined output of this system; the tests pin it exactly.
///
/// An [`Value::Undefined`] binding substitutes the literal undefined token,
/// which the caller detects after substitution.
pub fn substitute(formula: &str, variables: &VariableMap) -> String {
    let mut substituted = formula.to_string();
    for (name, value) in variables {
        substituted = substituted.replace(name.as_str(), &value.to_string());
    }
    substituted
}
