//! Summary writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use ladle_core::{SummaryRow, Value};

/// Output column headers, in order
const HEADERS: [&str; 5] = [
    "dish",
    "recipe_cash_cost",
    "temp_degC",
    "time_mins",
    "most_energy",
];

/// Summary table writer
pub struct SummaryWriter;

impl SummaryWriter {
    /// Write summary rows to a CSV file
    pub fn write_file<P: AsRef<Path>>(rows: &[SummaryRow], path: P) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(rows, file)
    }

    /// Write summary rows to a writer
    pub fn write<W: Write>(rows: &[SummaryRow], writer: W) -> CsvResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(HEADERS)?;

        for row in rows {
            let cost = render_cost(row.recipe_cash_cost);
            let temperature = row.temp_deg_c.to_string();
            let duration = row.time_mins.to_string();
            let most_energy = row.most_energy.to_string();

            csv_writer.write_record([
                row.dish.as_str(),
                cost.as_str(),
                temperature.as_str(),
                duration.as_str(),
                most_energy.as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Costs are money: exactly two decimal places when defined, the literal
/// undefined marker otherwise. Never a blank field.
fn render_cost(cost: Value) -> String {
    match cost {
        Value::Number(n) => format!("{:.2}", n),
        Value::Undefined => Value::Undefined.to_string(),
    }
}
