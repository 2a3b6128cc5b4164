//! Dataset reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CsvError, CsvResult};
use ladle_core::RecipeBook;

const DISH_TABLE: &str = "dish";
const DISH_INGREDIENT_TABLE: &str = "dish_ingredient";
const INGREDIENT_COST_TABLE: &str = "ingredient_cost";

/// Recipe-book dataset reader
///
/// A dataset is a directory holding one CSV file per table, the file stem
/// being the table name (`dish.csv`, `dish_ingredient.csv`,
/// `ingredient_cost.csv`). Files beyond the required three are ignored.
pub struct DatasetReader;

impl DatasetReader {
    /// Read a dataset directory into a [`RecipeBook`]
    pub fn read_dir<P: AsRef<Path>>(dir: P) -> CsvResult<RecipeBook> {
        let dir = dir.as_ref();
        Ok(RecipeBook {
            dishes: Self::read_table(dir, DISH_TABLE)?,
            ingredient_links: Self::read_table(dir, DISH_INGREDIENT_TABLE)?,
            ingredient_costs: Self::read_table(dir, INGREDIENT_COST_TABLE)?,
        })
    }

    fn read_table<T: DeserializeOwned>(dir: &Path, table: &str) -> CsvResult<Vec<T>> {
        let path = dir.join(format!("{table}.csv"));
        if !path.is_file() {
            return Err(CsvError::MissingTable(table.to_string()));
        }
        let file = File::open(path)?;
        Self::read(file)
    }

    /// Read one headed table from a reader into its record type
    pub fn read<T: DeserializeOwned, R: Read>(reader: R) -> CsvResult<Vec<T>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize() {
            rows.push(record?);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladle_core::{Dish, DishIngredient, IngredientCost};
    use std::fs;

    fn write_sample_dataset(dir: &Path) {
        fs::write(
            dir.join("dish.csv"),
            "dish,recipe_cost,temperature,duration\n\
             roast,A*2+B,hot,long\n\
             soup,A+B,simmer,short\n",
        )
        .unwrap();
        fs::write(
            dir.join("dish_ingredient.csv"),
            "dish,ingredient,ingredient_map\n\
             roast,beef,A\n\
             roast,potato,B\n",
        )
        .unwrap();
        fs::write(
            dir.join("ingredient_cost.csv"),
            "ingredient,cost\n\
             beef,9.5\n\
             potato,0.8\n",
        )
        .unwrap();
    }

    #[test]
    fn test_read_dataset_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_dataset(dir.path());

        let book = DatasetReader::read_dir(dir.path()).unwrap();

        assert_eq!(book.dishes.len(), 2);
        assert_eq!(book.dishes[0].name, "roast");
        assert_eq!(book.dishes[0].formula, "A*2+B");
        assert_eq!(book.dishes[1].temperature, "simmer");

        assert_eq!(book.ingredient_links.len(), 2);
        assert_eq!(book.ingredient_links[1].variable, "B");

        assert_eq!(book.ingredient_costs.len(), 2);
        assert_eq!(book.ingredient_costs[0].cost, 9.5);
    }

    #[test]
    fn test_missing_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_dataset(dir.path());
        fs::remove_file(dir.path().join("ingredient_cost.csv")).unwrap();

        let err = DatasetReader::read_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CsvError::MissingTable(name) if name == "ingredient_cost"));
    }

    #[test]
    fn test_read_single_table() {
        let data = "dish,ingredient,ingredient_map\nsoup,onion,A\n";
        let rows: Vec<DishIngredient> = DatasetReader::read(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].dish, "soup");
        assert_eq!(rows[0].ingredient, "onion");
        assert_eq!(rows[0].variable, "A");
    }

    #[test]
    fn test_malformed_record_is_fatal() {
        // Non-numeric cost cannot deserialize into the record type
        let data = "ingredient,cost\nbeef,expensive\n";
        let result: CsvResult<Vec<IngredientCost>> = DatasetReader::read(data.as_bytes());
        assert!(matches!(result, Err(CsvError::Csv(_))));
    }

    #[test]
    fn test_empty_table_is_just_empty() {
        let data = "dish,recipe_cost,temperature,duration\n";
        let rows: Vec<Dish> = DatasetReader::read(data.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }
}
