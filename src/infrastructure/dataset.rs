use crate::application::trends::RentalRow;
use crate::domain::errors::DatasetError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Reads the rental dataset once at startup. Only `city` and `total (R$)`
/// are deserialized; other columns in the file are ignored.
pub fn load_rentals(path: &Path) -> Result<Vec<RentalRow>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::Missing {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = csv::Reader::from_reader(BufReader::new(file));
    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize().enumerate() {
        let row: RentalRow = result.map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            row: idx + 1,
            source,
        })?;
        rows.push(row);
    }

    info!("Loaded {} rental records from {:?}", rows.len(), path);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_dataset_file() {
        let err = load_rentals(Path::new("non_existent_rentals.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Missing { .. }));
    }

    #[test]
    fn test_parses_needed_columns_only() {
        let path = std::env::temp_dir().join("rentscope_test_dataset_columns.csv");
        std::fs::write(
            &path,
            "city,area,rooms,total (R$)\n\
             Campinas,70,2,2480\n\
             São Paulo,120,3,5100\n",
        )
        .unwrap();

        let rows = load_rentals(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city, "Campinas");
        assert_eq!(rows[0].total, dec!(2480));
        assert_eq!(rows[1].total, dec!(5100));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_reports_bad_row_number() {
        let path = std::env::temp_dir().join("rentscope_test_dataset_bad_row.csv");
        std::fs::write(
            &path,
            "city,total (R$)\n\
             Campinas,2480\n\
             São Paulo,not-a-number\n",
        )
        .unwrap();

        let err = load_rentals(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { row: 2, .. }));

        let _ = std::fs::remove_file(&path);
    }
}
