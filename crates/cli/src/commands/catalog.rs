//! Catalog seeding: built-in samples or a JSON file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use clementine_core::{LineItem, Price, ProductId};

/// Errors loading a catalog file.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Built-in sample catalog for demos and seeded shells.
pub fn sample_items() -> Vec<LineItem> {
    vec![
        LineItem {
            id: ProductId::new(1),
            name: "Clementine Marmalade".to_string(),
            image: "/img/marmalade.jpg".to_string(),
            price: Price::from_cents(650),
            quantity: 2,
        },
        LineItem {
            id: ProductId::new(2),
            name: "Candied Peel".to_string(),
            image: "/img/candied-peel.jpg".to_string(),
            price: Price::from_cents(425),
            quantity: 1,
        },
        LineItem {
            id: ProductId::new(3),
            name: "Citrus Press".to_string(),
            image: "/img/citrus-press.jpg".to_string(),
            price: Price::from_cents(1999),
            quantity: 1,
        },
    ]
}

/// Load a catalog from a JSON file holding an array of line items.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the file cannot be read or does not
/// parse as a line-item array.
pub fn load(path: &Path) -> Result<Vec<LineItem>, CatalogError> {
    let file = File::open(path)?;
    let items = serde_json::from_reader(BufReader::new(file))?;
    Ok(items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_sample_items_have_unique_ids() {
        let items = sample_items();
        let mut ids: Vec<i32> = items.iter().map(|i| i.id.as_i32()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_load_round_trips_sample_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_items()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load(file.path()).unwrap();
        assert_eq!(items, sample_items());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(matches!(load(file.path()), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load(Path::new("/nonexistent/catalog.json")),
            Err(CatalogError::Io(_))
        ));
    }
}
