//! In-memory raw district dataset and its CSV loader.
//!
//! The district statistics come from a pivot-table sheet exported to CSV.
//! The export starts with a few title rows, then a header row whose first
//! column holds the district name (its label varies between exports, so it
//! is ignored) followed by one column per statistic. Every cell is kept as
//! a string; numeric validation is deferred to [`crate::coerce`].

use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde_json::Value;
use waste_map_district_models::{DistrictField, RawRecord};

use crate::{DistrictError, LabelMapping};

/// Normalizes a district name for lookup: trimmed and lowercased.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Raw attribute records for every district in a loaded source table.
#[derive(Debug, Clone, Default)]
pub struct RawDataset {
    /// Keyed by [`normalize_name`]; the value keeps the name as written in
    /// the source.
    districts: BTreeMap<String, (String, RawRecord)>,
}

impl RawDataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a district record.
    ///
    /// If a district with the same normalized name already exists the first
    /// record is kept and `false` is returned.
    pub fn insert(&mut self, name: &str, record: RawRecord) -> bool {
        let key = normalize_name(name);
        if self.districts.contains_key(&key) {
            log::warn!("Duplicate district row '{}', keeping the first", name.trim());
            return false;
        }
        self.districts
            .insert(key, (name.trim().to_owned(), record));
        true
    }

    /// Looks up a district by name, ignoring case and surrounding whitespace.
    ///
    /// Returns the name as written in the source together with its record.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<(&str, &RawRecord)> {
        self.districts
            .get(&normalize_name(name))
            .map(|(display, record)| (display.as_str(), record))
    }

    /// District names as written in the source, sorted case-insensitively.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.districts
            .values()
            .map(|(display, _)| display.as_str())
            .collect()
    }

    /// Number of districts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    /// Whether the dataset holds no districts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// Loads a dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`DistrictError`] if the file cannot be opened or parsed.
    pub fn from_csv_path(path: &Path, options: &CsvOptions) -> Result<Self, DistrictError> {
        let file = std::fs::File::open(path)?;
        log::debug!("Reading district data from {}", path.display());
        Self::from_csv_reader(file, options)
    }

    /// Loads a dataset from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns [`DistrictError::MissingHeader`] if there is no header row
    /// after [`CsvOptions::skip_rows`], or [`DistrictError::Csv`] on
    /// malformed input.
    pub fn from_csv_reader<R: Read>(reader: R, options: &CsvOptions) -> Result<Self, DistrictError> {
        // Title rows are skipped as physical lines; the csv reader would
        // silently drop blank ones and shift the header.
        let mut input = BufReader::new(reader);
        let mut line = Vec::new();
        for _ in 0..options.skip_rows {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                return Err(DistrictError::MissingHeader {
                    skipped: options.skip_rows,
                });
            }
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let mut rows = reader.records();

        let header = rows.next().ok_or(DistrictError::MissingHeader {
            skipped: options.skip_rows,
        })??;

        // Column 0 is the district name whatever its label says.
        let columns: Vec<Option<DistrictField>> = header
            .iter()
            .enumerate()
            .map(|(i, label)| {
                if i == 0 {
                    return None;
                }
                let field = options.labels.field_for(label);
                if field.is_none() && !label.is_empty() {
                    log::debug!("Ignoring unmapped column '{label}'");
                }
                field
            })
            .collect();

        let mut dataset = Self::new();
        let mut skipped = 0_usize;

        for row in rows {
            let row = row?;
            let name = row.get(0).unwrap_or("");
            if name.is_empty() {
                skipped += 1;
                continue;
            }

            let mut record = RawRecord::new();
            for (i, field) in columns.iter().enumerate() {
                let Some(field) = field else {
                    continue;
                };
                let value = match row.get(i) {
                    Some("") | None => Value::Null,
                    Some(cell) => Value::String(cell.to_owned()),
                };
                record.insert(field.as_ref().to_owned(), value);
            }
            dataset.insert(name, record);
        }

        if skipped > 0 {
            log::debug!("Skipped {skipped} rows without a district name");
        }
        log::info!("Loaded {} districts", dataset.len());

        Ok(dataset)
    }
}

impl FromIterator<(String, RawRecord)> for RawDataset {
    fn from_iter<T: IntoIterator<Item = (String, RawRecord)>>(iter: T) -> Self {
        let mut dataset = Self::new();
        for (name, record) in iter {
            dataset.insert(&name, record);
        }
        dataset
    }
}

/// Options for [`RawDataset::from_csv_reader`].
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Rows to skip before the header row.
    pub skip_rows: usize,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Column label mapping.
    pub labels: LabelMapping,
}

impl Default for CsvOptions {
    /// Defaults match the district pivot export: two title rows, comma
    /// separated, pivot-sheet labels.
    fn default() -> Self {
        Self {
            skip_rows: 2,
            delimiter: b',',
            labels: LabelMapping::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const PIVOT_CSV: &str = "\
District Wise Summary,,,
,,,
Row Labels,Sum of Census 2011 Population,Sum of SW_Generation (TPD),Remarks
Bhopal,2371061,850.5,ok
 Indore ,3276697,,late
,,,
Sagar,n/a,120,
";

    fn load() -> RawDataset {
        RawDataset::from_csv_reader(PIVOT_CSV.as_bytes(), &CsvOptions::default()).unwrap()
    }

    #[test]
    fn loads_pivot_export() {
        let dataset = load();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.names(), vec!["Bhopal", "Indore", "Sagar"]);

        let (_, bhopal) = dataset.find("Bhopal").unwrap();
        assert_eq!(bhopal.get("population_census"), Some(&json!("2371061")));
        assert_eq!(bhopal.get("waste_generated_tpd"), Some(&json!("850.5")));
        assert!(!bhopal.contains_key("Remarks"));
    }

    #[test]
    fn blank_cells_become_null() {
        let dataset = load();
        let (_, indore) = dataset.find("indore").unwrap();
        assert_eq!(indore.get("waste_generated_tpd"), Some(&Value::Null));
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let dataset = load();
        let (name, _) = dataset.find("  INDORE\t").unwrap();
        assert_eq!(name, "Indore");
        assert!(dataset.find("Gwalior").is_none());
    }

    #[test]
    fn missing_header_is_an_error() {
        let options = CsvOptions {
            skip_rows: 10,
            ..CsvOptions::default()
        };
        let err = RawDataset::from_csv_reader(PIVOT_CSV.as_bytes(), &options).unwrap_err();
        assert!(matches!(err, DistrictError::MissingHeader { skipped: 10 }));
    }

    #[test]
    fn blank_title_line_counts_as_a_row() {
        let csv = "District Wise Summary\n\nRow Labels,Sum of SW_Generation (TPD)\nBhopal,850.5\n";
        let dataset = RawDataset::from_csv_reader(csv.as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(dataset.names(), vec!["Bhopal"]);
        let (_, bhopal) = dataset.find("Bhopal").unwrap();
        assert_eq!(bhopal.get("waste_generated_tpd"), Some(&json!("850.5")));
    }

    #[test]
    fn no_skipped_rows() {
        let csv = "District,Sum of SW_Generation (TPD)\r\nRewa,12\r\n";
        let options = CsvOptions {
            skip_rows: 0,
            ..CsvOptions::default()
        };
        let dataset = RawDataset::from_csv_reader(csv.as_bytes(), &options).unwrap();
        let (_, rewa) = dataset.find("rewa").unwrap();
        assert_eq!(rewa.get("waste_generated_tpd"), Some(&json!("12")));
    }

    #[test]
    fn keeps_first_duplicate() {
        let mut dataset = RawDataset::new();
        let mut first = RawRecord::new();
        first.insert("waste_generated_tpd".to_owned(), json!(1.0));
        let mut second = RawRecord::new();
        second.insert("waste_generated_tpd".to_owned(), json!(2.0));

        assert!(dataset.insert("Rewa", first));
        assert!(!dataset.insert("REWA ", second));

        let (_, record) = dataset.find("rewa").unwrap();
        assert_eq!(record.get("waste_generated_tpd"), Some(&json!(1.0)));
    }
}
