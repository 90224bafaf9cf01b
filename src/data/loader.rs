use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{LaunchDataset, LaunchRecord};

pub const SITE_COL: &str = "Launch Site";
pub const PAYLOAD_COL: &str = "Payload Mass (kg)";
pub const CLASS_COL: &str = "class";
pub const CATEGORY_COL: &str = "Booster Version Category";
pub const FLIGHT_COL: &str = "Flight Number";
pub const VERSION_COL: &str = "Booster Version";

/// Columns every input table must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [SITE_COL, PAYLOAD_COL, CLASS_COL, CATEGORY_COL];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row; extra columns are ignored
/// * `.json`    – `[{ "Launch Site": "...", "Payload Mass (kg)": 0.0, ... }, ...]`
/// * `.parquet` – flat columns with the same names as the CSV headers
///
/// Every row is validated; the first bad row aborts the load.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    if records.is_empty() {
        bail!("{} contains no launch rows", path.display());
    }

    Ok(LaunchDataset::from_records(records))
}

/// Reject rows that would break the chart invariants.
fn validate(rec: &LaunchRecord, row: usize) -> Result<()> {
    if rec.launch_site.trim().is_empty() {
        bail!("Row {row}: empty '{SITE_COL}'");
    }
    if !rec.payload_mass_kg.is_finite() || rec.payload_mass_kg < 0.0 {
        bail!(
            "Row {row}: '{PAYLOAD_COL}' must be a non-negative number, got {}",
            rec.payload_mass_kg
        );
    }
    if rec.outcome_class > 1 {
        bail!("Row {row}: '{CLASS_COL}' must be 0 or 1, got {}", rec.outcome_class);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

/// CSV layout: header row with column names, one launch per row.
fn read_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<LaunchRecord>> {
    let headers = reader.headers().context("reading CSV headers")?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing '{col}' column");
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        validate(&record, row_no)?;
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Flight Number": 1,
///     "Launch Site": "CCAFS LC-40",
///     "class": 0,
///     "Payload Mass (kg)": 0.0,
///     "Booster Version": "F9 v1.0  B0003",
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for col in REQUIRED_COLUMNS {
            if !obj.contains_key(col) {
                bail!("Row {i}: missing '{col}'");
            }
        }
        let record: LaunchRecord = serde_json::from_value(row.clone())
            .with_context(|| format!("Row {i}: invalid launch record"))?;
        validate(&record, i)?;
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing one launch per row.
///
/// Numeric columns may use any integer or float physical type; they are cast
/// to `f64` / `i64` before validation. Works with files written by both
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let sites = strings(required_column(&batch, SITE_COL)?)?;
        let payloads = floats(required_column(&batch, PAYLOAD_COL)?)?;
        let classes = integers(required_column(&batch, CLASS_COL)?)?;
        let categories = strings(required_column(&batch, CATEGORY_COL)?)?;
        let flights = match batch.column_by_name(FLIGHT_COL) {
            Some(col) => Some(integers(col)?),
            None => None,
        };
        let versions = match batch.column_by_name(VERSION_COL) {
            Some(col) => Some(strings(col)?),
            None => None,
        };

        for row in 0..batch.num_rows() {
            let row_no = records.len();
            let class = classes[row]
                .with_context(|| format!("Row {row_no}: null '{CLASS_COL}'"))?;
            let outcome_class = u8::try_from(class)
                .ok()
                .filter(|c| *c <= 1)
                .with_context(|| format!("Row {row_no}: '{CLASS_COL}' must be 0 or 1, got {class}"))?;

            let record = LaunchRecord {
                flight_number: flights
                    .as_ref()
                    .and_then(|f| f[row])
                    .and_then(|n| u32::try_from(n).ok()),
                launch_site: sites[row]
                    .clone()
                    .with_context(|| format!("Row {row_no}: null '{SITE_COL}'"))?,
                payload_mass_kg: payloads[row]
                    .with_context(|| format!("Row {row_no}: null '{PAYLOAD_COL}'"))?,
                outcome_class,
                booster_version: versions.as_ref().and_then(|v| v[row].clone()),
                booster_version_category: categories[row]
                    .clone()
                    .with_context(|| format!("Row {row_no}: null '{CATEGORY_COL}'"))?,
            };
            validate(&record, row_no)?;
            records.push(record);
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn required_column<'b>(batch: &'b RecordBatch, name: &str) -> Result<&'b ArrayRef> {
    batch
        .column_by_name(name)
        .with_context(|| format!("Parquet file missing '{name}' column"))
}

fn floats(col: &ArrayRef) -> Result<Vec<Option<f64>>> {
    let cast_col = cast(col, &DataType::Float64)
        .with_context(|| format!("cannot read {:?} column as float", col.data_type()))?;
    Ok(cast_col.as_primitive::<Float64Type>().iter().collect())
}

fn integers(col: &ArrayRef) -> Result<Vec<Option<i64>>> {
    let cast_col = cast(col, &DataType::Int64)
        .with_context(|| format!("cannot read {:?} column as integer", col.data_type()))?;
    Ok(cast_col.as_primitive::<Int64Type>().iter().collect())
}

fn strings(col: &ArrayRef) -> Result<Vec<Option<String>>> {
    let cast_col = cast(col, &DataType::Utf8)
        .with_context(|| format!("cannot read {:?} column as text", col.data_type()))?;
    Ok(cast_col
        .as_string::<i32>()
        .iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int32Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    use super::*;

    const HEADER: &str =
        "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_csv_with_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "launches.csv",
            &format!(
                ",{HEADER},Mission Outcome\n\
                 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0,Success\n\
                 1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0004,v1.0,Success\n\
                 2,3,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT,Success\n"
            ),
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites(), ["CCAFS LC-40", "KSC LC-39A"]);
        let first = &ds.records()[0];
        assert_eq!(first.flight_number, Some(1));
        assert_eq!(first.booster_version.as_deref(), Some("F9 v1.0  B0003"));
        assert_eq!(ds.records()[2].payload_mass_kg, 2490.0);
        assert!(ds.records()[2].is_success());
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "min.csv",
            "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
             VAFB SLC-4E,9600,0,FT\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.records()[0].flight_number, None);
        assert_eq!(ds.records()[0].booster_version, None);
    }

    #[test]
    fn missing_required_column_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "bad.csv",
            "Launch Site,class,Booster Version Category\nCCAFS LC-40,1,v1.0\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Payload Mass (kg)"));
    }

    #[test]
    fn malformed_rows_abort_the_load() {
        let dir = TempDir::new().unwrap();
        let cases = [
            ("class.csv", "CCAFS LC-40,2,100.0,v1.0", "must be 0 or 1"),
            ("mass.csv", "CCAFS LC-40,1,-5.0,v1.0", "non-negative"),
            ("text.csv", "CCAFS LC-40,1,heavy,v1.0", "CSV row 0"),
            ("site.csv", ",1,100.0,v1.0", "empty 'Launch Site'"),
        ];
        for (name, row, expected) in cases {
            let path = write(
                &dir,
                name,
                &format!("Launch Site,class,Payload Mass (kg),Booster Version Category\n{row}\n"),
            );
            let err = load_file(&path).unwrap_err();
            let msg = format!("{err:#}");
            assert!(msg.contains(expected), "{name}: {msg}");
        }
    }

    #[test]
    fn empty_table_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.csv", &format!("{HEADER}\n"));
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("no launch rows"));
    }

    #[test]
    fn missing_file_and_unknown_extension_fail() {
        let dir = TempDir::new().unwrap();
        assert!(load_file(&dir.path().join("absent.csv")).is_err());
        let path = write(&dir, "launches.xlsx", "");
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn loads_records_oriented_json() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "launches.json",
            r#"[
                {"Flight Number": 4, "Launch Site": "CCAFS LC-40", "class": 1,
                 "Payload Mass (kg)": 500.0, "Booster Version Category": "v1.0"},
                {"Launch Site": "KSC LC-39A", "class": 0,
                 "Payload Mass (kg)": 2500, "Booster Version Category": "B4"}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].flight_number, Some(4));
        assert_eq!(ds.records()[1].payload_mass_kg, 2500.0);
    }

    #[test]
    fn json_row_without_required_key_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "bad.json",
            r#"[{"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 1.0, "Booster Version Category": "B4"}]"#,
        );
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing 'class'"));
    }

    #[test]
    fn loads_parquet_with_integer_class_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new(SITE_COL, DataType::Utf8, false),
            Field::new(PAYLOAD_COL, DataType::Float64, false),
            Field::new(CLASS_COL, DataType::Int32, false),
            Field::new(CATEGORY_COL, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["CCAFS LC-40", "KSC LC-39A"])),
                Arc::new(Float64Array::from(vec![500.0, 2500.0])),
                Arc::new(Int32Array::from(vec![1, 0])),
                Arc::new(StringArray::from(vec!["v1.0", "B4"])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0], LaunchRecord::new("CCAFS LC-40", 500.0, 1, "v1.0"));
        assert_eq!(ds.records()[1].outcome_class, 0);
    }
}
