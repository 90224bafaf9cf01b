use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_f64() * items.len() as f64) as usize % items.len()]
    }
}

/// One booster generation: flights flown, payload envelope, success odds.
struct Era {
    category: &'static str,
    prefix: &'static str,
    flights: usize,
    payload_max: f64,
    success_rate: f64,
    sites: &'static [&'static str],
}

const ERAS: [Era; 5] = [
    Era { category: "v1.0", prefix: "F9 v1.0  B", flights: 5, payload_max: 700.0, success_rate: 0.2, sites: &["CCAFS LC-40"] },
    Era { category: "v1.1", prefix: "F9 v1.1  B", flights: 15, payload_max: 4500.0, success_rate: 0.1, sites: &["CCAFS LC-40", "VAFB SLC-4E"] },
    Era { category: "FT", prefix: "F9 FT B", flights: 24, payload_max: 9600.0, success_rate: 0.65, sites: &["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"] },
    Era { category: "B4", prefix: "F9 B4 B", flights: 11, payload_max: 9600.0, success_rate: 0.55, sites: &["KSC LC-39A", "VAFB SLC-4E", "CCAFS SLC-40"] },
    Era { category: "B5", prefix: "F9 B5 B", flights: 1, payload_max: 3700.0, success_rate: 1.0, sites: &["CCAFS SLC-40"] },
];

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Flight Number")]
    flight_number: i64,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

fn generate(rng: &mut SimpleRng) -> Vec<Row> {
    let mut rows = Vec::new();
    for era in &ERAS {
        for i in 0..era.flights {
            let flight_number = rows.len() as i64 + 1;
            // Payloads are reported in 1 kg resolution.
            let payload = (rng.next_f64() * era.payload_max).round();
            let class = i64::from(rng.next_f64() < era.success_rate);
            rows.push(Row {
                flight_number,
                launch_site: rng.pick(era.sites).to_string(),
                class,
                payload_mass_kg: payload,
                booster_version: format!("{}{}", era.prefix, 1000 + flight_number as usize + i),
                booster_version_category: era.category.to_string(),
            });
        }
    }
    rows
}

fn write_csv(path: &PathBuf, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(path: &PathBuf, rows: &[Row]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.flight_number))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.launch_site))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.class))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.payload_mass_kg))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.booster_version))),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| &r.booster_version_category),
            )),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".to_string()));
    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng);

    let csv_path = out_dir.join("launches.csv");
    let parquet_path = out_dir.join("launches.parquet");
    write_csv(&csv_path, &rows)?;
    write_parquet(&parquet_path, &rows)?;

    let successes: i64 = rows.iter().map(|r| r.class).sum();
    println!(
        "Wrote {} launches ({successes} successful) to {} and {}",
        rows.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
