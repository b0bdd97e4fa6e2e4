use std::env;
use std::path::Path;

use recipe_ingest::{import_csv, IngestConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Please provide the path to the recipe CSV export")?;

    let config = IngestConfig::load()?;
    let report = import_csv(Path::new(path), &config)?;

    println!("------------------------------");
    println!("Rows read: {}", report.rows_read);
    println!("Rows skipped (invalid): {}", report.rows_skipped);
    println!("Records inserted: {}", report.records_inserted);
    println!("------------------------------");

    Ok(())
}
