pub mod batch;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod steps;
pub mod store;

use std::path::Path;

use log::info;

pub use crate::config::IngestConfig;
pub use crate::error::IngestError;
pub use crate::model::{IngestionReport, NormalizedRecipe, RawRow};
pub use crate::store::{RecipeStore, SupabaseStore};

/// Load a recipe export and bulk-insert it into the configured store.
///
/// A missing input file, bad configuration or unreachable store is fatal;
/// everything past startup degrades to per-row skips or dropped batches and
/// is reflected in the returned report.
pub fn import_csv(path: &Path, config: &IngestConfig) -> Result<IngestionReport, IngestError> {
    let rows = source::read_rows(path)?;
    info!("Loaded {} rows from {}", rows.len(), path.display());

    let store = SupabaseStore::new(config)?;
    store.ping()?;
    info!("Connected to the store");

    Ok(pipeline::run(rows, config, &store))
}
