//! Bounded-size batch buffering in front of the store.

use log::{error, info};

use crate::model::NormalizedRecipe;
use crate::store::RecipeStore;

/// Accumulates normalized recipes and pushes them to the store in batches.
///
/// A flush is one bulk insert for the whole buffer. On failure the batch is
/// logged and dropped, the buffer is cleared either way and the run
/// continues; bounding the batch size caps how much a single failed call can
/// lose. Counters assume the bulk insert is atomic on the remote side; a
/// partially-applied insert makes them drift (known limitation).
pub struct BatchIngestor<'a> {
    store: &'a dyn RecipeStore,
    batch_size: usize,
    buffer: Vec<NormalizedRecipe>,
    inserted: u64,
}

impl<'a> BatchIngestor<'a> {
    pub fn new(store: &'a dyn RecipeStore, batch_size: usize) -> Self {
        BatchIngestor {
            store,
            batch_size: batch_size.max(1),
            buffer: Vec::new(),
            inserted: 0,
        }
    }

    /// Buffer one recipe, flushing if the batch size is reached.
    pub fn push(&mut self, recipe: NormalizedRecipe) {
        self.buffer.push(recipe);
        if self.buffer.len() >= self.batch_size {
            self.flush();
        }
    }

    /// Flush the remainder and return the total number of inserted records.
    pub fn finish(mut self) -> u64 {
        self.flush();
        self.inserted
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        info!("Inserting batch of {} records...", self.buffer.len());
        match self.store.insert(&self.buffer) {
            Ok(()) => self.inserted += self.buffer.len() as u64,
            Err(e) => error!("Batch insert failed, dropping batch: {}", e),
        }
        self.buffer.clear();
    }
}
