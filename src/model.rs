use serde::{Deserialize, Serialize};

/// One row of the source export, as written by the original dataset. All
/// fields are free text and any of them may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Ingredients")]
    pub ingredients: Option<String>,
    #[serde(rename = "Instructions")]
    pub instructions: Option<String>,
    #[serde(rename = "Image_Name")]
    pub image_name: Option<String>,
    #[serde(rename = "Cleaned_Ingredients")]
    pub cleaned_ingredients: Option<String>,
}

/// A validated recipe in the shape the store table expects. Built once per
/// accepted row and handed to the batch ingestor by value.
///
/// `description`, `duration` and `servings` have no source column; they are
/// serialized as explicit nulls so the payload covers the full table shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecipe {
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub servings: Option<String>,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub main_ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Counters accumulated over a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestionReport {
    pub rows_read: u64,
    pub rows_skipped: u64,
    pub records_inserted: u64,
}
