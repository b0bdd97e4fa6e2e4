//! Per-row normalization and the row-processing loop.

use log::debug;

use crate::batch::BatchIngestor;
use crate::config::IngestConfig;
use crate::model::{IngestionReport, NormalizedRecipe, RawRow};
use crate::store::RecipeStore;
use crate::{fields, steps};

/// Treat blank and whitespace-only values the same as absent ones.
fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Trim recovered list elements and drop the empty ones.
fn tidy(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// A row is atomic: either the title and all three lists are usable, or the
/// whole row is skipped. A recipe with ingredients but no steps is not worth
/// inserting with nulls.
pub fn is_complete(
    title: Option<&str>,
    main_ingredients: &[String],
    steps: &[String],
    ingredients: &[String],
) -> bool {
    title.is_some_and(|t| !t.trim().is_empty())
        && !main_ingredients.is_empty()
        && !steps.is_empty()
        && !ingredients.is_empty()
}

/// Normalize one raw row, or reject it.
pub fn normalize_row(row: &RawRow, config: &IngestConfig) -> Option<NormalizedRecipe> {
    let title = text(&row.title);
    let ingredients = tidy(fields::recover_list(row.ingredients.as_deref()));
    let main_ingredients = tidy(fields::recover_list(row.cleaned_ingredients.as_deref()));
    let steps = steps::clean_steps(row.instructions.as_deref());

    if !is_complete(title, &main_ingredients, &steps, &ingredients) {
        debug!("Skipping incomplete row (title: {:?})", title);
        return None;
    }
    let title = title.unwrap_or_default().to_string();

    let image_url = text(&row.image_name).map(|name| config.image_url(name));

    Some(NormalizedRecipe {
        title,
        description: None,
        duration: None,
        servings: None,
        image_url,
        ingredients,
        main_ingredients,
        steps,
    })
}

/// Run every row through normalization and the batch ingestor. Row failures
/// only ever show up in the skipped counter; batch failures only in the
/// inserted counter.
pub fn run(rows: Vec<RawRow>, config: &IngestConfig, store: &dyn RecipeStore) -> IngestionReport {
    let mut report = IngestionReport::default();
    let mut ingestor = BatchIngestor::new(store, config.batch_size);

    for row in &rows {
        report.rows_read += 1;
        match normalize_row(row, config) {
            Some(recipe) => ingestor.push(recipe),
            None => report.rows_skipped += 1,
        }
    }

    report.records_inserted = ingestor.finish();
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IngestConfig {
        IngestConfig {
            supabase_url: "https://abc123.supabase.co".to_string(),
            service_key: "test-key".to_string(),
            table: "recipes".to_string(),
            batch_size: 100,
            image_bucket: "recipe-images".to_string(),
            timeout: 30,
        }
    }

    fn soup_row() -> RawRow {
        RawRow {
            title: Some("Soup".to_string()),
            ingredients: Some("['water', 'salt']".to_string()),
            instructions: Some("1. Boil water\n2. Add salt".to_string()),
            image_name: Some("soup1".to_string()),
            cleaned_ingredients: Some("['water', 'salt']".to_string()),
        }
    }

    #[test]
    fn test_validator_rejects_empty_steps() {
        let lists = vec!["water".to_string()];
        assert!(!is_complete(Some("Soup"), &lists, &[], &lists));
    }

    #[test]
    fn test_validator_rejects_missing_title() {
        let lists = vec!["water".to_string()];
        assert!(!is_complete(None, &lists, &lists, &lists));
        assert!(!is_complete(Some("  "), &lists, &lists, &lists));
    }

    #[test]
    fn test_validator_accepts_complete_row() {
        let lists = vec!["water".to_string()];
        assert!(is_complete(Some("Soup"), &lists, &lists, &lists));
    }

    #[test]
    fn test_normalize_complete_row() {
        let recipe = normalize_row(&soup_row(), &config()).unwrap();
        assert_eq!(recipe.title, "Soup");
        assert_eq!(recipe.steps, vec!["Boil water", "Add salt"]);
        assert_eq!(recipe.ingredients, vec!["water", "salt"]);
        assert_eq!(recipe.main_ingredients, recipe.ingredients);
        assert_eq!(
            recipe.image_url.as_deref(),
            Some("https://abc123.supabase.co/storage/v1/object/public/recipe-images/soup1.jpg")
        );
        assert_eq!(recipe.description, None);
        assert_eq!(recipe.duration, None);
        assert_eq!(recipe.servings, None);
    }

    #[test]
    fn test_normalize_missing_image_name() {
        let mut row = soup_row();
        row.image_name = None;
        let recipe = normalize_row(&row, &config()).unwrap();
        assert_eq!(recipe.image_url, None);
    }

    #[test]
    fn test_normalize_rejects_unparseable_ingredients() {
        let mut row = soup_row();
        row.ingredients = Some("not a list at all".to_string());
        assert!(normalize_row(&row, &config()).is_none());
    }

    #[test]
    fn test_normalize_rejects_empty_row() {
        assert!(normalize_row(&RawRow::default(), &config()).is_none());
    }
}
