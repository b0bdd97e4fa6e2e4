use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Ingestion configuration
#[derive(Debug, Deserialize, Clone)]
pub struct IngestConfig {
    /// Supabase project URL, e.g. "https://abc123.supabase.co"
    pub supabase_url: String,
    /// service_role key used for inserts
    pub service_key: String,
    /// Target table name
    #[serde(default = "default_table")]
    pub table: String,
    /// Number of records per bulk insert
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Storage bucket holding the recipe images
    #[serde(default = "default_bucket")]
    pub image_bucket: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_table() -> String {
    "recipes".to_string()
}

fn default_batch_size() -> usize {
    100
}

fn default_bucket() -> String {
    "recipe-images".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl IngestConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with INGEST__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: INGEST__SUPABASE_URL, INGEST__SERVICE_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("INGEST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Public URL for a stored recipe image. Purely syntactic; the object is
    /// not checked for existence.
    pub fn image_url(&self, image_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}.jpg",
            self.supabase_url.trim_end_matches('/'),
            self.image_bucket,
            image_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IngestConfig {
        IngestConfig {
            supabase_url: "https://abc123.supabase.co".to_string(),
            service_key: "test-key".to_string(),
            table: default_table(),
            batch_size: default_batch_size(),
            image_bucket: default_bucket(),
            timeout: default_timeout(),
        }
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_table(), "recipes");
        assert_eq!(default_batch_size(), 100);
        assert_eq!(default_bucket(), "recipe-images");
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            config().image_url("soup1"),
            "https://abc123.supabase.co/storage/v1/object/public/recipe-images/soup1.jpg"
        );
    }

    #[test]
    fn test_image_url_trailing_slash() {
        let mut config = config();
        config.supabase_url.push('/');
        assert_eq!(
            config.image_url("soup1"),
            "https://abc123.supabase.co/storage/v1/object/public/recipe-images/soup1.jpg"
        );
    }
}
