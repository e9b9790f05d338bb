use crate::domain::Newsletter;
use crate::error::Result;
use crate::repo::KeyValueStore;

/// Key the whole newsletter collection is stored under
pub const STORAGE_KEY: &str = "newsletter-composer-data";

/// Repository for the saved newsletter collection.
/// The collection is written and read back wholesale as a single JSON array.
pub struct NewsletterRepo;

impl NewsletterRepo {
    #[tracing::instrument(
        name = "Save newsletters",
        skip(store, newsletters),
        fields(count = newsletters.len())
    )]
    pub fn save(store: &dyn KeyValueStore, newsletters: &[Newsletter]) -> Result<()> {
        let value = serde_json::to_string(newsletters)?;
        store.set(STORAGE_KEY, &value)?;
        Ok(())
    }

    /// Load the saved collection.
    /// Missing, unreadable or corrupt data all load as an empty collection.
    #[tracing::instrument(name = "Load newsletters", skip(store))]
    pub fn load(store: &dyn KeyValueStore) -> Vec<Newsletter> {
        let value = match store.get(STORAGE_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::error!(error.cause_chain = ?error, "Failed to read saved newsletters");
                return Vec::new();
            }
        };

        match serde_json::from_str(&value) {
            Ok(newsletters) => newsletters,
            Err(error) => {
                tracing::error!(error.cause_chain = ?error, "Failed to parse saved newsletters");
                Vec::new()
            }
        }
    }
}
