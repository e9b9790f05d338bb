mod newsletters;
mod store;

pub use newsletters::{NewsletterRepo, STORAGE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, NullStore};
