pub mod model;
pub mod report;
pub mod store;

pub use model::{ScrapeResult, WordFrequency};
pub use store::{InMemoryStore, WordStore};
