pub mod source;
pub mod swapi;
pub mod types;

pub use source::{CatalogError, CatalogSource, FETCH_FAILED_MESSAGE, FetchKey};
pub use swapi::SwapiClient;
pub use types::{CatalogItem, CatalogPage, Category, CategoryError, Character, Planet, Starship};
