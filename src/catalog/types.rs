//! # Catalog Types
//!
//! Wire shapes returned by the catalog service, plus the closed
//! `CatalogItem` union the rest of the app works with.
//!
//! Every descriptive field is a string and is displayed as delivered.
//! Values like `"unknown"` or `"1,000"` are never parsed.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The three browsable categories. Displayed as the endpoint path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    People,
    Planets,
    Starships,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::People, Category::Planets, Category::Starships];

    /// Path segment used by the remote endpoints (`/people/`, ...).
    pub fn path(self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Planets => "planets",
            Category::Starships => "starships",
        }
    }

    /// Section heading shown above the result list.
    pub fn title(self) -> &'static str {
        match self {
            Category::People => "Characters",
            Category::Planets => "Planets",
            Category::Starships => "Starships",
        }
    }

    /// Singular badge shown on each result card.
    pub fn badge(self) -> &'static str {
        match self {
            Category::People => "character",
            Category::Planets => "planet",
            Category::Starships => "starship",
        }
    }

    /// The next category in navigator order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Category::People => Category::Planets,
            Category::Planets => Category::Starships,
            Category::Starships => Category::People,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Raised when a category name is not one of the three known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    InvalidCategory(String),
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryError::InvalidCategory(name) => write!(
                f,
                "invalid category '{name}' (expected people, planets or starships)"
            ),
        }
    }
}

impl std::error::Error for CategoryError {}

impl FromStr for Category {
    type Err = CategoryError;

    /// Strict: unknown names are rejected, never mapped to `People`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "people" => Ok(Category::People),
            "planets" => Ok(Category::Planets),
            "starships" => Ok(Category::Starships),
            _ => Err(CategoryError::InvalidCategory(s.to_string())),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    #[serde(default)]
    pub homeworld: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub starship_class: String,
    #[serde(default)]
    pub url: String,
}

/// One entry of a result page. Identity is positional within the page.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogItem {
    Character(Character),
    Planet(Planet),
    Starship(Starship),
}

impl CatalogItem {
    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Character(c) => &c.name,
            CatalogItem::Planet(p) => &p.name,
            CatalogItem::Starship(s) => &s.name,
        }
    }

    /// The category this shape belongs to.
    pub fn category(&self) -> Category {
        match self {
            CatalogItem::Character(_) => Category::People,
            CatalogItem::Planet(_) => Category::Planets,
            CatalogItem::Starship(_) => Category::Starships,
        }
    }
}

/// The list/search envelope: `{ count, next, previous, results }`.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A decoded response, already lifted into `CatalogItem`s.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    /// True when the envelope's `next` link was present.
    pub has_more: bool,
    /// Total matches reported by the service (`count`).
    pub total: u32,
}

impl<T> ApiResponse<T> {
    pub fn into_page(self, wrap: fn(T) -> CatalogItem) -> CatalogPage {
        CatalogPage {
            has_more: self.next.is_some(),
            total: self.count,
            items: self.results.into_iter().map(wrap).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_known_names() {
        assert_eq!("people".parse::<Category>(), Ok(Category::People));
        assert_eq!("Planets".parse::<Category>(), Ok(Category::Planets));
        assert_eq!(" starships ".parse::<Category>(), Ok(Category::Starships));
    }

    #[test]
    fn test_category_rejects_unknown_names() {
        let err = "vehicles".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryError::InvalidCategory("vehicles".to_string()));
        assert!(err.to_string().contains("vehicles"));
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_next_wraps() {
        assert_eq!(Category::People.next(), Category::Planets);
        assert_eq!(Category::Planets.next(), Category::Starships);
        assert_eq!(Category::Starships.next(), Category::People);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::People.path(), "people");
        assert_eq!(Category::People.title(), "Characters");
        assert_eq!(Category::Starships.badge(), "starship");
        assert_eq!(Category::Planets.to_string(), "planets");
    }

    #[test]
    fn test_envelope_next_maps_to_has_more() {
        let json = r#"{
            "count": 82,
            "next": "https://swapi.dev/api/people/?page=2",
            "previous": null,
            "results": [{
                "name": "Luke Skywalker", "height": "172", "mass": "77",
                "hair_color": "blond", "skin_color": "fair", "eye_color": "blue",
                "birth_year": "19BBY", "gender": "male",
                "homeworld": "https://swapi.dev/api/planets/1/",
                "url": "https://swapi.dev/api/people/1/"
            }]
        }"#;
        let response: ApiResponse<Character> = serde_json::from_str(json).unwrap();
        let page = response.into_page(CatalogItem::Character);

        assert!(page.has_more);
        assert_eq!(page.total, 82);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name(), "Luke Skywalker");
        assert_eq!(page.items[0].category(), Category::People);
    }

    #[test]
    fn test_envelope_without_next_has_no_more() {
        let json = r#"{"count": 0, "next": null, "previous": null, "results": []}"#;
        let response: ApiResponse<Planet> = serde_json::from_str(json).unwrap();
        let page = response.into_page(CatalogItem::Planet);
        assert!(!page.has_more);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_starship_mglt_field_name() {
        let json = r#"{
            "name": "Millennium Falcon", "model": "YT-1300 light freighter",
            "manufacturer": "Corellian Engineering Corporation",
            "cost_in_credits": "100000", "length": "34.37",
            "max_atmosphering_speed": "1050", "crew": "4", "passengers": "6",
            "cargo_capacity": "100000", "consumables": "2 months",
            "hyperdrive_rating": "0.5", "MGLT": "75",
            "starship_class": "Light freighter"
        }"#;
        let ship: Starship = serde_json::from_str(json).unwrap();
        assert_eq!(ship.mglt, "75");
        assert_eq!(ship.url, "");
    }
}
