//! # Detail Renderer
//!
//! Pure projection of the selected item and the active category into a
//! fixed label/value table. The TUI draws whatever this returns.

use crate::catalog::{CatalogItem, Category};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub rows: Vec<DetailRow>,
}

fn row(label: &'static str, value: &str) -> DetailRow {
    DetailRow {
        label,
        value: value.to_string(),
    }
}

fn row_with_unit(label: &'static str, value: &str, unit: &str) -> DetailRow {
    DetailRow {
        label,
        value: format!("{value} {unit}"),
    }
}

/// Returns `None` when nothing is selected or the item's shape does not
/// belong to the active category.
pub fn detail_view(selected: Option<&CatalogItem>, category: Category) -> Option<DetailView> {
    let item = selected?;
    if item.category() != category {
        return None;
    }
    let rows = match item {
        CatalogItem::Character(c) => vec![
            row_with_unit("Height", &c.height, "cm"),
            row_with_unit("Mass", &c.mass, "kg"),
            row("Hair color", &c.hair_color),
            row("Skin color", &c.skin_color),
            row("Eye color", &c.eye_color),
            row("Birth year", &c.birth_year),
            row("Gender", &c.gender),
        ],
        CatalogItem::Planet(p) => vec![
            row_with_unit("Rotation Period", &p.rotation_period, "hours"),
            row_with_unit("Orbital Period", &p.orbital_period, "days"),
            row_with_unit("Diameter", &p.diameter, "km"),
            row("Climate", &p.climate),
            row("Gravity", &p.gravity),
            row("Terrain", &p.terrain),
            DetailRow {
                label: "Surface Water",
                value: format!("{}%", p.surface_water),
            },
            row("Population", &p.population),
        ],
        CatalogItem::Starship(s) => vec![
            row("Model", &s.model),
            row("Manufacturer", &s.manufacturer),
            row_with_unit("Cost", &s.cost_in_credits, "credits"),
            row_with_unit("Length", &s.length, "m"),
            row("Max Speed", &s.max_atmosphering_speed),
            row("Crew", &s.crew),
            row("Passengers", &s.passengers),
            row_with_unit("Cargo Capacity", &s.cargo_capacity, "tons"),
            row("Hyperdrive Rating", &s.hyperdrive_rating),
            row("Class", &s.starship_class),
        ],
    };

    Some(DetailView {
        title: item.name().to_string(),
        rows,
    })
}

/// One-line summary shown under the name on a result card.
pub fn summary(item: &CatalogItem) -> String {
    match item {
        CatalogItem::Character(c) => format!("Gender: {}, Birth Year: {}", c.gender, c.birth_year),
        CatalogItem::Planet(p) => format!("Terrain: {}, Climate: {}", p.terrain, p.climate),
        CatalogItem::Starship(s) => format!("Model: {}, Class: {}", s.model, s.starship_class),
    }
}
