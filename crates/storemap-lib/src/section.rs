//! Venue sections and the registry that resolves names to them.
//!
//! Section names are the identity of a section within a venue. Lookups are
//! case-insensitive and ignore surrounding whitespace, while the display form
//! given in the layout is preserved for output.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Position of a section within the venue, in section registration order.
pub type SectionId = usize;

/// Axis-aligned rectangle describing where a section sits on the venue plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Coordinates {
    /// Centre point of the rectangle as `(x, y)`.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Named, rectangular zone of a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub color: String,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl Section {
    /// Identity key used for lookups.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Lowercase and trim a name so lookups ignore case and padding.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Fixed set of sections for one venue.
///
/// The registry is immutable once loaded and cheap to clone, so it can be
/// shared between the graph and any number of concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Arc<Vec<Section>>,
    name_to_id: Arc<HashMap<String, SectionId>>,
}

impl SectionRegistry {
    /// Load sections, rejecting any two whose normalised names collide.
    pub fn load(sections: Vec<Section>) -> Result<Self> {
        let mut name_to_id = HashMap::with_capacity(sections.len());
        for (id, section) in sections.iter().enumerate() {
            if name_to_id.insert(section.normalized_name(), id).is_some() {
                return Err(Error::DuplicateSection {
                    name: section.name.clone(),
                });
            }
        }

        debug!(sections = sections.len(), "loaded section registry");

        Ok(Self {
            sections: Arc::new(sections),
            name_to_id: Arc::new(name_to_id),
        })
    }

    /// Find a section by name, ignoring case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&Section> {
        self.section_id_by_name(name)
            .and_then(|id| self.sections.get(id))
    }

    /// Lookup a section identifier by name.
    pub fn section_id_by_name(&self, name: &str) -> Option<SectionId> {
        self.name_to_id.get(&normalize_name(name)).copied()
    }

    /// Lookup a section by identifier.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id)
    }

    /// Lookup the display name of a section by identifier.
    pub fn section_name(&self, id: SectionId) -> Option<&str> {
        self.sections.get(id).map(|section| section.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate sections in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &Section)> {
        self.sections.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: &str) -> Section {
        Section {
            name: name.to_string(),
            color: "#CFCFC4".to_string(),
            coordinates: Coordinates {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 20.0,
            },
            count: None,
        }
    }

    #[test]
    fn find_ignores_case_and_padding() {
        let registry = SectionRegistry::load(vec![section("Aisle 1"), section("Checkout")])
            .expect("registry loads");

        let padded = registry.find("  aisle 1 ").expect("padded name resolves");
        let exact = registry.find("Aisle 1").expect("exact name resolves");
        assert_eq!(padded, exact);
        assert_eq!(padded.name, "Aisle 1", "display form is preserved");
    }

    #[test]
    fn colliding_names_are_rejected() {
        let error = SectionRegistry::load(vec![section("Dairy"), section(" DAIRY")])
            .expect_err("duplicate rejected");
        assert!(matches!(error, Error::DuplicateSection { ref name } if name == " DAIRY"));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry = SectionRegistry::load(vec![section("Bakery")]).unwrap();
        assert!(registry.find("Garden").is_none());
        assert_eq!(registry.section_id_by_name("bakery"), Some(0));
    }

    #[test]
    fn center_is_rectangle_midpoint() {
        assert_eq!(section("Bakery").coordinates.center(), (5.0, 10.0));
    }
}
