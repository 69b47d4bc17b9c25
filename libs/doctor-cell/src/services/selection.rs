use serde::{Deserialize, Serialize};

use crate::models::{Disease, DiseaseTile};

/// Single-select condition picker. Clicking the active tile clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseSelection {
    selected: String,
}

impl DiseaseSelection {
    pub fn new(selected: impl Into<String>) -> Self {
        Self { selected: selected.into() }
    }

    pub fn selected(&self) -> Option<&str> {
        (!self.selected.is_empty()).then_some(self.selected.as_str())
    }

    pub fn is_selected(&self, disease_id: &str) -> bool {
        !self.selected.is_empty() && self.selected == disease_id
    }

    pub fn toggle(&mut self, clicked: &str) {
        if self.selected == clicked {
            self.selected.clear();
        } else {
            self.selected = clicked.to_string();
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Resolves the selection. Ids missing from the list resolve to nothing.
    pub fn selected_disease<'a>(&self, diseases: &'a [Disease]) -> Option<&'a Disease> {
        let id = self.selected()?;
        diseases.iter().find(|d| d.id == id)
    }

    pub fn banner(&self, diseases: &[Disease]) -> Option<String> {
        self.selected_disease(diseases)
            .map(|d| format!("Showing doctors specializing in {}", d.name))
    }

    pub fn tiles(&self, diseases: &[Disease]) -> Vec<DiseaseTile> {
        diseases
            .iter()
            .map(|d| DiseaseTile {
                disease: d.clone(),
                is_selected: self.is_selected(&d.id),
            })
            .collect()
    }
}
