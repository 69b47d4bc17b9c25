use crate::models::{
    DoctorQuery, DoctorSearchOutcome, EmptyState, PatientDashboardView, SortKey, SortOption,
};
use crate::services::catalog::Catalog;
use crate::services::matching::search_outcome;
use crate::services::selection::DiseaseSelection;

/// Interaction state of the patient search page. Results are re-derived on every read.
#[derive(Debug, Clone, Default)]
pub struct PatientDashboard {
    pub selection: DiseaseSelection,
    pub search_text: String,
    pub sort_key: SortKey,
}

impl PatientDashboard {
    pub fn new(selection: DiseaseSelection, search_text: impl Into<String>, sort_key: SortKey) -> Self {
        Self {
            selection,
            search_text: search_text.into(),
            sort_key,
        }
    }

    pub fn select_disease(&mut self, disease_id: &str) {
        self.selection.toggle(disease_id);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn query(&self) -> DoctorQuery {
        DoctorQuery::new(
            self.selection.selected().map(str::to_string),
            self.search_text.clone(),
            self.sort_key,
        )
    }

    pub fn results(&self, catalog: &Catalog) -> DoctorSearchOutcome {
        search_outcome(&catalog.doctors, &self.query())
    }

    pub fn summary(&self, catalog: &Catalog, results: &DoctorSearchOutcome) -> String {
        match self.selection.selected_disease(&catalog.diseases) {
            Some(disease) => format!("Showing {} doctors for {}", results.len(), disease.name),
            None => format!("Showing {} doctors", results.len()),
        }
    }

    pub fn view(&self, catalog: &Catalog) -> PatientDashboardView {
        let results = self.results(catalog);
        let summary = self.summary(catalog, &results);
        let empty_state = results.is_empty().then(EmptyState::default);

        PatientDashboardView {
            selected_disease: self.selection.selected().map(str::to_string),
            banner: self.selection.banner(&catalog.diseases),
            tiles: self.selection.tiles(&catalog.diseases),
            search: self.search_text.clone(),
            sort: self.sort_key,
            sort_options: [SortKey::Time, SortKey::Fees, SortKey::Rating]
                .into_iter()
                .map(|key| SortOption { key, label: key.label() })
                .collect(),
            summary,
            results,
            empty_state,
        }
    }
}
