use std::cmp::Ordering;

use tracing::debug;

use crate::models::{Doctor, DoctorCard, DoctorQuery, DoctorSearchOutcome, SortKey};

/// True when no disease is selected or the doctor treats the selected one.
pub fn matches_disease(doctor: &Doctor, disease: Option<&str>) -> bool {
    match disease {
        None | Some("") => true,
        Some(id) => doctor.treats(id),
    }
}

/// Case-insensitive substring match against name or specialty.
pub fn matches_search(doctor: &Doctor, search: &str) -> bool {
    let needle = search.to_lowercase();
    doctor.name.to_lowercase().contains(&needle)
        || doctor.specialty.to_lowercase().contains(&needle)
}

pub fn compare_doctors(a: &Doctor, b: &Doctor, key: SortKey) -> Ordering {
    match key {
        SortKey::Fees => a.fees.cmp(&b.fees),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        // Plain text order, so "10:00 AM" sorts ahead of "9:00 AM"
        SortKey::Time => a.next_slot.cmp(&b.next_slot),
    }
}

/// Filters then sorts into a fresh sequence. The source slice is left untouched.
pub fn search_doctors<'a>(doctors: &'a [Doctor], query: &DoctorQuery) -> Vec<&'a Doctor> {
    let disease = query.disease.as_deref();

    let mut matches: Vec<&Doctor> = doctors
        .iter()
        .filter(|doctor| matches_disease(doctor, disease) && matches_search(doctor, &query.search))
        .collect();

    // Stable, so ties keep catalog order
    matches.sort_by(|a, b| compare_doctors(a, b, query.sort));

    debug!(
        "Doctor search disease={:?} search={:?} sort={} -> {} matches",
        disease,
        query.search,
        query.sort,
        matches.len()
    );

    matches
}

pub fn search_outcome(doctors: &[Doctor], query: &DoctorQuery) -> DoctorSearchOutcome {
    let matches = search_doctors(doctors, query);
    if matches.is_empty() {
        DoctorSearchOutcome::NoDoctorsFound
    } else {
        DoctorSearchOutcome::Matches(matches.into_iter().map(DoctorCard::from_doctor).collect())
    }
}
