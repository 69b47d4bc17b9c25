use std::collections::BTreeSet;

use crate::models::{Disease, Doctor};

/// The static disease and doctor listings every page reads from.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub diseases: Vec<Disease>,
    pub doctors: Vec<Doctor>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    pub fn new(diseases: Vec<Disease>, doctors: Vec<Doctor>) -> Self {
        Self { diseases, doctors }
    }

    pub fn standard() -> Self {
        Self::new(standard_diseases(), standard_doctors())
    }

    pub fn disease(&self, id: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.id == id)
    }

    pub fn doctor(&self, id: u32) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }
}

fn disease(id: &str, name: &str, icon: &str, specialists: &[&str]) -> Disease {
    Disease {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        specialists: specialists.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn standard_diseases() -> Vec<Disease> {
    vec![
        disease("fever", "Fever", "🤒", &["General Medicine", "Internal Medicine"]),
        disease("skin", "Skin Conditions", "🩹", &["Dermatology"]),
        disease("eye", "Eye Problems", "👁️", &["Ophthalmology"]),
        disease("heart", "Heart Issues", "❤️", &["Cardiology"]),
        disease("dental", "Dental Problems", "🦷", &["Dentistry"]),
        disease("bone", "Bone & Joint", "🦴", &["Orthopedics"]),
    ]
}

struct DoctorSeed {
    id: u32,
    name: &'static str,
    specialty: &'static str,
    rating: f32,
    experience: &'static str,
    location: &'static str,
    fees: u32,
    is_available: bool,
    next_slot: &'static str,
    image: &'static str,
    diseases: &'static [&'static str],
}

impl DoctorSeed {
    fn build(&self) -> Doctor {
        Doctor {
            id: self.id,
            name: self.name.to_string(),
            specialty: self.specialty.to_string(),
            rating: self.rating,
            experience: self.experience.to_string(),
            location: self.location.to_string(),
            fees: self.fees,
            is_available: self.is_available,
            next_slot: self.next_slot.to_string(),
            image: self.image.to_string(),
            diseases: self.diseases.iter().map(|d| d.to_string()).collect::<BTreeSet<_>>(),
        }
    }
}

const SARAH_JOHNSON: DoctorSeed = DoctorSeed {
    id: 1,
    name: "Dr. Sarah Johnson",
    specialty: "General Medicine",
    rating: 4.8,
    experience: "15 years",
    location: "Downtown Medical Center",
    fees: 150,
    is_available: true,
    next_slot: "2:30 PM",
    image: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400&h=400&fit=crop&crop=face",
    diseases: &["fever"],
};

const DOCTOR_SEEDS: [DoctorSeed; 4] = [
    SARAH_JOHNSON,
    DoctorSeed {
        id: 2,
        name: "Dr. Michael Chen",
        specialty: "Dermatology",
        rating: 4.9,
        experience: "12 years",
        location: "Skin Care Clinic",
        fees: 200,
        is_available: true,
        next_slot: "3:15 PM",
        image: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop&crop=face",
        diseases: &["skin"],
    },
    DoctorSeed {
        id: 3,
        name: "Dr. Emily Rodriguez",
        specialty: "Ophthalmology",
        rating: 4.7,
        experience: "18 years",
        location: "Eye Care Center",
        fees: 180,
        is_available: false,
        next_slot: "Tomorrow 9:00 AM",
        image: "https://images.unsplash.com/photo-1594824804732-ca8db7b2f9d7?w=400&h=400&fit=crop&crop=face",
        diseases: &["eye"],
    },
    DoctorSeed {
        id: 4,
        name: "Dr. James Wilson",
        specialty: "Cardiology",
        rating: 4.9,
        experience: "20 years",
        location: "Heart Institute",
        fees: 250,
        is_available: true,
        next_slot: "4:00 PM",
        image: "https://images.unsplash.com/photo-1622253692010-333f2da6031d?w=400&h=400&fit=crop&crop=face",
        diseases: &["heart"],
    },
];

pub fn standard_doctors() -> Vec<Doctor> {
    DOCTOR_SEEDS.iter().map(DoctorSeed::build).collect()
}

/// The doctor the booking page shows when its target id resolves to nothing.
pub fn mock_booking_doctor() -> Doctor {
    SARAH_JOHNSON.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.diseases.len(), 6);
        assert_eq!(catalog.doctors.len(), 4);
        assert_eq!(catalog.disease("fever").unwrap().specialists.len(), 2);
        assert!(!catalog.doctor(3).unwrap().is_available);
        assert!(catalog.doctor(5).is_none());
    }

    #[test]
    fn test_every_doctor_disease_exists() {
        let catalog = Catalog::standard();
        for doctor in &catalog.doctors {
            for id in &doctor.diseases {
                assert!(catalog.disease(id).is_some(), "unknown disease {}", id);
            }
        }
    }

    #[test]
    fn test_mock_booking_doctor_matches_catalog_entry() {
        let catalog = Catalog::standard();
        assert_eq!(&mock_booking_doctor(), catalog.doctor(1).unwrap());
    }
}
