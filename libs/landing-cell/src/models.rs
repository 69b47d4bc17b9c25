use serde::Serialize;

use shared_models::navigation::View;

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub target: View,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub highlight: &'static str,
    pub tagline: &'static str,
    pub actions: Vec<NavLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Closing banner under the feature grid.
#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub action: NavLink,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub brand: &'static str,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub features_heading: SectionHeading,
    pub features: Vec<Feature>,
    pub call_to_action: CallToAction,
}

fn link(label: &'static str, target: View) -> NavLink {
    NavLink { label, target }
}

impl LandingPage {
    pub fn standard() -> Self {
        Self {
            brand: "DocSmart",
            nav: vec![
                link("Patient Portal", View::PatientDashboard),
                link("Doctor Portal", View::DoctorDashboard),
                link("Book Appointment", View::PatientDashboard),
            ],
            hero: Hero {
                badge: "AI-Powered Healthcare Platform",
                title: "Advanced Healthcare",
                highlight: "Made Simple",
                tagline: "DocSmart leverages cutting-edge artificial intelligence to optimize doctor availability, \
                          streamline appointment scheduling, and enhance patient care while minimizing wait times.",
                actions: vec![
                    link("Find a Doctor", View::PatientDashboard),
                    link("Doctor Login", View::DoctorDashboard),
                ],
            },
            stats: vec![
                Stat { label: "Active Doctors", value: "500+" },
                Stat { label: "Patients Served", value: "10,000+" },
                Stat { label: "Average Wait Time", value: "15 min" },
                Stat { label: "Cities Covered", value: "25+" },
            ],
            features_heading: SectionHeading {
                title: "Key Features",
                subtitle: "Discover how DocSmart revolutionizes healthcare with intelligent automation and data-driven insights",
            },
            features: vec![
                Feature {
                    title: "AI-Based Diagnosis",
                    description: "Analyze patient symptoms and predict potential diseases using machine learning",
                },
                Feature {
                    title: "Smart Doctor Matching",
                    description: "Connects patients with the most suitable specialists based on expertise and location",
                },
                Feature {
                    title: "Seamless Appointment Booking",
                    description: "Real-time scheduling with instant availability updates",
                },
                Feature {
                    title: "Predictive Wait Time",
                    description: "AI-driven insights to reduce waiting periods and improve patient experience",
                },
            ],
            call_to_action: CallToAction {
                title: "Ready to Experience Smart Healthcare?",
                body: "Join thousands of patients and doctors who trust DocSmart for their healthcare needs. \
                       Get started today and experience the future of medical care.",
                action: link("Get Started Now", View::PatientDashboard),
            },
        }
    }
}
