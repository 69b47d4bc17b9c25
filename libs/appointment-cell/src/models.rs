use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use doctor_cell::models::Doctor;
use shared_models::error::AppError;
use shared_models::navigation::View;

pub const MISSING_SLOT_MESSAGE: &str = "Please select a time slot";
pub const BOOKING_SUCCESS_MESSAGE: &str = "Appointment booked successfully!";

/// Minutes covered by a doctor's listed fee.
pub const BASE_DURATION_MINUTES: u32 = 15;

pub const TIME_SLOTS: [&str; 16] = [
    "9:00 AM", "9:15 AM", "9:30 AM", "9:45 AM",
    "10:00 AM", "10:15 AM", "10:30 AM", "10:45 AM",
    "2:00 PM", "2:15 PM", "2:30 PM", "2:45 PM",
    "3:00 PM", "3:15 PM", "3:30 PM", "3:45 PM",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ConsultationDuration {
    Ten,
    #[default]
    Fifteen,
    Thirty,
    FortyFive,
}

impl ConsultationDuration {
    pub const ALL: [ConsultationDuration; 4] = [
        ConsultationDuration::Ten,
        ConsultationDuration::Fifteen,
        ConsultationDuration::Thirty,
        ConsultationDuration::FortyFive,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            ConsultationDuration::Ten => 10,
            ConsultationDuration::Fifteen => 15,
            ConsultationDuration::Thirty => 30,
            ConsultationDuration::FortyFive => 45,
        }
    }
}

impl fmt::Display for ConsultationDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes", self.minutes())
    }
}

impl TryFrom<u32> for ConsultationDuration {
    type Error = BookingError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        ConsultationDuration::ALL
            .into_iter()
            .find(|d| d.minutes() == minutes)
            .ok_or_else(|| BookingError::InvalidDuration(minutes.to_string()))
    }
}

impl From<ConsultationDuration> for u32 {
    fn from(duration: ConsultationDuration) -> Self {
        duration.minutes()
    }
}

impl FromStr for ConsultationDuration {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| BookingError::InvalidDuration(s.to_string()))
            .and_then(ConsultationDuration::try_from)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Create Account",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login to complete your booking",
            AuthMode::Register => "Create an account to book your appointment",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login & Book",
            AuthMode::Register => "Register & Book",
        }
    }

    pub fn switch_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Need an account? Register",
            AuthMode::Register => "Already have an account? Login",
        }
    }
}

/// Fields of the login/register step. Nothing here is checked against real credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DurationOption {
    pub minutes: u32,
    pub label: String,
    /// Price printed in the picker.
    pub picker_fee: u32,
    /// Price the booking actually charges.
    pub fee: u32,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotOption {
    pub slot: &'static str,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub doctor: String,
    pub date: NaiveDate,
    pub date_label: String,
    pub time: String,
    pub duration: ConsultationDuration,
    pub fee: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthDialogView {
    pub mode: AuthMode,
    pub title: &'static str,
    pub description: &'static str,
    pub asks_full_name: bool,
    pub submit_label: &'static str,
    pub switch_label: &'static str,
}

impl From<AuthMode> for AuthDialogView {
    fn from(mode: AuthMode) -> Self {
        Self {
            mode,
            title: mode.title(),
            description: mode.description(),
            asks_full_name: mode == AuthMode::Register,
            submit_label: mode.submit_label(),
            switch_label: mode.switch_label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingPageView {
    pub doctor: Doctor,
    pub base_fee_note: String,
    pub date: NaiveDate,
    pub durations: Vec<DurationOption>,
    pub duration: ConsultationDuration,
    pub time_slots: Vec<SlotOption>,
    pub selected_slot: Option<String>,
    pub summary: Option<BookingSummary>,
    pub fee: u32,
    pub book_label: String,
    pub can_book: bool,
    pub login_dialog: Option<AuthDialogView>,
    pub back_target: View,
}

/// What a booking gateway is asked to confirm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub doctor_id: u32,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub slot: String,
    pub duration: ConsultationDuration,
    pub fee: u32,
    pub symptoms: Option<String>,
    pub auth_mode: AuthMode,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub message: String,
    pub doctor_id: u32,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub slot: String,
    pub duration: ConsultationDuration,
    pub fee: u32,
    pub redirect: View,
}

impl BookingConfirmation {
    pub fn for_request(request: &BookingRequest) -> Self {
        Self {
            message: BOOKING_SUCCESS_MESSAGE.to_string(),
            doctor_id: request.doctor_id,
            doctor_name: request.doctor_name.clone(),
            date: request.date,
            slot: request.slot.clone(),
            duration: request.duration,
            fee: request.fee,
            redirect: View::PatientDashboard,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSubmission {
    #[serde(default)]
    pub mode: AuthMode,
    #[serde(flatten)]
    pub form: AuthForm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    pub slot: Option<String>,
    /// Minutes; defaults to the base consultation length.
    pub duration: Option<u32>,
    pub date: Option<NaiveDate>,
    pub symptoms: Option<String>,
    pub auth: Option<AuthSubmission>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Please select a time slot")]
    MissingSlot,

    #[error("Login dialog is not open")]
    LoginNotRequested,

    #[error("Unsupported consultation duration: {0}")]
    InvalidDuration(String),

    #[error("Booking could not be completed: {0}")]
    Gateway(String),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::MissingSlot => AppError::ValidationError(MISSING_SLOT_MESSAGE.to_string()),
            BookingError::LoginNotRequested | BookingError::InvalidDuration(_) => {
                AppError::BadRequest(err.to_string())
            }
            BookingError::Gateway(_) => AppError::Internal(err.to_string()),
        }
    }
}
