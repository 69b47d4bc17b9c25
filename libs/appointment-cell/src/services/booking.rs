use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use doctor_cell::models::Doctor;
use doctor_cell::services::doctor::DoctorService;
use shared_config::AppConfig;
use shared_models::navigation::View;

use crate::models::{
    AuthDialogView, AuthForm, AuthMode, BookAppointmentRequest, BookingConfirmation, BookingError,
    BookingPageView, BookingRequest, BookingSummary, ConsultationDuration, SlotOption, TIME_SLOTS,
};
use crate::services::gateway::BookingGateway;
use crate::services::pricing::PricingService;

/// State of one booking page: slot and duration choice plus the login step.
#[derive(Debug, Clone)]
pub struct BookingSession {
    doctor: Doctor,
    date: NaiveDate,
    selected_slot: Option<String>,
    duration: ConsultationDuration,
    symptoms: Option<String>,
    login_dialog_open: bool,
    auth_mode: AuthMode,
    auth_form: AuthForm,
}

impl BookingSession {
    pub fn new(doctor: Doctor, date: NaiveDate) -> Self {
        Self {
            doctor,
            date,
            selected_slot: None,
            duration: ConsultationDuration::default(),
            symptoms: None,
            login_dialog_open: false,
            auth_mode: AuthMode::default(),
            auth_form: AuthForm::default(),
        }
    }

    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.selected_slot.as_deref()
    }

    pub fn duration(&self) -> ConsultationDuration {
        self.duration
    }

    pub fn is_login_dialog_open(&self) -> bool {
        self.login_dialog_open
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn auth_form(&self) -> &AuthForm {
        &self.auth_form
    }

    /// An empty slot counts as no selection.
    pub fn select_slot(&mut self, slot: impl Into<String>) {
        let slot = slot.into();
        self.selected_slot = (!slot.is_empty()).then_some(slot);
    }

    pub fn set_duration(&mut self, duration: ConsultationDuration) {
        self.duration = duration;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_symptoms(&mut self, symptoms: Option<String>) {
        self.symptoms = symptoms.filter(|s| !s.trim().is_empty());
    }

    pub fn pricing(&self) -> PricingService {
        PricingService::new(self.doctor.fees)
    }

    pub fn fee(&self) -> u32 {
        self.pricing().calculate_fee(self.duration)
    }

    pub fn summary(&self, today: NaiveDate) -> Option<BookingSummary> {
        let slot = self.selected_slot.as_ref()?;
        let date_label = if self.date == today {
            "Today".to_string()
        } else {
            self.date.format("%Y-%m-%d").to_string()
        };

        Some(BookingSummary {
            doctor: self.doctor.name.clone(),
            date: self.date,
            date_label,
            time: slot.clone(),
            duration: self.duration,
            fee: self.fee(),
        })
    }

    /// Opens the login step. Without a slot nothing else happens.
    pub fn request_booking(&mut self) -> Result<(), BookingError> {
        if self.selected_slot.is_none() {
            debug!("Booking requested without a time slot");
            return Err(BookingError::MissingSlot);
        }

        self.login_dialog_open = true;
        Ok(())
    }

    pub fn close_login_dialog(&mut self) {
        self.login_dialog_open = false;
    }

    /// Switches between login and register. Entered fields are discarded.
    pub fn toggle_auth_mode(&mut self) {
        self.auth_mode = self.auth_mode.toggled();
        self.auth_form = AuthForm::default();
    }

    pub fn fill_auth_form(&mut self, mut form: AuthForm) {
        if self.auth_mode == AuthMode::Login {
            form.full_name = None;
        }
        self.auth_form = form;
    }

    /// Completes the login step and hands the booking to the gateway.
    pub async fn submit_auth(
        &mut self,
        gateway: &dyn BookingGateway,
    ) -> Result<BookingConfirmation, BookingError> {
        if !self.login_dialog_open {
            return Err(BookingError::LoginNotRequested);
        }
        let slot = self.selected_slot.clone().ok_or(BookingError::MissingSlot)?;

        self.login_dialog_open = false;

        let request = BookingRequest {
            doctor_id: self.doctor.id,
            doctor_name: self.doctor.name.clone(),
            date: self.date,
            slot,
            duration: self.duration,
            fee: self.fee(),
            symptoms: self.symptoms.clone(),
            auth_mode: self.auth_mode,
            email: self.auth_form.email.clone(),
        };

        gateway.submit_booking(request).await
    }

    pub fn view(&self, today: NaiveDate) -> BookingPageView {
        let pricing = self.pricing();
        let fee = pricing.calculate_fee(self.duration);

        BookingPageView {
            doctor: self.doctor.clone(),
            base_fee_note: format!("${} for 15 minutes", self.doctor.fees),
            date: self.date,
            durations: pricing.duration_options(self.duration),
            duration: self.duration,
            time_slots: TIME_SLOTS
                .iter()
                .map(|&slot| SlotOption {
                    slot,
                    is_selected: self.selected_slot.as_deref() == Some(slot),
                })
                .collect(),
            selected_slot: self.selected_slot.clone(),
            summary: self.summary(today),
            fee,
            book_label: format!("Book Appointment - ${}", fee),
            can_book: self.selected_slot.is_some(),
            login_dialog: self.login_dialog_open.then(|| AuthDialogView::from(self.auth_mode)),
            back_target: View::PatientDashboard,
        }
    }
}

pub struct BookingService {
    doctor_service: DoctorService,
    gateway: Arc<dyn BookingGateway>,
}

impl BookingService {
    pub fn new(config: &AppConfig, gateway: Arc<dyn BookingGateway>) -> Self {
        Self {
            doctor_service: DoctorService::new(config),
            gateway,
        }
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn start_session(&self, doctor_id: &str, today: NaiveDate) -> BookingSession {
        let doctor = self.doctor_service.resolve_booking_doctor(doctor_id);
        BookingSession::new(doctor, today)
    }

    pub fn booking_page(
        &self,
        doctor_id: &str,
        slot: Option<String>,
        duration: ConsultationDuration,
        today: NaiveDate,
    ) -> BookingPageView {
        let mut session = self.start_session(doctor_id, today);
        session.select_slot(slot.unwrap_or_default());
        session.set_duration(duration);
        session.view(today)
    }

    /// Runs a whole booking: choose, request, authenticate, confirm.
    pub async fn book_appointment(
        &self,
        doctor_id: &str,
        request: BookAppointmentRequest,
        today: NaiveDate,
    ) -> Result<BookingConfirmation, BookingError> {
        let duration = match request.duration {
            Some(minutes) => ConsultationDuration::try_from(minutes)?,
            None => ConsultationDuration::default(),
        };

        let mut session = self.start_session(doctor_id, today);
        session.select_slot(request.slot.unwrap_or_default());
        session.set_duration(duration);
        session.set_symptoms(request.symptoms);
        if let Some(date) = request.date {
            session.set_date(date);
        }

        session.request_booking()?;

        if let Some(auth) = request.auth {
            if auth.mode != session.auth_mode() {
                session.toggle_auth_mode();
            }
            session.fill_auth_form(auth.form);
        }

        let confirmation = session.submit_auth(self.gateway.as_ref()).await?;
        info!(
            "Booking confirmed for doctor {}, redirecting to {}",
            confirmation.doctor_id, confirmation.redirect
        );

        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use doctor_cell::services::catalog::Catalog;

    use crate::models::{AuthSubmission, BOOKING_SUCCESS_MESSAGE};
    use crate::services::gateway::MockBookingGateway;

    #[derive(Default)]
    struct CountingGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BookingGateway for CountingGateway {
        async fn submit_booking(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(BookingConfirmation::for_request(&request))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn session() -> BookingSession {
        let doctor = Catalog::standard().doctor(1).cloned().unwrap();
        BookingSession::new(doctor, today())
    }

    #[tokio::test]
    async fn test_booking_without_slot_never_opens_dialog() {
        let gateway = CountingGateway::default();
        let mut session = session();

        assert_matches!(session.request_booking(), Err(BookingError::MissingSlot));
        assert!(!session.is_login_dialog_open());

        assert_matches!(session.submit_auth(&gateway).await, Err(BookingError::LoginNotRequested));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_slot_is_no_selection() {
        let mut session = session();
        session.select_slot("");
        assert_eq!(session.selected_slot(), None);
        assert_matches!(session.request_booking(), Err(BookingError::MissingSlot));
    }

    #[tokio::test]
    async fn test_full_booking_flow() {
        let gateway = MockBookingGateway;
        let mut session = session();
        session.select_slot("2:30 PM");
        session.set_duration(ConsultationDuration::Thirty);

        session.request_booking().unwrap();
        assert!(session.is_login_dialog_open());

        let confirmation = session.submit_auth(&gateway).await.unwrap();
        assert!(!session.is_login_dialog_open());
        assert_eq!(confirmation.message, BOOKING_SUCCESS_MESSAGE);
        assert_eq!(confirmation.fee, 300);
        assert_eq!(confirmation.slot, "2:30 PM");
        assert_eq!(confirmation.redirect, View::PatientDashboard);
    }

    #[test]
    fn test_toggle_auth_mode_resets_fields() {
        let mut session = session();
        session.toggle_auth_mode();
        assert_eq!(session.auth_mode(), AuthMode::Register);

        session.fill_auth_form(AuthForm {
            email: "jane@example.com".to_string(),
            password: "secret".to_string(),
            full_name: Some("Jane Smith".to_string()),
        });
        assert_eq!(session.auth_form().full_name.as_deref(), Some("Jane Smith"));

        session.toggle_auth_mode();
        assert_eq!(session.auth_mode(), AuthMode::Login);
        assert_eq!(session.auth_form(), &AuthForm::default());
    }

    #[test]
    fn test_login_form_drops_full_name() {
        let mut session = session();
        session.fill_auth_form(AuthForm {
            email: "a@b.c".to_string(),
            password: String::new(),
            full_name: Some("Ignored".to_string()),
        });
        assert_eq!(session.auth_form().full_name, None);
    }

    #[test]
    fn test_summary_only_with_slot() {
        let mut session = session();
        assert!(session.summary(today()).is_none());

        session.select_slot("9:00 AM");
        let summary = session.summary(today()).unwrap();
        assert_eq!(summary.date_label, "Today");
        assert_eq!(summary.time, "9:00 AM");
        assert_eq!(summary.fee, 150);

        session.set_date(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
        assert_eq!(session.summary(today()).unwrap().date_label, "2026-10-21");
    }

    #[test]
    fn test_view_reflects_selection() {
        let mut session = session();
        session.select_slot("10:15 AM");
        session.set_duration(ConsultationDuration::Ten);

        let view = session.view(today());
        assert_eq!(view.time_slots.len(), 16);
        assert_eq!(view.time_slots.iter().filter(|s| s.is_selected).count(), 1);
        assert_eq!(view.fee, 100);
        assert_eq!(view.book_label, "Book Appointment - $100");
        assert!(view.can_book);
        assert!(view.login_dialog.is_none());

        session.request_booking().unwrap();
        let dialog = session.view(today()).login_dialog.unwrap();
        assert_eq!(dialog.title, "Login");
        assert!(!dialog.asks_full_name);
    }

    #[tokio::test]
    async fn test_service_registers_and_books() {
        let gateway = Arc::new(CountingGateway::default());
        let service = BookingService::new(&AppConfig::default(), gateway.clone());

        let request = BookAppointmentRequest {
            slot: Some("3:00 PM".to_string()),
            duration: Some(45),
            date: None,
            symptoms: Some("  ".to_string()),
            auth: Some(AuthSubmission {
                mode: AuthMode::Register,
                form: AuthForm {
                    email: "new@example.com".to_string(),
                    password: "pw".to_string(),
                    full_name: Some("New Patient".to_string()),
                },
            }),
        };

        let confirmation = service.book_appointment("4", request, today()).await.unwrap();
        assert_eq!(confirmation.doctor_name, "Dr. James Wilson");
        assert_eq!(confirmation.fee, 750);
        assert_eq!(confirmation.date, today());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_service_rejects_unknown_duration() {
        let service = BookingService::new(&AppConfig::default(), Arc::new(MockBookingGateway));
        let request = BookAppointmentRequest {
            slot: Some("3:00 PM".to_string()),
            duration: Some(20),
            date: None,
            symptoms: None,
            auth: None,
        };

        assert_matches!(
            service.book_appointment("1", request, today()).await,
            Err(BookingError::InvalidDuration(m)) if m == "20"
        );
    }

    #[test]
    fn test_unknown_doctor_falls_back_to_default() {
        let service = BookingService::new(&AppConfig::default(), Arc::new(MockBookingGateway));
        let view = service.booking_page("ghost", None, ConsultationDuration::default(), today());
        assert_eq!(view.doctor.name, "Dr. Sarah Johnson");
        assert!(view.summary.is_none());
        assert!(!view.can_book);
    }
}
