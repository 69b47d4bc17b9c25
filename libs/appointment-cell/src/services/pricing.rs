use tracing::debug;

use crate::models::{ConsultationDuration, DurationOption, BASE_DURATION_MINUTES};

/// Multiplier the picker prints for a 10 minute consultation.
const SHORT_CONSULTATION_MULTIPLIER: f64 = 0.67;

pub struct PricingService {
    base_fee: u32,
}

impl PricingService {
    /// `base_fee` is the doctor's fee for a 15 minute consultation.
    pub fn new(base_fee: u32) -> Self {
        Self { base_fee }
    }

    pub fn base_fee(&self) -> u32 {
        self.base_fee
    }

    /// The fee charged for a booking: the base fee scaled by duration / 15, rounded.
    pub fn calculate_fee(&self, duration: ConsultationDuration) -> u32 {
        let multiplier = duration.minutes() as f64 / BASE_DURATION_MINUTES as f64;
        let fee = (self.base_fee as f64 * multiplier).round() as u32;

        debug!(
            "Calculated fee {} for base {} over {}",
            fee, self.base_fee, duration
        );

        fee
    }

    /// The precomputed price shown next to each picker option.
    ///
    /// Computed independently of [`calculate_fee`](Self::calculate_fee); the two can
    /// disagree for the 10 minute option.
    pub fn picker_fee(&self, duration: ConsultationDuration) -> u32 {
        match duration {
            ConsultationDuration::Ten => {
                (self.base_fee as f64 * SHORT_CONSULTATION_MULTIPLIER).round() as u32
            }
            ConsultationDuration::Fifteen => self.base_fee,
            ConsultationDuration::Thirty => self.base_fee.saturating_mul(2),
            ConsultationDuration::FortyFive => self.base_fee.saturating_mul(3),
        }
    }

    pub fn picker_diverges(&self, duration: ConsultationDuration) -> bool {
        self.picker_fee(duration) != self.calculate_fee(duration)
    }

    pub fn duration_options(&self, selected: ConsultationDuration) -> Vec<DurationOption> {
        ConsultationDuration::ALL
            .into_iter()
            .map(|duration| {
                let picker_fee = self.picker_fee(duration);
                DurationOption {
                    minutes: duration.minutes(),
                    label: format!("{} - ${}", duration, picker_fee),
                    picker_fee,
                    fee: self.calculate_fee(duration),
                    is_selected: duration == selected,
                }
            })
            .collect()
    }
}
