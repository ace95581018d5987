//! Seeded development dataset for the dev-server and browser testing.

use payloads::responses::Check;
use payloads::{CodeState, PaymentState};
use tracing::info;

use crate::{TestApp, sample_check};

/// A spread of check reports across states, ages, and models, so list
/// views have something to page and filter through.
pub struct DevDataset {
    pub checks: Vec<Check>,
}

impl DevDataset {
    pub fn create(app: &TestApp) -> DevDataset {
        let models = [
            ("Toyota Corolla", "12가3456"),
            ("Hyundai Sonata", "34나5678"),
            ("Kia Sorento", "56다7890"),
            ("Honda Civic", "78라1234"),
            ("Ford Focus", "90마5678"),
            ("Tesla Model 3", "11바2233"),
        ];

        let mut checks = Vec::new();
        for (i, (model, plate)) in models.iter().enumerate() {
            for age in 0..4 {
                let mut check =
                    sample_check(plate, model, (i as i64) * 4 + age);
                // Vary the states deterministically
                check.viewed = (i + age as usize) % 3 == 0;
                check.code_state = match (i + age as usize) % 3 {
                    0 => CodeState::Pending,
                    1 => CodeState::Confirmed,
                    _ => CodeState::Expired,
                };
                check.payment_state = match (i + age as usize) % 4 {
                    0 => PaymentState::Unpaid,
                    3 => PaymentState::Refunded,
                    _ => PaymentState::Paid,
                };
                checks.push(check);
            }
        }

        app.store.seed(checks.clone());
        DevDataset { checks }
    }

    pub fn print_summary(&self) {
        let viewed = self.checks.iter().filter(|c| c.viewed).count();
        let unpaid = self
            .checks
            .iter()
            .filter(|c| c.payment_state == PaymentState::Unpaid)
            .count();
        info!("   {} check reports seeded", self.checks.len());
        info!("   {viewed} viewed, {} unviewed", self.checks.len() - viewed);
        info!("   {unpaid} unpaid");
    }
}
