//! Simulated emergency dispatch. Nothing here talks to a real service; the
//! sequence only drives the countdown and confirmation screens.

use crate::location::Coordinates;
use std::time::Duration;
use time::OffsetDateTime;

/// How long the emergency button stays in its pressed style.
pub const BUTTON_RESET_DELAY: Duration = Duration::from_secs(3);
/// Delay before the home screen announces the ambulance as dispatched.
pub const DISPATCH_UPDATE_DELAY: Duration = Duration::from_secs(5);
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchPhase {
    CountingDown { remaining: u32 },
    Dispatched,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DispatchSequence {
    remaining: u32,
    dispatched_at: Option<OffsetDateTime>,
}

impl DispatchSequence {
    pub fn new(countdown_secs: u32) -> Self {
        let mut sequence = Self {
            remaining: countdown_secs,
            dispatched_at: None,
        };
        if countdown_secs == 0 {
            sequence.dispatched_at = Some(OffsetDateTime::now_utc());
        }
        sequence
    }

    pub fn phase(&self) -> DispatchPhase {
        if self.dispatched_at.is_some() {
            DispatchPhase::Dispatched
        } else {
            DispatchPhase::CountingDown {
                remaining: self.remaining,
            }
        }
    }

    /// Advances the countdown by one second. A dispatched sequence is left as is.
    pub fn tick(&mut self) -> DispatchPhase {
        if self.dispatched_at.is_none() {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.dispatched_at = Some(OffsetDateTime::now_utc());
                tracing::info!("emergency services dispatched");
            }
        }
        self.phase()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn dispatched_at(&self) -> Option<OffsetDateTime> {
        self.dispatched_at
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DispatchDetails {
    pub ambulance_id: &'static str,
    pub unit_type: &'static str,
    pub eta_minutes: u32,
    pub address: &'static str,
    pub location: Coordinates,
    pub contact_phone: &'static str,
    pub contact_hours: &'static str,
}

impl Default for DispatchDetails {
    fn default() -> Self {
        Self {
            ambulance_id: "A-482",
            unit_type: "Advanced Life Support",
            eta_minutes: 8,
            address: "123 Main Street, Mumbai",
            location: Coordinates::DEFAULT,
            contact_phone: "+91 1234567890",
            contact_hours: "Available 24/7",
        }
    }
}

impl DispatchDetails {
    pub fn eta_label(&self) -> String {
        format!("{} minutes", self.eta_minutes)
    }
}

/// Home-screen emergency trigger state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmergencyRequest {
    pub pressed: bool,
    pub requested: bool,
}

impl EmergencyRequest {
    pub fn press(&mut self) {
        self.pressed = true;
        self.requested = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }
}
