use crate::collaborators::{AssistantLauncher, Telephony};
use crate::error::CollaboratorError;
use crate::presentation::{Icon, Tone};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactCategory {
    HighPriority,
    Standard,
}

impl ContactCategory {
    pub fn tone(&self) -> Tone {
        match self {
            ContactCategory::HighPriority => Tone::Destructive,
            ContactCategory::Standard => Tone::RiskHigh,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub dial_number: &'static str,
    pub category: ContactCategory,
    pub icon: Icon,
}

impl EmergencyContact {
    /// Non-empty and ASCII digits only.
    pub fn is_dialable(&self) -> bool {
        !self.dial_number.is_empty() && self.dial_number.bytes().all(|b| b.is_ascii_digit())
    }
}

pub const EMERGENCY_CONTACTS: [EmergencyContact; 5] = [
    EmergencyContact {
        name: "Disaster Management",
        dial_number: "1077",
        category: ContactCategory::HighPriority,
        icon: Icon::Shield,
    },
    EmergencyContact {
        name: "Police Emergency",
        dial_number: "100",
        category: ContactCategory::HighPriority,
        icon: Icon::Shield,
    },
    EmergencyContact {
        name: "Ambulance",
        dial_number: "102",
        category: ContactCategory::HighPriority,
        icon: Icon::Heart,
    },
    EmergencyContact {
        name: "Fire Brigade",
        dial_number: "101",
        category: ContactCategory::HighPriority,
        icon: Icon::Truck,
    },
    EmergencyContact {
        name: "GLOF Alert Center",
        dial_number: "1234",
        category: ContactCategory::Standard,
        icon: Icon::AlertTriangle,
    },
];

/// Open/closed flag of the floating emergency panel. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmergencyPanel {
    open: bool,
}

impl EmergencyPanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "emergency panel toggled");
    }

    fn close(&mut self) {
        self.open = false;
    }
}

/// Actions offered by the emergency panel.
#[derive(Clone, Copy, Debug)]
pub struct EmergencyOverlay<T, A> {
    telephony: T,
    assistant: A,
}

impl<T: Telephony, A: AssistantLauncher> EmergencyOverlay<T, A> {
    pub fn new(telephony: T, assistant: A) -> Self {
        Self {
            telephony,
            assistant,
        }
    }

    /// Hands the number to the host dialer. The panel stays open so another
    /// number can be tried straight away.
    pub fn dial(&self, contact: &EmergencyContact) {
        info!(contact = contact.name, number = contact.dial_number, "dialing");
        self.telephony.dial(contact.dial_number);
    }

    /// Closes the panel, then asks the launcher to start the assistant.
    pub fn invoke_assistant(&self, panel: &mut EmergencyPanel) -> Result<(), CollaboratorError> {
        panel.close();
        self.assistant.launch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_contact_is_dialable() {
        for contact in &EMERGENCY_CONTACTS {
            assert!(contact.is_dialable(), "{} has a bad number", contact.name);
        }
    }

    #[test]
    fn only_alert_center_is_standard() {
        let standard: Vec<_> = EMERGENCY_CONTACTS
            .iter()
            .filter(|c| c.category == ContactCategory::Standard)
            .map(|c| c.name)
            .collect();
        assert_eq!(standard, vec!["GLOF Alert Center"]);
    }

    #[test]
    fn category_serializes_in_kebab_case() {
        let json = serde_json::to_value(EMERGENCY_CONTACTS[0]).expect("json");
        assert_eq!(json["category"], "high-priority");
        let json = serde_json::to_value(EMERGENCY_CONTACTS[4]).expect("json");
        assert_eq!(json["category"], "standard");
    }

    #[test]
    fn rejects_empty_and_non_digit_numbers() {
        let mut contact = EMERGENCY_CONTACTS[0];
        contact.dial_number = "";
        assert!(!contact.is_dialable());
        contact.dial_number = "+977-1";
        assert!(!contact.is_dialable());
    }
}
