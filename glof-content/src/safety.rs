use glof_shell::presentation::{Icon, RiskLevel};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyTab {
    #[default]
    Emergency,
    Preparedness,
    Warnings,
    Risk,
}

impl SafetyTab {
    pub const ALL: [SafetyTab; 4] = [
        SafetyTab::Emergency,
        SafetyTab::Preparedness,
        SafetyTab::Warnings,
        SafetyTab::Risk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SafetyTab::Emergency => "Emergency Response",
            SafetyTab::Preparedness => "Preparedness",
            SafetyTab::Warnings => "Warning Signs",
            SafetyTab::Risk => "Risk Levels",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EmergencyStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub timeframe: &'static str,
}

pub const EMERGENCY_STEPS: [EmergencyStep; 4] = [
    EmergencyStep {
        step: 1,
        title: "Immediate Alert Recognition",
        description: "Recognize GLOF warning signals: unusual sounds, ground vibrations, water level changes",
        icon: Icon::AlertTriangle,
        timeframe: "0-2 minutes",
    },
    EmergencyStep {
        step: 2,
        title: "Alert Community",
        description: "Immediately warn family, neighbors, and community members using all available means",
        icon: Icon::Users,
        timeframe: "2-5 minutes",
    },
    EmergencyStep {
        step: 3,
        title: "Evacuate to High Ground",
        description: "Move perpendicular to the flow direction, reach elevation at least 30m above river level",
        icon: Icon::Navigation,
        timeframe: "5-15 minutes",
    },
    EmergencyStep {
        step: 4,
        title: "Call Emergency Services",
        description: "Contact disaster management authorities and emergency services once in safe location",
        icon: Icon::Phone,
        timeframe: "Immediately after safety",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Checklist {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const PREPAREDNESS_CHECKLISTS: [Checklist; 3] = [
    Checklist {
        category: "Emergency Kit",
        items: &[
            "72-hour supply of water (1 gallon per person per day)",
            "Non-perishable food for 3 days",
            "Battery-powered or hand-crank radio",
            "Flashlight and extra batteries",
            "First aid kit and medications",
            "Emergency blankets and warm clothing",
            "Important documents in waterproof container",
            "Cash and emergency contact list",
        ],
    },
    Checklist {
        category: "Communication Plan",
        items: &[
            "Establish meeting points for family members",
            "Identify out-of-area contact person",
            "Program emergency numbers in all phones",
            "Learn local warning signals and evacuation routes",
            "Register for community alert systems",
            "Share plan with neighbors and local community",
            "Practice evacuation routes regularly",
            "Keep battery-powered radio for updates",
        ],
    },
    Checklist {
        category: "Home Preparation",
        items: &[
            "Identify and clear evacuation routes from home",
            "Secure heavy furniture and objects",
            "Know location of gas, water, and electrical shutoffs",
            "Install battery backup for essential equipment",
            "Keep vehicles fueled and in good condition",
            "Waterproof important documents",
            "Create digital copies of important papers",
            "Install emergency lighting systems",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WarningSign {
    pub title: &'static str,
    pub description: &'static str,
    pub severity: RiskLevel,
    pub action: &'static str,
}

pub const WARNING_SIGNS: [WarningSign; 6] = [
    WarningSign {
        title: "Unusual Water Conditions",
        description: "Sudden water level changes, muddy water, or debris in streams",
        severity: RiskLevel::High,
        action: "Evacuate immediately",
    },
    WarningSign {
        title: "Ground Movement",
        description: "Earthquakes, landslides, or ground vibrations",
        severity: RiskLevel::High,
        action: "Move to safe location",
    },
    WarningSign {
        title: "Strange Sounds",
        description: "Loud rumbling, roaring, or rushing water sounds",
        severity: RiskLevel::High,
        action: "Alert others and evacuate",
    },
    WarningSign {
        title: "Animal Behavior",
        description: "Unusual animal behavior or mass animal movement",
        severity: RiskLevel::Moderate,
        action: "Stay alert and monitor",
    },
    WarningSign {
        title: "Temperature Changes",
        description: "Sudden temperature increases in water sources",
        severity: RiskLevel::Moderate,
        action: "Report to authorities",
    },
    WarningSign {
        title: "Infrastructure Damage",
        description: "Cracks in dams, unusual seepage, or structural damage",
        severity: RiskLevel::High,
        action: "Report immediately and evacuate",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RiskGuidance {
    pub level: RiskLevel,
    pub description: &'static str,
    pub actions: &'static [&'static str],
    pub restrictions: &'static [&'static str],
}

/// Levels offered by the risk selector, lowest first.
pub const GUIDED_LEVELS: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High];

const LOW_GUIDANCE: RiskGuidance = RiskGuidance {
    level: RiskLevel::Low,
    description: "Normal monitoring conditions",
    actions: &[
        "Stay informed through official channels",
        "Maintain emergency preparedness",
        "Participate in community drills",
    ],
    restrictions: &[],
};

const MODERATE_GUIDANCE: RiskGuidance = RiskGuidance {
    level: RiskLevel::Moderate,
    description: "Increased monitoring and caution advised",
    actions: &[
        "Check emergency kit supplies",
        "Review evacuation routes",
        "Stay alert to warnings",
        "Avoid unnecessary travel to risk areas",
    ],
    restrictions: &["Limited access to high-risk zones", "Enhanced monitoring required"],
};

const HIGH_GUIDANCE: RiskGuidance = RiskGuidance {
    level: RiskLevel::High,
    description: "Immediate danger - evacuation recommended",
    actions: &[
        "Evacuate immediately if instructed",
        "Move to designated safe areas",
        "Follow emergency services guidance",
        "Help vulnerable community members",
    ],
    restrictions: &[
        "No access to danger zones",
        "Mandatory evacuation may be ordered",
        "Emergency services priority access only",
    ],
};

/// Guidance for `level`. Critical shares the high-risk guidance.
pub fn guidance(level: RiskLevel) -> &'static RiskGuidance {
    match level {
        RiskLevel::Low => &LOW_GUIDANCE,
        RiskLevel::Moderate => &MODERATE_GUIDANCE,
        RiskLevel::High | RiskLevel::Critical => &HIGH_GUIDANCE,
    }
}

/// Risk-level buttons on the safety guide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskSelector {
    selected: RiskLevel,
}

impl Default for RiskSelector {
    fn default() -> Self {
        Self {
            selected: RiskLevel::High,
        }
    }
}

impl RiskSelector {
    pub fn selected(&self) -> RiskLevel {
        self.selected
    }

    pub fn select(&mut self, level: RiskLevel) {
        self.selected = level;
    }

    pub fn guidance(&self) -> &'static RiskGuidance {
        guidance(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_defaults_to_high() {
        let selector = RiskSelector::default();
        assert_eq!(selector.selected(), RiskLevel::High);
        assert_eq!(selector.guidance().restrictions.len(), 3);
    }

    #[test]
    fn low_risk_has_no_restrictions() {
        let mut selector = RiskSelector::default();
        selector.select(RiskLevel::Low);
        assert!(selector.guidance().restrictions.is_empty());
        assert_eq!(selector.guidance().level, RiskLevel::Low);
    }

    #[test]
    fn every_guided_level_has_actions() {
        for level in GUIDED_LEVELS {
            let g = guidance(level);
            assert_eq!(g.level, level);
            assert!(!g.actions.is_empty());
        }
    }

    #[test]
    fn steps_are_numbered_in_order() {
        for (i, step) in EMERGENCY_STEPS.iter().enumerate() {
            assert_eq!(usize::from(step.step), i + 1);
        }
    }
}
