use glof_shell::collaborators::{PaymentGateway, Pledge};
use glof_shell::error::CollaboratorError;
use glof_shell::presentation::{Icon, Tone};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn tone(&self) -> Tone {
        match self {
            Urgency::High => Tone::Destructive,
            Urgency::Medium => Tone::RiskModerate,
            Urgency::Low => Tone::RiskSafe,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "LOW",
            Urgency::Medium => "MEDIUM",
            Urgency::High => "HIGH",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignCategory {
    EmergencyRelief,
    Prevention,
    Education,
    Healthcare,
    Infrastructure,
    FoodSecurity,
}

impl CampaignCategory {
    /// Categories offered as filter buttons.
    pub const FILTERS: [CampaignCategory; 5] = [
        CampaignCategory::EmergencyRelief,
        CampaignCategory::Prevention,
        CampaignCategory::Education,
        CampaignCategory::Healthcare,
        CampaignCategory::Infrastructure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CampaignCategory::EmergencyRelief => "Emergency Relief",
            CampaignCategory::Prevention => "Prevention",
            CampaignCategory::Education => "Education",
            CampaignCategory::Healthcare => "Healthcare",
            CampaignCategory::Infrastructure => "Infrastructure",
            CampaignCategory::FoodSecurity => "Food Security",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            CampaignCategory::EmergencyRelief => Icon::Home,
            CampaignCategory::Prevention => Icon::Shield,
            CampaignCategory::Education => Icon::Users,
            CampaignCategory::Healthcare => Icon::Heart,
            CampaignCategory::Infrastructure => Icon::Building,
            CampaignCategory::FoodSecurity => Icon::Utensils,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Campaign {
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub target: u32,
    pub raised: u32,
    pub donors: u32,
    pub days_left: u32,
    pub urgency: Urgency,
    pub category: CampaignCategory,
    pub emblem: &'static str,
    pub beneficiaries: u32,
}

impl Campaign {
    pub fn progress_percent(&self) -> f32 {
        if self.target == 0 {
            return 0.0;
        }
        self.raised as f32 / self.target as f32 * 100.0
    }
}

pub const CAMPAIGNS: [Campaign; 6] = [
    Campaign {
        title: "Emergency Shelter for Displaced Families",
        description: "Providing immediate shelter and basic necessities for families displaced by recent GLOF events in Langtang region",
        location: "Langtang Valley, Nepal",
        target: 75_000,
        raised: 62_500,
        donors: 324,
        days_left: 12,
        urgency: Urgency::High,
        category: CampaignCategory::EmergencyRelief,
        emblem: "🏠",
        beneficiaries: 150,
    },
    Campaign {
        title: "Early Warning System Installation",
        description: "Installing advanced monitoring equipment and alert systems in vulnerable mountain communities",
        location: "Everest Region, Nepal",
        target: 120_000,
        raised: 89_000,
        donors: 156,
        days_left: 28,
        urgency: Urgency::Medium,
        category: CampaignCategory::Prevention,
        emblem: "📡",
        beneficiaries: 500,
    },
    Campaign {
        title: "Community Preparedness Training",
        description: "Training local communities in disaster preparedness, evacuation procedures, and emergency response",
        location: "Annapurna Region, Nepal",
        target: 35_000,
        raised: 28_000,
        donors: 89,
        days_left: 45,
        urgency: Urgency::Low,
        category: CampaignCategory::Education,
        emblem: "🎓",
        beneficiaries: 200,
    },
    Campaign {
        title: "Medical Aid & Supplies",
        description: "Emergency medical supplies and healthcare support for communities at high risk of glacier disasters",
        location: "Multiple Locations",
        target: 50_000,
        raised: 31_000,
        donors: 178,
        days_left: 20,
        urgency: Urgency::High,
        category: CampaignCategory::Healthcare,
        emblem: "🏥",
        beneficiaries: 300,
    },
    Campaign {
        title: "Safe Water Infrastructure",
        description: "Building resilient water systems and safe drinking water facilities in disaster-prone areas",
        location: "Manaslu Region, Nepal",
        target: 95_000,
        raised: 42_000,
        donors: 67,
        days_left: 60,
        urgency: Urgency::Medium,
        category: CampaignCategory::Infrastructure,
        emblem: "💧",
        beneficiaries: 400,
    },
    Campaign {
        title: "Food Security Program",
        description: "Ensuring food security and nutrition support for vulnerable communities in glacier risk zones",
        location: "Himalayan Regions",
        target: 65_000,
        raised: 58_000,
        donors: 203,
        days_left: 8,
        urgency: Urgency::High,
        category: CampaignCategory::FoodSecurity,
        emblem: "🍎",
        beneficiaries: 250,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ImpactStat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

#[rustfmt::skip]
pub const IMPACT_STATS: [ImpactStat; 4] = [
    ImpactStat { value: "$1.2M", label: "Total Raised", icon: Icon::DollarSign },
    ImpactStat { value: "2,847", label: "Donors", icon: Icon::Users },
    ImpactStat { value: "1,650", label: "People Helped", icon: Icon::Heart },
    ImpactStat { value: "24", label: "Active Projects", icon: Icon::Target },
];

pub const QUICK_AMOUNTS: [u32; 6] = [25, 50, 100, 250, 500, 1000];

pub const DEFAULT_AMOUNT: u32 = 50;

/// Selected donation amount, shared by every campaign card on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DonationForm {
    amount: u32,
}

impl Default for DonationForm {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
        }
    }
}

impl DonationForm {
    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn is_selected(&self, amount: u32) -> bool {
        self.amount == amount
    }

    pub fn select(&mut self, amount: u32) {
        self.amount = amount;
    }

    /// Free-text amount. Anything that is not a whole number becomes 0.
    pub fn set_custom(&mut self, raw: &str) {
        self.amount = raw.trim().parse().unwrap_or(0);
    }

    pub fn submit<P: PaymentGateway>(
        &self,
        gateway: &P,
        campaign: &Campaign,
    ) -> Result<(), CollaboratorError> {
        info!(campaign = campaign.title, amount = self.amount, "donation requested");
        gateway.donate(&Pledge {
            campaign: campaign.title.to_string(),
            amount: self.amount,
        })
    }
}

/// Category buttons above the campaign grid. `None` is "All".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub category: Option<CampaignCategory>,
}

impl CampaignFilter {
    pub fn apply<'a>(&self, campaigns: &'a [Campaign]) -> Vec<&'a Campaign> {
        campaigns
            .iter()
            .filter(|c| self.category.map_or(true, |category| c.category == category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_a_percentage() {
        let shelter = &CAMPAIGNS[0];
        assert!((shelter.progress_percent() - 83.333).abs() < 0.01);
        let mut empty = CAMPAIGNS[0];
        empty.target = 0;
        assert_eq!(empty.progress_percent(), 0.0);
    }

    #[test]
    fn custom_amount_parses_or_zeroes() {
        let mut form = DonationForm::default();
        assert_eq!(form.amount(), 50);
        form.set_custom(" 75 ");
        assert_eq!(form.amount(), 75);
        form.set_custom("lots");
        assert_eq!(form.amount(), 0);
        form.select(QUICK_AMOUNTS[2]);
        assert!(form.is_selected(100));
    }

    #[test]
    fn filter_by_category() {
        let all = CampaignFilter::default().apply(&CAMPAIGNS);
        assert_eq!(all.len(), 6);
        let healthcare = CampaignFilter {
            category: Some(CampaignCategory::Healthcare),
        }
        .apply(&CAMPAIGNS);
        assert_eq!(healthcare.len(), 1);
        assert_eq!(healthcare[0].title, "Medical Aid & Supplies");
    }
}
