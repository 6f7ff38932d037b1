use glof_shell::presentation::{Icon, Tone};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgCategory {
    Disaster,
    Emergency,
    Research,
    Community,
    Funding,
}

impl OrgCategory {
    pub const ALL: [OrgCategory; 5] = [
        OrgCategory::Emergency,
        OrgCategory::Research,
        OrgCategory::Community,
        OrgCategory::Funding,
        OrgCategory::Disaster,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrgCategory::Disaster => "Disaster",
            OrgCategory::Emergency => "Emergency",
            OrgCategory::Research => "Research",
            OrgCategory::Community => "Community",
            OrgCategory::Funding => "Funding",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            OrgCategory::Disaster => Icon::Shield,
            OrgCategory::Emergency => Icon::Truck,
            OrgCategory::Research => Icon::Building,
            OrgCategory::Community => Icon::Users,
            OrgCategory::Funding => Icon::Heart,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            OrgCategory::Disaster => Tone::Destructive,
            OrgCategory::Emergency => Tone::RiskHigh,
            OrgCategory::Research => Tone::Primary,
            OrgCategory::Community => Tone::RiskSafe,
            OrgCategory::Funding => Tone::RiskModerate,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub contact: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub services: &'static [&'static str],
    pub verified: bool,
    pub category: OrgCategory,
}

pub const ORGANIZATIONS: [Organization; 6] = [
    Organization {
        name: "Himalayan Disaster Relief Fund",
        kind: "NGO",
        description: "Specialized in mountain disaster response and community preparedness training",
        location: "Kathmandu, Nepal",
        contact: "+977-1-4567890",
        email: "contact@hdrf.org",
        website: "www.hdrf.org",
        services: &["Emergency Response", "Community Training", "Equipment Supply"],
        verified: true,
        category: OrgCategory::Disaster,
    },
    Organization {
        name: "Mountain Communities Alliance",
        kind: "International NGO",
        description: "Supporting vulnerable mountain communities with disaster preparedness and climate adaptation",
        location: "Multiple Locations",
        contact: "+1-555-123456",
        email: "help@mountainalliance.org",
        website: "www.mountainalliance.org",
        services: &["Capacity Building", "Early Warning", "Infrastructure"],
        verified: true,
        category: OrgCategory::Community,
    },
    Organization {
        name: "Glacier Research Institute",
        kind: "Research Organization",
        description: "Leading research on glacier dynamics and GLOF risk assessment in the Himalayas",
        location: "Pokhara, Nepal",
        contact: "+977-61-123456",
        email: "research@gri.edu.np",
        website: "www.gri.edu.np",
        services: &["Research", "Risk Assessment", "Technical Consultation"],
        verified: true,
        category: OrgCategory::Research,
    },
    Organization {
        name: "Emergency Response Nepal",
        kind: "Emergency Service",
        description: "24/7 emergency response coordination for natural disasters including GLOFs",
        location: "Nationwide Coverage",
        contact: "1077",
        email: "emergency@ern.gov.np",
        website: "www.ern.gov.np",
        services: &["Emergency Response", "Rescue Operations", "Medical Aid"],
        verified: true,
        category: OrgCategory::Emergency,
    },
    Organization {
        name: "Climate Adaptation Fund",
        kind: "Funding Organization",
        description: "Providing financial support for climate adaptation and disaster risk reduction projects",
        location: "International",
        contact: "+44-20-12345678",
        email: "grants@caf.org",
        website: "www.caf.org",
        services: &["Funding", "Grant Management", "Technical Support"],
        verified: true,
        category: OrgCategory::Funding,
    },
    Organization {
        name: "Local Community Networks",
        kind: "Community Group",
        description: "Grassroots organizations working directly with at-risk communities",
        location: "Rural Mountain Areas",
        contact: "+977-9841234567",
        email: "connect@lcn.org.np",
        website: "www.lcn.org.np",
        services: &["Community Mobilization", "Local Response", "Awareness"],
        verified: true,
        category: OrgCategory::Community,
    },
];

/// Search box and category buttons of the directory page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrgFilter {
    pub query: String,
    /// `None` shows every category.
    pub category: Option<OrgCategory>,
}

impl OrgFilter {
    pub fn matches(&self, org: &Organization) -> bool {
        if let Some(category) = self.category {
            if org.category != category {
                return false;
            }
        }
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [org.name, org.description, org.location]
            .iter()
            .chain(org.services.iter())
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, orgs: &'a [Organization]) -> Vec<&'a Organization> {
        orgs.iter().filter(|org| self.matches(org)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_keeps_everything() {
        assert_eq!(OrgFilter::default().apply(&ORGANIZATIONS).len(), 6);
    }

    #[test]
    fn query_is_case_insensitive_and_searches_services() {
        let filter = OrgFilter {
            query: "  early WARNING ".into(),
            category: None,
        };
        let names: Vec<_> = filter.apply(&ORGANIZATIONS).iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["Mountain Communities Alliance"]);
    }

    #[test]
    fn category_and_query_combine() {
        let filter = OrgFilter {
            query: "nepal".into(),
            category: Some(OrgCategory::Community),
        };
        assert!(filter.apply(&ORGANIZATIONS).is_empty());

        let filter = OrgFilter {
            query: String::new(),
            category: Some(OrgCategory::Community),
        };
        assert_eq!(filter.apply(&ORGANIZATIONS).len(), 2);
    }
}
