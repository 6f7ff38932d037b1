use glof_shell::presentation::{Icon, Tone};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Research,
    Emergency,
    Funding,
    Policy,
    Regulation,
    Budget,
}

impl ResourceCategory {
    pub fn icon(&self) -> Icon {
        match self {
            ResourceCategory::Research => Icon::FileText,
            ResourceCategory::Emergency => Icon::Shield,
            ResourceCategory::Funding => Icon::DollarSign,
            ResourceCategory::Policy => Icon::Building,
            ResourceCategory::Regulation => Icon::Shield,
            ResourceCategory::Budget => Icon::TrendingUp,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ResourceCategory::Research => Tone::Primary,
            ResourceCategory::Emergency => Tone::Destructive,
            ResourceCategory::Funding => Tone::RiskModerate,
            ResourceCategory::Policy => Tone::Secondary,
            ResourceCategory::Regulation => Tone::RiskSafe,
            ResourceCategory::Budget => Tone::Accent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub date: &'static str,
    pub agency: &'static str,
    pub status: &'static str,
    pub downloads: u32,
    pub category: ResourceCategory,
}

pub const RESOURCES: [Resource; 6] = [
    Resource {
        title: "National GLOF Risk Assessment Report 2024",
        description: "Comprehensive analysis of glacier lake outburst flood risks across all major mountain regions",
        kind: "Report",
        date: "2024-03-15",
        agency: "Department of Hydrology and Meteorology",
        status: "Published",
        downloads: 2847,
        category: ResourceCategory::Research,
    },
    Resource {
        title: "Emergency Response Protocol Guidelines",
        description: "Standard operating procedures for GLOF emergency response and evacuation planning",
        kind: "Guidelines",
        date: "2024-02-28",
        agency: "National Disaster Risk Reduction Authority",
        status: "Updated",
        downloads: 1523,
        category: ResourceCategory::Emergency,
    },
    Resource {
        title: "Community Preparedness Grant Program",
        description: "Funding opportunities for local communities to implement GLOF prevention measures",
        kind: "Funding",
        date: "2024-04-01",
        agency: "Ministry of Home Affairs",
        status: "Active",
        downloads: 956,
        category: ResourceCategory::Funding,
    },
    Resource {
        title: "Glacier Monitoring Network Expansion Plan",
        description: "Strategic plan for expanding real-time glacier monitoring infrastructure nationwide",
        kind: "Policy",
        date: "2024-01-10",
        agency: "Department of Environment",
        status: "Approved",
        downloads: 734,
        category: ResourceCategory::Policy,
    },
    Resource {
        title: "Building Codes for High-Risk Areas",
        description: "Updated construction standards and building codes for glacier disaster-prone regions",
        kind: "Regulation",
        date: "2024-03-20",
        agency: "Ministry of Urban Development",
        status: "Enforced",
        downloads: 1856,
        category: ResourceCategory::Regulation,
    },
    Resource {
        title: "Climate Adaptation Budget Allocation 2024",
        description: "Government budget allocation for climate adaptation and disaster risk reduction programs",
        kind: "Budget",
        date: "2024-04-15",
        agency: "Ministry of Finance",
        status: "Approved",
        downloads: 623,
        category: ResourceCategory::Budget,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
    pub agency: &'static str,
    pub urgent: bool,
}

pub const NEWS: [NewsItem; 4] = [
    NewsItem {
        title: "Government Launches Advanced GLOF Early Warning System",
        date: "2024-04-18",
        summary: "New state-of-the-art monitoring system deployed across 50 high-risk glacier lakes",
        agency: "Prime Minister's Office",
        urgent: true,
    },
    NewsItem {
        title: "International Climate Fund Approves $50M for Nepal GLOF Prevention",
        date: "2024-04-16",
        summary: "Major funding secured for community resilience and infrastructure projects",
        agency: "Ministry of Finance",
        urgent: false,
    },
    NewsItem {
        title: "New Emergency Response Training Centers Inaugurated",
        date: "2024-04-14",
        summary: "Five regional training facilities now operational for disaster preparedness education",
        agency: "National Emergency Management",
        urgent: false,
    },
    NewsItem {
        title: "Updated GLOF Risk Maps Released for Public Access",
        date: "2024-04-12",
        summary: "High-resolution risk mapping data now available for all stakeholders",
        agency: "Survey Department",
        urgent: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Scheme {
    pub title: &'static str,
    pub description: &'static str,
    pub eligibility: &'static str,
    pub amount: &'static str,
    pub deadline: &'static str,
    pub status: &'static str,
}

pub const SCHEMES: [Scheme; 3] = [
    Scheme {
        title: "Mountain Community Resilience Scheme",
        description: "Financial assistance for disaster-resistant infrastructure development",
        eligibility: "Mountain communities in high-risk zones",
        amount: "Up to NPR 2,000,000",
        deadline: "2024-06-30",
        status: "Open",
    },
    Scheme {
        title: "GLOF Insurance Subsidy Program",
        description: "Government subsidy for disaster insurance premiums",
        eligibility: "Households in glacier risk areas",
        amount: "70% premium subsidy",
        deadline: "2024-05-15",
        status: "Open",
    },
    Scheme {
        title: "Emergency Shelter Construction Grant",
        description: "Funding for community emergency shelter facilities",
        eligibility: "Local government bodies",
        amount: "NPR 5,000,000 - 20,000,000",
        deadline: "2024-07-31",
        status: "Open",
    },
];

/// News items, most recent first. Dates are ISO-8601 so they sort as text.
pub fn latest_news(items: &[NewsItem]) -> Vec<&NewsItem> {
    let mut sorted: Vec<_> = items.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_sorted_newest_first() {
        let mut shuffled = NEWS;
        shuffled.reverse();
        let latest = latest_news(&shuffled);
        assert_eq!(latest[0].date, "2024-04-18");
        assert!(latest[0].urgent);
        assert_eq!(latest[3].date, "2024-04-12");
    }

    #[test]
    fn emergency_resources_are_destructive() {
        let emergency = RESOURCES
            .iter()
            .find(|r| r.category == ResourceCategory::Emergency)
            .expect("emergency resource");
        assert_eq!(emergency.category.tone(), Tone::Destructive);
    }
}
