use glof_shell::presentation::{Icon, RiskLevel, Variant};
use serde::Serialize;

/// Conditions shown in the landing page status panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LocationSnapshot {
    pub name: &'static str,
    pub temperature: &'static str,
    pub weather: &'static str,
    pub humidity: &'static str,
    pub wind_speed: &'static str,
    pub risk_level: RiskLevel,
    pub glacier_lakes: u32,
    pub monitoring_stations: u32,
}

pub const LOCATION_SNAPSHOT: LocationSnapshot = LocationSnapshot {
    name: "Kathmandu Valley",
    temperature: "18°C",
    weather: "Partly Cloudy",
    humidity: "65%",
    wind_speed: "12 km/h",
    risk_level: RiskLevel::Moderate,
    glacier_lakes: 12,
    monitoring_stations: 8,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub href: &'static str,
    pub variant: Variant,
}

pub const SERVICE_CARDS: [ServiceCard; 6] = [
    ServiceCard {
        title: "Live Dashboard",
        description: "Real-time monitoring of glacier lakes and GLOF risk assessment",
        icon: Icon::Monitor,
        href: "/dashboard",
        variant: Variant::Hero,
    },
    ServiceCard {
        title: "Analytics Center",
        description: "Comprehensive data analysis and trend monitoring",
        icon: Icon::BarChart,
        href: "/analytics",
        variant: Variant::Glass,
    },
    ServiceCard {
        title: "Emergency Services",
        description: "Direct access to disaster management and emergency contacts",
        icon: Icon::Phone,
        href: "/emergency",
        variant: Variant::Emergency,
    },
    ServiceCard {
        title: "AI Assistant",
        description: "Intelligent chatbot for guidance and emergency support",
        icon: Icon::Brain,
        href: "/chatbot",
        variant: Variant::Default,
    },
    ServiceCard {
        title: "Organizations",
        description: "Connect with NGOs and support organizations",
        icon: Icon::Users,
        href: "/organizations",
        variant: Variant::Default,
    },
    ServiceCard {
        title: "Donations",
        description: "Support communities affected by glacier disasters",
        icon: Icon::Heart,
        href: "/donations",
        variant: Variant::Default,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Satellite Monitoring",
        description: "Real-time satellite imagery analysis",
        icon: Icon::Satellite,
    },
    Feature {
        title: "Early Warning System",
        description: "Advanced alert mechanisms for communities",
        icon: Icon::Bell,
    },
    Feature {
        title: "Risk Assessment",
        description: "AI-powered glacier lake danger evaluation",
        icon: Icon::Activity,
    },
    Feature {
        title: "Global Network",
        description: "Connected monitoring across mountain regions",
        icon: Icon::Globe,
    },
    Feature {
        title: "Rapid Response",
        description: "Coordinated emergency response protocols",
        icon: Icon::Zap,
    },
    Feature {
        title: "Community Alerts",
        description: "Localized warning system for residents",
        icon: Icon::AlertTriangle,
    },
];
