//! Closed sets of presentation variants and their fixed class tokens.

use serde::{Deserialize, Serialize};

/// Button-like primitive variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Outline,
    Ghost,
    Hero,
    Glass,
    /// Destructive call-to-action used for emergency controls.
    Emergency,
}

impl Variant {
    pub fn class(&self) -> &'static str {
        match self {
            Variant::Default => "btn-default",
            Variant::Outline => "btn-outline",
            Variant::Ghost => "btn-ghost",
            Variant::Hero => "btn-hero",
            Variant::Glass => "btn-glass",
            Variant::Emergency => "btn-emergency",
        }
    }

    /// `Default` when `selected`, otherwise `unselected`.
    pub fn selected_or(selected: bool, unselected: Variant) -> Variant {
        if selected {
            Variant::Default
        } else {
            unselected
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Icon,
    IconLg,
}

impl Size {
    pub fn class(&self) -> &'static str {
        match self {
            Size::Sm => "btn-sm",
            Size::Md => "btn-md",
            Size::Lg => "btn-lg",
            Size::Xl => "btn-xl",
            Size::Icon => "btn-icon",
            Size::IconLg => "btn-icon-lg",
        }
    }
}

pub fn button_class(variant: Variant, size: Size) -> String {
    format!("btn {} {}", variant.class(), size.class())
}

/// Colour family for badges, dots and highlighted text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Destructive,
    RiskSafe,
    RiskModerate,
    RiskHigh,
}

impl Tone {
    pub fn token(&self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Secondary => "secondary",
            Tone::Accent => "accent",
            Tone::Destructive => "destructive",
            Tone::RiskSafe => "risk-safe",
            Tone::RiskModerate => "risk-moderate",
            Tone::RiskHigh => "risk-high",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Primary => "badge badge-primary",
            Tone::Secondary => "badge badge-secondary",
            Tone::Accent => "badge badge-accent",
            Tone::Destructive => "badge badge-destructive",
            Tone::RiskSafe => "badge badge-risk-safe",
            Tone::RiskModerate => "badge badge-risk-moderate",
            Tone::RiskHigh => "badge badge-risk-high",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            Tone::Primary => "dot dot-primary",
            Tone::Secondary => "dot dot-secondary",
            Tone::Accent => "dot dot-accent",
            Tone::Destructive => "dot dot-destructive",
            Tone::RiskSafe => "dot dot-risk-safe",
            Tone::RiskModerate => "dot dot-risk-moderate",
            Tone::RiskHigh => "dot dot-risk-high",
        }
    }
}

/// GLOF risk classification shared by the dashboards and the safety guide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn tone(&self) -> Tone {
        match self {
            RiskLevel::Low => Tone::RiskSafe,
            RiskLevel::Moderate => Tone::RiskModerate,
            RiskLevel::High => Tone::RiskHigh,
            RiskLevel::Critical => Tone::Destructive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Activity,
    AlertTriangle,
    BarChart,
    Bell,
    BookOpen,
    Bot,
    Brain,
    Building,
    CheckCircle,
    ChevronDown,
    Clock,
    Close,
    Cloud,
    DollarSign,
    Droplets,
    ExternalLink,
    Eye,
    EyeOff,
    FileText,
    Globe,
    Heart,
    Home,
    Info,
    LogIn,
    Mail,
    MapPin,
    Menu,
    Monitor,
    Mountain,
    Navigation,
    Phone,
    Satellite,
    Search,
    Shield,
    Target,
    Thermometer,
    TrendingUp,
    Truck,
    User,
    UserPlus,
    Users,
    Utensils,
    XCircle,
    Zap,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Activity => "📈",
            Icon::AlertTriangle => "⚠",
            Icon::BarChart => "📊",
            Icon::Bell => "🔔",
            Icon::BookOpen => "📖",
            Icon::Bot => "🤖",
            Icon::Brain => "🧠",
            Icon::Building => "🏢",
            Icon::CheckCircle => "✔",
            Icon::ChevronDown => "▾",
            Icon::Clock => "⏱",
            Icon::Close => "✕",
            Icon::Cloud => "☁",
            Icon::DollarSign => "$",
            Icon::Droplets => "💧",
            Icon::ExternalLink => "↗",
            Icon::Eye => "👁",
            Icon::EyeOff => "⊘",
            Icon::FileText => "📄",
            Icon::Globe => "🌐",
            Icon::Heart => "♥",
            Icon::Home => "🏠",
            Icon::Info => "ℹ",
            Icon::LogIn => "→",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Menu => "☰",
            Icon::Monitor => "🖥",
            Icon::Mountain => "⛰",
            Icon::Navigation => "🧭",
            Icon::Phone => "📞",
            Icon::Satellite => "🛰",
            Icon::Search => "🔍",
            Icon::Shield => "🛡",
            Icon::Target => "🎯",
            Icon::Thermometer => "🌡",
            Icon::TrendingUp => "↑",
            Icon::Truck => "🚒",
            Icon::User => "👤",
            Icon::UserPlus => "+",
            Icon::Users => "👥",
            Icon::Utensils => "🍴",
            Icon::XCircle => "✖",
            Icon::Zap => "⚡",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_tones_escalate() {
        assert_eq!(RiskLevel::Low.tone(), Tone::RiskSafe);
        assert_eq!(RiskLevel::Moderate.tone(), Tone::RiskModerate);
        assert_eq!(RiskLevel::High.tone(), Tone::RiskHigh);
        assert_eq!(RiskLevel::Critical.tone(), Tone::Destructive);
        assert!(RiskLevel::Low < RiskLevel::Critical);
    }

    #[test]
    fn badge_class_embeds_token() {
        for tone in [
            Tone::Primary,
            Tone::Secondary,
            Tone::Accent,
            Tone::Destructive,
            Tone::RiskSafe,
            Tone::RiskModerate,
            Tone::RiskHigh,
        ] {
            assert!(tone.badge_class().ends_with(tone.token()));
            assert!(tone.dot_class().ends_with(tone.token()));
        }
    }

    #[test]
    fn selected_variant_falls_back() {
        assert_eq!(Variant::selected_or(true, Variant::Outline), Variant::Default);
        assert_eq!(Variant::selected_or(false, Variant::Ghost), Variant::Ghost);
        assert_eq!(button_class(Variant::Hero, Size::Sm), "btn btn-hero btn-sm");
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
    }
}
