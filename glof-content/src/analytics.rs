//! Sample series behind the analytics dashboard.

use glof_shell::presentation::{Icon, RiskLevel};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LakeVolumePoint {
    pub month: &'static str,
    /// Cubic metres.
    pub volume: u32,
    /// 0–10 risk index.
    pub risk: u8,
}

#[rustfmt::skip]
pub const LAKE_VOLUME: [LakeVolumePoint; 12] = [
    LakeVolumePoint { month: "Jan", volume: 850_000, risk: 2 },
    LakeVolumePoint { month: "Feb", volume: 820_000, risk: 2 },
    LakeVolumePoint { month: "Mar", volume: 890_000, risk: 3 },
    LakeVolumePoint { month: "Apr", volume: 950_000, risk: 4 },
    LakeVolumePoint { month: "May", volume: 1_200_000, risk: 6 },
    LakeVolumePoint { month: "Jun", volume: 1_450_000, risk: 7 },
    LakeVolumePoint { month: "Jul", volume: 1_600_000, risk: 8 },
    LakeVolumePoint { month: "Aug", volume: 1_580_000, risk: 7 },
    LakeVolumePoint { month: "Sep", volume: 1_420_000, risk: 6 },
    LakeVolumePoint { month: "Oct", volume: 1_150_000, risk: 4 },
    LakeVolumePoint { month: "Nov", volume: 980_000, risk: 3 },
    LakeVolumePoint { month: "Dec", volume: 900_000, risk: 2 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MeltPoint {
    pub day: &'static str,
    pub temp_c: i8,
    pub glacier_melt: u32,
}

#[rustfmt::skip]
pub const WEEKLY_MELT: [MeltPoint; 7] = [
    MeltPoint { day: "Mon", temp_c: -2, glacier_melt: 120 },
    MeltPoint { day: "Tue", temp_c: 1, glacier_melt: 180 },
    MeltPoint { day: "Wed", temp_c: 3, glacier_melt: 250 },
    MeltPoint { day: "Thu", temp_c: 2, glacier_melt: 200 },
    MeltPoint { day: "Fri", temp_c: 4, glacier_melt: 320 },
    MeltPoint { day: "Sat", temp_c: 6, glacier_melt: 450 },
    MeltPoint { day: "Sun", temp_c: 5, glacier_melt: 380 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RiskShare {
    pub level: RiskLevel,
    pub percent: u8,
}

#[rustfmt::skip]
pub const RISK_DISTRIBUTION: [RiskShare; 4] = [
    RiskShare { level: RiskLevel::Low, percent: 45 },
    RiskShare { level: RiskLevel::Moderate, percent: 35 },
    RiskShare { level: RiskLevel::High, percent: 15 },
    RiskShare { level: RiskLevel::Critical, percent: 5 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegionStations {
    pub region: &'static str,
    pub stations: u32,
    pub alerts: u32,
}

#[rustfmt::skip]
pub const MONITORING_STATIONS: [RegionStations; 5] = [
    RegionStations { region: "Everest", stations: 12, alerts: 3 },
    RegionStations { region: "Annapurna", stations: 8, alerts: 1 },
    RegionStations { region: "Langtang", stations: 6, alerts: 2 },
    RegionStations { region: "Kanchenjunga", stations: 4, alerts: 0 },
    RegionStations { region: "Manaslu", stations: 5, alerts: 1 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeadlineStat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: Icon,
}

pub const HEADLINE_STATS: [HeadlineStat; 4] = [
    HeadlineStat {
        title: "Total Glacier Lakes Monitored",
        value: "1,247",
        change: "+12 this month",
        icon: Icon::Mountain,
    },
    HeadlineStat {
        title: "Active Monitoring Stations",
        value: "89",
        change: "+3 new installations",
        icon: Icon::Activity,
    },
    HeadlineStat {
        title: "High Risk Lakes",
        value: "23",
        change: "+2 upgraded status",
        icon: Icon::AlertTriangle,
    },
    HeadlineStat {
        title: "Average Temperature Rise",
        value: "+2.3°C",
        change: "vs. last decade",
        icon: Icon::Thermometer,
    },
];

/// Earliest month holding the highest risk index.
pub fn peak_risk_month(series: &[LakeVolumePoint]) -> Option<&LakeVolumePoint> {
    series
        .iter()
        .reduce(|best, point| if point.risk > best.risk { point } else { best })
}

/// `point.volume` as a fraction of the largest volume in `series`, for bar
/// widths. Zero when the series is empty or all volumes are zero.
pub fn volume_share(series: &[LakeVolumePoint], point: &LakeVolumePoint) -> f32 {
    let max = series.iter().map(|p| p.volume).max().unwrap_or(0);
    if max == 0 {
        return 0.0;
    }
    point.volume as f32 / max as f32
}

pub fn melt_share(series: &[MeltPoint], point: &MeltPoint) -> f32 {
    let max = series.iter().map(|p| p.glacier_melt).max().unwrap_or(0);
    if max == 0 {
        return 0.0;
    }
    point.glacier_melt as f32 / max as f32
}

pub fn total_stations(regions: &[RegionStations]) -> u32 {
    regions.iter().map(|r| r.stations).sum()
}

pub fn total_alerts(regions: &[RegionStations]) -> u32 {
    regions.iter().map(|r| r.alerts).sum()
}

pub fn distribution_total(shares: &[RiskShare]) -> u32 {
    shares.iter().map(|s| u32::from(s.percent)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn july_is_peak_risk() {
        let peak = peak_risk_month(&LAKE_VOLUME).expect("peak");
        assert_eq!(peak.month, "Jul");
        assert_eq!(peak.risk, 8);
        assert!(peak_risk_month(&[]).is_none());
    }

    #[test]
    fn distribution_covers_everything() {
        assert_eq!(distribution_total(&RISK_DISTRIBUTION), 100);
    }

    #[test]
    fn station_totals() {
        assert_eq!(total_stations(&MONITORING_STATIONS), 35);
        assert_eq!(total_alerts(&MONITORING_STATIONS), 7);
    }

    #[test]
    fn shares_are_relative_to_max() {
        let jul = &LAKE_VOLUME[6];
        assert_eq!(volume_share(&LAKE_VOLUME, jul), 1.0);
        let jan = &LAKE_VOLUME[0];
        let share = volume_share(&LAKE_VOLUME, jan);
        assert!(share > 0.5 && share < 0.55);
        assert_eq!(melt_share(&WEEKLY_MELT, &WEEKLY_MELT[5]), 1.0);
        assert_eq!(volume_share(&[], jan), 0.0);
    }
}
