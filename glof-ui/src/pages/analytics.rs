use crate::components::primitives::{Badge, Glyph, Meter};
use glof_content::analytics::{
    distribution_total, melt_share, peak_risk_month, total_alerts, total_stations,
    volume_share, HEADLINE_STATS, LAKE_VOLUME, MONITORING_STATIONS, RISK_DISTRIBUTION,
    WEEKLY_MELT,
};
use glof_shell::presentation::{Icon, Tone};
use leptos::*;

fn risk_tone(score: u8) -> Tone {
    match score {
        0..=3 => Tone::RiskSafe,
        4..=6 => Tone::RiskModerate,
        _ => Tone::RiskHigh,
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let peak = peak_risk_month(&LAKE_VOLUME)
        .map(|p| format!("Peak risk in {} (score {}/10)", p.month, p.risk))
        .unwrap_or_default();

    view! {
      <section class="panel">
        <h1>"GLOF Analytics Dashboard"</h1>
        <div class="grid">
          {HEADLINE_STATS
            .into_iter()
            .map(|stat| view! {
              <div class="card stat">
                <Glyph icon=stat.icon />
                <div class="stat-value">{stat.value}</div>
                <div>{stat.title}</div>
                <div class="meta">{stat.change}</div>
              </div>
            })
            .collect_view()}
        </div>
      </section>

      <section class="panel">
        <h2><Glyph icon=Icon::Droplets />"Lake Volume"</h2>
        <p class="meta">{peak}</p>
        <ul class="bars">
          {LAKE_VOLUME
            .into_iter()
            .map(|point| view! {
              <li class="bar-row">
                <span class="bar-label">{point.month}</span>
                <Meter fraction=volume_share(&LAKE_VOLUME, &point) tone=risk_tone(point.risk) />
                <span class="meta">{format!("{} m³", point.volume)}</span>
              </li>
            })
            .collect_view()}
        </ul>
      </section>

      <section class="panel">
        <h2><Glyph icon=Icon::Thermometer />"Weekly Glacier Melt"</h2>
        <ul class="bars">
          {WEEKLY_MELT
            .into_iter()
            .map(|point| view! {
              <li class="bar-row">
                <span class="bar-label">{point.day}</span>
                <Meter fraction=melt_share(&WEEKLY_MELT, &point) />
                <span class="meta">{format!("{}°C, {} m³", point.temp_c, point.glacier_melt)}</span>
              </li>
            })
            .collect_view()}
        </ul>
      </section>

      <section class="panel">
        <h2><Glyph icon=Icon::AlertTriangle />"Risk Distribution"</h2>
        <p class="meta">{format!("{}% of monitored lakes", distribution_total(&RISK_DISTRIBUTION))}</p>
        <ul class="bars">
          {RISK_DISTRIBUTION
            .into_iter()
            .map(|share| {
                let fraction = f32::from(share.percent) / 100.0;
                view! {
                  <li class="bar-row">
                    <Badge tone=share.level.tone()>{share.level.label()}</Badge>
                    <Meter fraction=fraction tone=share.level.tone() />
                    <span class="meta">{format!("{}%", share.percent)}</span>
                  </li>
                }
            })
            .collect_view()}
        </ul>
      </section>

      <section class="panel">
        <h2><Glyph icon=Icon::Satellite />"Monitoring Stations"</h2>
        <p class="meta">
          {format!(
            "{} stations, {} active alerts",
            total_stations(&MONITORING_STATIONS),
            total_alerts(&MONITORING_STATIONS),
          )}
        </p>
        <table>
          <thead>
            <tr><th>"Region"</th><th>"Stations"</th><th>"Alerts"</th></tr>
          </thead>
          <tbody>
            {MONITORING_STATIONS
              .into_iter()
              .map(|region| {
                  let tone = if region.alerts > 0 { Tone::RiskHigh } else { Tone::RiskSafe };
                  view! {
                    <tr>
                      <td>{region.region}</td>
                      <td>{region.stations}</td>
                      <td><Badge tone=tone>{region.alerts}</Badge></td>
                    </tr>
                  }
              })
              .collect_view()}
          </tbody>
        </table>
      </section>
    }
}
