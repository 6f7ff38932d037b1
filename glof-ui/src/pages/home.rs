use crate::components::clock::LiveClock;
use crate::components::primitives::{Badge, Glyph, Link};
use glof_content::home::{FEATURES, LOCATION_SNAPSHOT, SERVICE_CARDS};
use glof_shell::presentation::{button_class, Icon, Size, Variant};
use glof_shell::ShellConfig;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let tick = use_context::<ShellConfig>()
        .unwrap_or_default()
        .clock_tick();
    let place = LOCATION_SNAPSHOT;

    view! {
      <section class="hero">
        <div class="hero-copy">
          <h1>"GLOF Early Warning System"</h1>
          <p>"Monitoring glacier lakes and protecting mountain communities."</p>
          <div class="row">
            <Link to="/dashboard" class=button_class(Variant::Hero, Size::Lg)>
              <Glyph icon=Icon::Monitor />
              "Open Live Dashboard"
            </Link>
            <Link to="/safety" class=button_class(Variant::Glass, Size::Lg)>
              <Glyph icon=Icon::Shield />
              "Safety Guide"
            </Link>
          </div>
        </div>

        <div class="card snapshot">
          <LiveClock tick=tick />
          <h3><Glyph icon=Icon::MapPin />{place.name}</h3>
          <dl class="facts">
            <dt><Glyph icon=Icon::Thermometer />"Temperature"</dt>
            <dd>{place.temperature}</dd>
            <dt><Glyph icon=Icon::Cloud />"Weather"</dt>
            <dd>{place.weather}</dd>
            <dt><Glyph icon=Icon::Droplets />"Humidity"</dt>
            <dd>{place.humidity}</dd>
            <dt><Glyph icon=Icon::Navigation />"Wind"</dt>
            <dd>{place.wind_speed}</dd>
          </dl>
          <div class="row">
            <Badge tone=place.risk_level.tone()>{place.risk_level.label()}</Badge>
            <span class="meta">{format!("{} glacier lakes", place.glacier_lakes)}</span>
            <span class="meta">{format!("{} stations", place.monitoring_stations)}</span>
          </div>
        </div>
      </section>

      <section class="panel">
        <h2>"Services"</h2>
        <div class="grid">
          {SERVICE_CARDS
            .into_iter()
            .map(|card| view! {
              <Link to=card.href class="card service-card">
                <Glyph icon=card.icon />
                <h3>{card.title}</h3>
                <p>{card.description}</p>
                <span class=button_class(card.variant, Size::Sm)>"Open"</span>
              </Link>
            })
            .collect_view()}
        </div>
      </section>

      <section class="panel">
        <h2>"Capabilities"</h2>
        <div class="grid">
          {FEATURES
            .into_iter()
            .map(|feature| view! {
              <div class="card feature">
                <Glyph icon=feature.icon />
                <h3>{feature.title}</h3>
                <p class="meta">{feature.description}</p>
              </div>
            })
            .collect_view()}
        </div>
      </section>
    }
}
