use crate::components::primitives::{Badge, Glyph};
use glof_content::government::{latest_news, NEWS, RESOURCES, SCHEMES};
use glof_shell::presentation::{button_class, Icon, Size, Tone, Variant};
use leptos::*;

#[component]
pub fn GovernmentPage() -> impl IntoView {
    view! {
      <section class="panel">
        <h1>"Government Resources"</h1>
        <h2><Glyph icon=Icon::Bell />"Latest Announcements"</h2>
        <ul>
          {latest_news(&NEWS)
            .into_iter()
            .copied()
            .map(|item| view! {
              <li class="card news">
                <div class="row">
                  <b>{item.title}</b>
                  <Show when=move || item.urgent>
                    <Badge tone=Tone::Destructive>"URGENT"</Badge>
                  </Show>
                </div>
                <div>{item.summary}</div>
                <div class="meta">{format!("{} · {}", item.agency, item.date)}</div>
              </li>
            })
            .collect_view()}
        </ul>
      </section>

      <section class="panel">
        <h2><Glyph icon=Icon::FileText />"Documents"</h2>
        <div class="grid">
          {RESOURCES
            .into_iter()
            .map(|resource| view! {
              <div class="card resource">
                <div class="row">
                  <Glyph icon=resource.category.icon() />
                  <Badge tone=resource.category.tone()>{resource.kind}</Badge>
                  <span class="meta">{resource.status}</span>
                </div>
                <h3>{resource.title}</h3>
                <p>{resource.description}</p>
                <div class="meta">{resource.agency}</div>
                <div class="row meta">
                  <span><Glyph icon=Icon::Clock />{resource.date}</span>
                  <span>{format!("{} downloads", resource.downloads)}</span>
                </div>
              </div>
            })
            .collect_view()}
        </div>
      </section>

      <section class="panel">
        <h2><Glyph icon=Icon::DollarSign />"Support Schemes"</h2>
        <div class="grid">
          {SCHEMES
            .into_iter()
            .map(|scheme| view! {
              <div class="card scheme">
                <div class="row">
                  <h3>{scheme.title}</h3>
                  <Badge tone=Tone::RiskSafe>{scheme.status}</Badge>
                </div>
                <p>{scheme.description}</p>
                <dl class="facts">
                  <dt>"Eligibility"</dt>
                  <dd>{scheme.eligibility}</dd>
                  <dt>"Amount"</dt>
                  <dd>{scheme.amount}</dd>
                  <dt>"Deadline"</dt>
                  <dd>{scheme.deadline}</dd>
                </dl>
                <span class=button_class(Variant::Outline, Size::Sm)>"Apply at your local office"</span>
              </div>
            })
            .collect_view()}
        </div>
      </section>
    }
}
