use crate::components::primitives::{Badge, Glyph};
use glof_content::organizations::{OrgCategory, OrgFilter, Organization, ORGANIZATIONS};
use glof_shell::presentation::{button_class, Icon, Size, Tone, Variant};
use leptos::*;

fn org_card(org: Organization) -> impl IntoView {
    view! {
      <div class="card org">
        <div class="row">
          <Glyph icon=org.category.icon() />
          <h3>{org.name}</h3>
          <Show when=move || org.verified>
            <Badge tone=Tone::RiskSafe><Glyph icon=Icon::CheckCircle />"Verified"</Badge>
          </Show>
        </div>
        <Badge tone=org.category.tone()>{org.kind}</Badge>
        <p>{org.description}</p>
        <div class="meta"><Glyph icon=Icon::MapPin />{org.location}</div>
        <div class="row">
          {org.services
            .iter()
            .map(|service| view! { <span class="chip">{*service}</span> })
            .collect_view()}
        </div>
        <div class="row">
          <a class=button_class(Variant::Outline, Size::Sm) href=format!("tel:{}", org.contact)>
            <Glyph icon=Icon::Phone />{org.contact}
          </a>
          <a class=button_class(Variant::Ghost, Size::Sm) href=format!("mailto:{}", org.email)>
            <Glyph icon=Icon::Mail />{org.email}
          </a>
          <a
            class=button_class(Variant::Ghost, Size::Sm)
            href=format!("https://{}", org.website)
            target="_blank"
            rel="noopener"
          >
            <Glyph icon=Icon::ExternalLink />{org.website}
          </a>
        </div>
      </div>
    }
}

#[component]
pub fn OrganizationsPage() -> impl IntoView {
    let filter = create_rw_signal(OrgFilter::default());

    let category_button = move |category: Option<OrgCategory>| {
        let label = category.map_or("All", |c| c.label());
        let class = move || {
            let selected = filter.with(|f| f.category == category);
            button_class(Variant::selected_or(selected, Variant::Outline), Size::Sm)
        };
        view! {
          <button class=class on:click=move |_| filter.update(|f| f.category = category)>
            {label}
          </button>
        }
    };

    let results = move || {
        filter.with(|f| {
            let matches = f.apply(&ORGANIZATIONS);
            if matches.is_empty() {
                view! { <p class="meta">"No organizations match your search."</p> }.into_view()
            } else {
                matches.into_iter().copied().map(org_card).collect_view()
            }
        })
    };

    view! {
      <section class="panel">
        <h1>"Partner Organizations"</h1>
        <div class="row">
          <Glyph icon=Icon::Search />
          <input
            type="search"
            placeholder="Search organizations, services, locations"
            prop:value=move || filter.with(|f| f.query.clone())
            on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
          />
        </div>
        <div class="row">
          {category_button(None)}
          {OrgCategory::ALL.into_iter().map(|c| category_button(Some(c))).collect_view()}
        </div>
      </section>

      <section class="grid">{results}</section>
    }
}
