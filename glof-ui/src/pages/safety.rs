use crate::bridge::BrowserTelephony;
use crate::components::primitives::{Badge, Glyph};
use glof_content::safety::{
    RiskSelector, SafetyTab, EMERGENCY_STEPS, GUIDED_LEVELS, PREPAREDNESS_CHECKLISTS,
    WARNING_SIGNS,
};
use glof_shell::collaborators::Telephony;
use glof_shell::presentation::{button_class, Icon, Size, Variant};
use glof_shell::EMERGENCY_CONTACTS;
use leptos::*;

fn emergency_tab() -> View {
    EMERGENCY_STEPS
        .into_iter()
        .map(|step| view! {
          <div class="card step">
            <div class="row">
              <span class="step-number">{step.step}</span>
              <Glyph icon=step.icon />
              <h3>{step.title}</h3>
              <span class="meta"><Glyph icon=Icon::Clock />{step.timeframe}</span>
            </div>
            <p>{step.description}</p>
          </div>
        })
        .collect_view()
}

fn preparedness_tab() -> View {
    PREPAREDNESS_CHECKLISTS
        .into_iter()
        .map(|list| view! {
          <div class="card checklist">
            <h3>{list.category}</h3>
            <ul>
              {list.items
                .iter()
                .map(|item| view! { <li><Glyph icon=Icon::CheckCircle />{*item}</li> })
                .collect_view()}
            </ul>
          </div>
        })
        .collect_view()
}

fn warnings_tab() -> View {
    WARNING_SIGNS
        .into_iter()
        .map(|sign| view! {
          <div class="card warning">
            <div class="row">
              <Glyph icon=Icon::AlertTriangle />
              <h3>{sign.title}</h3>
              <Badge tone=sign.severity.tone()>{sign.severity.label()}</Badge>
            </div>
            <p>{sign.description}</p>
            <p class="meta"><b>"Action: "</b>{sign.action}</p>
          </div>
        })
        .collect_view()
}

fn risk_tab(selector: RwSignal<RiskSelector>) -> View {
    let buttons = GUIDED_LEVELS
        .into_iter()
        .map(|level| {
            let class = move || {
                let selected = selector.with(|s| s.selected() == level);
                button_class(Variant::selected_or(selected, Variant::Outline), Size::Sm)
            };
            view! {
              <button class=class on:click=move |_| selector.update(|s| s.select(level))>
                {level.label()}
              </button>
            }
        })
        .collect_view();

    let detail = move || {
        let guidance = selector.with(RiskSelector::guidance);
        view! {
          <div class="card guidance">
            <Badge tone=guidance.level.tone()>{guidance.level.label()}</Badge>
            <p>{guidance.description}</p>
            <h4>"Recommended actions"</h4>
            <ul>
              {guidance.actions.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
            </ul>
            <Show when=move || !guidance.restrictions.is_empty()>
              <h4>"Restrictions"</h4>
              <ul>
                {guidance.restrictions.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
              </ul>
            </Show>
          </div>
        }
    };

    view! {
      <div class="row">{buttons}</div>
      {detail}
    }
    .into_view()
}

#[component]
pub fn SafetyPage() -> impl IntoView {
    let tab = create_rw_signal(SafetyTab::default());
    let selector = create_rw_signal(RiskSelector::default());
    let hotline = EMERGENCY_CONTACTS[0];

    let body = move || match tab.get() {
        SafetyTab::Emergency => emergency_tab(),
        SafetyTab::Preparedness => preparedness_tab(),
        SafetyTab::Warnings => warnings_tab(),
        SafetyTab::Risk => risk_tab(selector),
    };

    view! {
      <section class="panel">
        <h1>"Emergency Safety Guide"</h1>
        <div class="card alert row">
          <Glyph icon=Icon::Phone />
          <span>{format!("In immediate danger, call {} ({})", hotline.name, hotline.dial_number)}</span>
          <button
            class=button_class(Variant::Emergency, Size::Sm)
            on:click=move |_| BrowserTelephony.dial(hotline.dial_number)
          >
            "Call now"
          </button>
        </div>
        <div class="row tabs">
          {SafetyTab::ALL
            .into_iter()
            .map(|t| {
                let class = move || {
                    button_class(Variant::selected_or(tab.get() == t, Variant::Ghost), Size::Sm)
                };
                view! { <button class=class on:click=move |_| tab.set(t)>{t.label()}</button> }
            })
            .collect_view()}
        </div>
        <div class="stack">{body}</div>
      </section>
    }
}
