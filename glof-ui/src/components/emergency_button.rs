use crate::bridge::BrowserTelephony;
use crate::components::primitives::{Badge, Glyph};
use glof_shell::emergency::ContactCategory;
use glof_shell::presentation::{button_class, Icon, Size, Variant};
use glof_shell::{EmergencyOverlay, EmergencyPanel, Unwired, EMERGENCY_CONTACTS};
use leptos::*;
use tracing::warn;

/// Floating emergency button and its contact panel. Rendered after the page
/// so it stacks above it.
#[component]
pub fn EmergencyButton() -> impl IntoView {
    let panel = create_rw_signal(EmergencyPanel::default());
    let notice = create_rw_signal(None::<String>);
    let overlay = EmergencyOverlay::new(BrowserTelephony, Unwired);

    let open = move || panel.with(EmergencyPanel::is_open);

    let ask_assistant = move |_: ev::MouseEvent| match panel.try_update(|p| overlay.invoke_assistant(p)) {
        Some(Err(err)) => {
            warn!(%err, "assistant launch refused");
            notice.set(Some(err.to_string()));
        }
        _ => notice.set(None),
    };

    let contacts = move || {
        EMERGENCY_CONTACTS
            .into_iter()
            .map(|contact| {
                let variant = match contact.category {
                    ContactCategory::HighPriority => Variant::Emergency,
                    ContactCategory::Standard => Variant::Outline,
                };
                view! {
                  <button
                    class=button_class(variant, Size::Md)
                    on:click=move |_| overlay.dial(&contact)
                  >
                    <Glyph icon=contact.icon />
                    <span class="contact-name">{contact.name}</span>
                    <Badge tone=contact.category.tone()>{contact.dial_number}</Badge>
                  </button>
                }
            })
            .collect_view()
    };

    view! {
      <div class="emergency">
        <Show when=open>
          <div class="emergency-panel">
            <h3>"Emergency Contacts"</h3>
            <div class="stack">{contacts}</div>
            <button class=button_class(Variant::Glass, Size::Md) on:click=ask_assistant>
              <Glyph icon=Icon::Bot />
              "Ask the AI Assistant"
            </button>
          </div>
        </Show>

        <Show when=move || notice.with(Option::is_some)>
          <div class="toast" on:click=move |_| notice.set(None)>
            {move || notice.get().unwrap_or_default()}
          </div>
        </Show>

        <button
          class=button_class(Variant::Emergency, Size::IconLg)
          aria-label="Emergency contacts"
          on:click=move |_| panel.update(EmergencyPanel::toggle)
        >
          <span class="glyph">
            {move || if open() { Icon::Close.glyph() } else { Icon::Phone.glyph() }}
          </span>
        </button>
      </div>
    }
}
