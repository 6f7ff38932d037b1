use crate::bridge::BrowserRouter;
use glof_shell::collaborators::Router;
use glof_shell::presentation::{Icon, Tone};
use leptos::*;

#[component]
pub fn Glyph(icon: Icon) -> impl IntoView {
    view! { <span class="glyph" aria-hidden="true">{icon.glyph()}</span> }
}

#[component]
pub fn Badge(tone: Tone, children: Children) -> impl IntoView {
    view! { <span class=tone.badge_class()>{children()}</span> }
}

/// Anchor that routes in-app when a router is in context and falls back to a
/// full page load otherwise.
#[component]
pub fn Link(
    to: &'static str,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_context::<BrowserRouter>();
    let on_click = move |ev: ev::MouseEvent| {
        if let Some(router) = router {
            ev.prevent_default();
            router.navigate(to);
        }
    };
    view! {
      <a href=to class=class on:click=on_click>
        {children()}
      </a>
    }
}

/// Horizontal fill bar; `fraction` is clamped to `0.0..=1.0`.
#[component]
pub fn Meter(fraction: f32, #[prop(optional)] tone: Option<Tone>) -> impl IntoView {
    let width = format!("width: {:.1}%", fraction.clamp(0.0, 1.0) * 100.0);
    let class = match tone {
        Some(tone) => format!("meter-fill {}", tone.dot_class()),
        None => "meter-fill".to_string(),
    };
    view! {
      <div class="meter">
        <div class=class style=width></div>
      </div>
    }
}
