use crate::bridge::BrowserRouter;
use crate::components::primitives::{Glyph, Link};
use glof_shell::presentation::{button_class, Icon, Size, Variant};
use glof_shell::{NavigationShell, RouteTable};
use leptos::*;
use tracing::warn;

/// Stays mounted while the router moves between unknown paths, so the path
/// shown and the warning both track the router rather than the mount.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let shell = use_context::<NavigationShell<BrowserRouter>>();
    let table = use_context::<RouteTable>().unwrap_or_default();
    let missing = create_memo(move |_| shell.and_then(|shell| shell.unmatched_path(&table)));

    create_effect(move |_| {
        if let Some(path) = missing.get() {
            warn!(%path, "no route matched");
        }
    });

    view! {
      <section class="panel not-found">
        <h1>"404"</h1>
        <p>"Oops! Page not found"</p>
        <p class="meta"><code>{move || missing.get().unwrap_or_default()}</code></p>
        <Link to="/" class=button_class(Variant::Hero, Size::Md)>
          <Glyph icon=Icon::Home />
          "Return to Home"
        </Link>
      </section>
    }
}
