use crate::bridge::BrowserRouter;
use crate::components::emergency_button::EmergencyButton;
use crate::components::nav_bar::NavBar;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::donations::DonationsPage;
use crate::pages::government::GovernmentPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::organizations::OrganizationsPage;
use crate::pages::safety::SafetyPage;
use glof_shell::collaborators::Router;
use glof_shell::routes::View as Page;
use glof_shell::{NavigationShell, RouteTable, ShellConfig};
use leptos::*;
use tracing::debug;

fn page(target: Page) -> View {
    match target {
        Page::Home => view! { <HomePage /> }.into_view(),
        Page::Login => view! { <LoginPage /> }.into_view(),
        Page::Analytics => view! { <AnalyticsPage /> }.into_view(),
        Page::Organizations => view! { <OrganizationsPage /> }.into_view(),
        Page::Donations => view! { <DonationsPage /> }.into_view(),
        Page::Government => view! { <GovernmentPage /> }.into_view(),
        Page::Safety => view! { <SafetyPage /> }.into_view(),
        Page::NotFound => view! { <NotFoundPage /> }.into_view(),
    }
}

/// Root composition: navigation chrome, the routed page, then the floating
/// emergency control on top.
#[component]
pub fn App(config: ShellConfig) -> impl IntoView {
    let router = BrowserRouter::install();
    provide_context(router);
    provide_context(config.clone());

    let table = RouteTable::standard();
    provide_context(table.clone());
    let current = create_memo(move |_| table.resolve(&router.current_path()));
    let shell = NavigationShell::new(router);
    provide_context(shell);

    create_effect(move |_| {
        let view = current.get();
        debug!(?view, "page mounted");
        document().set_title(&format!("{} | GLOF Tracker", view.title()));
    });

    view! {
      <NavBar shell=shell brand=config.brand policy=config.menu_policy />
      <main class="page">{move || page(current.get())}</main>
      <EmergencyButton />
    }
}
