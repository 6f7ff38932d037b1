use crate::bridge::BrowserRouter;
use crate::components::primitives::Glyph;
use glof_shell::config::Brand;
use glof_shell::nav::{BRAND_LINK, INFO_LINKS, LOGIN_LINK, SERVICE_LINKS};
use glof_shell::presentation::{button_class, Icon, Size, Variant};
use glof_shell::{MenuPolicy, NavLink, Navigation, NavigationShell, NavigationState};
use leptos::*;
use std::iter;

#[component]
pub fn NavBar(
    shell: NavigationShell<BrowserRouter>,
    brand: Brand,
    policy: MenuPolicy,
) -> impl IntoView {
    let nav = create_rw_signal(NavigationState::new(policy));

    let follow = move |navigation: Option<Navigation>| {
        if let Some(navigation) = navigation {
            shell.follow(navigation);
        }
    };
    let direct = move |ev: ev::MouseEvent, link: NavLink| {
        ev.prevent_default();
        shell.follow(Navigation { to: link.href });
    };

    let services_open = move || nav.with(NavigationState::services_menu_open);
    let mobile_open = move || nav.with(NavigationState::mobile_menu_open);

    let dropdown_items = move || {
        SERVICE_LINKS
            .into_iter()
            .map(|link| {
                let class = move || {
                    if shell.is_active(link.href) {
                        "dropdown-item active"
                    } else {
                        "dropdown-item"
                    }
                };
                view! {
                  <a
                    href=link.href
                    class=class
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        follow(nav.try_update(|s| s.activate_service(&link)));
                    }
                  >
                    <Glyph icon=link.icon />
                    <span>{link.label}</span>
                  </a>
                }
            })
            .collect_view()
    };

    let mobile_items = move || {
        SERVICE_LINKS
            .iter()
            .chain(INFO_LINKS.iter())
            .chain(iter::once(&LOGIN_LINK))
            .copied()
            .map(|link| {
                let class = move || {
                    button_class(
                        Variant::selected_or(shell.is_active(link.href), Variant::Ghost),
                        Size::Md,
                    )
                };
                view! {
                  <a
                    href=link.href
                    class=class
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        follow(nav.try_update(|s| s.activate_mobile(&link)));
                    }
                  >
                    <Glyph icon=link.icon />
                    <span>{link.label}</span>
                  </a>
                }
            })
            .collect_view()
    };

    view! {
      <header class="nav">
        <div class="nav-inner">
          <a href=BRAND_LINK.href class="brand" on:click=move |ev| direct(ev, BRAND_LINK)>
            <Glyph icon=BRAND_LINK.icon />
            <span class="brand-title">{brand.title}</span>
            <span class="brand-tagline">{brand.tagline}</span>
          </a>

          <nav class="nav-desktop">
            <div class="services">
              <button
                class=button_class(Variant::Ghost, Size::Sm)
                on:click=move |_| nav.update(NavigationState::toggle_services_menu)
              >
                "Services"
                <Glyph icon=Icon::ChevronDown />
              </button>
              <Show when=services_open>
                <div class="dropdown-layer" on:click=move |_| nav.update(NavigationState::dismiss_outside)></div>
                <div class="dropdown">{dropdown_items}</div>
              </Show>
            </div>
            {INFO_LINKS
              .into_iter()
              .map(|link| view! {
                <a
                  href=link.href
                  class=button_class(Variant::Ghost, Size::Sm)
                  on:click=move |ev| direct(ev, link)
                >
                  {link.label}
                </a>
              })
              .collect_view()}
            <a
              href=LOGIN_LINK.href
              class=button_class(Variant::Outline, Size::Sm)
              on:click=move |ev| direct(ev, LOGIN_LINK)
            >
              <Glyph icon=LOGIN_LINK.icon />
              {LOGIN_LINK.label}
            </a>
          </nav>

          <button
            class=button_class(Variant::Ghost, Size::Icon)
            aria-label="Toggle menu"
            on:click=move |_| nav.update(NavigationState::toggle_mobile_menu)
          >
            <span class="glyph">
              {move || if mobile_open() { Icon::Close.glyph() } else { Icon::Menu.glyph() }}
            </span>
          </button>
        </div>

        <Show when=mobile_open>
          <nav class="nav-mobile">{mobile_items}</nav>
        </Show>
      </header>
    }
}
