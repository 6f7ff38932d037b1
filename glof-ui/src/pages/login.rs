use crate::components::primitives::{Glyph, Link};
use glof_content::login::{role_icon, role_scope, AuthTab, LoginForm, RegisterForm};
use glof_shell::collaborators::Role;
use glof_shell::presentation::{button_class, Icon, Size, Variant};
use glof_shell::{CollaboratorError, Unwired};
use leptos::*;
use tracing::warn;

fn report(notice: RwSignal<Option<String>>, result: Result<(), CollaboratorError>) {
    match result {
        Ok(()) => notice.set(None),
        Err(err) => {
            warn!(%err, "authentication action refused");
            notice.set(Some(err.to_string()));
        }
    }
}

fn register_field(
    register: RwSignal<RegisterForm>,
    placeholder: &'static str,
    kind: &'static str,
    set: fn(&mut RegisterForm, String),
) -> impl IntoView {
    view! {
      <input
        type=kind
        placeholder=placeholder
        on:input=move |ev| register.update(|f| set(f, event_target_value(&ev)))
      />
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let login = create_rw_signal(LoginForm::default());
    let register = create_rw_signal(RegisterForm::default());
    let notice = create_rw_signal(None::<String>);
    let active_tab = create_memo(move |_| login.with(|f| f.tab));

    let tab_button = move |tab: AuthTab| {
        let class = move || {
            let selected = login.with(|f| f.tab == tab);
            button_class(Variant::selected_or(selected, Variant::Ghost), Size::Md)
        };
        view! {
          <button class=class on:click=move |_| login.update(|f| f.tab = tab)>
            <Glyph icon=tab.icon() />
            {tab.label()}
          </button>
        }
    };

    let role_button = move |role: Role| {
        let class = move || {
            let selected = login.with(|f| f.role == role);
            button_class(Variant::selected_or(selected, Variant::Outline), Size::Md)
        };
        view! {
          <button class=class on:click=move |_| login.update(|f| f.role = role)>
            <Glyph icon=role_icon(role) />
            <span>{role.label()}</span>
            <span class="meta">{role_scope(role)}</span>
          </button>
        }
    };

    let sign_in_form = move || {
        view! {
          <form on:submit=move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            report(notice, login.with_untracked(|f| f.sign_in(&Unwired)));
          }>
            <div class="row">{role_button(Role::User)} {role_button(Role::Admin)}</div>
            <input
              type="email"
              placeholder="Email"
              prop:value=move || login.with(|f| f.email.clone())
              on:input=move |ev| login.update(|f| f.email = event_target_value(&ev))
            />
            <div class="row">
              <input
                type=move || login.with(LoginForm::password_input_type)
                placeholder="Password"
                prop:value=move || login.with(|f| f.password.clone())
                on:input=move |ev| login.update(|f| f.password = event_target_value(&ev))
              />
              <button
                type="button"
                class=button_class(Variant::Ghost, Size::Icon)
                on:click=move |_| login.update(LoginForm::toggle_password)
              >
                <span class="glyph">
                  {move || {
                      let icon = if login.with(|f| f.show_password) { Icon::EyeOff } else { Icon::Eye };
                      icon.glyph()
                  }}
                </span>
              </button>
            </div>
            <button type="submit" class=button_class(Variant::Hero, Size::Lg)>
              <Glyph icon=Icon::LogIn />
              {move || login.with(LoginForm::submit_label)}
            </button>
          </form>
        }
    };

    let register_form = move || {
        view! {
          <form on:submit=move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            report(notice, register.with_untracked(|f| f.register(&Unwired)));
          }>
            {register_field(register, "Full name", "text", |f, v| f.full_name = v)}
            {register_field(register, "Email", "email", |f, v| f.email = v)}
            {register_field(register, "Password", "password", |f, v| f.password = v)}
            {register_field(register, "Location", "text", |f, v| f.location = v)}
            <button type="submit" class=button_class(Variant::Hero, Size::Lg)>
              <Glyph icon=Icon::UserPlus />
              "Create Account"
            </button>
          </form>
        }
    };

    view! {
      <section class="panel auth">
        <h1>"Access System"</h1>
        <div class="row tabs">{tab_button(AuthTab::Login)} {tab_button(AuthTab::Register)}</div>
        {move || match active_tab.get() {
            AuthTab::Login => sign_in_form().into_view(),
            AuthTab::Register => register_form().into_view(),
        }}
        <button
          class=button_class(Variant::Ghost, Size::Md)
          on:click=move |_| report(notice, login.with_untracked(|f| f.continue_as_guest(&Unwired)))
        >
          "Continue as Guest"
        </button>
        <Show when=move || notice.with(Option::is_some)>
          <p class="notice">{move || notice.get().unwrap_or_default()}</p>
        </Show>
        <Link to="/" class="meta">"Back to home"</Link>
      </section>
    }
}
