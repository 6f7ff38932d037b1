use glof_shell::collaborators::{AuthGateway, RegistrationRequest, Role, SignInRequest};
use glof_shell::error::CollaboratorError;
use glof_shell::presentation::Icon;
use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub fn label(&self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::Register => "Register",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            AuthTab::Login => Icon::LogIn,
            AuthTab::Register => Icon::UserPlus,
        }
    }
}

pub fn role_icon(role: Role) -> Icon {
    match role {
        Role::User => Icon::User,
        Role::Admin => Icon::Shield,
    }
}

/// What each role unlocks, shown under the form.
pub fn role_scope(role: Role) -> &'static str {
    match role {
        Role::User => "Monitoring & Alerts",
        Role::Admin => "Full System Control",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub tab: AuthTab,
    pub role: Role,
    pub show_password: bool,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    pub fn submit_label(&self) -> String {
        format!("Sign In as {}", self.role.label())
    }

    pub fn sign_in<G: AuthGateway>(&self, gateway: &G) -> Result<(), CollaboratorError> {
        info!(role = self.role.label(), "sign-in requested");
        gateway.sign_in(&SignInRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }

    pub fn continue_as_guest<G: AuthGateway>(&self, gateway: &G) -> Result<(), CollaboratorError> {
        info!("guest access requested");
        gateway.guest_access()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

impl RegisterForm {
    pub fn register<G: AuthGateway>(&self, gateway: &G) -> Result<(), CollaboratorError> {
        info!("registration requested");
        gateway.register(&RegistrationRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            location: self.location.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_user_on_login_tab() {
        let form = LoginForm::default();
        assert_eq!(form.tab, AuthTab::Login);
        assert_eq!(form.role, Role::User);
        assert_eq!(form.submit_label(), "Sign In as User");
        assert_eq!(form.password_input_type(), "password");
    }

    #[test]
    fn admin_label_and_password_toggle() {
        let mut form = LoginForm {
            role: Role::Admin,
            ..LoginForm::default()
        };
        form.toggle_password();
        assert_eq!(form.submit_label(), "Sign In as Administrator");
        assert_eq!(form.password_input_type(), "text");
    }
}
