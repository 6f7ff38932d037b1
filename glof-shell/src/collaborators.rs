//! External collaborators the shell talks to, plus stubs for the ones with
//! no integration behind them.

use crate::error::CollaboratorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Names the integration point a [`CollaboratorError`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collaborator {
    Assistant,
    SignIn,
    Registration,
    GuestAccess,
    Payment,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collaborator::Assistant => "AI assistant launcher",
            Collaborator::SignIn => "sign-in",
            Collaborator::Registration => "account registration",
            Collaborator::GuestAccess => "guest access",
            Collaborator::Payment => "donation payment",
        };
        f.write_str(name)
    }
}

/// Client-side history facility.
pub trait Router {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Host telephony intent. Fire-and-forget: implementations swallow failures.
pub trait Telephony {
    fn dial(&self, number: &str);
}

pub trait AssistantLauncher {
    fn launch(&self) -> Result<(), CollaboratorError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Administrator",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

pub trait AuthGateway {
    fn sign_in(&self, request: &SignInRequest) -> Result<(), CollaboratorError>;
    fn register(&self, request: &RegistrationRequest) -> Result<(), CollaboratorError>;
    fn guest_access(&self) -> Result<(), CollaboratorError>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pledge {
    pub campaign: String,
    pub amount: u32,
}

pub trait PaymentGateway {
    fn donate(&self, pledge: &Pledge) -> Result<(), CollaboratorError>;
}

/// Stands in for every collaborator that has no integration yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unwired;

impl Unwired {
    fn refuse(collaborator: Collaborator) -> Result<(), CollaboratorError> {
        warn!(%collaborator, "collaborator not wired");
        Err(CollaboratorError::NotImplemented(collaborator))
    }
}

impl AssistantLauncher for Unwired {
    fn launch(&self) -> Result<(), CollaboratorError> {
        Self::refuse(Collaborator::Assistant)
    }
}

impl AuthGateway for Unwired {
    fn sign_in(&self, _request: &SignInRequest) -> Result<(), CollaboratorError> {
        Self::refuse(Collaborator::SignIn)
    }

    fn register(&self, _request: &RegistrationRequest) -> Result<(), CollaboratorError> {
        Self::refuse(Collaborator::Registration)
    }

    fn guest_access(&self) -> Result<(), CollaboratorError> {
        Self::refuse(Collaborator::GuestAccess)
    }
}

impl PaymentGateway for Unwired {
    fn donate(&self, _pledge: &Pledge) -> Result<(), CollaboratorError> {
        Self::refuse(Collaborator::Payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwired_reports_its_boundary() {
        assert_eq!(
            Unwired.launch(),
            Err(CollaboratorError::NotImplemented(Collaborator::Assistant))
        );
        assert_eq!(
            Unwired.guest_access(),
            Err(CollaboratorError::NotImplemented(Collaborator::GuestAccess))
        );
        let pledge = Pledge {
            campaign: "Medical Aid & Supplies".into(),
            amount: 50,
        };
        assert_eq!(
            Unwired.donate(&pledge),
            Err(CollaboratorError::NotImplemented(Collaborator::Payment))
        );
    }

    #[test]
    fn not_implemented_message_names_collaborator() {
        let err = CollaboratorError::NotImplemented(Collaborator::Assistant);
        assert_eq!(err.to_string(), "AI assistant launcher is not implemented");
    }
}
