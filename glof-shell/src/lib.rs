//! Navigation shell, emergency overlay and route table for the GLOF tracker.
//!
//! Everything here is synchronous state and static data; the browser
//! integration lives in `glof-ui`.

pub mod collaborators;
pub mod config;
pub mod emergency;
pub mod error;
pub mod nav;
pub mod presentation;
pub mod routes;

pub use collaborators::{
    AssistantLauncher, AuthGateway, Collaborator, PaymentGateway, Router, Telephony, Unwired,
};
pub use config::ShellConfig;
pub use emergency::{EmergencyContact, EmergencyOverlay, EmergencyPanel, EMERGENCY_CONTACTS};
pub use error::{CollaboratorError, ConfigError, RouteError};
pub use nav::{MenuPolicy, NavLink, Navigation, NavigationShell, NavigationState};
pub use routes::{RouteTable, View};
