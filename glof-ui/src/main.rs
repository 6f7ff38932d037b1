mod app;
mod bridge;
mod logging;

pub mod components {
    pub mod clock;
    pub mod emergency_button;
    pub mod nav_bar;
    pub mod primitives;
}

pub mod pages {
    pub mod analytics;
    pub mod donations;
    pub mod government;
    pub mod home;
    pub mod login;
    pub mod not_found;
    pub mod organizations;
    pub mod safety;
}

use app::App;
use glof_shell::ShellConfig;
use leptos::*;
use tracing::warn;

fn main() {
    let loaded = bridge::read_config();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => ShellConfig::default(),
    };
    logging::init(&config);
    if let Err(err) = loaded {
        warn!(%err, "ignoring __GLOF_CONFIG__, using defaults");
    }

    mount_to_body(move || view! { <App config=config /> });
}
