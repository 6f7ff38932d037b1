use chrono::Local;
use leptos::*;
use std::time::Duration;
use tracing::warn;

#[component]
pub fn LiveClock(tick: Duration) -> impl IntoView {
    let now = create_rw_signal(Local::now());
    match set_interval_with_handle(move || now.set(Local::now()), tick) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => warn!(?err, "clock interval not scheduled"),
    }
    view! {
      <div class="clock">
        <span class="clock-time">{move || now.get().format("%H:%M:%S").to_string()}</span>
        <span class="clock-date">{move || now.get().format("%A, %B %e, %Y").to_string()}</span>
      </div>
    }
}
