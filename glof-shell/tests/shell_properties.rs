use glof_shell::collaborators::{AssistantLauncher, Collaborator, Router, Telephony, Unwired};
use glof_shell::emergency::{EmergencyOverlay, EmergencyPanel, EMERGENCY_CONTACTS};
use glof_shell::nav::{Navigation, NavigationShell, NavigationState, INFO_LINKS, SERVICE_LINKS};
use glof_shell::routes::{RouteTable, View};
use glof_shell::CollaboratorError;
use std::cell::RefCell;

#[derive(Default)]
struct MemoryRouter {
    path: RefCell<String>,
    visits: RefCell<Vec<String>>,
}

impl MemoryRouter {
    fn at(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            visits: RefCell::default(),
        }
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn navigate(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
        self.visits.borrow_mut().push(path.to_string());
    }
}

#[derive(Default)]
struct RecordingDialer {
    dialed: RefCell<Vec<String>>,
}

impl Telephony for &RecordingDialer {
    fn dial(&self, number: &str) {
        self.dialed.borrow_mut().push(number.to_string());
    }
}

#[test]
fn unknown_paths_fall_back_regardless_of_literal_order() {
    let literals = [
        ("/", View::Home),
        ("/login", View::Login),
        ("/analytics", View::Analytics),
        ("/safety", View::Safety),
        ("/emergency", View::Safety),
    ];
    let unknown = ["/contact", "/about", "/totally-unknown-path", "", "/Safety/x"];

    for rotation in 0..literals.len() {
        let mut builder = RouteTable::builder();
        for (path, view) in literals.iter().cycle().skip(rotation).take(literals.len()) {
            builder = builder.route(*path, *view);
        }
        let table = builder.fallback(View::NotFound).expect("table");
        for path in unknown {
            assert_eq!(table.resolve(path), View::NotFound, "path {path:?}");
        }
        for (path, view) in literals {
            assert_eq!(table.resolve(path), view);
        }
    }
}

#[test]
fn matching_is_exact_and_case_sensitive() {
    let table = RouteTable::standard();
    assert_eq!(table.resolve("/analytics"), View::Analytics);
    assert_eq!(table.resolve("/Analytics"), View::NotFound);
    assert_eq!(table.resolve("/analytics/"), View::NotFound);
    assert_eq!(table.resolve("/analytics?tab=1"), View::NotFound);
    assert_eq!(table.resolve("/login"), View::Login);
    assert_eq!(table.resolve("/dashboard"), View::Home);
    assert_eq!(table.resolve("/chatbot"), View::Home);
}

#[test]
fn mobile_toggle_is_an_involution() {
    for start_open in [false, true] {
        let mut state = NavigationState::default();
        if start_open {
            state.toggle_mobile_menu();
        }
        let before = state.mobile_menu_open();
        state.toggle_mobile_menu();
        state.toggle_mobile_menu();
        assert_eq!(state.mobile_menu_open(), before);
    }
}

#[test]
fn close_services_menu_is_idempotent() {
    let mut state = NavigationState::default();
    state.close_services_menu();
    assert!(!state.services_menu_open());
    state.close_services_menu();
    assert!(!state.services_menu_open());
}

#[test]
fn activating_any_service_item_closes_the_dropdown() {
    for link in &SERVICE_LINKS {
        let shell = NavigationShell::new(MemoryRouter::at("/"));
        let mut state = NavigationState::default();
        assert!(!state.mobile_menu_open());
        assert!(!state.services_menu_open());

        state.toggle_services_menu();
        assert!(state.services_menu_open());

        let navigation = state.activate_service(link);
        assert!(!state.services_menu_open());

        shell.follow(navigation);
        assert!(shell.is_active(link.href));
        assert_eq!(shell.router().visits.borrow().as_slice(), [link.href]);
    }
}

#[test]
fn is_active_compares_exactly() {
    let shell = NavigationShell::new(MemoryRouter::at("/safety"));
    assert!(shell.is_active("/safety"));
    assert!(!shell.is_active("/emergency"));
    assert!(!shell.is_active("/safety/"));
}

#[test]
fn dialing_keeps_panel_open_and_assistant_closes_it() {
    let dialer = RecordingDialer::default();
    let overlay = EmergencyOverlay::new(&dialer, Unwired);
    let mut panel = EmergencyPanel::default();
    assert!(!panel.is_open());

    panel.toggle();
    assert!(panel.is_open());

    let police = EMERGENCY_CONTACTS
        .iter()
        .find(|c| c.name == "Police Emergency")
        .expect("police contact");
    assert_eq!(police.dial_number, "100");
    overlay.dial(police);
    assert!(panel.is_open());
    assert_eq!(dialer.dialed.borrow().as_slice(), ["100"]);

    let result = overlay.invoke_assistant(&mut panel);
    assert!(!panel.is_open());
    assert_eq!(
        result,
        Err(CollaboratorError::NotImplemented(Collaborator::Assistant))
    );
}

#[test]
fn assistant_launch_result_is_passed_through() {
    struct Launched;
    impl AssistantLauncher for Launched {
        fn launch(&self) -> Result<(), CollaboratorError> {
            Ok(())
        }
    }

    let dialer = RecordingDialer::default();
    let overlay = EmergencyOverlay::new(&dialer, Launched);
    let mut panel = EmergencyPanel::default();
    panel.toggle();
    assert_eq!(overlay.invoke_assistant(&mut panel), Ok(()));
    assert!(!panel.is_open());
}

#[test]
fn emergency_and_safety_alias_the_same_view() {
    let table = RouteTable::standard();
    assert_eq!(table.resolve("/emergency"), View::Safety);
    assert_eq!(table.resolve("/safety"), View::Safety);
}

#[test]
fn unknown_path_resolves_to_not_found() {
    let table = RouteTable::standard();
    assert_eq!(table.resolve("/totally-unknown-path"), View::NotFound);
    assert_eq!(table.fallback(), View::NotFound);
}

#[test]
fn unmatched_path_follows_router_between_unknown_paths() {
    let table = RouteTable::standard();
    let shell = NavigationShell::new(MemoryRouter::at("/"));
    assert_eq!(shell.unmatched_path(&table), None);

    let mut seen = Vec::new();
    for link in INFO_LINKS {
        shell.follow(Navigation { to: link.href });
        assert_eq!(table.resolve(&shell.router().current_path()), View::NotFound);
        seen.push(shell.unmatched_path(&table));
    }
    assert_eq!(seen, [Some("/contact".to_string()), Some("/about".to_string())]);

    shell.follow(Navigation { to: "/safety" });
    assert_eq!(shell.unmatched_path(&table), None);
}

#[test]
fn service_link_hrefs_are_registered_routes() {
    let table = RouteTable::standard();
    for link in &SERVICE_LINKS {
        assert!(!table.is_unmatched(link.href), "{} has no route", link.href);
    }
}
