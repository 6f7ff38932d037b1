use crate::error::RouteError;
use serde::{Deserialize, Serialize};

/// Page views the shell can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Home,
    Login,
    Analytics,
    Organizations,
    Donations,
    Government,
    Safety,
    NotFound,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "GLOF Early Warning",
            View::Login => "Access System",
            View::Analytics => "GLOF Analytics Dashboard",
            View::Organizations => "Partner Organizations",
            View::Donations => "Support & Donations",
            View::Government => "Government Resources",
            View::Safety => "Emergency Safety Guide",
            View::NotFound => "Page Not Found",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Matches one path by exact, case-sensitive equality.
    Literal(String),
    /// Matches every path. Always the last entry of a table.
    CatchAll,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub pattern: Pattern,
    pub view: View,
}

impl Route {
    fn matches(&self, path: &str) -> bool {
        match &self.pattern {
            Pattern::Literal(literal) => literal == path,
            Pattern::CatchAll => true,
        }
    }
}

/// Ordered literal routes followed by exactly one catch-all.
///
/// Tables are only produced by [`RouteTableBuilder::fallback`], which appends
/// the catch-all last, so it can never shadow a literal route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// The application's route table.
    pub fn standard() -> Self {
        let literal = |path: &str, view| Route {
            pattern: Pattern::Literal(path.to_string()),
            view,
        };
        Self {
            routes: vec![
                literal("/", View::Home),
                literal("/login", View::Login),
                literal("/dashboard", View::Home),
                literal("/analytics", View::Analytics),
                literal("/organizations", View::Organizations),
                literal("/donations", View::Donations),
                literal("/government", View::Government),
                literal("/safety", View::Safety),
                literal("/emergency", View::Safety),
                literal("/chatbot", View::Home),
                Route {
                    pattern: Pattern::CatchAll,
                    view: View::NotFound,
                },
            ],
        }
    }

    /// First route in declaration order whose pattern matches `path`.
    pub fn resolve(&self, path: &str) -> View {
        self.routes
            .iter()
            .find(|route| route.matches(path))
            .map(|route| route.view)
            .unwrap_or_else(|| self.fallback())
    }

    /// True when no literal route claims `path`, so only the catch-all does.
    pub fn is_unmatched(&self, path: &str) -> bool {
        !self.routes.iter().any(|route| match &route.pattern {
            Pattern::Literal(literal) => literal == path,
            Pattern::CatchAll => false,
        })
    }

    pub fn fallback(&self) -> View {
        match self.routes.last() {
            Some(Route {
                pattern: Pattern::CatchAll,
                view,
            }) => *view,
            _ => View::NotFound,
        }
    }

    /// Literal paths registered for `view`, in declaration order.
    pub fn paths_for(&self, view: View) -> Vec<&str> {
        self.routes
            .iter()
            .filter(|route| route.view == view)
            .filter_map(|route| match &route.pattern {
                Pattern::Literal(path) => Some(path.as_str()),
                Pattern::CatchAll => None,
            })
            .collect()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
    error: Option<RouteError>,
}

impl RouteTableBuilder {
    /// Register a literal path. The first error is kept and reported by
    /// [`Self::fallback`].
    pub fn route(mut self, path: impl Into<String>, view: View) -> Self {
        if self.error.is_some() {
            return self;
        }
        let path = path.into();
        if !path.starts_with('/') {
            self.error = Some(RouteError::InvalidPath(path));
            return self;
        }
        let duplicate = self
            .routes
            .iter()
            .any(|route| matches!(&route.pattern, Pattern::Literal(p) if *p == path));
        if duplicate {
            self.error = Some(RouteError::DuplicatePath(path));
            return self;
        }
        self.routes.push(Route {
            pattern: Pattern::Literal(path),
            view,
        });
        self
    }

    /// Close the table with its catch-all view.
    pub fn fallback(mut self, view: View) -> Result<RouteTable, RouteError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.routes.push(Route {
            pattern: Pattern::CatchAll,
            view,
        });
        Ok(RouteTable {
            routes: self.routes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_ends_with_catch_all() {
        let table = RouteTable::standard();
        let last = table.routes().last().expect("routes");
        assert_eq!(last.pattern, Pattern::CatchAll);
        assert_eq!(
            table
                .routes()
                .iter()
                .filter(|r| r.pattern == Pattern::CatchAll)
                .count(),
            1
        );
    }

    #[test]
    fn standard_table_matches_builder() {
        let built = RouteTable::builder()
            .route("/", View::Home)
            .route("/login", View::Login)
            .route("/dashboard", View::Home)
            .route("/analytics", View::Analytics)
            .route("/organizations", View::Organizations)
            .route("/donations", View::Donations)
            .route("/government", View::Government)
            .route("/safety", View::Safety)
            .route("/emergency", View::Safety)
            .route("/chatbot", View::Home)
            .fallback(View::NotFound)
            .expect("valid table");
        assert_eq!(built, RouteTable::standard());
    }

    #[test]
    fn unmatched_ignores_the_catch_all() {
        let table = RouteTable::standard();
        assert!(table.is_unmatched("/contact"));
        assert!(table.is_unmatched("/safety/"));
        assert!(!table.is_unmatched("/emergency"));
        assert!(!table.is_unmatched("/"));
    }

    #[test]
    fn builder_rejects_duplicate_paths() {
        let err = RouteTable::builder()
            .route("/safety", View::Safety)
            .route("/safety", View::Home)
            .fallback(View::NotFound)
            .unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/safety".into()));
    }

    #[test]
    fn builder_rejects_relative_paths() {
        let err = RouteTable::builder()
            .route("safety", View::Safety)
            .fallback(View::NotFound)
            .unwrap_err();
        assert!(matches!(err, RouteError::InvalidPath(_)));
    }

    #[test]
    fn paths_for_lists_aliases_in_order() {
        let table = RouteTable::standard();
        assert_eq!(table.paths_for(View::Safety), vec!["/safety", "/emergency"]);
        assert_eq!(table.paths_for(View::Home), vec!["/", "/dashboard", "/chatbot"]);
        assert!(table.paths_for(View::NotFound).is_empty());
    }
}
