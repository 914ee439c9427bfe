//! The application's route table.
//!
//! `<Routes>` in [`crate::app`] is built from the same five patterns; this
//! module is the plain-data view of it, used for href construction and
//! for resolving a path without a running router.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

/// Which page component renders a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Auth,
    Deck,
    Study,
}

/// Ordered `(pattern, view)` pairs. `:name` segments capture one segment.
pub const ROUTES: &[(&str, View)] = &[
    ("/", View::Dashboard),
    ("/login", View::Auth),
    ("/register", View::Auth),
    ("/deck/:id", View::Deck),
    ("/deck/:id/study", View::Study),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub pattern: &'static str,
    pub view: View,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Splits on `/`, ignoring the leading slash and at most one trailing one.
/// Interior empty segments are kept so `/deck//study` matches nothing.
fn segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

fn match_pattern(pattern: &str, path: &str) -> Option<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();
    let want = segments(pattern);
    let got = segments(path);
    if want.len() != got.len() {
        return None;
    }
    for (p, s) in want.into_iter().zip(got) {
        match p.strip_prefix(':') {
            Some(_) if s.is_empty() => return None,
            Some(name) => {
                let value = percent_decode_str(s).decode_utf8_lossy();
                params.insert(name.to_string(), value.into_owned());
            }
            None if p == s => {}
            None => return None,
        }
    }
    Some(params)
}

/// Finds the route for `path`, ignoring any query string or fragment.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    ROUTES.iter().find_map(|&(pattern, view)| {
        match_pattern(pattern, path).map(|params| RouteMatch {
            pattern,
            view,
            params,
        })
    })
}

/// A concrete destination inside the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Login,
    Register,
    Deck(i64),
    Study(i64),
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".into(),
            Self::Login => "/login".into(),
            Self::Register => "/register".into(),
            Self::Deck(id) => format!("/deck/{id}"),
            Self::Study(id) => format!("/deck/{id}/study"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn patterns_are_distinct() {
        let unique: HashSet<_> = ROUTES.iter().map(|(p, _)| *p).collect();
        assert_eq!(unique.len(), ROUTES.len());
    }

    #[test]
    fn deck_path_captures_id() {
        let m = resolve("/deck/42").unwrap();
        assert_eq!(m.view, View::Deck);
        assert_eq!(m.pattern, "/deck/:id");
        assert_eq!(m.param("id"), Some("42"));
    }

    #[test]
    fn study_path_is_not_the_deck_view() {
        let m = resolve("/deck/42/study").unwrap();
        assert_eq!(m.view, View::Study);
        assert_eq!(m.param("id"), Some("42"));
    }

    #[test]
    fn static_routes() {
        assert_eq!(resolve("/").map(|m| m.view), Some(View::Dashboard));
        assert_eq!(resolve("/login").map(|m| m.view), Some(View::Auth));
        assert_eq!(resolve("/register").map(|m| m.view), Some(View::Auth));
        assert_eq!(resolve("/login/").map(|m| m.view), Some(View::Auth));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let m = resolve("/deck/7?tab=cards#top").unwrap();
        assert_eq!(m.param("id"), Some("7"));
    }

    #[test]
    fn empty_interior_segment_does_not_match() {
        assert_eq!(resolve("/deck//study"), None);
        assert_eq!(resolve("/deck//"), None);
        assert_eq!(resolve("//login"), None);
    }

    #[test]
    fn params_are_percent_decoded() {
        let m = resolve("/deck/caf%C3%A9%20deck").unwrap();
        assert_eq!(m.param("id"), Some("café deck"));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert_eq!(resolve("/deck"), None);
        assert_eq!(resolve("/deck/1/study/extra"), None);
        assert_eq!(resolve("/settings"), None);
    }

    #[test]
    fn app_routes_resolve_back_to_their_view() {
        for (route, view) in [
            (AppRoute::Dashboard, View::Dashboard),
            (AppRoute::Login, View::Auth),
            (AppRoute::Register, View::Auth),
            (AppRoute::Deck(5), View::Deck),
            (AppRoute::Study(5), View::Study),
        ] {
            assert_eq!(resolve(&route.path()).map(|m| m.view), Some(view));
        }
        assert_eq!(AppRoute::Study(5).path(), "/deck/5/study");
    }
}
