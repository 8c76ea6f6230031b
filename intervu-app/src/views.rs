/// The three logical screens of the booking flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Configure,
    Checkout,
    Questions,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Configure => "/configure",
            View::Checkout => "/checkout",
            View::Questions => "/questions",
        }
    }
}

/// Map a path to a view. The root path redirects to the configure screen;
/// unknown paths resolve to nothing.
pub fn resolve_path(path: &str) -> Option<View> {
    match path.trim_end_matches('/') {
        "" => Some(View::Configure),
        "/configure" => Some(View::Configure),
        "/checkout" => Some(View::Checkout),
        "/questions" => Some(View::Questions),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_configure() {
        assert_eq!(resolve_path("/"), Some(View::Configure));
    }

    #[test]
    fn each_view_resolves_its_own_path() {
        for view in [View::Configure, View::Checkout, View::Questions] {
            assert_eq!(resolve_path(view.path()), Some(view));
        }
    }

    #[test]
    fn trailing_slash_is_accepted() {
        assert_eq!(resolve_path("/questions/"), Some(View::Questions));
    }

    #[test]
    fn unknown_paths_resolve_to_nothing() {
        assert_eq!(resolve_path("/admin"), None);
    }
}
