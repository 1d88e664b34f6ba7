use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    /// Reward letter; gated on the completion flag.
    #[at("/success")]
    Success,
    #[at("/gallery")]
    Gallery,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Whether entering this route must pass the reward guard first.
    #[must_use]
    pub const fn is_gated(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn paths_match_public_routes() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Success.to_path(), "/success");
        assert_eq!(Route::Gallery.to_path(), "/gallery");
        assert_eq!(Route::recognize("/success"), Some(Route::Success));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn only_success_is_gated() {
        assert!(Route::Success.is_gated());
        assert!(!Route::Home.is_gated());
        assert!(!Route::Gallery.is_gated());
    }
}
