use crate::components::reward_gate::RewardGate;
use crate::pages::gallery::GalleryPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::success::RewardView;
use crate::router::Route;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

/// Map a recognised route onto its page, behind the reward gate when the
/// route requires it.
#[must_use]
pub fn switch(route: Route) -> Html {
    let page = match route {
        Route::Home => html! { <HomePage /> },
        Route::Success => html! { <RewardView /> },
        Route::Gallery => html! { <GalleryPage /> },
        Route::NotFound => html! { <NotFound /> },
    };
    if route.is_gated() {
        html! { <RewardGate>{ page }</RewardGate> }
    } else {
        page
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);

    use_effect_with((), |()| {
        let content = crate::content::site_content();
        if let Some(doc) = crate::dom::document() {
            if !content.title.is_empty() {
                doc.set_title(&content.title);
            }
        }
        || {}
    });

    html! {
        <BrowserRouter basename={router_base}>
            <Switch<Route> render={switch} />
            <crate::components::music_player::MusicPlayer />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, History, MemoryHistory};
    use yew_router::prelude::Router;

    #[derive(Properties, PartialEq)]
    struct RoutedProps {
        route: Route,
    }

    #[function_component(Routed)]
    fn routed(props: &RoutedProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(yew_router::Routable::to_path(&props.route));
        html! {
            <Router {history}>
                { switch(props.route.clone()) }
            </Router>
        }
    }

    fn render(route: Route) -> String {
        block_on(LocalServerRenderer::<Routed>::with_props(RoutedProps { route }).render())
    }

    #[test]
    fn home_route_shows_start_panel() {
        assert!(render(Route::Home).contains("Find My Heart"));
    }

    #[test]
    fn success_route_stays_blank_until_the_guard_runs() {
        let html = render(Route::Success);
        assert!(!html.contains("Our Memories"));
        assert!(!html.contains("Play Again"));
    }

    #[test]
    fn gallery_route_lists_every_photo() {
        let html = render(Route::Gallery);
        let count = crate::content::site_content().images.len();
        assert!(html.contains(&format!("{count} photos")));
        assert_eq!(html.matches("class=\"polaroid\"").count(), count);
    }

    #[test]
    fn unknown_route_offers_the_way_home() {
        assert!(render(Route::NotFound).contains("btn-glow"));
    }
}
