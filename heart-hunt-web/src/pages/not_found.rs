use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Shown when the URL matches no known view.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="panel not-found" aria-live="assertive">
            <h1>{ "Lost your way?" }</h1>
            <p>{ "There is nothing hidden here." }</p>
            <Link<Route> to={Route::Home} classes="btn-glow">{ "Back to the hunt" }</Link<Route>>
        </main>
    }
}
