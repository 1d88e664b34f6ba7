#![cfg(target_arch = "wasm32")]

use heart_hunt_game::constants::{
    FLAG_GAME_COMPLETED, FLAG_HEARTS_FOUND, FLAG_TTL, REVEAL_DELAY,
};
use heart_hunt_game::{Flags, GuardDecision, HeartHunt, RewardGuard};
use heart_hunt_web::app::App;
use heart_hunt_web::cookies::CookieFlagStore;
use heart_hunt_web::dom;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(old) = doc.get_element_by_id("app") {
        old.remove();
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn clear_flags() {
    let doc = dom::html_document().expect("html document");
    for name in [FLAG_HEARTS_FOUND, FLAG_GAME_COMPLETED] {
        doc.set_cookie(&format!("{name}=x; max-age=0; path=/"))
            .expect("expire cookie");
    }
}

fn visit(path: &str) {
    dom::window()
        .expect("window")
        .history()
        .expect("history")
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .expect("push state");
}

fn current_path() -> String {
    dom::window()
        .expect("window")
        .location()
        .pathname()
        .expect("pathname")
}

fn text_of(selector: &str) -> Option<String> {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
        .and_then(|el| el.text_content())
}

/// Let effects, scheduled renders and timers run.
async fn settle(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("schedule timeout");
    });
    JsFuture::from(promise).await.expect("timeout resolves");
}

fn click_first(selector: &str) {
    let target = dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{selector} rendered"));
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    let click = web_sys::MouseEvent::new_with_mouse_event_init_dict("click", &init)
        .expect("mouse event");
    target.dispatch_event(&click).expect("dispatch click");
}

#[wasm_bindgen_test]
fn cookie_flags_round_trip() {
    clear_flags();
    let flags = Flags::new(CookieFlagStore);
    assert_eq!(flags.get_flag(FLAG_GAME_COMPLETED), None);
    flags.set_flag(FLAG_GAME_COMPLETED, "true", FLAG_TTL);
    assert_eq!(flags.get_flag(FLAG_GAME_COMPLETED).as_deref(), Some("true"));
    clear_flags();
}

#[wasm_bindgen_test]
fn finished_hunt_opens_the_guard() {
    clear_flags();
    let mut hunt = HeartHunt::new(Flags::new(CookieFlagStore));
    assert_eq!(
        RewardGuard::evaluate(hunt.flags()),
        GuardDecision::Redirect
    );
    hunt.start();
    for id in [0, 1, 2] {
        hunt.discover(id).expect("known target");
    }
    assert_eq!(hunt.flags().get_flag(FLAG_HEARTS_FOUND).as_deref(), Some("3"));
    assert_eq!(RewardGuard::evaluate(hunt.flags()), GuardDecision::Grant);

    hunt.start();
    assert_eq!(
        RewardGuard::evaluate(hunt.flags()),
        GuardDecision::Redirect
    );
    clear_flags();
}

#[wasm_bindgen_test]
fn app_mounts_on_the_start_panel() {
    clear_flags();
    visit("/");
    let handle = Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = dom::document().expect("document");
    let title = doc
        .query_selector(".start-screen .title")
        .expect("query title")
        .expect("start title rendered");
    assert_eq!(title.text_content().as_deref(), Some("Find My Heart"));
    handle.destroy();
}

#[wasm_bindgen_test]
async fn reward_route_sends_strangers_home() {
    clear_flags();
    visit("/success");
    let handle = Renderer::<App>::with_root(ensure_app_root()).render();
    settle(50).await;

    assert_eq!(current_path(), "/");
    assert_eq!(
        text_of(".start-screen .title").as_deref(),
        Some("Find My Heart")
    );
    assert!(text_of(".reward-screen").is_none());
    handle.destroy();
}

#[wasm_bindgen_test]
async fn reward_route_opens_after_completion() {
    clear_flags();
    Flags::new(CookieFlagStore).set_flag(FLAG_GAME_COMPLETED, "true", FLAG_TTL);
    visit("/success");
    let handle = Renderer::<App>::with_root(ensure_app_root()).render();
    settle(50).await;

    assert_eq!(current_path(), "/success");
    let greeting = heart_hunt_web::content::site_content().letter.greeting.clone();
    let letter = text_of(".reward-screen").expect("reward page rendered");
    assert!(letter.contains(&greeting), "missing {greeting:?}");
    handle.destroy();
    clear_flags();
}

#[wasm_bindgen_test]
async fn envelope_appears_after_the_reveal_delay() {
    clear_flags();
    visit("/");
    let handle = Renderer::<App>::with_root(ensure_app_root()).render();
    settle(20).await;

    dom::document()
        .expect("document")
        .query_selector(".start-button")
        .expect("valid selector")
        .expect("start button rendered")
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
    for _ in 0..3 {
        settle(20).await;
        click_first(".target.hidden svg");
    }
    settle(20).await;

    assert_eq!(
        Flags::new(CookieFlagStore).get_flag(FLAG_GAME_COMPLETED).as_deref(),
        Some("true")
    );
    assert!(text_of(".reveal-title").is_none(), "envelope shown too early");

    let delay = i32::try_from(REVEAL_DELAY.as_millis()).expect("delay fits");
    settle(delay + 200).await;
    assert_eq!(
        text_of(".reveal-title").as_deref(),
        Some("You found all my hearts! 💕")
    );
    handle.destroy();
    clear_flags();
}
