use futures::executor::block_on;
use heart_hunt_game::{Flags, HeartHunt, MemoryFlagStore};
use heart_hunt_web::components::envelope::{Envelope, EnvelopeProps};
use heart_hunt_web::components::footer::{Footer, FooterProps};
use heart_hunt_web::components::love_letter::{LoveLetter, LoveLetterProps};
use heart_hunt_web::content::site_content;
use heart_hunt_web::pages::home::{HuntScreen, HuntScreenProps, StartScreen, StartScreenProps};
use heart_hunt_web::pages::not_found::NotFound;
use heart_hunt_web::pages::success::RewardView;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::Router;

#[function_component(RoutedReward)]
fn routed_reward() -> Html {
    html! {
        <Router history={AnyHistory::from(MemoryHistory::new())}>
            <RewardView />
        </Router>
    }
}

#[function_component(RoutedNotFound)]
fn routed_not_found() -> Html {
    html! {
        <Router history={AnyHistory::from(MemoryHistory::new())}>
            <NotFound />
        </Router>
    }
}

#[test]
fn start_screen_invites_the_hunt() {
    let html = block_on(
        LocalServerRenderer::<StartScreen>::with_props(StartScreenProps {
            seed: 7,
            on_start: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("3 hearts"));
    assert!(html.contains("Start Finding!"));
    assert_eq!(html.matches("class=\"particle\"").count(), 25);
}

#[test]
fn fresh_hunt_shows_every_heart_hidden() {
    let mut hunt = HeartHunt::new(Flags::new(MemoryFlagStore::new()));
    hunt.start();
    let html = block_on(
        LocalServerRenderer::<HuntScreen>::with_props(HuntScreenProps {
            seed: 7,
            snapshot: hunt.snapshot(),
            ripples: Vec::new(),
            show_envelope: false,
            on_heart: Callback::noop(),
            on_envelope: Callback::noop(),
        })
        .render(),
    );
    assert_eq!(html.matches("target hidden").count(), 3);
    assert!(html.contains("Look carefully"));
    assert!(html.contains("left:15%;top:28%"));
}

#[test]
fn reward_view_renders_letter_and_links() {
    let html = block_on(LocalServerRenderer::<RoutedReward>::new().render());
    let letter = &site_content().letter;
    assert!(html.contains(&letter.greeting));
    assert!(html.contains(&letter.signature));
    assert!(html.contains("Our Memories"));
    assert!(html.contains("Play Again"));
    assert!(html.contains("href=\"/gallery\""));
}

#[test]
fn not_found_links_home() {
    let html = block_on(LocalServerRenderer::<RoutedNotFound>::new().render());
    assert!(html.contains("Lost your way?"));
    assert!(html.contains("href=\"/\""));
}

#[test]
fn letter_renders_each_paragraph() {
    let letter = site_content().letter.clone();
    let expected = letter.paragraphs().len();
    let html =
        block_on(LocalServerRenderer::<LoveLetter>::with_props(LoveLetterProps { letter }).render());
    assert_eq!(html.matches("animation-delay").count(), expected);
}

#[test]
fn envelope_and_footer_render() {
    let envelope = block_on(
        LocalServerRenderer::<Envelope>::with_props(EnvelopeProps {
            size: 120,
            onclick: Callback::noop(),
        })
        .render(),
    );
    assert!(envelope.contains("width=\"120\""));

    let footer = block_on(
        LocalServerRenderer::<Footer>::with_props(FooterProps {
            author: AttrValue::from("Siddhant"),
        })
        .render(),
    );
    assert!(footer.contains("Siddhant"));
}
