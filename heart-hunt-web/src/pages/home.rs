use std::collections::VecDeque;
use std::rc::Rc;

use heart_hunt_game::constants::{
    HOME_PARTICLE_COUNT, HOME_STAR_COUNT, REVEAL_DELAY, RIPPLE_LIFETIME, TARGET_COUNT,
};
use heart_hunt_game::{Flags, HeartHunt, HuntPhase, HuntSignal, HuntSnapshot, TargetId};
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::backdrop::{Backdrop, SceneDecorations};
use crate::components::envelope::Envelope;
use crate::components::heart::{HeartCounter, HeartIcon};
use crate::cookies::CookieFlagStore;
use crate::dom;
use crate::router::Route;
use crate::timers::Timeout;

/// Ripples alive at once; older ones have already faded.
const MAX_RIPPLES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub id: u64,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RippleState {
    pub ripples: Vec<Ripple>,
}

pub enum RippleAction {
    Add(Ripple),
    Remove(u64),
}

impl Reducible for RippleState {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut ripples = self.ripples.clone();
        match action {
            RippleAction::Add(ripple) => {
                ripples.push(ripple);
                let overflow = ripples.len().saturating_sub(MAX_RIPPLES);
                ripples.drain(..overflow);
            }
            RippleAction::Remove(id) => ripples.retain(|r| r.id != id),
        }
        Rc::new(Self { ripples })
    }
}

/// Viewport centre of the clicked element, where the ripple is drawn.
fn click_center(event: &MouseEvent) -> (i32, i32) {
    event.target_dyn_into::<Element>().map_or_else(
        || (event.client_x(), event.client_y()),
        |el| {
            let rect = el.get_bounding_client_rect();
            #[allow(clippy::cast_possible_truncation)]
            let center = (
                (rect.left() + rect.width() / 2.0) as i32,
                (rect.top() + rect.height() / 2.0) as i32,
            );
            center
        },
    )
}

#[derive(Properties, PartialEq)]
pub struct StartScreenProps {
    pub seed: u64,
    pub on_start: Callback<()>,
}

#[function_component(StartScreen)]
pub fn start_screen(props: &StartScreenProps) -> Html {
    let on_start = {
        let cb = props.on_start.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <main class="start-screen game-bg">
            <Backdrop seed={props.seed} particles={HOME_PARTICLE_COUNT} stars={HOME_STAR_COUNT} />
            <section class="glass-panel intro">
                <div class="intro-heart">
                    <HeartIcon size={60} class={classes!("beating")} />
                    { for (0..3_u32).map(|i| {
                        let ring = 90 + i * 30;
                        html! {
                            <div
                                class="glow-ring"
                                style={format!("width:{ring}px;height:{ring}px;margin:-{half}px 0 0 -{half}px;animation-delay:{delay:.1}s", half = ring / 2, delay = f64::from(i) * 0.5)}
                            />
                        }
                    }) }
                </div>
                <h1 class="title">{ "Find My Heart" }</h1>
                <p class="intro-text">
                    { "I've hidden " }<span class="accent">{ format!("{TARGET_COUNT} hearts") }</span>{ " for you to find." }
                    <br />
                    { "Can you find them all? 💕" }
                </p>
                <button type="button" class="start-button btn-glow" onclick={on_start}>
                    { "✨ Start Finding!" }
                </button>
            </section>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct HuntScreenProps {
    pub seed: u64,
    pub snapshot: HuntSnapshot,
    #[prop_or_default]
    pub ripples: Vec<Ripple>,
    pub show_envelope: bool,
    pub on_heart: Callback<(TargetId, (i32, i32))>,
    pub on_envelope: Callback<()>,
}

#[function_component(HuntScreen)]
pub fn hunt_screen(props: &HuntScreenProps) -> Html {
    let progress = props.snapshot.progress;
    let total = u8::try_from(TARGET_COUNT).unwrap_or(u8::MAX);

    html! {
        <main class="hunt-screen game-bg">
            <Backdrop seed={props.seed} particles={HOME_PARTICLE_COUNT} stars={HOME_STAR_COUNT} />
            <SceneDecorations />

            { for props.ripples.iter().map(|r| html! {
                <div
                    key={r.id.to_string()}
                    class="ripple-ring"
                    style={format!("left:{}px;top:{}px", r.x - 20, r.y - 20)}
                />
            }) }

            <HeartCounter found={progress.found} {total} />

            if !props.show_envelope {
                <div class="hint glass-panel-light">
                    <p>{ progress.hint() }</p>
                </div>
            }

            { for props.snapshot.targets.iter().map(|target| {
                let style = format!("left:{}%;top:{}%", target.position.x, target.position.y);
                if target.discovered {
                    html! {
                        <div key={format!("heart-{}", target.id)} class="target found" {style}>
                            <HeartIcon size={46} class={classes!("heart-found")} />
                        </div>
                    }
                } else {
                    let id = target.id;
                    let on_heart = props.on_heart.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        on_heart.emit((id, click_center(&e)));
                    });
                    html! {
                        <div
                            key={format!("heart-{}", target.id)}
                            class="target hidden"
                            {style}
                            data-target={target.id.to_string()}
                        >
                            <HeartIcon size={46} class={classes!("heart-hidden")} {onclick} />
                        </div>
                    }
                }
            }) }

            if props.show_envelope {
                <div class="reveal-overlay">
                    <div class="reveal">
                        <p class="reveal-title">{ "You found all my hearts! 💕" }</p>
                        <Envelope size={180} onclick={props.on_envelope.clone()} />
                        <p class="reveal-hint">{ "✨ Tap the envelope to read your letter ✨" }</p>
                    </div>
                </div>
            }
        </main>
    }
}

/// Landing route: start panel, then the hunt itself.
///
/// The `HeartHunt` lives in a mutable ref owned by this view; renders read a
/// snapshot taken after every accepted command.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let hunt = use_mut_ref(|| HeartHunt::new(Flags::new(CookieFlagStore)));
    let snapshot = use_state(HuntSnapshot::default);
    let show_envelope = use_state(|| false);
    let reveal_timer = use_mut_ref(|| None::<Timeout>);
    let ripples = use_reducer(RippleState::default);
    let ripple_timers = use_mut_ref(VecDeque::<Timeout>::new);
    let ripple_seq = use_mut_ref(|| 0_u64);
    let seed = use_state(dom::entropy_seed);
    let navigator = use_navigator();

    let on_start = {
        let hunt = hunt.clone();
        let snapshot = snapshot.clone();
        let show_envelope = show_envelope.clone();
        let reveal_timer = reveal_timer.clone();
        Callback::from(move |()| {
            reveal_timer.borrow_mut().take();
            let mut hunt = hunt.borrow_mut();
            hunt.start();
            show_envelope.set(false);
            snapshot.set(hunt.snapshot());
        })
    };

    let on_heart = {
        let hunt = hunt.clone();
        let snapshot = snapshot.clone();
        let show_envelope = show_envelope.clone();
        let reveal_timer = reveal_timer.clone();
        let ripples = ripples.dispatcher();
        let ripple_timers = ripple_timers.clone();
        let ripple_seq = ripple_seq.clone();
        Callback::from(move |(id, (x, y)): (TargetId, (i32, i32))| {
            let ripple_id = {
                let mut seq = ripple_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            ripples.dispatch(RippleAction::Add(Ripple { id: ripple_id, x, y }));
            {
                let ripples = ripples.clone();
                let mut timers = ripple_timers.borrow_mut();
                timers.push_back(Timeout::new(RIPPLE_LIFETIME, move || {
                    ripples.dispatch(RippleAction::Remove(ripple_id));
                }));
                while timers.len() > MAX_RIPPLES {
                    timers.pop_front();
                }
            }

            let mut hunt = hunt.borrow_mut();
            match hunt.discover(id) {
                Ok(signals) if signals.is_empty() => {}
                Ok(signals) => {
                    snapshot.set(hunt.snapshot());
                    if signals.contains(&HuntSignal::HuntCompleted) {
                        let show_envelope = show_envelope.clone();
                        *reveal_timer.borrow_mut() =
                            Some(Timeout::new(REVEAL_DELAY, move || show_envelope.set(true)));
                    }
                }
                Err(err) => log::error!("ignoring heart click: {err}"),
            }
        })
    };

    let on_envelope = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Success);
        }
    });

    if snapshot.phase == HuntPhase::NotStarted {
        return html! { <StartScreen seed={*seed} {on_start} /> };
    }

    html! {
        <HuntScreen
            seed={*seed}
            snapshot={(*snapshot).clone()}
            ripples={ripples.ripples.clone()}
            show_envelope={*show_envelope}
            {on_heart}
            {on_envelope}
        />
    }
}
