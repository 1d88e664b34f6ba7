use crate::cookies::CookieFlagStore;
use crate::router::Route;
use heart_hunt_game::{Flags, RewardGuard};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateState {
    Checking,
    Open,
}

#[derive(Properties, PartialEq)]
pub struct RewardGateProps {
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children only once the completion flag has been confirmed.
///
/// The check runs once on mount; a denied visitor is pushed back to the start
/// route and never sees the protected markup.
#[function_component(RewardGate)]
pub fn reward_gate(props: &RewardGateProps) -> Html {
    let state = use_state(|| GateState::Checking);
    let navigator = use_navigator();

    {
        let state = state.clone();
        use_effect_with((), move |()| {
            if RewardGuard::evaluate(&Flags::new(CookieFlagStore)).is_granted() {
                state.set(GateState::Open);
            } else if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
            || {}
        });
    }

    match *state {
        GateState::Checking => Html::default(),
        GateState::Open => props.children.clone(),
    }
}
