use std::rc::Rc;
use std::time::Duration;

use heart_hunt_game::{ConfettiPiece, ConfettiPlan};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

use crate::dom;
use crate::timers::Interval;

/// Bursts kept on screen at once; older ones have finished animating.
const LIVE_BURSTS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct BurstView {
    pub id: u64,
    pub pieces: Vec<ConfettiPiece>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfettiState {
    pub bursts: Vec<BurstView>,
    pub next_id: u64,
    pub finished: bool,
}

pub enum ConfettiAction {
    Burst(Vec<ConfettiPiece>),
    Finish,
}

impl Reducible for ConfettiState {
    type Action = ConfettiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ConfettiAction::Burst(pieces) => {
                next.bursts.push(BurstView {
                    id: next.next_id,
                    pieces,
                });
                next.next_id += 1;
                let overflow = next.bursts.len().saturating_sub(LIVE_BURSTS);
                next.bursts.drain(..overflow);
            }
            ConfettiAction::Finish => next.finished = true,
        }
        Rc::new(next)
    }
}

fn piece_style(piece: &ConfettiPiece) -> String {
    format!(
        "left:{:.2}%;top:{:.2}%;background:{};--dx:{:.2}vw;--dy:{:.2}vh",
        piece.x * 100.0,
        piece.y * 100.0,
        piece.color,
        piece.dx * 100.0,
        piece.dy * 100.0
    )
}

/// Celebration overlay for the reward page.
///
/// Fires paired bursts on a fixed interval for the length of the plan. The
/// interval is dropped when the run ends or when the view is torn down.
#[function_component(Confetti)]
pub fn confetti() -> Html {
    let state = use_reducer(ConfettiState::default);
    let interval = use_mut_ref(|| None::<Interval>);

    {
        let dispatcher = state.dispatcher();
        let interval = interval.clone();
        use_effect_with((), move |()| {
            let plan = ConfettiPlan::default();
            let started = dom::now_ms();
            let mut rng = ChaCha20Rng::seed_from_u64(dom::entropy_seed());
            *interval.borrow_mut() = Some(Interval::new(plan.interval, move || {
                let elapsed = Duration::from_secs_f64((dom::now_ms() - started).max(0.0) / 1000.0);
                match plan.burst_at(elapsed, &mut rng) {
                    Some(bursts) => {
                        let pieces = bursts
                            .iter()
                            .flat_map(|burst| ConfettiPlan::pieces(burst, &mut rng))
                            .collect();
                        dispatcher.dispatch(ConfettiAction::Burst(pieces));
                    }
                    None => dispatcher.dispatch(ConfettiAction::Finish),
                }
            }));
            move || {
                interval.borrow_mut().take();
            }
        });
    }

    {
        let interval = interval.clone();
        use_effect_with(state.finished, move |finished| {
            if *finished {
                log::debug!("confetti run finished");
                interval.borrow_mut().take();
            }
            || {}
        });
    }

    html! {
        <div class="confetti-layer" aria-hidden="true">
            { for state.bursts.iter().map(|burst| html! {
                <div key={burst.id.to_string()} class="confetti-burst">
                    { for burst.pieces.iter().map(|piece| html! {
                        <span class="confetti-piece" style={piece_style(piece)} />
                    }) }
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heart_hunt_game::constants::CONFETTI_PALETTE;

    fn piece() -> ConfettiPiece {
        ConfettiPiece {
            x: 0.2,
            y: 0.1,
            dx: 0.05,
            dy: -0.1,
            color: CONFETTI_PALETTE[0],
        }
    }

    #[test]
    fn reducer_keeps_only_recent_bursts() {
        let mut state = Rc::new(ConfettiState::default());
        for _ in 0..10 {
            state = state.reduce(ConfettiAction::Burst(vec![piece()]));
        }
        assert_eq!(state.bursts.len(), LIVE_BURSTS);
        assert_eq!(state.bursts[0].id, 4);
        assert_eq!(state.next_id, 10);
        assert!(!state.finished);

        let state = state.reduce(ConfettiAction::Finish);
        assert!(state.finished);
    }

    #[test]
    fn piece_style_scales_to_viewport() {
        let style = piece_style(&piece());
        assert!(style.contains("left:20.00%"));
        assert!(style.contains("top:10.00%"));
        assert!(style.contains("--dy:-10.00vh"));
        assert!(style.contains("#ec4899"));
    }
}
