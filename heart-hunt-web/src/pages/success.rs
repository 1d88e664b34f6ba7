use heart_hunt_game::constants::REWARD_SPARKLE_COUNT;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::backdrop::Backdrop;
use crate::components::confetti::Confetti;
use crate::components::footer::Footer;
use crate::components::heart::HeartIcon;
use crate::components::love_letter::LoveLetter;
use crate::content::site_content;
use crate::dom;
use crate::router::Route;

/// `/success` content: the letter, confetti and onward links. Mounted behind
/// the reward gate by the router.
#[function_component(RewardView)]
pub fn reward_view() -> Html {
    let content = site_content();
    let seed = use_state(dom::entropy_seed);
    let style = format!(
        "--theme-bg:{};--theme-text:{};--theme-button:{}",
        content.colors.background, content.colors.text, content.colors.button
    );

    html! {
        <main class="reward-screen letter-bg" {style}>
            <Backdrop seed={*seed} sparkles={REWARD_SPARKLE_COUNT} />
            <Confetti />
            <section class="reward">
                <div class="reward-heart">
                    <HeartIcon size={56} class={classes!("beating")} />
                </div>
                <LoveLetter letter={content.letter.clone()} />
                <nav class="reward-actions">
                    <Link<Route> to={Route::Gallery} classes="btn-glow">
                        { "📸 Our Memories" }
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="btn-soft">
                        { "Play Again 💕" }
                    </Link<Route>>
                </nav>
            </section>
            if !content.author.is_empty() {
                <Footer author={content.author.clone()} />
            }
        </main>
    }
}

