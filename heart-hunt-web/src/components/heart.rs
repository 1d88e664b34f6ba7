use yew::prelude::*;

const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

#[derive(Properties, PartialEq)]
pub struct HeartIconProps {
    #[prop_or(40)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(HeartIcon)]
pub fn heart_icon(props: &HeartIconProps) -> Html {
    html! {
        <svg
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill="currentColor"
            class={props.class.clone()}
            style={props.style.clone()}
            onclick={props.onclick.clone()}
        >
            <path d={HEART_PATH} />
        </svg>
    }
}

/// Heads-up display: one heart per target plus a `found/3` counter.
#[derive(Properties, PartialEq, Eq)]
pub struct HeartCounterProps {
    pub found: u8,
    pub total: u8,
}

#[function_component(HeartCounter)]
pub fn heart_counter(props: &HeartCounterProps) -> Html {
    html! {
        <div class="hud glass-panel" aria-live="polite">
            { for (0..props.total).map(|i| {
                let lit = props.found > i;
                html! {
                    <HeartIcon
                        key={format!("counter-{i}-{lit}")}
                        size={30}
                        class={classes!(if lit { "hud-heart lit" } else { "hud-heart" })}
                    />
                }
            }) }
            <div class="hud-divider" />
            <span class="hud-count">
                { props.found }<span class="hud-total">{ format!("/{}", props.total) }</span>
            </span>
        </div>
    }
}
