use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EnvelopeProps {
    #[prop_or(140)]
    pub size: u32,
    pub onclick: Callback<()>,
}

/// Sealed envelope shown once every heart is found.
#[function_component(Envelope)]
pub fn envelope(props: &EnvelopeProps) -> Html {
    let onclick = {
        let cb = props.onclick.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let height = props.size * 72 / 100;

    html! {
        <svg
            width={props.size.to_string()}
            height={height.to_string()}
            viewBox="0 0 140 100"
            class="envelope"
            role="button"
            aria-label="Open the letter"
            {onclick}
        >
            <defs>
                <linearGradient id="env-grad" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="#fecdd3" />
                    <stop offset="100%" stop-color="#fda4af" />
                </linearGradient>
                <linearGradient id="flap-grad" x1="0%" y1="0%" x2="0%" y2="100%">
                    <stop offset="0%" stop-color="#ffe4e6" />
                    <stop offset="100%" stop-color="#fecdd3" />
                </linearGradient>
            </defs>
            <ellipse cx="70" cy="95" rx="55" ry="4" fill="rgba(0,0,0,0.15)" />
            <rect x="8" y="20" width="124" height="72" rx="8" fill="url(#env-grad)" stroke="#e11d48" stroke-width="1.5" />
            <polygon points="8,20 70,60 132,20" fill="url(#flap-grad)" stroke="#e11d48" stroke-width="1.5" />
            <line x1="8" y1="92" x2="50" y2="58" stroke="#e11d48" stroke-width="1" opacity="0.3" />
            <line x1="132" y1="92" x2="90" y2="58" stroke="#e11d48" stroke-width="1" opacity="0.3" />
            <circle cx="70" cy="72" r="12" fill="#e11d48" opacity="0.9" />
            <text x="70" y="77" text-anchor="middle" fill="white" font-size="14" font-family="serif">{ "♥" }</text>
        </svg>
    }
}
