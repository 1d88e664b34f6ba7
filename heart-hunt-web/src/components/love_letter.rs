use crate::content::Letter;
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq)]
pub struct LoveLetterProps {
    pub letter: Letter,
}

#[function_component(LoveLetter)]
pub fn love_letter(props: &LoveLetterProps) -> Html {
    let letter = &props.letter;
    html! {
        <article class="letter-paper">
            <div class="flourish top-left" aria-hidden="true">{ "❦" }</div>
            <div class="flourish top-right" aria-hidden="true">{ "❦" }</div>
            <div class="flourish bottom-left" aria-hidden="true">{ "❦" }</div>
            <div class="flourish bottom-right" aria-hidden="true">{ "❦" }</div>

            <div class="letter-rule" />
            <h2 class="letter-greeting">{ letter.greeting.clone() }</h2>
            <div class="letter-body">
                { for letter.paragraphs().into_iter().enumerate().map(|(i, paragraph)| html! {
                    <p key={i} style={format!("animation-delay:{:.1}s", 1.0 + 0.3 * f64::from(u32::try_from(i).unwrap_or(0)))}>
                        { paragraph.to_string() }
                    </p>
                }) }
            </div>
            <div class="letter-closing">
                <p class="closing">{ letter.closing.clone() }</p>
                <p class="signature">{ letter.signature.clone() }</p>
            </div>
            <div class="letter-rule" />
        </article>
    }
}
