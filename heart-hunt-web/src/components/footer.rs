use yew::prelude::*;

#[derive(Properties, PartialEq, Eq)]
pub struct FooterProps {
    pub author: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="gallery-footer">
            <p>
                { "Made with love by your always, " }
                <span class="author">{ props.author.clone() }</span>
                { " ❤️" }
            </p>
        </footer>
    }
}
