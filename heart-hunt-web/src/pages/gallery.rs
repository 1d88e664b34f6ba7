use std::rc::Rc;

use heart_hunt_game::Lightbox;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::heart::HeartIcon;
use crate::content::site_content;
use crate::paths::asset_path;
use crate::router::Route;

const FLOATING_HEARTS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightboxState(pub Lightbox);

pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Prev,
    Key(String),
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let lightbox = self.0;
        let next = match action {
            LightboxAction::Open(index) => lightbox.open(index),
            LightboxAction::Close => lightbox.close(),
            LightboxAction::Next => lightbox.next(),
            LightboxAction::Prev => lightbox.prev(),
            LightboxAction::Key(key) => lightbox.handle_key(&key),
        };
        if next == lightbox {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

/// `keydown` listener on the window, removed again on drop.
struct KeyListener {
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    fn attach(dispatcher: UseReducerDispatcher<LightboxState>) -> Option<Self> {
        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            dispatcher.dispatch(LightboxAction::Key(e.key()));
        });
        let win = crate::dom::window()?;
        win.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .map_err(|err| {
                log::warn!(
                    "keydown listener not attached: {}",
                    crate::dom::js_error_message(&err)
                );
            })
            .ok()?;
        Some(Self { callback })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(win) = crate::dom::window() {
            let _ = win.remove_event_listener_with_callback(
                "keydown",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

fn floating_heart_style(i: usize) -> String {
    format!(
        "left:{}%;top:{}%;animation-delay:{:.1}s;opacity:{:.2}",
        (i * 37 + 5) % 100,
        (i * 53 + 11) % 100,
        f32::from(u8::try_from(i % 5).unwrap_or(0)) * 0.8,
        0.15 + f32::from(u8::try_from(i % 3).unwrap_or(0)) * 0.1
    )
}

fn stagger_delay(i: usize) -> f32 {
    u16::try_from(i).map_or(0.0, f32::from) * 0.05
}

#[derive(Properties, PartialEq)]
pub struct GalleryGridProps {
    pub images: Rc<Vec<String>>,
    pub on_open: Callback<usize>,
}

#[function_component(GalleryGrid)]
pub fn gallery_grid(props: &GalleryGridProps) -> Html {
    html! {
        <div class="gallery-grid">
            { for props.images.iter().enumerate().map(|(i, image)| {
                let on_open = props.on_open.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_open.emit(i));
                let tilt = if i % 2 == 0 { -2 } else { 2 };
                html! {
                    <button
                        key={image.clone()}
                        type="button"
                        class="polaroid"
                        style={format!("--tilt:{tilt}deg;animation-delay:{:.2}s", stagger_delay(i))}
                        {onclick}
                    >
                        <img src={asset_path(image)} alt={format!("Memory {}", i + 1)} loading="lazy" />
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxViewProps {
    pub images: Rc<Vec<String>>,
    pub lightbox: Lightbox,
    pub dispatch: Callback<LightboxAction>,
}

#[function_component(LightboxView)]
pub fn lightbox_view(props: &LightboxViewProps) -> Html {
    let Some(index) = props.lightbox.selected() else {
        return Html::default();
    };
    let Some(image) = props.images.get(index) else {
        return Html::default();
    };

    let on_close = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(LightboxAction::Close))
    };
    let on_prev = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatch.emit(LightboxAction::Prev);
        })
    };
    let on_next = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatch.emit(LightboxAction::Next);
        })
    };
    let hold = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="lightbox" role="dialog" aria-modal="true" onclick={on_close.clone()}>
            <button type="button" class="lightbox-close" aria-label="Close" onclick={on_close}>
                { "✕" }
            </button>
            <button type="button" class="lightbox-nav prev" aria-label="Previous photo" onclick={on_prev}>
                { "‹" }
            </button>
            <img
                class="lightbox-image"
                src={asset_path(image)}
                alt={format!("Memory {}", index + 1)}
                onclick={hold}
            />
            <button type="button" class="lightbox-nav next" aria-label="Next photo" onclick={on_next}>
                { "›" }
            </button>
            if let Some(counter) = props.lightbox.counter() {
                <p class="lightbox-counter">{ counter }</p>
            }
        </div>
    }
}

/// `/gallery`: photo grid with a keyboard-driven lightbox.
#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let content = site_content();
    let images = use_memo((), |()| content.images.clone());
    let state = use_reducer(|| LightboxState(Lightbox::new(content.images.len())));

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.0.is_open(), move |&open| {
            let listener = if open {
                KeyListener::attach(dispatcher)
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: LightboxAction| dispatcher.dispatch(action))
    };
    let on_open = {
        let dispatch = dispatch.clone();
        Callback::from(move |i: usize| dispatch.emit(LightboxAction::Open(i)))
    };

    html! {
        <main class="gallery-screen letter-bg">
            <div class="floating-hearts" aria-hidden="true">
                { for (0..FLOATING_HEARTS).map(|i| html! {
                    <HeartIcon key={i} size={u32::try_from(16 + (i % 4) * 6).unwrap_or(16)} style={floating_heart_style(i)} class={classes!("floating-heart")} />
                }) }
            </div>
            <header class="gallery-header">
                <Link<Route> to={Route::Success} classes="back-link">
                    { "← Back to the letter" }
                </Link<Route>>
                <h1 class="title">{ "Our Memories" }</h1>
                <p class="subtitle">{ format!("{} photos", state.0.len()) }</p>
            </header>
            <GalleryGrid images={images.clone()} {on_open} />
            <LightboxView images={images} lightbox={state.0} {dispatch} />
            if !content.author.is_empty() {
                <Footer author={content.author.clone()} />
            }
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn images(n: usize) -> Rc<Vec<String>> {
        Rc::new((0..n).map(|i| format!("photo {i}.jpeg")).collect())
    }

    #[test]
    fn reducer_follows_keyboard() {
        let state = Rc::new(LightboxState(Lightbox::new(3)));
        let state = state.reduce(LightboxAction::Open(2));
        let state = state.reduce(LightboxAction::Key(String::from("ArrowRight")));
        assert_eq!(state.0.selected(), Some(0));
        let state = state.reduce(LightboxAction::Key(String::from("Escape")));
        assert!(!state.0.is_open());
    }

    #[test]
    fn unchanged_state_is_reused() {
        let state = Rc::new(LightboxState(Lightbox::new(3)));
        let same = Rc::clone(&state).reduce(LightboxAction::Key(String::from("Enter")));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn grid_encodes_photo_paths() {
        let props = GalleryGridProps {
            images: images(2),
            on_open: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<GalleryGrid>::with_props(props).render());
        assert_eq!(html.matches("class=\"polaroid\"").count(), 2);
        assert!(html.contains("photo%201.jpeg"));
    }

    #[test]
    fn floating_hearts_cycle_delay_and_opacity() {
        assert_eq!(
            floating_heart_style(7),
            "left:64%;top:82%;animation-delay:1.6s;opacity:0.25"
        );
        assert_eq!(
            floating_heart_style(0),
            "left:5%;top:11%;animation-delay:0.0s;opacity:0.15"
        );
    }

    #[test]
    fn grid_staggers_each_polaroid() {
        let props = GalleryGridProps {
            images: images(3),
            on_open: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<GalleryGrid>::with_props(props).render());
        assert!(html.contains("animation-delay:0.00s"));
        assert!(html.contains("animation-delay:0.05s"));
        assert!(html.contains("animation-delay:0.10s"));
    }

    #[test]
    fn closed_lightbox_renders_nothing() {
        let props = LightboxViewProps {
            images: images(2),
            lightbox: Lightbox::new(2),
            dispatch: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LightboxView>::with_props(props).render());
        assert!(!html.contains("lightbox-image"));
    }

    #[test]
    fn open_lightbox_shows_counter() {
        let props = LightboxViewProps {
            images: images(4),
            lightbox: Lightbox::new(4).open(1),
            dispatch: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LightboxView>::with_props(props).render());
        assert!(html.contains("lightbox-image"));
        assert!(html.contains("2 / 4"));
    }
}
