use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, HtmlAudioElement};
use yew::prelude::*;

use crate::dom;

const VOLUME: f64 = 0.4;
const RESUME_EVENTS: [&str; 2] = ["click", "touchstart"];

fn start_playback(audio: HtmlAudioElement) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = dom::play_media(&audio).await {
            log::debug!("music playback deferred: {}", dom::js_error_message(&err));
        }
    });
}

/// Looping background track plus the one-shot "first interaction" listeners
/// that retry playback when autoplay is blocked. Dropping it silences the
/// track and detaches the listeners.
struct AudioMount {
    audio: HtmlAudioElement,
    document: Document,
    resume: Closure<dyn FnMut()>,
}

impl AudioMount {
    fn mount(src: &str) -> Option<Self> {
        let audio = HtmlAudioElement::new_with_src(src)
            .map_err(|err| log::warn!("audio unavailable: {}", dom::js_error_message(&err)))
            .ok()?;
        audio.set_loop(true);
        audio.set_volume(VOLUME);
        start_playback(audio.clone());

        let document = dom::document()?;
        let resume_target = audio.clone();
        let resume = Closure::<dyn FnMut()>::new(move || {
            if resume_target.paused() {
                start_playback(resume_target.clone());
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        for event in RESUME_EVENTS {
            if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                resume.as_ref().unchecked_ref(),
                &options,
            ) {
                log::warn!("could not watch {event}: {}", dom::js_error_message(&err));
            }
        }

        Some(Self {
            audio,
            document,
            resume,
        })
    }

    fn pause(&self) {
        if let Err(err) = self.audio.pause() {
            log::warn!("pause failed: {}", dom::js_error_message(&err));
        }
    }

    fn play(&self) {
        start_playback(self.audio.clone());
    }
}

impl Drop for AudioMount {
    fn drop(&mut self) {
        self.pause();
        for event in RESUME_EVENTS {
            let _ = self
                .document
                .remove_event_listener_with_callback(event, self.resume.as_ref().unchecked_ref());
        }
    }
}

#[must_use]
pub const fn toggle_label(playing: bool) -> &'static str {
    if playing { "Pause music" } else { "Play music" }
}

/// Floating play/pause button for the background music.
#[function_component(MusicPlayer)]
pub fn music_player() -> Html {
    let playing = use_state(|| true);
    let mount = use_mut_ref(|| None::<AudioMount>);

    {
        let mount = mount.clone();
        use_effect_with((), move |()| {
            *mount.borrow_mut() = AudioMount::mount(&crate::paths::music_src());
            move || {
                mount.borrow_mut().take();
            }
        });
    }

    let toggle = {
        let playing = playing.clone();
        let mount = mount.clone();
        Callback::from(move |_: MouseEvent| {
            let mounted = mount.borrow();
            let Some(audio) = mounted.as_ref() else {
                return;
            };
            if *playing {
                audio.pause();
            } else {
                audio.play();
            }
            playing.set(!*playing);
        })
    };

    let label = toggle_label(*playing);
    let class = classes!("music-toggle", (*playing).then_some("playing"));

    html! {
        <button type="button" {class} onclick={toggle} aria-label={label} title={label}>
            if *playing {
                <div class="music-bars">
                    { for (0..4_u8).map(|i| html! {
                        <div
                            class="music-bar"
                            style={format!("animation: musicBar 0.8s ease-in-out {:.2}s infinite alternate", f64::from(i) * 0.15)}
                        />
                    }) }
                </div>
            } else {
                <svg width="22" height="22" viewBox="0 0 24 24" fill="white" opacity="0.8">
                    <path d="M12 3v10.55c-.59-.34-1.27-.55-2-.55C7.79 13 6 14.79 6 17s1.79 4 4 4 4-1.79 4-4V7h4V3h-6z" />
                </svg>
            }
        </button>
    }
}
