use heart_hunt_game::{generate_particles, generate_sparkles, generate_stars};
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq)]
pub struct BackdropProps {
    pub seed: u64,
    #[prop_or_default]
    pub particles: usize,
    #[prop_or_default]
    pub stars: usize,
    /// Sparkles stay clear of the screen edges; used behind the letter.
    #[prop_or_default]
    pub sparkles: usize,
}

/// Floating particles and twinkling stars. Purely decorative.
#[function_component(Backdrop)]
pub fn backdrop(props: &BackdropProps) -> Html {
    let scene = use_memo(
        (props.seed, props.particles, props.stars, props.sparkles),
        |&(seed, particles, stars, sparkles)| {
            let mut twinkles = generate_stars(seed, stars);
            twinkles.extend(generate_sparkles(seed, sparkles));
            (generate_particles(seed, particles), twinkles)
        },
    );
    let (particles, stars) = &*scene;

    html! {
        <div class="backdrop" aria-hidden="true">
            { for particles.iter().map(|p| html! {
                <div
                    key={format!("p-{}", p.id)}
                    class="particle"
                    style={format!(
                        "left:{:.2}%;bottom:-10px;width:{:.1}px;height:{:.1}px;background:{};animation-duration:{:.2}s;animation-delay:{:.2}s",
                        p.x, p.size, p.size, p.color, p.duration, p.delay
                    )}
                />
            }) }
            { for stars.iter().enumerate().map(|(i, s)| html! {
                <div
                    key={format!("s-{i}")}
                    class="star"
                    style={format!(
                        "left:{:.2}%;top:{:.2}%;font-size:{:.1}px;animation-duration:{:.2}s;animation-delay:{:.2}s",
                        s.x, s.y, s.size, s.duration, s.delay
                    )}
                />
            }) }
        </div>
    }
}

/// Static flowers and clouds scattered around the hunt screen.
#[function_component(SceneDecorations)]
pub fn scene_decorations() -> Html {
    const FLOWERS: [(&str, &str, f32, f32); 4] = [
        ("6%", "15%", 1.0, 0.0),
        ("85%", "22%", 0.7, 1.5),
        ("12%", "65%", 0.8, 0.8),
        ("80%", "70%", 0.6, 2.2),
    ];
    const CLOUDS: [(&str, &str, u32, f32); 4] = [
        ("20%", "8%", 110, 0.0),
        ("65%", "12%", 80, 2.0),
        ("5%", "45%", 70, 1.0),
        ("75%", "55%", 90, 3.0),
    ];

    html! {
        <div class="scene" aria-hidden="true">
            { for FLOWERS.iter().map(|&(x, y, scale, delay)| html! {
                <div
                    class="float-gentle scene-item"
                    style={format!("left:{x};top:{y};animation-delay:{delay}s;transform:scale({scale})")}
                >
                    <svg width="50" height="50" viewBox="0 0 50 50">
                        <circle cx="25" cy="12" r="9" fill="rgba(244, 114, 182, 0.5)" />
                        <circle cx="12" cy="25" r="9" fill="rgba(251, 146, 191, 0.5)" />
                        <circle cx="38" cy="25" r="9" fill="rgba(244, 114, 182, 0.5)" />
                        <circle cx="18" cy="38" r="9" fill="rgba(251, 146, 191, 0.5)" />
                        <circle cx="32" cy="38" r="9" fill="rgba(244, 114, 182, 0.5)" />
                        <circle cx="25" cy="25" r="6" fill="rgba(251, 191, 36, 0.7)" />
                    </svg>
                </div>
            }) }
            { for CLOUDS.iter().map(|&(x, y, size, delay)| html! {
                <div
                    class="float-slow scene-item"
                    style={format!("left:{x};top:{y};animation-delay:{delay}s")}
                >
                    <svg width={size.to_string()} height={(size / 2).to_string()} viewBox="0 0 100 50" opacity="0.12">
                        <ellipse cx="50" cy="35" rx="40" ry="14" fill="white" />
                        <ellipse cx="30" cy="25" rx="25" ry="14" fill="white" />
                        <ellipse cx="65" cy="22" rx="28" ry="12" fill="white" />
                    </svg>
                </div>
            }) }
        </div>
    }
}
