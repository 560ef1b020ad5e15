use web_sys::js_sys::Math;
use yew::prelude::*;

const STRIKE_COUNT: usize = 12;
const DOT_COUNT: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct StrikePath {
    pub id: usize,
    pub d: String,
    pub duration: f64,
    pub delay: f64,
    pub opacity: f64,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FallingDot {
    pub cx: f64,
    pub r: f64,
    pub duration: f64,
    pub begin: f64,
}

/// One jagged three-point path in the 100x100 viewBox. `rand` yields values
/// in `[0, 1)`.
pub fn strike_path(id: usize, rand: &mut impl FnMut() -> f64) -> StrikePath {
    let x1 = rand() * 100.0;
    let y1 = rand() * 100.0;
    let mid_x = x1 + (rand() - 0.5) * 20.0;
    let mid_y = y1 + (rand() - 0.5) * 20.0;
    let x2 = mid_x + (rand() - 0.5) * 20.0;
    let y2 = mid_y + (rand() - 0.5) * 20.0;

    StrikePath {
        id,
        d: format!(
            "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2}",
            x1, y1, mid_x, mid_y, x2, y2
        ),
        duration: rand() * 4.0 + 2.0,
        delay: rand() * 5.0,
        opacity: rand() * 0.4 + 0.1,
        width: rand() * 1.5 + 0.5,
    }
}

pub fn falling_dot(rand: &mut impl FnMut() -> f64) -> FallingDot {
    FallingDot {
        cx: rand() * 100.0,
        r: rand() * 0.4 + 0.1,
        duration: rand() * 10.0 + 10.0,
        begin: rand() * -20.0,
    }
}

#[function_component(BackgroundParticles)]
pub fn background_particles() -> Html {
    // generated once per mount so re-renders don't reshuffle the sky
    let scene = use_state(|| {
        let mut rand = Math::random;
        let strikes: Vec<StrikePath> = (0..STRIKE_COUNT).map(|i| strike_path(i, &mut rand)).collect();
        let dots: Vec<FallingDot> = (0..DOT_COUNT).map(|_| falling_dot(&mut rand)).collect();
        (strikes, dots)
    });
    let (strikes, dots) = &*scene;

    html! {
        <div class="background-particles">
            <div class="ambient-glows">
                <div class="ambient-glow ambient-glow-purple"></div>
                <div class="ambient-glow ambient-glow-indigo"></div>
            </div>

            <svg class="particle-field" viewBox="0 0 100 100" preserveAspectRatio="none">
                <defs>
                    <filter id="strike-glow">
                        <feGaussianBlur stdDeviation="0.5" />
                    </filter>
                </defs>

                { for strikes.iter().map(|p| html! {
                    <path
                        key={p.id}
                        d={p.d.clone()}
                        fill="none"
                        stroke="#a855f7"
                        stroke-width={format!("{:.2}", p.width)}
                        stroke-opacity={format!("{:.2}", p.opacity)}
                        class="neural-strike"
                        filter="url(#strike-glow)"
                        style={format!("animation-duration: {:.2}s; animation-delay: {:.2}s;", p.duration, p.delay)}
                    />
                }) }

                { for dots.iter().enumerate().map(|(i, dot)| html! {
                    <circle
                        key={format!("dot-{}", i)}
                        cx={format!("{:.2}", dot.cx)}
                        cy="-5"
                        r={format!("{:.2}", dot.r)}
                        fill="#6366f1"
                        opacity="0.3"
                    >
                        <animate
                            attributeName="cy"
                            from="-5"
                            to="105"
                            dur={format!("{:.2}s", dot.duration)}
                            repeatCount="indefinite"
                            begin={format!("{:.2}s", dot.begin)}
                        />
                    </circle>
                }) }
            </svg>
        </div>
    }
}
