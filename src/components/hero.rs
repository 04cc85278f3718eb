use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{PARALLAX_SPEED_DESKTOP, PARALLAX_SPEED_MOBILE};
use crate::viewport::geometry::Viewport;
use crate::viewport::hooks::use_viewport_watch;

const REVEAL_BASE_DELAY_S: f64 = 0.5;
const REVEAL_CHAR_DELAY_S: f64 = 0.04;

pub fn parallax_offset(scroll_y: f64, viewport: Viewport) -> f64 {
    let speed = if viewport.is_mobile() {
        PARALLAX_SPEED_MOBILE
    } else {
        PARALLAX_SPEED_DESKTOP
    };
    scroll_y * speed
}

/// Animation delay in seconds for the `index`th revealed character.
pub fn reveal_delay(index: usize) -> f64 {
    REVEAL_BASE_DELAY_S + index as f64 * REVEAL_CHAR_DELAY_S
}

/// Splits `text` into per-word spans of per-character spans, continuing the
/// delay sequence from `next_index`.
fn wrap_characters(text: &str, next_index: &mut usize) -> Html {
    text.split(' ')
        .map(|word| {
            html! {
                <span class="hero-word">
                    { word.chars().map(|c| {
                        let delay = reveal_delay(*next_index);
                        *next_index += 1;
                        html! {
                            <span style={format!("animation-delay: {:.2}s", delay)}>{c}</span>
                        }
                    }).collect::<Html>() }
                </span>
            }
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let parallax_ref = use_node_ref();
    let content_ref = use_node_ref();

    {
        let parallax_ref = parallax_ref.clone();
        let content_ref = content_ref.clone();
        use_viewport_watch(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (Some(viewport), Ok(scroll_y)) = (Viewport::current(), window.scroll_y()) else {
                return;
            };
            let transform = format!("translate3d(0, {}px, 0)", parallax_offset(scroll_y, viewport));
            for node in [&parallax_ref, &content_ref] {
                if let Some(element) = node.cast::<HtmlElement>() {
                    let _ = element.style().set_property("transform", &transform);
                }
            }
        });
    }

    let mut index = 0;
    let first_line = wrap_characters("Your Pilot Journey", &mut index);
    let second_line = wrap_characters("Starts Here", &mut index);

    html! {
        <section class="hero">
            <div ref={parallax_ref} class="hero-parallax">
                <div class="hero-background"></div>
            </div>

            <div ref={content_ref} class="hero-content">
                <div class="hero-inner">
                    <div class="hero-badge fade-up" style="animation-delay: 0.3s">
                        <span class="badge-line"></span>
                        {"Spanish Fork Flight School"}
                    </div>
                    <h1 class="hero-title">
                        {first_line}
                        <br />
                        {second_line}
                    </h1>
                    <h2 class="hero-subtitle fade-up" style="animation-delay: 0.9s">
                        {"Train for your private pilot license at Spanish Fork's premier Part 61 flight school. Flexible scheduling and transparent pricing make flying achievable for students and professionals alike. Pay-as-you-go from $140."}
                    </h2>
                    <div class="hero-buttons fade-up" style="animation-delay: 1.1s">
                        <a href="#contact" class="cta-button">{"Book a Free Consultation"}</a>
                        <a href="#programs" class="secondary-button desktop-only">{"Explore Career Paths"}</a>
                    </div>
                    <div class="hero-reviews fade-up" style="animation-delay: 1.3s">
                        <div class="stars">{"★★★★★"}</div>
                        <div class="caption">{"100+ Positive Client Reviews"}</div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    min-height: 700px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-parallax {
                    position: absolute;
                    inset: 0;
                    will-change: transform;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-image: url('/images/hero/Hero Background Desktop - Airplane Over Lake.png');
                    background-size: cover;
                    background-position: center 30%;
                    opacity: 0;
                    transform: scale(1.1);
                    animation: heroBackgroundZoomOut 3s cubic-bezier(0.12, 0.23, 0.5, 1) forwards;
                }
                .hero-content {
                    position: relative;
                    z-index: 2;
                    max-width: 1200px;
                    width: 100%;
                    padding: 0 2rem;
                    will-change: transform;
                }
                .hero-inner {
                    max-width: 800px;
                    text-align: left;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.625rem;
                    margin-bottom: 1.5rem;
                    letter-spacing: 0.1em;
                    color: rgba(255, 255, 255, 0.95);
                }
                .badge-line {
                    width: 3.5rem;
                    height: 2px;
                    background: rgba(255, 255, 255, 0.8);
                }
                .hero-title {
                    font-size: 4.5rem;
                    font-weight: 500;
                    line-height: 1.2;
                    margin-bottom: 1.75rem;
                    color: #fff;
                }
                .hero-word {
                    display: inline-block;
                    white-space: nowrap;
                    margin-right: 18px;
                }
                .hero-word span {
                    display: inline-block;
                    opacity: 0;
                    transform: translateY(0.5em);
                    animation: charReveal 0.6s ease forwards;
                }
                .hero-subtitle {
                    font-size: 1rem;
                    font-weight: 400;
                    color: rgba(255, 255, 255, 0.9);
                    max-width: 620px;
                    margin-bottom: 2.5rem;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-bottom: 3rem;
                }
                .hero-reviews {
                    padding: 0.5rem 0 0.5rem 1rem;
                    border-left: 3px solid rgba(255, 255, 255, 0.8);
                    color: #fff;
                }
                .fade-up {
                    opacity: 0;
                    transform: translateY(1.25rem);
                    animation: fadeInUp 0.8s ease forwards;
                }
                @keyframes charReveal {
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes fadeInUp {
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes heroBackgroundZoomOut {
                    to { opacity: 1; transform: scale(1); }
                }
                @media (max-width: 768px) {
                    .hero {
                        height: 95vh;
                    }
                    .hero-title {
                        font-size: 3rem;
                    }
                    .desktop-only {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_slows_down_on_phones() {
        assert_eq!(parallax_offset(200.0, Viewport::new(1280.0, 800.0)), 100.0);
        assert_eq!(parallax_offset(200.0, Viewport::new(375.0, 700.0)), 60.0);
    }

    #[test]
    fn reveal_delays_step_per_character() {
        assert_eq!(reveal_delay(0), 0.5);
        assert!((reveal_delay(10) - 0.9).abs() < 1e-9);
    }
}
