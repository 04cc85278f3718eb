use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::carousel::FeatureProgress;
use crate::config::{FEATURE_AUTOPLAY_MS, FEATURE_TICK_MS};

struct Feature {
    title: &'static str,
    content: &'static str,
    image: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Licensed, Local Technicians",
        content: "Every repair is handled by our own certified crew based right here in Utah. No subcontractors, no call centers.",
        image: "/images/repair/technician-on-roof.jpg",
    },
    Feature {
        title: "Honest Diagnostics",
        content: "We test the whole system before quoting, so you pay for the fix you need and nothing you don't.",
        image: "/images/repair/inverter-diagnostics.jpg",
    },
    Feature {
        title: "Any Installer, Any Brand",
        content: "Orphaned by your original installer? We service panels, inverters and racking from every major manufacturer.",
        image: "/images/repair/panel-array.jpg",
    },
    Feature {
        title: "Workmanship Warranty",
        content: "Our repairs are backed by a written warranty. If something we fixed fails, we come back at no charge.",
        image: "/images/repair/finished-install.jpg",
    },
];

#[function_component(FeatureSteps)]
pub fn feature_steps() -> Html {
    let steps = use_mut_ref(|| FeatureProgress::new(FEATURES.len(), FEATURE_AUTOPLAY_MS, FEATURE_TICK_MS));
    let redraw = use_force_update();

    {
        let steps = steps.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                let ticker = Interval::new(FEATURE_TICK_MS, move || {
                    steps.borrow_mut().tick();
                    redraw.force_update();
                });
                move || drop(ticker)
            },
            (),
        );
    }

    let current = steps.borrow().current();
    let progress = steps.borrow().progress();

    html! {
        <div class="feature-steps">
            <h2 class="feature-steps-title">{"Why Utah Homeowners Choose R&R Solar"}</h2>
            <div class="feature-steps-grid">
                <div class="feature-image">
                    { FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <img
                            class={classes!((index == current).then(|| "shown"))}
                            src={feature.image}
                            alt={feature.title}
                        />
                    }).collect::<Html>() }
                    <div class="feature-progress" style={format!("width: {:.1}%", progress)}></div>
                </div>
                <div class="feature-list">
                    { FEATURES.iter().enumerate().map(|(index, feature)| {
                        let onclick = {
                            let steps = steps.clone();
                            let redraw = redraw.clone();
                            Callback::from(move |_: MouseEvent| {
                                steps.borrow_mut().select(index);
                                redraw.force_update();
                            })
                        };
                        html! {
                            <div
                                class={classes!("feature-step", (index == current).then(|| "active"))}
                                {onclick}
                            >
                                <div class="feature-marker">
                                    { if index <= current { "✓".to_string() } else { (index + 1).to_string() } }
                                </div>
                                <div class="feature-text">
                                    <h3>{feature.title}</h3>
                                    <p>{feature.content}</p>
                                </div>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
            </div>

            <style>
                {r#"
                .feature-steps {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .feature-steps-title {
                    font-size: 2.5rem;
                    font-weight: 500;
                    text-align: center;
                    color: #1f2937;
                    margin-bottom: 3rem;
                }
                .feature-steps-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    align-items: center;
                }
                .feature-image {
                    position: relative;
                    height: 400px;
                    border-radius: 0.75rem;
                    overflow: hidden;
                }
                .feature-image img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transform: translateY(100px);
                    transition: all 0.5s ease-in-out;
                }
                .feature-image img.shown {
                    opacity: 1;
                    transform: translateY(0);
                }
                .feature-progress {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    height: 4px;
                    background: #498dcb;
                }
                .feature-step {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                    cursor: pointer;
                    opacity: 0.3;
                    transition: opacity 0.5s ease;
                }
                .feature-step.active {
                    opacity: 1;
                }
                .feature-marker {
                    width: 2.5rem;
                    height: 2.5rem;
                    flex-shrink: 0;
                    border-radius: 50%;
                    border: 2px solid #d1d5db;
                    background: #f3f4f6;
                    color: #6b7280;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                    transition: all 0.3s ease;
                }
                .feature-step.active .feature-marker {
                    background: #498dcb;
                    border-color: #498dcb;
                    color: #fff;
                    transform: scale(1.1);
                }
                .feature-text {
                    flex: 1;
                    border-bottom: 1px solid #e5e7eb;
                    padding-bottom: 1.5rem;
                }
                .feature-text h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }
                .feature-text p {
                    color: #4b5563;
                }
                @media (max-width: 768px) {
                    .feature-steps-grid {
                        grid-template-columns: 1fr;
                    }
                    .feature-image {
                        height: 300px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
