use yew::prelude::*;

use crate::viewport::hooks::{use_viewport_activation, RegionSource};
use crate::viewport::tracker::HighestRatio;

struct Aircraft {
    id: &'static str,
    title: &'static str,
    primary_desc: &'static str,
    secondary_desc: Option<&'static str>,
    price: &'static str,
    image: &'static str,
}

const FLEET: &[Aircraft] = &[
    Aircraft {
        id: "da40-xl",
        title: "DIAMOND DA40 XL",
        primary_desc: "The DiamondStar is a great cross-country plane and instrument trainer.",
        secondary_desc: Some("Equipped with the Garmin G1000 'glass cockpit.'"),
        price: "$265 per hour",
        image: "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?w=1600&h=1067&fit=crop&q=80",
    },
    Aircraft {
        id: "da20-eclipse-1",
        title: "DIAMOND DA20 ECLIPSE",
        primary_desc: "The DA20 is our primary 2-seat trainer.",
        secondary_desc: None,
        price: "$165/hr",
        image: "https://images.unsplash.com/photo-1540962351504-03099e0a754b?w=1600&h=1067&fit=crop&q=80",
    },
    Aircraft {
        id: "da20-eclipse-2",
        title: "DIAMOND DA20 ECLIPSE",
        primary_desc: "The DA20 is our primary 2-seat trainer.",
        secondary_desc: None,
        price: "$165/hr",
        image: "https://images.unsplash.com/photo-1540962351504-03099e0a754b?w=1600&h=1067&fit=crop&q=80",
    },
    Aircraft {
        id: "da40",
        title: "DIAMOND DA40",
        primary_desc: "The DiamondStar is a great cross-country plane and instrument trainer.",
        secondary_desc: Some("Equipped with the Garmin G1000 'glass cockpit.'"),
        price: "$240/hr",
        image: "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?w=1600&h=1067&fit=crop&q=80",
    },
];

const FLEET_KEYS: &[&str] = &["da40-xl", "da20-eclipse-1", "da20-eclipse-2", "da40"];

/// Scrolling text cards on the left, a sticky image on the right that
/// follows whichever card sits in the middle of the viewport.
#[function_component(AircraftShowcase)]
pub fn aircraft_showcase() -> Html {
    let tracker = use_viewport_activation(
        FLEET_KEYS,
        RegionSource::NodeRefs,
        HighestRatio::default(),
        Some("da40-xl"),
    );

    html! {
        <div class="aircraft-showcase">
            <div class="aircraft-cards">
                { FLEET.iter().map(|plane| {
                    let select = {
                        let activate = tracker.activate.clone();
                        let id = plane.id;
                        Callback::from(move |_: MouseEvent| activate.emit(id.to_string()))
                    };
                    html! {
                        <div
                            key={plane.id}
                            ref={tracker.node_ref(plane.id)}
                            data-aircraft={plane.id}
                            class={classes!("aircraft-card", tracker.is_active(plane.id).then(|| "active"))}
                            onclick={select}
                        >
                            <img class="aircraft-card-image" src={plane.image} alt={plane.title} loading="lazy" />
                            <h2>{plane.title}</h2>
                            <p>
                                {plane.primary_desc}
                                if let Some(secondary) = plane.secondary_desc {
                                    <span class="secondary">{" "}{secondary}</span>
                                }
                            </p>
                            <div class="price">{plane.price}</div>
                            <a href="#contact" class="cta-button">{"Book Discovery Flight"}</a>
                        </div>
                    }
                }).collect::<Html>() }
            </div>

            <div class="aircraft-stage">
                <div class="aircraft-stage-sticky">
                    { FLEET.iter().map(|plane| html! {
                        <img
                            key={plane.id}
                            src={plane.image}
                            alt={plane.title}
                            class={classes!("stage-image", tracker.is_active(plane.id).then(|| "visible"))}
                            loading="lazy"
                        />
                    }).collect::<Html>() }
                </div>
            </div>

            <style>
                {r#"
                .aircraft-showcase {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .aircraft-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 30vh;
                }
                .aircraft-card {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    color: #fff;
                    opacity: 0.5;
                    transition: opacity 0.5s ease;
                }
                .aircraft-card.active {
                    opacity: 1;
                }
                .aircraft-card h2 {
                    font-size: 52px;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                }
                .aircraft-card .secondary {
                    color: #9ca3af;
                }
                .aircraft-card .price {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 1.5rem 0;
                }
                .aircraft-card-image {
                    display: none;
                }
                .aircraft-stage-sticky {
                    position: sticky;
                    top: 50vh;
                    transform: translateY(-50%);
                    height: 500px;
                    border-radius: 1rem;
                    overflow: hidden;
                    background: #111827;
                }
                .stage-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .stage-image.visible {
                    opacity: 1;
                }
                @media (max-width: 1024px) {
                    .aircraft-showcase {
                        grid-template-columns: 1fr;
                    }
                    .aircraft-stage {
                        display: none;
                    }
                    .aircraft-cards {
                        gap: 100px;
                    }
                    .aircraft-card {
                        min-height: auto;
                        opacity: 1;
                    }
                    .aircraft-card-image {
                        display: block;
                        width: 100%;
                        height: 300px;
                        object-fit: cover;
                        border-radius: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
