use web_sys::HtmlElement;
use yew::prelude::*;

use crate::viewport::geometry::{Bounds, Viewport};
use crate::viewport::hooks::use_viewport_watch;
use crate::viewport::scale::ScaleWindow;

#[derive(Properties, PartialEq)]
struct CareerCardProps {
    title: &'static str,
    description: &'static str,
    timeline: &'static str,
    image: Option<&'static str>,
    features: &'static [&'static str],
}

#[function_component(CareerCard)]
fn career_card(props: &CareerCardProps) -> Html {
    let card_ref = use_node_ref();

    {
        let card_ref = card_ref.clone();
        use_viewport_watch(move || {
            let (Some(card), Some(viewport)) = (card_ref.cast::<HtmlElement>(), Viewport::current()) else {
                return;
            };
            let bounds = Bounds::of_element(&card);
            let scale = ScaleWindow::for_card(viewport.height, bounds.height()).scale_at(bounds.top);
            let _ = card
                .style()
                .set_property("transform", &format!("translateY(0) scale({})", scale));
        });
    }

    html! {
        <div ref={card_ref} class="career-card">
            <div class="career-card-media">
                {
                    match props.image {
                        Some(src) => html! { <img src={src} alt={props.title} /> },
                        None => html! {
                            <div class="career-card-placeholder">
                                <span>{format!("{} Image", props.title)}</span>
                            </div>
                        },
                    }
                }
            </div>
            <div class="career-card-body">
                <div>
                    <h3>{props.title}</h3>
                    <p class="description">{props.description}</p>
                    if !props.features.is_empty() {
                        <ul class="features">
                            { props.features.iter().map(|feature| html! {
                                <li>
                                    <span class="check">{"✓"}</span>
                                    <span>{*feature}</span>
                                </li>
                            }).collect::<Html>() }
                        </ul>
                    }
                    <p class="timeline"><strong>{props.timeline}</strong></p>
                </div>
                <a href="#contact" class="cta-button secondary">{"Get in touch"}</a>
            </div>
        </div>
    }
}

const AIRLINE_FEATURES: &[&str] = &[
    "Starting salary $90K+",
    "Senior captains earn $400K+",
    "High demand through 2030s",
    "Travel benefits & job security",
];
const CORPORATE_FEATURES: &[&str] = &[
    "Better work-life balance",
    "Home most nights",
    "Competitive pay $75K-$200K+",
    "Flexible schedule",
];
const MILITARY_FEATURES: &[&str] = &[
    "Full benefits & retirement",
    "Serve your country",
    "Pathway to airlines",
    "PPL gives competitive edge",
];

/// Stacked sticky cards that grow from 90% to full size as they scroll in.
#[function_component(CareerCards)]
pub fn career_cards() -> Html {
    html! {
        <div class="career-cards">
            <CareerCard
                title="Airline Pilot"
                description="Fly for major carriers like Delta, United, Southwest. Starting salaries $90K+, senior captains earn $400K+. High demand with pilot shortage expected through 2030s."
                timeline="Timeline: 18-24 months to airlines"
                image={Some("https://pub-b9b491aee0b94c2c8e6c5d1dde4848db.r2.dev/public/images/aircraft/Boeing%20787%20Dreamliner.png")}
                features={AIRLINE_FEATURES}
            />
            <CareerCard
                title="Corporate Pilot"
                description="Fly private jets for businesses and executives. Better work-life balance, home most nights. Salaries $75K-$200K+ depending on aircraft type."
                timeline="Timeline: 12-18 months to entry positions"
                image={Some("https://pub-b9b491aee0b94c2c8e6c5d1dde4848db.r2.dev/public/images/aircraft/Gulfstream%20G700.avif")}
                features={CORPORATE_FEATURES}
            />
            <CareerCard
                title="Military Pilot"
                description="Serve your country flying fighters, transports, or helicopters. Full benefits, retirement, and pathway to airlines afterward. Private pilot license gives you a competitive edge."
                timeline="Timeline: Start with PPL, then OCS/Academy"
                image={Some("https://pub-b9b491aee0b94c2c8e6c5d1dde4848db.r2.dev/public/images/aircraft/F22%20Raptor.avif")}
                features={MILITARY_FEATURES}
            />

            <style>
                {r#"
                .career-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem;
                }
                .career-card {
                    position: sticky;
                    top: 2rem;
                    height: 502px;
                    background: #fff;
                    border-radius: 32px;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.05);
                    overflow: hidden;
                    padding: 1rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    transform: scale(0.9);
                    transition: box-shadow 0.3s ease;
                }
                .career-card:hover {
                    box-shadow: 0 8px 40px rgba(0, 0, 0, 0.08);
                }
                .career-card-media {
                    border-radius: 1.2rem;
                    overflow: hidden;
                }
                .career-card-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .career-card-placeholder {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    background: linear-gradient(135deg, #6366f1, #9333ea);
                }
                .career-card-body {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    padding: 0.5rem 0;
                }
                .career-card h3 {
                    font-size: 32px;
                    font-weight: 500;
                    color: #1f2937;
                    margin: 0 0 1rem;
                }
                .career-card .description {
                    color: #4b5563;
                    line-height: 1.6;
                }
                .career-card .features {
                    list-style: none;
                    padding: 0;
                }
                .career-card .features li {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                    color: #374151;
                }
                @media (max-width: 768px) {
                    .career-card {
                        height: auto;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                        top: 1.25rem;
                    }
                    .career-card-media {
                        height: 200px;
                    }
                    .career-card h3 {
                        font-size: 24px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
