use log::{debug, error, info, Level};
use web_sys::{Document, Element};
use yew::html::BaseComponent;

mod config;
mod carousel;
mod counter;
mod header_state;
mod contact {
    pub mod phone;
    pub mod submission;
}
mod viewport {
    pub mod geometry;
    pub mod tracker;
    pub mod frame;
    pub mod scale;
    pub mod hooks;
}
mod components {
    pub mod site_header;
    pub mod hero;
    pub mod aircraft_showcase;
    pub mod career_cards;
    pub mod review_carousel;
    pub mod stats_counter;
    pub mod testimonial_columns;
    pub mod training_pathway;
    pub mod feature_steps;
    pub mod faq;
    pub mod contact_form;
    pub mod video_player;
}

use components::{
    aircraft_showcase::AircraftShowcase,
    career_cards::CareerCards,
    contact_form::ContactForm,
    faq::Faq,
    feature_steps::FeatureSteps,
    hero::Hero,
    review_carousel::ReviewCarousel,
    site_header::{ContactHeader, FlightHeader, RepairHeader},
    stats_counter::StatsCounter,
    testimonial_columns::{FlightTestimonials, RepairTestimonials},
    training_pathway::TrainingPathway,
    video_player::{VideoPlayer, VideoPlayerProps},
};

fn mount<C>(document: &Document, id: &str)
where
    C: BaseComponent,
    C::Properties: Default,
{
    match document.get_element_by_id(id) {
        Some(root) => {
            yew::Renderer::<C>::with_root(root).render();
            debug!("Mounted #{}", id);
        }
        None => debug!("No #{} on this page", id),
    }
}

fn video_props(root: &Element) -> VideoPlayerProps {
    let attr = |name: &str| root.get_attribute(name).unwrap_or_default();
    VideoPlayerProps {
        video_src: attr("data-video-src"),
        thumbnail_src: attr("data-thumbnail-src"),
        alt: attr("data-alt"),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        error!("No document to mount into");
        return;
    };

    info!("Mounting page islands");
    mount::<FlightHeader>(&document, "site-header");
    mount::<RepairHeader>(&document, "repair-header");
    mount::<ContactHeader>(&document, "contact-header");
    mount::<Hero>(&document, "hero");
    mount::<AircraftShowcase>(&document, "aircraft-showcase");
    mount::<CareerCards>(&document, "career-cards");
    mount::<ReviewCarousel>(&document, "review-carousel");
    mount::<StatsCounter>(&document, "stats-counter");
    mount::<TrainingPathway>(&document, "training-pathway");
    mount::<FlightTestimonials>(&document, "flight-testimonials");
    mount::<RepairTestimonials>(&document, "repair-testimonials");
    mount::<FeatureSteps>(&document, "feature-steps");
    mount::<Faq>(&document, "faq");
    mount::<ContactForm>(&document, "contact-form");

    match document.get_element_by_id("video-player") {
        Some(root) => {
            let props = video_props(&root);
            yew::Renderer::<VideoPlayer>::with_root_and_props(root, props).render();
        }
        None => debug!("No #video-player on this page"),
    }
}
