use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::carousel::{CarouselCommand, CarouselState, RotationCarousel};
use crate::config::{CAROUSEL_VISIBLE_THRESHOLD, ROTATION_PERIOD_MS, SELECTION_COOLDOWN_MS};
use crate::viewport::hooks::use_in_view;

struct Review {
    text: &'static str,
    author: &'static str,
}

const REVIEWS: &[Review] = &[
    Review {
        text: "I did a Discovery Flight with Cole Barton from Centerline Aviation. He made sure I understood each part of the plane... They let me do all of the flying with assistance. Fantastic discovery flight and cheaper than most places I've seen. 5 stars!!!",
        author: "Jordan London, Discovery Flight",
    },
    Review {
        text: "Thank You so much for the memorable experience today! Had a discovery flight and it far exceeded our expectations!",
        author: "Ken Martin, Discovery Flight",
    },
    Review {
        text: "I've had 2 different instructors at Centerline, both have been awesome. The planes are in really good shape and Spanish Fork airport is a great place to learn at. Would recommend.",
        author: "Samuel Fleming, Student Pilot",
    },
    Review {
        text: "Good safety record and excellent pass rate.",
        author: "Nicholas Smout, Pilot",
    },
];

/// "Sarah Miller, Lawyer" -> "SM"; a single name gives its first two letters.
pub fn initials(author: &str) -> String {
    let name = author.split(',').next().unwrap_or_default().trim();
    let parts: Vec<&str> = name.split_whitespace().collect();
    let letters: String = match parts.as_slice() {
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
        _ => name.chars().take(2).collect(),
    };
    letters.to_uppercase()
}

#[derive(Default)]
struct CarouselTimers {
    rotation: Option<Interval>,
    resume: Option<Timeout>,
}

/// Executes the commands the carousel state machine hands back, owning the
/// gloo timers so that dropping them cancels the callbacks.
#[derive(Clone)]
struct CarouselDriver {
    machine: Rc<RefCell<RotationCarousel>>,
    timers: Rc<RefCell<CarouselTimers>>,
    redraw: Callback<()>,
}

impl CarouselDriver {
    fn dispatch(&self, transition: impl FnOnce(&mut RotationCarousel) -> CarouselCommand) {
        let command = transition(&mut self.machine.borrow_mut());
        self.run(command);
        self.redraw.emit(());
    }

    fn run(&self, command: CarouselCommand) {
        let mut timers = self.timers.borrow_mut();
        match command {
            CarouselCommand::Start => {
                timers.resume = None;
                let driver = self.clone();
                timers.rotation = Some(Interval::new(ROTATION_PERIOD_MS, move || {
                    driver.machine.borrow_mut().tick();
                    driver.redraw.emit(());
                }));
            }
            CarouselCommand::Stop => {
                timers.rotation = None;
                timers.resume = None;
            }
            CarouselCommand::ScheduleResume { generation, after_ms } => {
                timers.rotation = None;
                let driver = self.clone();
                timers.resume = Some(Timeout::new(after_ms, move || {
                    driver.dispatch(|machine| machine.cooldown_elapsed(generation));
                }));
            }
            CarouselCommand::Nothing => {}
        }
    }

    fn shutdown(&self) {
        let mut timers = self.timers.borrow_mut();
        timers.rotation = None;
        timers.resume = None;
    }
}

#[function_component(ReviewCarousel)]
pub fn review_carousel() -> Html {
    let section_ref = use_node_ref();
    let in_view = use_in_view(section_ref.clone(), CAROUSEL_VISIBLE_THRESHOLD);
    let redraw = use_force_update();

    let machine = use_mut_ref(|| RotationCarousel::new(REVIEWS.len(), SELECTION_COOLDOWN_MS));
    let timers = use_mut_ref(CarouselTimers::default);
    let driver = CarouselDriver {
        machine: machine.clone(),
        timers,
        redraw: Callback::from(move |_| redraw.force_update()),
    };

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |in_view| {
                driver.dispatch(|machine| machine.set_visible(*in_view));
                || ()
            },
            in_view,
        );
    }

    {
        let driver = driver.clone();
        use_effect_with_deps(move |_| move || driver.shutdown(), ());
    }

    let on_enter = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.dispatch(RotationCarousel::pointer_enter))
    };
    let on_leave = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.dispatch(RotationCarousel::pointer_leave))
    };

    let current = machine.borrow().index();
    let paused = machine.borrow().state() == CarouselState::Paused;
    let review = &REVIEWS[current];

    html! {
        <div
            ref={section_ref}
            class={classes!("review-carousel", paused.then(|| "paused"))}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <div class="review-stars">
                { (0..5).map(|_| html! { <span class="star">{"★"}</span> }).collect::<Html>() }
            </div>
            <p class="review-text">{format!("\"{}\"", review.text)}</p>
            <div class="review-author">{review.author}</div>
            <div class="review-profiles">
                { REVIEWS.iter().enumerate().map(|(index, review)| {
                    let select = {
                        let driver = driver.clone();
                        Callback::from(move |_: MouseEvent| {
                            driver.dispatch(|machine| machine.select_index(index))
                        })
                    };
                    html! {
                        <div
                            class={classes!("review-profile", (index == current).then(|| "active"))}
                            onclick={select}
                        >
                            {initials(review.author)}
                        </div>
                    }
                }).collect::<Html>() }
            </div>

            <style>
                {r#"
                .review-carousel {
                    max-width: 800px;
                    margin: 0 auto;
                    text-align: center;
                }
                .review-stars {
                    margin-bottom: 2rem;
                }
                .review-stars .star {
                    color: #facc15;
                    font-size: 1.5rem;
                    margin: 0 0.125rem;
                }
                .review-text {
                    font-size: 1.5rem;
                    line-height: 1.6;
                    color: #1f2937;
                    min-height: 80px;
                    margin-bottom: 2rem;
                    transition: opacity 0.5s ease;
                }
                .review-author {
                    color: #1f2937;
                    font-weight: 500;
                    margin-bottom: 2rem;
                }
                .review-profiles {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                }
                .review-profile {
                    width: 60px;
                    height: 60px;
                    border-radius: 50%;
                    background: #4b5563;
                    color: #fff;
                    font-weight: 600;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .review-carousel.paused .review-profile.active {
                    box-shadow: 0 0 0 3px rgba(250, 204, 21, 0.6);
                }
                .review-profile:hover {
                    transform: scale(1.05);
                }
                .review-profile.active {
                    width: 66px;
                    height: 66px;
                    background: #1f2937;
                    font-size: 1.125rem;
                    transform: scale(1.1);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_use_first_and_last_name() {
        assert_eq!(initials("Jordan London, Discovery Flight"), "JL");
        assert_eq!(initials("Mary Ann Smith"), "MS");
    }

    #[test]
    fn single_name_uses_two_letters() {
        assert_eq!(initials("Cher, Singer"), "CH");
        assert_eq!(initials(""), "");
    }
}
