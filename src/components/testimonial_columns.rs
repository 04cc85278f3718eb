use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    text: &'static str,
    name: &'static str,
    role: &'static str,
    photo: Option<&'static str>,
}

const FLIGHT_TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Best decision I ever made. Cole walked me through everything from ground school to checkride prep. Now I'm building hours as a CFI here while working my IT job in Provo. The flexible schedule made it all possible.",
        name: "Jake Morrison",
        role: "CFI, Former Software Engineer",
        photo: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face"),
    },
    Testimonial {
        text: "Started training at 52 thinking I was too old. The instructors never made me feel that way. Passed my checkride first try in 9 months while working full time in Salt Lake. Spanish Fork airport is perfect for training.",
        name: "David Chen",
        role: "Private Pilot, Accountant",
        photo: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face"),
    },
    Testimonial {
        text: "The hangared fleet is clutch during Utah winters. I trained December through March with zero cancellations while my buddy at another school lost 3 weeks to weather. That alone made the difference.",
        name: "Tyler Jensen",
        role: "Commercial Pilot",
        photo: Some("https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop&crop=face"),
    },
    Testimonial {
        text: "As a mom of three in Lehi, I needed weekend and evening slots. Centerline made it work. Flying Saturdays and Tuesday evenings, I got my PPL in 8 months without sacrificing family time. Game changer.",
        name: "Sarah Thompson",
        role: "Private Pilot, Business Owner",
        photo: Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face"),
    },
    Testimonial {
        text: "Went from discovery flight to SkyWest FO in 20 months. The instructors know the exact standards airlines look for. Jack prepped me so well, my sim eval was easier than expected. Worth every penny.",
        name: "Marcus Rodriguez",
        role: "SkyWest First Officer",
        photo: Some("https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=100&h=100&fit=crop&crop=face"),
    },
    Testimonial {
        text: "The DA40 with G1000 is perfect for instrument training. Way more modern than the old steam gauge planes at other schools. My transition to airline glass cockpits was seamless.",
        name: "Emily Martinez",
        role: "Instrument Rated, BYU Student",
        photo: Some("https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop&crop=face"),
    },
    Testimonial {
        text: "Pay-as-you-go pricing saved me. I didn't have to take out a huge loan upfront like at Part 141 schools. Paid for each lesson as I went while working construction. No debt, just my license.",
        name: "Brandon Wright",
        role: "Private Pilot, Contractor",
        photo: Some("https://images.unsplash.com/photo-1519345182560-3f2917c472ef?w=100&h=100&fit=crop&crop=face"),
    },
    Testimonial {
        text: "Living in Spanish Fork and training here was perfect. 5 minutes from my house. The instructors are locals who actually care about your success, not just churning through students.",
        name: "Jessica Park",
        role: "CFI, Mapleton Resident",
        photo: Some("https://images.unsplash.com/photo-1517841905240-472988babdf9?w=100&h=100&fit=crop&crop=face"),
    },
    Testimonial {
        text: "Got my Private, Instrument, and Commercial here. Same instructors the whole way through, they knew exactly where I needed work. Now I'm instructing here and giving back. This place is family.",
        name: "Ryan Nelson",
        role: "CFI/CFII",
        photo: Some("https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?w=100&h=100&fit=crop&crop=face"),
    },
];

const REPAIR_TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "R&R Solar fixed our inverter issue in just one visit. Professional, fast, and reasonably priced. Our system is back to full production.",
        name: "Sarah M.",
        role: "Salt Lake City, UT",
        photo: None,
    },
    Testimonial {
        text: "Had a roof leak after our original installer went out of business. R&R Solar came out quickly and fixed everything properly. No more leaks!",
        name: "Mike J.",
        role: "Provo, UT",
        photo: None,
    },
    Testimonial {
        text: "Excellent service! They diagnosed our monitoring issue and had our app working again the same day. Highly recommend for any solar repairs.",
        name: "Lisa C.",
        role: "Ogden, UT",
        photo: None,
    },
    Testimonial {
        text: "Our solar system stopped producing power. R&R Solar identified the problem with our optimizer and replaced it within 48 hours. Great work!",
        name: "David R.",
        role: "Park City, UT",
        photo: None,
    },
    Testimonial {
        text: "We needed our panels removed for a roof replacement. They handled everything perfectly and coordinated with our roofer. System works better than ever!",
        name: "Jennifer K.",
        role: "Sandy, UT",
        photo: None,
    },
    Testimonial {
        text: "Fast response for our critter damage issue. They sealed everything up and installed guards to prevent future problems. Very thorough!",
        name: "Tom H.",
        role: "Draper, UT",
        photo: None,
    },
    Testimonial {
        text: "The diagnostic was detailed and transparent. They explained everything clearly and the repair cost was exactly as quoted. No surprises!",
        name: "Amanda S.",
        role: "Lehi, UT",
        photo: None,
    },
    Testimonial {
        text: "Our SolarEdge inverter was showing errors constantly. R&R Solar came out same week, diagnosed the issue, and had us back online quickly.",
        name: "Robert M.",
        role: "American Fork, UT",
        photo: None,
    },
    Testimonial {
        text: "They fixed wiring issues left by our original installer. Professional, knowledgeable, and they actually care about quality work. Highly recommended!",
        name: "Emily W.",
        role: "Orem, UT",
        photo: None,
    },
];

/// Seconds per loop for each column, left to right.
const FLIGHT_DURATIONS_S: &[u32] = &[25, 30, 27];
const REPAIR_DURATIONS_S: &[u32] = &[15, 19, 17];

/// "Sarah M." -> "SM": the first letter of every word.
pub fn name_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Splits `items` into `columns` consecutive runs of near-equal length.
pub fn split_columns<T>(items: &[T], columns: usize) -> Vec<&[T]> {
    if items.is_empty() || columns == 0 {
        return Vec::new();
    }
    let per_column = items.len().div_ceil(columns);
    items.chunks(per_column).collect()
}

/// Narrow screens show one column, medium two, wide three.
fn column_class(index: usize) -> Option<&'static str> {
    match index {
        0 => None,
        1 => Some("hide-below-md"),
        _ => Some("hide-below-lg"),
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = props.testimonial;
    html! {
        <div class="testimonial-card">
            <div class="testimonial-text">{t.text}</div>
            <div class="testimonial-author">
                {
                    match t.photo {
                        Some(src) => html! {
                            <img class="testimonial-avatar" width="40" height="40" src={src} alt={t.name} />
                        },
                        None => html! {
                            <div class="testimonial-avatar initials">{name_initials(t.name)}</div>
                        },
                    }
                }
                <div>
                    <div class="testimonial-name">{t.name}</div>
                    <div class="testimonial-role">{t.role}</div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialWallProps {
    testimonials: &'static [Testimonial],
    durations: &'static [u32],
    title: &'static str,
    subtitle: &'static str,
    #[prop_or_default]
    badge: Option<&'static str>,
}

/// Columns that scroll upward forever. Each column is rendered twice so a
/// -50% translate lands exactly where it started.
#[function_component(TestimonialWall)]
fn testimonial_wall(props: &TestimonialWallProps) -> Html {
    let columns = split_columns(props.testimonials, props.durations.len());

    html! {
        <section class="testimonial-wall">
            <div class="testimonial-heading">
                if let Some(badge) = props.badge {
                    <div class="testimonial-badge">{badge}</div>
                }
                <h2>{props.title}</h2>
                <p>{props.subtitle}</p>
            </div>
            <div class="testimonial-columns">
                { columns.iter().zip(props.durations).enumerate().map(|(index, (column, duration))| html! {
                    <div class={classes!("testimonial-column", column_class(index))}>
                        <div class="testimonial-track" style={format!("animation-duration: {}s", duration)}>
                            { (0..2).flat_map(|_| column.iter()).map(|t| html! {
                                <TestimonialCard testimonial={*t} />
                            }).collect::<Html>() }
                        </div>
                    </div>
                }).collect::<Html>() }
            </div>

            <style>
                {r#"
                .testimonial-wall {
                    position: relative;
                    padding: 2.5rem 0;
                }
                .testimonial-heading {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    max-width: 700px;
                    margin: 0 auto;
                    text-align: center;
                }
                .testimonial-badge {
                    border: 1px solid #3b82f6;
                    color: #2563eb;
                    padding: 0.25rem 1rem;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 1.25rem;
                }
                .testimonial-heading h2 {
                    font-size: 2.5rem;
                    font-weight: 600;
                    color: #1f2937;
                    margin-bottom: 1.25rem;
                }
                .testimonial-heading p {
                    color: #4b5563;
                }
                .testimonial-columns {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 3rem;
                    max-height: 740px;
                    overflow: hidden;
                    mask-image: linear-gradient(to bottom, transparent, black 25%, black 75%, transparent);
                }
                .testimonial-track {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding-bottom: 1.5rem;
                    animation: testimonialScroll linear infinite;
                }
                .testimonial-card {
                    max-width: 20rem;
                    width: 100%;
                    padding: 2rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 1.5rem;
                    background: #fff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s ease;
                }
                .testimonial-card:hover {
                    border-color: #93c5fd;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .testimonial-text {
                    color: #374151;
                    line-height: 1.6;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 1.25rem;
                }
                .testimonial-avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    flex-shrink: 0;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .testimonial-avatar.initials {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #498dcb;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .testimonial-name {
                    font-weight: 600;
                    color: #111827;
                }
                .testimonial-role {
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                @keyframes testimonialScroll {
                    to { transform: translateY(-50%); }
                }
                @media (max-width: 1023px) {
                    .testimonial-column.hide-below-lg {
                        display: none;
                    }
                }
                @media (max-width: 767px) {
                    .testimonial-column.hide-below-md {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(FlightTestimonials)]
pub fn flight_testimonials() -> Html {
    html! {
        <TestimonialWall
            testimonials={FLIGHT_TESTIMONIALS}
            durations={FLIGHT_DURATIONS_S}
            badge={Some("Testimonials")}
            title="What our students say"
            subtitle="Real stories from Utah pilots who trained with us."
        />
    }
}

#[function_component(RepairTestimonials)]
pub fn repair_testimonials() -> Html {
    html! {
        <TestimonialWall
            testimonials={REPAIR_TESTIMONIALS}
            durations={REPAIR_DURATIONS_S}
            title="What Our Customers Say"
            subtitle="Don't just take our word for it. Hear from satisfied homeowners across Utah."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_every_word() {
        assert_eq!(name_initials("Sarah M."), "SM");
        assert_eq!(name_initials("Ryan Nelson"), "RN");
        assert_eq!(name_initials("  "), "");
    }

    #[test]
    fn nine_testimonials_make_three_even_columns() {
        let columns = split_columns(REPAIR_TESTIMONIALS, REPAIR_DURATIONS_S.len());
        assert_eq!(columns.iter().map(|c| c.len()).collect::<Vec<_>>(), vec![3, 3, 3]);
        assert_eq!(columns[1][0].name, "David R.");
        assert_eq!(columns[2][2].name, "Emily W.");
    }

    #[test]
    fn uneven_split_keeps_order_and_every_item() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        let columns = split_columns(&items, 3);
        assert_eq!(columns, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7][..]]);
        assert!(split_columns(&items, 0).is_empty());
        assert!(split_columns::<u8>(&[], 3).is_empty());
    }

    #[test]
    fn each_site_has_a_duration_per_column() {
        assert_eq!(split_columns(FLIGHT_TESTIMONIALS, FLIGHT_DURATIONS_S.len()).len(), FLIGHT_DURATIONS_S.len());
        assert!(FLIGHT_TESTIMONIALS.iter().all(|t| t.photo.is_some()));
        assert!(REPAIR_TESTIMONIALS.iter().all(|t| t.photo.is_none()));
    }
}
