use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="faq-icon">{"▼"}</span>
            </button>
            <div class="faq-answer">
                {props.answer}
            </div>
        </div>
    }
}

const FAQS: &[(&str, &str)] = &[
    (
        "How long does it take to become an airline pilot?",
        "From zero experience to airline-ready: 18-24 months training full-time, or 2-3 years part-time while working. Breakdown: Private Pilot (3-6 months) → Instrument (2-4 months) → Commercial (4-8 months) → CFI (2-3 months) → Build hours to 1,500 (8-12 months instructing). Our flexible Part 61 program lets you control the pace.",
    ),
    (
        "Can I really train while working full-time?",
        "Yes! About half our students work full-time jobs. We offer early morning (7am), evening (after 5pm), and weekend availability. Most part-time students fly 2-3 times per week and complete their private pilot license in 6-9 months. Our pay-as-you-go model means you're never locked into a schedule.",
    ),
    (
        "What's the total cost from zero to airline pilot?",
        "Approximately $60,000-$80,000 total: Private Pilot ($8-12K) + Instrument ($7-10K) + Commercial ($10-15K) + Multi-Engine ($3-5K) + CFI ($4-6K) + Time Building ($30-40K). We offer pay-as-you-go and financing options, no large upfront payment required. Many students offset costs by becoming instructors and getting paid to build hours.",
    ),
    (
        "What's the difference between Part 61 and Part 141 training?",
        "Part 141 schools follow rigid FAA-approved curriculums with set schedules, like traditional college. Part 61 (us) offers flexible, personalized training where YOU set the pace. Same FAA license and requirements, but Part 61 costs less (no facility overhead) and works around YOUR schedule.",
    ),
    (
        "Why does it matter that your planes are hangared?",
        "Utah winters = snow, ice, and freezing temps. Planes parked outside need de-icing and extensive pre-heating, causing cancellations and delays. Our 100% hangared fleet means no frost removal delays, engines that start reliably in cold weather, protected avionics, and year-round training without weather-related cancellations.",
    ),
    (
        "Do you offer financing or payment plans?",
        "Yes! Pay-as-you-go means you only pay for flights as you take them, and third-party financing is available through approved lenders. No large upfront payment required: start training for the cost of your discovery flight.",
    ),
    (
        "How do I get to your hangar at Spanish Fork Airport?",
        "We're located at Hangar #122, Spanish Fork-Springville Airport (SPK). From I-15: Take Exit 257, head east on US-6 for 2 miles, turn right on Airport Road. Address: 2050 N 300 W, Spanish Fork, UT 84660. Text (801) 477-0418 if you can't find us!",
    ),
    (
        "What's included in aircraft rental rates?",
        "Aircraft rates ($165/hr DA20, $265/hr DA40) include fuel, insurance, maintenance, and all operating costs. Instructor time is separate at $65/hr. Our aircraft are exclusively for training, meaning better availability for our students.",
    ),
];

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-list">
            { FAQS.iter().map(|(question, answer)| html! {
                <FaqItem key={*question} question={*question} answer={*answer} />
            }).collect::<Html>() }

            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }
                .faq-item {
                    background: #fff;
                    margin-bottom: 1rem;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.05);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: #fff;
                    border: none;
                    text-align: left;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #1f2937;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .faq-question:hover {
                    background: #f9fafb;
                }
                .faq-icon {
                    transition: transform 0.3s ease;
                }
                .faq-item.open .faq-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    color: #4b5563;
                    padding: 0 1.5rem;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
