use chrono::Utc;
use log::debug;
use web_sys::{Event, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::{FLIGHT_HEADER_SCROLLED_PX, REPAIR_HEADER_SCROLLED_PX};
use crate::header_state::HideOnScroll;
use crate::viewport::geometry::Viewport;
use crate::viewport::hooks::{use_viewport_activation, RegionSource};
use crate::viewport::tracker::FirstIntersecting;

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scrolls to the element with `id`. Returns `false` if it isn't on
/// the page.
fn scroll_to_section(id: &str) -> bool {
    let Some(target) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        debug!("No section #{} on this page", id);
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[hook]
fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state(|| scroll_y() > threshold);
    {
        let scrolled = scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let past = scroll_y() > threshold;
            if *scrolled != past {
                scrolled.set(past);
            }
        });
    }
    *scrolled
}

const FLIGHT_SECTIONS: &[&str] = &["programs", "fleet", "discovery", "why-us", "faq"];

fn section_label(id: &str) -> &'static str {
    match id {
        "programs" => "Programs",
        "fleet" => "Fleet",
        "discovery" => "Discovery",
        "why-us" => "Why Us",
        "faq" => "FAQs",
        _ => "",
    }
}

/// Fixed header for the flight-school page. The nav item of the section
/// crossing the middle of the viewport is highlighted.
#[function_component(FlightHeader)]
pub fn flight_header() -> Html {
    let scrolled = use_scrolled_past(FLIGHT_HEADER_SCROLLED_PX);
    let menu_open = use_state(|| false);
    let sections = use_viewport_activation(
        FLIGHT_SECTIONS,
        RegionSource::ElementIds,
        FirstIntersecting::default(),
        None,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <header class={classes!("site-header", scrolled.then(|| "scrolled"))}>
            <nav class="site-nav">
                <div class="nav-left">
                    <img
                        class="nav-logo"
                        src="https://cdn.prod.website-files.com/68e55206dd9a99d26d08a73b/68e7203ec72ce71aa5a7dd83_white%20runway%20trans.png"
                        alt="Centerline Flight Training"
                    />
                    <div class="nav-divider"></div>
                    <ul class={classes!("nav-links", (*menu_open).then(|| "open"))}>
                        { FLIGHT_SECTIONS.iter().map(|id| {
                            let onclick = {
                                let menu_open = menu_open.clone();
                                let activate = sections.activate.clone();
                                let id = *id;
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    if scroll_to_section(id) {
                                        activate.emit(id.to_string());
                                        menu_open.set(false);
                                    }
                                })
                            };
                            html! {
                                <li>
                                    <a
                                        href={format!("#{}", id)}
                                        class={classes!("nav-link", sections.is_active(id).then(|| "active"))}
                                        {onclick}
                                    >
                                        {section_label(id)}
                                    </a>
                                </li>
                            }
                        }).collect::<Html>() }
                    </ul>
                </div>
                <div class="nav-right">
                    <a href="tel:+18014770418" class="secondary-button">{"(801) 477-0418"}</a>
                    <button class="burger-menu" onclick={toggle_menu}>{"☰"}</button>
                </div>
            </nav>
            <style>{HEADER_STYLE}</style>
        </header>
    }
}

const REPAIR_SECTIONS: &[(&str, &str)] = &[
    ("programs", "How It Works"),
    ("why-us", "Why Us"),
    ("faq", "FAQs"),
];

/// Solar-repair header: turns white once scrolled, with a drawer on mobile.
#[function_component(RepairHeader)]
pub fn repair_header() -> Html {
    let scrolled = use_scrolled_past(REPAIR_HEADER_SCROLLED_PX);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if scroll_to_section(id) {
                menu_open.set(false);
            }
        });
        html! {
            <li><a href={format!("#{}", id)} class="nav-link" {onclick}>{label}</a></li>
        }
    };

    let dark = scrolled || *menu_open;

    html! {
        <header class={classes!("site-header", "repair", scrolled.then(|| "scrolled"))}>
            <nav class="site-nav">
                <div class="nav-left">
                    <img
                        class={classes!("nav-logo", (!scrolled).then(|| "invert"))}
                        src="/images/logo/rrlogo.png"
                        alt="R&R Solar"
                    />
                    <div class="nav-divider"></div>
                    <ul class="nav-links desktop-only">
                        { REPAIR_SECTIONS.iter().map(|&(id, label)| nav_link(id, label)).collect::<Html>() }
                    </ul>
                </div>
                <div class="nav-right">
                    <a href="tel:+1-XXX-XXX-XXXX" class="secondary-button desktop-only">{"Call Now"}</a>
                    <button
                        class={classes!("burger-bars", dark.then(|| "dark"), (*menu_open).then(|| "open"))}
                        onclick={toggle_menu}
                    >
                        <div class="bar top"></div>
                        <div class="bar bottom"></div>
                    </button>
                </div>
            </nav>
            <div class={classes!("mobile-drawer", (*menu_open).then(|| "open"))}>
                <ul>
                    { REPAIR_SECTIONS.iter().map(|&(id, label)| nav_link(id, label)).collect::<Html>() }
                    <li><a href="tel:+1-XXX-XXX-XXXX" class="call-button">{"Call Now"}</a></li>
                    <li>
                        <a
                            href="#cta-band"
                            class="cta-button"
                            onclick={nav_click_closing(menu_open.clone(), "cta-band")}
                        >
                            {"Request Repair"}
                        </a>
                    </li>
                </ul>
            </div>
            <style>{HEADER_STYLE}</style>
        </header>
    }
}

fn nav_click_closing(menu_open: UseStateHandle<bool>, id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if scroll_to_section(id) {
            menu_open.set(false);
        }
    })
}

const CONTACT_LINKS: &[(&str, &str)] = &[("/", "Home"), ("#map-section", "Find Us")];

/// Element id an in-page `#anchor` link points at; `None` for page links.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn contact_links(menu_open: &UseStateHandle<bool>) -> Html {
    CONTACT_LINKS
        .iter()
        .map(|&(href, label)| {
            let onclick = anchor_target(href).map(|id| nav_click_closing(menu_open.clone(), id));
            html! {
                <li><a {href} class="nav-link" {onclick}>{label}</a></li>
            }
        })
        .collect()
}

/// Contact-page header. On phones it slides out of the way while reading
/// down the page and comes back on a quick flick upwards.
#[function_component(ContactHeader)]
pub fn contact_header() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);
    let is_mobile = use_state(|| Viewport::current().map(|v| v.is_mobile()).unwrap_or(false));
    let hide_on_scroll = use_mut_ref(HideOnScroll::default);
    let redraw = use_force_update();

    {
        let is_mobile = is_mobile.clone();
        use_event_with_window("resize", move |_: Event| {
            let mobile = Viewport::current().map(|v| v.is_mobile()).unwrap_or(false);
            if *is_mobile != mobile {
                is_mobile.set(mobile);
            }
        });
    }

    {
        let scrolled = scrolled.clone();
        let hide_on_scroll = hide_on_scroll.clone();
        let is_mobile = *is_mobile;
        use_event_with_window("scroll", move |_: Event| {
            let y = scroll_y();
            let past = y > REPAIR_HEADER_SCROLLED_PX;
            if *scrolled != past {
                scrolled.set(past);
            }
            let now = Utc::now().timestamp_millis() as f64;
            let changed = {
                let mut header = hide_on_scroll.borrow_mut();
                let was_visible = header.is_visible();
                header.on_scroll(y, now, is_mobile) != was_visible
            };
            if changed {
                redraw.force_update();
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let visible = hide_on_scroll.borrow().is_visible();
    let invert_logo = *menu_open || (*scrolled && *is_mobile);
    let dark = *scrolled || *menu_open;

    html! {
        <header class={classes!(
            "site-header",
            "contact",
            (*scrolled).then(|| "scrolled"),
            (!visible).then(|| "hidden"),
        )}>
            <nav class="site-nav">
                <div class="nav-left">
                    <a href="/">
                        <img
                            class={classes!("nav-logo", invert_logo.then(|| "invert"))}
                            src="/images/logo/Centerline-Logo.svg"
                            alt="Centerline Flight Training"
                        />
                    </a>
                    <div class="nav-divider desktop-only"></div>
                    <ul class="nav-links desktop-only">
                        { contact_links(&menu_open) }
                    </ul>
                </div>
                <div class="nav-right">
                    <a href="tel:+18014770418" class="secondary-button desktop-only">{"(801) 477-0418"}</a>
                    <button
                        class={classes!("burger-bars", dark.then(|| "dark"), (*menu_open).then(|| "open"))}
                        onclick={toggle_menu}
                    >
                        <div class="bar top"></div>
                        <div class="bar bottom"></div>
                    </button>
                </div>
            </nav>
            <div class={classes!(
                "mobile-drawer",
                (*menu_open).then(|| "open"),
                (!visible).then(|| "hidden"),
            )}>
                <ul>
                    { contact_links(&menu_open) }
                    <li><a href="tel:+18014770418" class="call-button">{"(801) 477-0418"}</a></li>
                </ul>
            </div>
            <style>{HEADER_STYLE}</style>
        </header>
    }
}

const HEADER_STYLE: &str = r#"
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 1000;
    padding: 1rem 0;
    transition: all 0.3s ease;
}
.site-header.hidden {
    transform: translateY(-100%);
}
.site-nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem;
}
.nav-left, .nav-right {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.nav-logo {
    height: 5rem;
    width: auto;
    transition: filter 0.3s ease;
}
.nav-logo.invert {
    filter: invert(1);
}
.nav-divider {
    width: 3px;
    height: 1.5rem;
    background: rgba(255, 255, 255, 0.3);
}
.nav-links {
    display: flex;
    list-style: none;
    gap: 2rem;
}
.nav-link {
    color: #fff;
    font-weight: 500;
    text-decoration: none;
    transition: color 0.2s ease;
}
.nav-link:hover, .nav-link.active {
    color: #facc15;
}
.site-header.repair .nav-link:hover {
    color: #498dcb;
}
.burger-menu, .burger-bars {
    display: none;
    background: none;
    border: none;
    color: #fff;
    font-size: 1.5rem;
    cursor: pointer;
}
.burger-bars {
    position: relative;
    width: 2.5rem;
    height: 2.5rem;
}
.burger-bars .bar {
    position: absolute;
    left: 0;
    height: 2px;
    border-radius: 9999px;
    background: #fff;
    transition: all 0.5s ease;
}
.burger-bars.dark .bar {
    background: #000;
}
.burger-bars .bar.top {
    width: 1.5rem;
    top: calc(50% - 3.3px);
}
.burger-bars .bar.bottom {
    width: 1rem;
    top: calc(50% + 3.3px);
}
.burger-bars.open .bar.top {
    transform: rotate(90deg);
    top: 50%;
}
.burger-bars.open .bar.bottom {
    width: 1.5rem;
    top: 50%;
}
.mobile-drawer {
    display: none;
}
@media (max-width: 768px) {
    .site-header.scrolled {
        background: #fff;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }
    .desktop-only {
        display: none !important;
    }
    .nav-links {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        background: #111827;
        padding: 1rem;
    }
    .nav-links.open {
        display: flex;
    }
    .burger-menu, .burger-bars {
        display: block;
    }
    .mobile-drawer {
        display: block;
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        background: #fff;
        overflow: hidden;
        max-height: 0;
        opacity: 0;
        transition: all 0.5s ease-in-out;
        z-index: 999;
    }
    .mobile-drawer.open {
        max-height: 800px;
        opacity: 1;
    }
    .mobile-drawer.hidden {
        transform: translateY(-100%);
    }
    .mobile-drawer .call-button {
        display: inline-flex;
        padding: 1rem 3rem;
        border-radius: 9999px;
        background: #111827;
        color: #fff;
        text-decoration: none;
    }
    .mobile-drawer ul {
        list-style: none;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
        margin-top: 88px;
        padding: 1.5rem 0 1rem;
    }
    .mobile-drawer .nav-link {
        color: #111827;
        font-weight: 300;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hash_links_scroll_in_page() {
        assert_eq!(anchor_target("#map-section"), Some("map-section"));
        assert_eq!(anchor_target("/"), None);
        assert_eq!(anchor_target("#"), None);
    }

    #[test]
    fn contact_nav_offers_home_and_map() {
        let targets: Vec<_> = CONTACT_LINKS.iter().map(|(href, _)| anchor_target(href)).collect();
        assert_eq!(targets, vec![None, Some("map-section")]);
    }
}
