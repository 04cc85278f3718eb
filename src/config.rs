#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    "http://localhost:3001/hooks/contact"  // Local mock when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    "https://services.leadconnectorhq.com/hooks/10LCZDnUvwfyH3005w5r/webhook-trigger/4848fb32-c55a-4923-8645-e31688d687a4"
}

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Review carousel
pub const ROTATION_PERIOD_MS: u32 = 4_000;
pub const SELECTION_COOLDOWN_MS: u32 = 4_000;
pub const CAROUSEL_VISIBLE_THRESHOLD: f64 = 0.3;

// Feature steps
pub const FEATURE_AUTOPLAY_MS: u32 = 4_000;
pub const FEATURE_TICK_MS: u32 = 100;

// Stat counters
pub const COUNTER_VISIBLE_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: u32 = 1_200;
pub const COUNTER_TICK_MS: u32 = 16;

// Career cards
pub const CARD_MIN_SCALE: f64 = 0.9;
pub const CARD_MAX_SCALE: f64 = 1.0;

// Headers
pub const FLIGHT_HEADER_SCROLLED_PX: f64 = 100.0;
pub const REPAIR_HEADER_SCROLLED_PX: f64 = 50.0;
pub const HEADER_REVEAL_TOP_PX: f64 = 50.0;
pub const REVEAL_MIN_DISTANCE_PX: f64 = 80.0;
pub const REVEAL_WINDOW_MS: f64 = 150.0;

// Hero parallax speed as a fraction of scroll distance
pub const PARALLAX_SPEED_DESKTOP: f64 = 0.5;
pub const PARALLAX_SPEED_MOBILE: f64 = 0.3;

/// Bots get a fake success after this long; nothing is sent.
pub const HONEYPOT_DELAY_MS: u32 = 1_000;
