//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time and RNG seeding
//! - Storage (LocalStorage on web, a JSON file natively)
//! - DOM event wiring for the two pages (web only)

pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Current time as an ISO-8601 UTC string
#[cfg(target_arch = "wasm32")]
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Current time as an ISO-8601 UTC string
#[cfg(not(target_arch = "wasm32"))]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Seed for the CPU opponent's RNG
#[cfg(target_arch = "wasm32")]
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

/// Seed for the CPU opponent's RNG
#[cfg(not(target_arch = "wasm32"))]
pub fn random_seed() -> u64 {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .map(|n| n as u64)
        .unwrap_or(0x5eed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso_shape() {
        let now = now_iso();
        assert_eq!(now.len(), 20);
        assert!(now.ends_with('Z'));
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[10..11], "T");
    }

    #[test]
    fn test_now_iso_parses_as_utc() {
        let parsed = chrono::DateTime::parse_from_rfc3339(&now_iso()).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }
}
