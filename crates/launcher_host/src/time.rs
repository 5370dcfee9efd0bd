//! Wall-clock helpers shared by the runtime and its adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Milliseconds elapsed between `started_ms` and `now_ms`, clamped at zero for clock skew.
pub fn elapsed_ms_since(started_ms: u64, now_ms: u64) -> u64 {
    now_ms.saturating_sub(started_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_never_underflows() {
        assert_eq!(elapsed_ms_since(1_000, 1_450), 450);
        assert_eq!(elapsed_ms_since(2_000, 1_000), 0);
    }
}
