//! Durable client-local preferences for the launcher.

use launcher_host::PrefsStore;
use leptos::logging;

use crate::model::ThemeId;

/// Preference key holding the active theme identifier (`default`, `dark`, `pink`, `ocean`).
pub const THEME_PREF_KEY: &str = "launcher.theme.v1";

fn parse_stored_theme(raw: &str) -> Option<ThemeId> {
    // Earlier builds wrote the identifier as a quoted JSON string.
    let raw = raw.trim();
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(raw);
    ThemeId::from_id(unquoted)
}

/// Loads the stored theme, falling back to [`ThemeId::Default`] when the value is absent,
/// unreadable, or not a known preset.
pub async fn load_theme(prefs: &dyn PrefsStore) -> ThemeId {
    match prefs.load_pref(THEME_PREF_KEY).await {
        Ok(Some(raw)) => parse_stored_theme(&raw).unwrap_or_else(|| {
            logging::warn!("unknown stored theme `{raw}`; using default");
            ThemeId::default()
        }),
        Ok(None) => ThemeId::default(),
        Err(err) => {
            logging::warn!("theme load failed: {err}");
            ThemeId::default()
        }
    }
}

/// Writes the identifier of `theme` under [`THEME_PREF_KEY`].
///
/// # Errors
///
/// Returns the store's error text when the write fails.
pub async fn persist_theme(prefs: &dyn PrefsStore, theme: ThemeId) -> Result<(), String> {
    prefs.save_pref(THEME_PREF_KEY, theme.as_str()).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use launcher_host::MemoryPrefsStore;

    use super::*;

    #[test]
    fn stored_theme_survives_a_restart() {
        let prefs = MemoryPrefsStore::default();
        block_on(persist_theme(&prefs, ThemeId::Pink)).expect("persist");
        assert_eq!(prefs.raw(THEME_PREF_KEY).as_deref(), Some("pink"));

        let restarted = MemoryPrefsStore::with_entry(THEME_PREF_KEY, "pink");
        assert_eq!(block_on(load_theme(&restarted)), ThemeId::Pink);
    }

    #[test]
    fn quoted_identifiers_from_older_builds_still_load() {
        let prefs = MemoryPrefsStore::with_entry(THEME_PREF_KEY, "\"ocean\"");
        assert_eq!(block_on(load_theme(&prefs)), ThemeId::Ocean);
    }

    #[test]
    fn missing_or_unknown_theme_falls_back_to_default() {
        assert_eq!(
            block_on(load_theme(&MemoryPrefsStore::default())),
            ThemeId::Default
        );
        for raw in ["neon", "\"neon\"", "\"pink", ""] {
            assert_eq!(
                block_on(load_theme(&MemoryPrefsStore::with_entry(THEME_PREF_KEY, raw))),
                ThemeId::Default,
                "stored value {raw:?}"
            );
        }
    }
}
