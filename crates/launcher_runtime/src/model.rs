use std::collections::BTreeMap;

use launcher_host::ApplicationRecord;
use serde::{Deserialize, Serialize};

use crate::catalog;

/// Sentinel category filter meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";
/// Minimum time the loading overlay stays up after boot starts.
pub const MIN_LOADING_OVERLAY_MS: u64 = 1_200;
/// Lifetime of a toast notice before it dismisses itself.
pub const NOTICE_TTL_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Default,
    Dark,
    Pink,
    Ocean,
}

impl ThemeId {
    pub const ALL: [Self; 4] = [Self::Default, Self::Dark, Self::Pink, Self::Ocean];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Pink => "pink",
            Self::Ocean => "ocean",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Light",
            Self::Dark => "Dark",
            Self::Pink => "Pink",
            Self::Ocean => "Ocean",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == id.trim())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuPosition {
    pub x: i32,
    pub y: i32,
}

/// Record fields the user may edit through the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    Category,
}

impl EditableField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
        }
    }

    pub fn read(self, record: &ApplicationRecord) -> &str {
        match self {
            Self::Category => &record.category,
        }
    }

    pub fn write(self, record: &mut ApplicationRecord, value: String) {
        match self {
            Self::Category => record.category = value,
        }
    }
}

/// In-progress modal form, snapshotted from the record when editing begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub display_name: String,
    pub field: EditableField,
    pub value: String,
}

/// Optimistically applied edit awaiting host confirmation, keyed by launch path in
/// [`LauncherState::pending_edits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub field: EditableField,
    pub value: String,
    pub previous: String,
}

/// Context-action state. At most one record is targeted at a time; saved edits leave this
/// machine immediately and wait for the host in [`LauncherState::pending_edits`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    MenuOpen {
        launch_path: String,
        position: MenuPosition,
    },
    Editing {
        launch_path: String,
        form: EditForm,
    },
}

impl EditState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::MenuOpen { .. } => "menu-open",
            Self::Editing { .. } => "editing",
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::MenuOpen { launch_path, .. }
            | Self::Editing { launch_path, .. } => Some(launch_path),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherState {
    pub apps: Vec<ApplicationRecord>,
    pub catalog_loaded: bool,
    pub overlay_visible: bool,
    pub search_term: String,
    pub category_filter: String,
    pub theme: ThemeId,
    pub edit: EditState,
    pub pending_edits: BTreeMap<String, PendingEdit>,
    pub notices: Vec<Notice>,
    pub next_notice_id: u64,
}

impl Default for LauncherState {
    fn default() -> Self {
        Self {
            apps: Vec::new(),
            catalog_loaded: false,
            overlay_visible: true,
            search_term: String::new(),
            category_filter: ALL_CATEGORIES.to_string(),
            theme: ThemeId::default(),
            edit: EditState::Idle,
            pending_edits: BTreeMap::new(),
            notices: Vec::new(),
            next_notice_id: 1,
        }
    }
}

impl LauncherState {
    pub fn app(&self, launch_path: &str) -> Option<&ApplicationRecord> {
        self.apps.iter().find(|app| app.launch_path == launch_path)
    }

    pub fn app_mut(&mut self, launch_path: &str) -> Option<&mut ApplicationRecord> {
        self.apps
            .iter_mut()
            .find(|app| app.launch_path == launch_path)
    }

    /// Records visible under the current search term and category filter.
    pub fn filtered_apps(&self) -> Vec<ApplicationRecord> {
        catalog::filter_apps(&self.apps, &self.search_term, &self.category_filter)
    }

    pub fn categories(&self) -> Vec<String> {
        catalog::categories(&self.apps)
    }

    /// Whether a saved edit for `launch_path` is still waiting on the host.
    pub fn is_persisting(&self, launch_path: &str) -> bool {
        self.pending_edits.contains_key(launch_path)
    }

    /// Name shown in notices for `launch_path`, falling back to the path itself.
    pub fn display_name_for(&self, launch_path: &str) -> String {
        self.app(launch_path)
            .map(|app| app.display_name.clone())
            .unwrap_or_else(|| launch_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_ids_round_trip_through_their_tokens() {
        for theme in ThemeId::ALL {
            assert_eq!(ThemeId::from_id(theme.as_str()), Some(theme));
        }
        assert_eq!(ThemeId::from_id(" pink "), Some(ThemeId::Pink));
        assert_eq!(ThemeId::from_id("neon"), None);
        assert_eq!(
            serde_json::to_string(&ThemeId::Ocean).expect("serialize"),
            "\"ocean\""
        );
    }

    #[test]
    fn editable_field_accessors_touch_only_their_field() {
        let mut record = ApplicationRecord::new("0", "Foo", "/Apps/Foo", "Tools");
        assert_eq!(EditableField::Category.read(&record), "Tools");

        EditableField::Category.write(&mut record, "Games".to_string());
        assert_eq!(
            record,
            ApplicationRecord::new("0", "Foo", "/Apps/Foo", "Games")
        );
    }

    #[test]
    fn fresh_state_shows_overlay_and_unrestricted_filter() {
        let state = LauncherState::default();
        assert!(state.overlay_visible);
        assert!(!state.catalog_loaded);
        assert_eq!(state.category_filter, ALL_CATEGORIES);
        assert_eq!(state.edit, EditState::Idle);
        assert!(state.pending_edits.is_empty());
    }
}
