//! Typed host-domain contracts shared by the launcher runtime and its webview adapters.
//!
//! The launcher never enumerates applications, extracts icons, spawns processes, or writes host
//! configuration itself. Those operations live in the external host process and are reached only
//! through the asynchronous [`AppHostService`] contract defined here. Concrete transports live in
//! `launcher_host_web`; the in-memory adapters in this crate back unit tests and host-less runs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod host;
pub mod storage;
pub mod time;

pub use catalog::service::{
    AppHostCall, AppHostFuture, AppHostOperation, AppHostService, MemoryAppHostService,
    NoopAppHostService,
};
pub use catalog::types::{ApplicationRecord, IconPayload};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
pub use time::{elapsed_ms_since, unix_time_ms_now};
