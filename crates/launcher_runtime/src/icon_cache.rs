//! Per-launch-path icon resolution with memoization and in-flight request sharing.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    future::Future,
    rc::Rc,
};

use futures::future::{self, Either, FutureExt, LocalBoxFuture, Shared};
use launcher_host::{AppHostService, IconPayload};
use leptos::logging;

type PendingIcon = Shared<LocalBoxFuture<'static, Option<IconPayload>>>;

#[derive(Default)]
struct IconCacheInner {
    resolved: HashMap<String, Option<IconPayload>>,
    pending: HashMap<String, PendingIcon>,
}

/// Icon cache owned by the runtime and shared by every icon view.
///
/// Entries are never evicted; the catalog is bounded by the number of installed applications.
/// Concurrent requests for the same path share one host round trip. A definitive "no icon"
/// answer is cached like a payload; transport errors are not cached, so a later view retries.
#[derive(Clone)]
pub struct IconCache {
    host: Rc<dyn AppHostService>,
    inner: Rc<RefCell<IconCacheInner>>,
}

impl IconCache {
    /// Creates an empty cache resolving through `host`.
    pub fn new(host: Rc<dyn AppHostService>) -> Self {
        Self {
            host,
            inner: Rc::default(),
        }
    }

    /// Returns the memoized result for `launch_path`, or `None` when it has not resolved yet.
    pub fn cached(&self, launch_path: &str) -> Option<Option<IconPayload>> {
        self.inner.borrow().resolved.get(launch_path).cloned()
    }

    /// Number of launch paths with a memoized result.
    pub fn len(&self) -> usize {
        self.inner.borrow().resolved.len()
    }

    /// Returns whether nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves the icon for `launch_path`. Never fails; a failed lookup yields `None`.
    pub fn resolve(&self, launch_path: &str) -> impl Future<Output = Option<IconPayload>> + 'static {
        if let Some(icon) = self.cached(launch_path) {
            return Either::Left(future::ready(icon));
        }
        if let Some(pending) = self.inner.borrow().pending.get(launch_path) {
            return Either::Right(pending.clone());
        }

        let host = Rc::clone(&self.host);
        let inner = Rc::downgrade(&self.inner);
        let path = launch_path.to_string();
        let request = async move {
            let icon = match host.app_icon(&path).await {
                Ok(icon) => {
                    if let Some(inner) = inner.upgrade() {
                        inner.borrow_mut().resolved.insert(path.clone(), icon.clone());
                    }
                    icon
                }
                Err(err) => {
                    logging::warn!("icon lookup failed for `{path}`: {err}");
                    None
                }
            };
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().pending.remove(&path);
            }
            icon
        }
        .boxed_local()
        .shared();

        self.inner
            .borrow_mut()
            .pending
            .insert(launch_path.to_string(), request.clone());
        Either::Right(request)
    }
}

/// Liveness flag for a view awaiting an icon. Cleared when the view is torn down.
#[derive(Debug, Clone)]
pub struct ViewLiveness(Rc<Cell<bool>>);

impl Default for ViewLiveness {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl ViewLiveness {
    pub fn mark_dropped(&self) {
        self.0.set(false);
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }
}

/// Resolves `launch_path` and hands the result to `deliver` only if the view is still alive.
/// The cache is updated either way.
pub async fn resolve_for_view(
    cache: &IconCache,
    launch_path: &str,
    liveness: &ViewLiveness,
    deliver: impl FnOnce(Option<IconPayload>),
) {
    let icon = cache.resolve(launch_path).await;
    if liveness.is_alive() {
        deliver(icon);
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use launcher_host::{AppHostCall, AppHostOperation, ApplicationRecord, MemoryAppHostService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn host() -> MemoryAppHostService {
        let host = MemoryAppHostService::with_apps(vec![
            ApplicationRecord::new("0", "Foo", "/Apps/Foo", "Tools"),
            ApplicationRecord::new("1", "Bar", "/Apps/Bar", "Media"),
        ]);
        host.insert_icon("/Apps/Foo", "data:image/png;base64,Rk9P");
        host
    }

    fn icon_calls(host: &MemoryAppHostService) -> usize {
        host.calls()
            .iter()
            .filter(|call| matches!(call, AppHostCall::AppIcon { .. }))
            .count()
    }

    #[test]
    fn resolved_icon_is_served_from_cache() {
        let host = host();
        let cache = IconCache::new(Rc::new(host.clone()));

        assert_eq!(
            block_on(cache.resolve("/Apps/Foo")).as_deref(),
            Some("data:image/png;base64,Rk9P")
        );
        assert_eq!(
            block_on(cache.resolve("/Apps/Foo")).as_deref(),
            Some("data:image/png;base64,Rk9P")
        );
        assert_eq!(icon_calls(&host), 1);
        assert_eq!(
            cache.cached("/Apps/Foo"),
            Some(Some("data:image/png;base64,Rk9P".to_string()))
        );
    }

    #[test]
    fn concurrent_requests_share_one_round_trip() {
        let host = host();
        let cache = IconCache::new(Rc::new(host.clone()));

        let first = cache.resolve("/Apps/Foo");
        let second = cache.resolve("/Apps/Foo");
        let (a, b) = block_on(future::join(first, second));

        assert_eq!(a, b);
        assert_eq!(icon_calls(&host), 1);
    }

    #[test]
    fn missing_icon_is_memoized_as_none() {
        let host = host();
        let cache = IconCache::new(Rc::new(host.clone()));

        assert_eq!(block_on(cache.resolve("/Apps/Bar")), None);
        assert_eq!(block_on(cache.resolve("/Apps/Bar")), None);
        assert_eq!(cache.cached("/Apps/Bar"), Some(None));
        assert_eq!(icon_calls(&host), 1);
    }

    #[test]
    fn transport_errors_resolve_to_placeholder_and_are_retried() {
        let host = host();
        host.fail(AppHostOperation::AppIcon, "timed out");
        let cache = IconCache::new(Rc::new(host.clone()));

        assert_eq!(block_on(cache.resolve("/Apps/Foo")), None);
        assert_eq!(cache.cached("/Apps/Foo"), None);

        host.recover(AppHostOperation::AppIcon);
        assert!(block_on(cache.resolve("/Apps/Foo")).is_some());
        assert_eq!(icon_calls(&host), 2);
    }

    #[test]
    fn dropped_view_only_updates_the_shared_cache() {
        let host = host();
        let cache = IconCache::new(Rc::new(host.clone()));
        let liveness = ViewLiveness::default();
        let delivered = Cell::new(false);

        liveness.mark_dropped();
        block_on(resolve_for_view(&cache, "/Apps/Foo", &liveness, |_| {
            delivered.set(true)
        }));

        assert!(!delivered.get());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn live_view_receives_the_icon() {
        let cache = IconCache::new(Rc::new(host()));
        let liveness = ViewLiveness::default();
        let delivered = RefCell::new(None);

        block_on(resolve_for_view(&cache, "/Apps/Foo", &liveness, |icon| {
            *delivered.borrow_mut() = icon
        }));

        assert_eq!(
            delivered.into_inner().as_deref(),
            Some("data:image/png;base64,Rk9P")
        );
    }
}
