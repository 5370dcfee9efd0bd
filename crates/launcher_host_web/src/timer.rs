//! Timer and deadline helpers for the single-threaded webview event loop.

use std::future::Future;

use futures::future::{self, Either};

/// Resolves after `ms` milliseconds.
///
/// Backed by `window.setTimeout` on wasm32. Outside the browser there is no event loop to wake
/// the future, so it never resolves; callers racing against it always see the other branch.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let delay = i32::try_from(ms).unwrap_or(i32::MAX);
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay);
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ms;
        future::pending::<()>().await;
    }
}

/// Races `operation` against `deadline`, mapping a deadline win to a timeout error that names
/// `label`.
///
/// # Errors
///
/// Returns the operation's own error, or a timeout error when `deadline` resolves first.
pub async fn race_deadline<T, F, D>(
    label: &str,
    timeout_ms: u32,
    operation: F,
    deadline: D,
) -> Result<T, String>
where
    F: Future<Output = Result<T, String>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(operation);
    futures::pin_mut!(deadline);
    match future::select(operation, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(format!("`{label}` timed out after {timeout_ms}ms")),
    }
}

/// Runs `operation` with a `timeout_ms` wall-clock deadline.
///
/// # Errors
///
/// See [`race_deadline`].
pub async fn with_deadline<T, F>(label: &str, timeout_ms: u32, operation: F) -> Result<T, String>
where
    F: Future<Output = Result<T, String>>,
{
    race_deadline(label, timeout_ms, operation, sleep_ms(timeout_ms)).await
}
