//! Binary entrypoint for the webview-hosted launcher.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    launcher_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the webview/WASM workflow. Build `launcher_app` for wasm32 with the `csr` feature and load it inside the desktop host."
    );
}
