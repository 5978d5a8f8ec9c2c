//! Browser glue: clipboard writes and window navigation.

/// Copy `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error when the clipboard is unavailable or the write is denied.
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or_else(|| "window unavailable".to_owned())?;
        // Older browsers and insecure origins expose no clipboard.
        let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .ok()
            .filter(|c| !c.is_undefined() && !c.is_null())
            .ok_or_else(|| "clipboard unavailable".to_owned())?
            .unchecked_into::<web_sys::Clipboard>();
        let promise = clipboard.write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on server".to_owned())
    }
}

/// Open `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                leptos::logging::warn!("window.open failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Full-page navigation, used for external URLs and post-auth redirects.
pub fn assign_location(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                leptos::logging::warn!("location assign failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Reload the current page.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                leptos::logging::warn!("reload failed: {e:?}");
            }
        }
    }
}
