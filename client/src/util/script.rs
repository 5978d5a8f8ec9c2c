//! Third-party `<script>` loading.
//!
//! DESIGN
//! ======
//! `ensure_script` decides between "already loaded", "tag present but still
//! loading", and "inject now". The DOM side sits behind `ScriptHost` so the
//! decision is testable natively; `DomScriptHost` is the browser backend.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

/// Callback run once the script's global is usable.
pub type OnLoad = Box<dyn FnOnce()>;

/// Minimal view of the document needed to load one script.
pub trait ScriptHost {
    /// The script's global object already exists.
    fn global_present(&self) -> bool;
    /// A `<script>` tag with this `src` is already in the document.
    fn has_script(&self, src: &str) -> bool;
    /// Append an async `<script src>` to `<head>` and run `on_load` when it loads.
    ///
    /// # Errors
    ///
    /// Returns an error when the document or element cannot be created.
    fn inject_script(&self, src: &str, on_load: OnLoad) -> Result<(), String>;
    /// Run `on_load` when the existing tag for `src` finishes loading.
    ///
    /// # Errors
    ///
    /// Returns an error when the tag cannot be found.
    fn listen_load(&self, src: &str, on_load: OnLoad) -> Result<(), String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptLoad {
    /// The global existed; `on_ready` already ran.
    Ready,
    /// Another caller injected the tag; `on_ready` runs on its load event.
    Pending,
    /// The tag was injected by this call.
    Injected,
}

/// Make sure the script at `src` is loaded exactly once per document and run
/// `on_ready` when its global is available.
///
/// # Errors
///
/// Propagates host failures; `on_ready` is dropped without running.
pub fn ensure_script<H: ScriptHost>(host: &H, src: &str, on_ready: OnLoad) -> Result<ScriptLoad, String> {
    if host.global_present() {
        on_ready();
        return Ok(ScriptLoad::Ready);
    }
    if host.has_script(src) {
        host.listen_load(src, on_ready)?;
        return Ok(ScriptLoad::Pending);
    }
    host.inject_script(src, on_ready)?;
    Ok(ScriptLoad::Injected)
}

/// Browser document backend. `global` names the `window` property the script
/// defines.
#[derive(Clone, Copy, Debug)]
pub struct DomScriptHost {
    pub global: &'static str,
}

#[cfg(feature = "hydrate")]
fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_owned())
}

#[cfg(feature = "hydrate")]
fn add_load_listener(target: &web_sys::EventTarget, on_load: OnLoad) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let callback = wasm_bindgen::closure::Closure::once_into_js(move || on_load());
    target
        .add_event_listener_with_callback("load", callback.unchecked_ref())
        .map_err(|e| format!("{e:?}"))
}

impl ScriptHost for DomScriptHost {
    fn global_present(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().is_some_and(|w| {
                js_sys::Reflect::get(&w, &wasm_bindgen::JsValue::from_str(self.global))
                    .is_ok_and(|v| !v.is_undefined() && !v.is_null())
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn has_script(&self, src: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            document()
                .ok()
                .and_then(|d| d.query_selector(&format!("script[src=\"{src}\"]")).ok().flatten())
                .is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = src;
            false
        }
    }

    fn inject_script(&self, src: &str, on_load: OnLoad) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = document()?;
            let script = document
                .create_element("script")
                .map_err(|e| format!("{e:?}"))?
                .dyn_into::<web_sys::HtmlScriptElement>()
                .map_err(|_| "not a script element".to_owned())?;
            script.set_src(src);
            script.set_async(true);
            add_load_listener(&script, on_load)?;
            let head = document.head().ok_or_else(|| "document has no head".to_owned())?;
            head.append_child(&script).map_err(|e| format!("{e:?}"))?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (src, on_load);
            Err("not available on server".to_owned())
        }
    }

    fn listen_load(&self, src: &str, on_load: OnLoad) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let element = document()?
                .query_selector(&format!("script[src=\"{src}\"]"))
                .map_err(|e| format!("{e:?}"))?
                .ok_or_else(|| format!("no script tag for {src}"))?;
            add_load_listener(&element, on_load)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (src, on_load);
            Err("not available on server".to_owned())
        }
    }
}
