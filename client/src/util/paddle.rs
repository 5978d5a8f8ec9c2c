//! Paddle.js bridge.
//!
//! Calls into the global `Paddle` object through `js_sys::Reflect`. Option
//! objects are built as `serde_json::Value` in `flows::checkout` and cross
//! the boundary through `JSON.parse`. On the server every call is an error.

use crate::config::PaddleEnvironment;
use crate::flows::checkout::CheckoutEvent;

#[cfg(feature = "hydrate")]
mod js {
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    pub fn err(e: &JsValue) -> String {
        format!("{e:?}")
    }

    pub fn get(target: &JsValue, key: &str) -> Result<JsValue, String> {
        let value = Reflect::get(target, &JsValue::from_str(key)).map_err(|e| err(&e))?;
        if value.is_undefined() || value.is_null() {
            return Err(format!("Paddle.{key} is missing"));
        }
        Ok(value)
    }

    pub fn method(target: &JsValue, key: &str) -> Result<Function, String> {
        get(target, key)?
            .dyn_into::<Function>()
            .map_err(|_| format!("Paddle.{key} is not a function"))
    }

    pub fn paddle() -> Result<JsValue, String> {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_owned())?;
        get(&window, crate::flows::checkout::PADDLE_GLOBAL)
    }

    pub fn to_js(value: &serde_json::Value) -> Result<JsValue, String> {
        js_sys::JSON::parse(&value.to_string()).map_err(|e| err(&e))
    }

    pub fn from_js(value: &JsValue) -> serde_json::Value {
        js_sys::JSON::stringify(value)
            .ok()
            .and_then(|s| s.as_string())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }
}

/// Set the environment and register `on_event` as the event callback. When
/// Paddle was already initialized by an earlier mount, only the callback is
/// replaced.
///
/// # Errors
///
/// Returns an error when Paddle.js is not loaded or rejects the call.
pub fn initialize<F>(environment: PaddleEnvironment, client_token: &str, on_event: F) -> Result<(), String>
where
    F: Fn(CheckoutEvent) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use js_sys::Reflect;
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        let paddle = js::paddle()?;
        let env = js::get(&paddle, "Environment")?;
        js::method(&env, "set")?
            .call1(&env, &JsValue::from_str(environment.as_str()))
            .map_err(|e| js::err(&e))?;

        let callback = Closure::wrap(Box::new(move |event: JsValue| {
            on_event(CheckoutEvent::from_value(js::from_js(&event)));
        }) as Box<dyn Fn(JsValue)>)
        .into_js_value();

        let already = Reflect::get(&paddle, &JsValue::from_str("Initialized"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if already {
            let options = js_sys::Object::new();
            Reflect::set(&options, &JsValue::from_str("eventCallback"), &callback).map_err(|e| js::err(&e))?;
            js::method(&paddle, "Update")?
                .call1(&paddle, &options)
                .map_err(|e| js::err(&e))?;
            return Ok(());
        }

        let options = js::to_js(&crate::flows::checkout::init_options(client_token))?;
        Reflect::set(&options, &JsValue::from_str("eventCallback"), &callback).map_err(|e| js::err(&e))?;
        js::method(&paddle, "Initialize")?
            .call1(&paddle, &options)
            .map_err(|e| js::err(&e))?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (environment, client_token, on_event);
        Err("not available on server".to_owned())
    }
}

/// `Paddle.Checkout.open(options)`.
///
/// # Errors
///
/// Returns an error when Paddle.js is not loaded or rejects the options.
pub fn open_checkout(options: &serde_json::Value) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let paddle = js::paddle()?;
        let checkout = js::get(&paddle, "Checkout")?;
        let options = js::to_js(options)?;
        js::method(&checkout, "open")?
            .call1(&checkout, &options)
            .map_err(|e| js::err(&e))?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = options;
        Err("not available on server".to_owned())
    }
}
