use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::config::PublicConfig;

#[derive(Default)]
struct FakeDocument {
    loaded: Cell<bool>,
    injected: RefCell<Vec<String>>,
    listeners: RefCell<Vec<OnLoad>>,
}

impl ScriptHost for FakeDocument {
    fn global_present(&self) -> bool {
        self.loaded.get()
    }

    fn has_script(&self, src: &str) -> bool {
        self.injected.borrow().iter().any(|s| s == src)
    }

    fn inject_script(&self, src: &str, on_load: OnLoad) -> Result<(), String> {
        self.injected.borrow_mut().push(src.to_owned());
        self.listeners.borrow_mut().push(on_load);
        Ok(())
    }

    fn listen_load(&self, _src: &str, on_load: OnLoad) -> Result<(), String> {
        self.listeners.borrow_mut().push(on_load);
        Ok(())
    }
}

#[test]
fn plan_parses_query_case_insensitively() {
    assert_eq!(Plan::from_query(Some("premium")), Some(Plan::Premium));
    assert_eq!(Plan::from_query(Some(" PRO ")), Some(Plan::Pro));
    assert_eq!(Plan::from_query(Some("enterprise")), None);
    assert_eq!(Plan::from_query(None), None);
}

#[test]
fn plan_price_ids_come_from_config() {
    let config = PublicConfig::default();
    assert_eq!(Plan::Premium.price_id(&config), "pri_01jq25xbe2b5qvqxfn7cc1zsq0");
    assert_eq!(Plan::Pro.price_id(&config), "pri_01jq26fd1bshzrn3zm4cjs6mwa");

    let custom = PublicConfig { pro_price_id: "pri_custom".to_owned(), ..PublicConfig::default() };
    assert_eq!(Plan::Pro.price_id(&custom), "pri_custom");
}

#[test]
fn checkout_options_include_email_when_known() {
    assert_eq!(
        checkout_options("pri_1", Some("reader@example.com")),
        serde_json::json!({
            "items": [{ "priceId": "pri_1", "quantity": 1 }],
            "customer": { "email": "reader@example.com" },
            "settings": { "displayMode": "overlay", "theme": "light", "locale": "en" }
        })
    );
}

#[test]
fn checkout_options_omit_blank_email() {
    for email in [None, Some(""), Some("  ")] {
        let options = checkout_options("pri_1", email);
        assert!(options.get("customer").is_none());
        assert_eq!(options["items"][0]["quantity"], 1);
    }
}

#[test]
fn init_options_carry_token() {
    assert_eq!(init_options("live_abc"), serde_json::json!({ "token": "live_abc" }));
}

#[test]
fn completed_event_routes_to_dashboard() {
    let done = CheckoutEvent::from_value(serde_json::json!({ "name": "checkout.completed", "data": { "id": "che_1" } }));
    assert_eq!(done.completion_route(), Some("/dashboard"));

    let loaded = CheckoutEvent::from_value(serde_json::json!({ "name": "checkout.loaded" }));
    assert_eq!(loaded.completion_route(), None);

    let junk = CheckoutEvent::from_value(serde_json::json!(42));
    assert_eq!(junk, CheckoutEvent::default());
}

#[test]
fn billing_loader_twice_injects_once() {
    let document = FakeDocument::default();
    let ready = Rc::new(Cell::new(0));

    for _ in 0..2 {
        let ready = ready.clone();
        ensure_billing_script(&document, Box::new(move || ready.set(ready.get() + 1))).unwrap();
    }
    assert_eq!(*document.injected.borrow(), vec![PADDLE_SCRIPT_URL.to_owned()]);

    document.loaded.set(true);
    for callback in document.listeners.borrow_mut().drain(..) {
        callback();
    }
    assert_eq!(ready.get(), 2);

    let ready_again = ready.clone();
    let load = ensure_billing_script(&document, Box::new(move || ready_again.set(ready_again.get() + 1))).unwrap();
    assert_eq!(load, ScriptLoad::Ready);
    assert_eq!(ready.get(), 3);
    assert_eq!(document.injected.borrow().len(), 1);
}
