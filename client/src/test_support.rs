//! In-memory fakes shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::net::api::ApiClient;
use crate::net::endpoints::Endpoints;
use crate::net::http::{HttpRequest, HttpResponse, Transport};
use crate::state::session::{MemoryStore, SessionStore};

pub const TEST_BASE: &str = "https://api.example.test";

/// Transport that replays queued responses and records every request.
#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, String>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_string() }));
        self
    }

    pub fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses.borrow_mut().push_back(Err(message.to_owned()));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.sent.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no response queued".to_owned()))
    }
}

pub fn api(transport: &FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::new(transport.clone(), Endpoints::new(TEST_BASE))
}

pub fn session() -> SessionStore<MemoryStore> {
    SessionStore::new(MemoryStore::default())
}

pub fn user_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": "reader@example.com",
        "apiKey": "tldr_live_abc",
        "subscriptionTier": "free",
        "requestsRemaining": 30
    })
}

pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}
