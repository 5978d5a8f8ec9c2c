/// Failures that stop the SSR host from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("bind {addr} failed: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
