//! Route paths and query helpers shared by pages and flows.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/auth/login";
pub const SIGNUP: &str = "/auth/signup";
pub const AUTH_SUCCESS: &str = "/auth/success";
pub const GOOGLE_CALLBACK: &str = "/auth/google/callback";
pub const DASHBOARD: &str = "/dashboard";
pub const CHECKOUT: &str = "/dashboard/checkout";
pub const PRIVACY: &str = "/privacy-policy";
pub const TERMS: &str = "/terms";
pub const REFUNDS: &str = "/refunds-policy";

/// How the user arrived at the success page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Google,
    #[default]
    Signup,
}

impl AuthAction {
    /// Parse `?action=`; anything unrecognized reads as signup.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("login") => Self::Login,
            Some("google") => Self::Google,
            _ => Self::Signup,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Google => "google",
            Self::Signup => "signup",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login Successful!",
            Self::Google => "Google Authentication Successful!",
            Self::Signup => "Account Created Successfully!",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Login => "You have successfully logged in to your TLDR News account.",
            Self::Google => "You have successfully connected your Google account to TLDR News.",
            Self::Signup => {
                "Your TLDR News account has been created. You're now ready to start summarizing articles."
            }
        }
    }
}

/// `/auth/success?action=...`, carrying a selected plan through when present.
pub fn auth_success(action: AuthAction, plan: Option<&str>) -> String {
    match plan.filter(|p| !p.is_empty()) {
        Some(plan) => format!("{AUTH_SUCCESS}?action={}&plan={}", action.as_str(), encode_component(plan)),
        None => format!("{AUTH_SUCCESS}?action={}", action.as_str()),
    }
}

/// Checkout route, optionally preselecting a plan.
pub fn checkout(plan: Option<&str>) -> String {
    match plan.filter(|p| !p.is_empty()) {
        Some(plan) => format!("{CHECKOUT}?plan={}", encode_component(plan)),
        None => CHECKOUT.to_owned(),
    }
}

/// Signup route, optionally carrying a plan.
pub fn signup(plan: Option<&str>) -> String {
    match plan.filter(|p| !p.is_empty()) {
        Some(plan) => format!("{SIGNUP}?plan={}", encode_component(plan)),
        None => SIGNUP.to_owned(),
    }
}

/// Percent-encode a query value.
pub fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
