use reqwest::{self, Method};
use std::fmt::Display;

/// An endpoint of the remote API together with the HTTP method it expects
#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: reqwest::Method,
}

impl PathSpec {
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    /// GET endpoints receive their arguments in the query string, every other
    /// method receives them as a JSON body
    pub fn uses_query_args(&self) -> bool {
        self.method == Method::GET
    }
}

impl Display for PathSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
