/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

/// Root of the OAuth authorization endpoints
pub const OAUTH_ORIGIN: &str = "https://api.instagram.com";

/// Root of the Graph endpoints
pub const GRAPH_ORIGIN: &str = "https://graph.instagram.com";

/// Application credentials registered with the Instagram Basic Display product.
///
/// Set once when the [`Client`](crate::basic_display::Client) is built and only read afterward.
/// Nothing is validated here; bad values show up as API-side errors.
#[derive(Clone, Default)]
pub struct Config {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl Config {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"xxx")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

/// Origins the endpoint templates are expanded against.
///
/// The defaults are the production Instagram hosts. Point these elsewhere to go
/// through a proxy or at a local mock server.
#[derive(Debug, Clone)]
pub struct ApiOrigins {
    pub(crate) oauth: String,
    pub(crate) graph: String,
}

impl ApiOrigins {
    pub fn new(oauth: impl Into<String>, graph: impl Into<String>) -> Self {
        let trim = |s: String| s.trim_end_matches('/').to_string();
        Self {
            oauth: trim(oauth.into()),
            graph: trim(graph.into()),
        }
    }

    pub fn oauth(&self) -> &str {
        &self.oauth
    }

    pub fn graph(&self) -> &str {
        &self.graph
    }
}

impl Default for ApiOrigins {
    fn default() -> Self {
        Self::new(OAUTH_ORIGIN, GRAPH_ORIGIN)
    }
}
