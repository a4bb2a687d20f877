/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::basic_display::errors::InstagramError;
use crate::basic_display::{ApiOrigins, Config};

/// Directly communicates with the API.
///
/// Response bodies are handed back untouched. The status code is not looked at, so an API
/// error still comes back as `Ok` with the error JSON in the body.
#[derive(Default, Clone)]
pub struct ApiClient {
    config: Config,
    origins: ApiOrigins,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client instance using the provided http client.
    ///
    /// Timeouts, TLS and proxies are whatever `https_client` was built with.
    pub fn new(config: Config, https_client: reqwest::Client, origins: ApiOrigins) -> Self {
        Self {
            config,
            origins,
            https_client,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn origins(&self) -> &ApiOrigins {
        &self.origins
    }

    /// Performs a get request and returns the body text
    pub async fn get(&self, url: &str) -> Result<String, InstagramError> {
        let req_url = reqwest::Url::parse(url)?;
        let target = redacted(&req_url);
        log::debug!("GET {}", target);
        let resp = self.https_client.get(req_url).send().await?;
        log::debug!("GET {} returned {}", target, resp.status());
        Ok(resp.text().await?)
    }

    /// Performs a form encoded post request and returns the body text
    pub async fn post_form(
        &self,
        url: &str,
        form: &ApiParams<'_>,
    ) -> Result<String, InstagramError> {
        let req_url = reqwest::Url::parse(url)?;
        let target = redacted(&req_url);
        log::debug!("POST {}", target);
        let resp = self.https_client.post(req_url).form(form).send().await?;
        log::debug!("POST {} returned {}", target, resp.status());
        Ok(resp.text().await?)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("origins", &self.origins)
            .finish()
    }
}

/// Form or query parameters in the order they are sent
pub type ApiParams<'a> = [(&'a str, &'a str)];

// The query string carries tokens and possibly the app secret
fn redacted(url: &reqwest::Url) -> String {
    format!(
        "{}://{}{}",
        url.scheme(),
        url.host_str().unwrap_or_default(),
        url.path()
    )
}

/// Endpoint templates for the Basic Display API.
///
/// Values are interpolated verbatim; `fields` is expected to be already comma joined.
#[derive(Debug)]
pub(crate) enum Endpoint<'a> {
    AuthorizeRedirect {
        client_id: &'a str,
        redirect_uri: &'a str,
    },
    AccessToken,
    UserProfile {
        fields: &'a str,
        access_token: &'a str,
    },
    UsersMedia {
        fields: &'a str,
        access_token: &'a str,
    },
    MediaData {
        media_id: u64,
        fields: &'a str,
        access_token: &'a str,
    },
    AlbumContents {
        media_id: u64,
        fields: &'a str,
        access_token: &'a str,
    },
    LongLivedToken {
        client_secret: &'a str,
        access_token: &'a str,
    },
    RefreshLongLivedToken {
        access_token: &'a str,
    },
}

impl Endpoint<'_> {
    pub(crate) fn url(&self, origins: &ApiOrigins) -> String {
        let oauth = origins.oauth();
        let graph = origins.graph();
        use Endpoint as E;
        match self {
            E::AuthorizeRedirect {
                client_id,
                redirect_uri,
            } => format!(
                "{oauth}/oauth/authorize?client_id={client_id}&redirect_uri={redirect_uri}&scope=user_profile,user_media&response_type=code"
            ),
            E::AccessToken => format!("{oauth}/oauth/access_token"),
            E::UserProfile {
                fields,
                access_token,
            } => format!("{graph}/me?fields={fields}&access_token={access_token}"),
            E::UsersMedia {
                fields,
                access_token,
            } => format!("{graph}/me/media?fields={fields}&access_token={access_token}"),
            E::MediaData {
                media_id,
                fields,
                access_token,
            } => format!("{graph}/{media_id}?fields={fields}&access_token={access_token}"),
            E::AlbumContents {
                media_id,
                fields,
                access_token,
            } => format!("{graph}/{media_id}/children?fields={fields}&access_token={access_token}"),
            E::LongLivedToken {
                client_secret,
                access_token,
            } => format!(
                "{graph}/access_token?grant_type=ig_exchange_token&client_secret={client_secret}&access_token={access_token}"
            ),
            E::RefreshLongLivedToken { access_token } => format!(
                "{graph}/refresh_access_token?grant_type=ig_refresh_token&access_token={access_token}"
            ),
        }
    }
}

/// Form body for exchanging an authorization code for a short lived token
pub(crate) fn access_token_form<'a>(config: &'a Config, code: &'a str) -> [(&'a str, &'a str); 5] {
    [
        ("client_id", config.client_id()),
        ("client_secret", config.client_secret()),
        ("code", code),
        ("grant_type", "authorization_code"),
        ("redirect_uri", config.redirect_uri()),
    ]
}
