/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::basic_display::api::{Endpoint, access_token_form};
use crate::basic_display::errors::InstagramError;
use crate::basic_display::fields::join_fields;
use crate::basic_display::signed_request::{self, SignedRequestPayload};
use crate::basic_display::{ApiClient, ApiOrigins, Config, Next};
use std::sync::Arc;

/// Entry point for the Instagram Basic Display API.
///
/// Every request method performs exactly one HTTP call and returns the raw response body.
/// Parsing the JSON is up to the caller. Cloning is cheap and clones share the
/// underlying connection pool.
///
/// ```rust,no_run
/// use instagram_basic::basic_display::{Client, Config, UserField};
///
/// # async fn run() -> Result<(), instagram_basic::basic_display::InstagramError> {
/// let client = Client::new(Config::new("app-id", "app-secret", "https://example.com/auth/"));
///
/// // Send the user here, Instagram redirects back with ?code=...
/// let redirect = client.authorize_redirect();
///
/// let token_json = client.access_token("code-from-redirect").await?;
/// let profile_json = client
///     .user_profile("access-token", &[UserField::Id, UserField::Username])
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Uses a caller built http client, e.g. one with timeouts or a proxy configured
    pub fn with_http_client(config: Config, https_client: reqwest::Client) -> Self {
        Self::from_parts(config, https_client, ApiOrigins::default())
    }

    pub fn from_parts(config: Config, https_client: reqwest::Client, origins: ApiOrigins) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(config, https_client, origins)),
        }
    }

    pub fn config(&self) -> &Config {
        self.api_client.config()
    }

    /// Lower level client for requests not covered here
    pub fn api_client(&self) -> Arc<ApiClient> {
        self.api_client.clone()
    }

    /// URL to send the user to for authorizing the app.
    ///
    /// See [Step 1: Get Authorization](https://developers.facebook.com/docs/instagram-basic-display-api/guides/getting-access-tokens-and-permissions#step-1--get-authorization)
    pub fn authorize_redirect(&self) -> String {
        let config = self.config();
        Endpoint::AuthorizeRedirect {
            client_id: config.client_id(),
            redirect_uri: config.redirect_uri(),
        }
        .url(self.api_client.origins())
    }

    /// Exchanges the authorization code for a short lived access token.
    ///
    /// See [Step 2: Exchange the Code for a Token](https://developers.facebook.com/docs/instagram-basic-display-api/guides/getting-access-tokens-and-permissions#step-2--exchange-the-code-for-a-token)
    pub async fn access_token(&self, code: &str) -> Result<String, InstagramError> {
        let req_url = Endpoint::AccessToken.url(self.api_client.origins());
        let form = access_token_form(self.config(), code);
        self.api_client.post_form(&req_url, &form).await
    }

    /// Retrieves the profile of the user the token belongs to.
    ///
    /// See [Get a User's Profile](https://developers.facebook.com/docs/instagram-basic-display-api/guides/getting-profiles-and-media#get-a-user-s-profile)
    pub async fn user_profile<F: AsRef<str>>(
        &self,
        access_token: &str,
        fields: &[F],
    ) -> Result<String, InstagramError> {
        let fields = join_fields(fields);
        let req_url = Endpoint::UserProfile {
            fields: &fields,
            access_token,
        }
        .url(self.api_client.origins());
        self.api_client.get(&req_url).await
    }

    /// Retrieves a page of the user's media.
    ///
    /// With `next` given that link is fetched as is and `fields` is not used, the
    /// continuation already carries the fields of the first request.
    ///
    /// See [Get a User's Media](https://developers.facebook.com/docs/instagram-basic-display-api/guides/getting-profiles-and-media#get-a-user-s-media)
    pub async fn user_media<F: AsRef<str>>(
        &self,
        access_token: &str,
        fields: &[F],
        next: Option<&Next>,
    ) -> Result<String, InstagramError> {
        if let Some(next) = next {
            return self.next_page(next).await;
        }
        let fields = join_fields(fields);
        let req_url = Endpoint::UsersMedia {
            fields: &fields,
            access_token,
        }
        .url(self.api_client.origins());
        self.api_client.get(&req_url).await
    }

    /// Fetches the page behind a `paging.next` link
    pub async fn next_page(&self, next: &Next) -> Result<String, InstagramError> {
        self.api_client.get(next.as_str()).await
    }

    /// Retrieves a single media item.
    ///
    /// See [Get Media Data](https://developers.facebook.com/docs/instagram-basic-display-api/guides/getting-profiles-and-media#get-media-data)
    pub async fn media_data<F: AsRef<str>>(
        &self,
        media_id: u64,
        access_token: &str,
        fields: &[F],
    ) -> Result<String, InstagramError> {
        let fields = join_fields(fields);
        let req_url = Endpoint::MediaData {
            media_id,
            fields: &fields,
            access_token,
        }
        .url(self.api_client.origins());
        self.api_client.get(&req_url).await
    }

    /// Retrieves the media items of a carousel album.
    ///
    /// See [Get Album Contents](https://developers.facebook.com/docs/instagram-basic-display-api/guides/getting-profiles-and-media#get-album-contents)
    pub async fn album_contents<F: AsRef<str>>(
        &self,
        media_id: u64,
        access_token: &str,
        fields: &[F],
    ) -> Result<String, InstagramError> {
        let fields = join_fields(fields);
        let req_url = Endpoint::AlbumContents {
            media_id,
            fields: &fields,
            access_token,
        }
        .url(self.api_client.origins());
        self.api_client.get(&req_url).await
    }

    /// Exchanges a short lived token for a long lived (60 day) one.
    ///
    /// See [Get a Long-Lived Token](https://developers.facebook.com/docs/instagram-basic-display-api/guides/long-lived-access-tokens#get-a-long-lived-token)
    pub async fn long_lived_token(
        &self,
        short_lived_access_token: &str,
    ) -> Result<String, InstagramError> {
        let req_url = Endpoint::LongLivedToken {
            client_secret: self.config().client_secret(),
            access_token: short_lived_access_token,
        }
        .url(self.api_client.origins());
        self.api_client.get(&req_url).await
    }

    /// Extends the validity of a long lived token that has not yet expired.
    ///
    /// See [Refresh a Long-Lived Token](https://developers.facebook.com/docs/instagram-basic-display-api/guides/long-lived-access-tokens#refresh-a-long-lived-token)
    pub async fn refresh_long_lived_token(
        &self,
        long_lived_access_token: &str,
    ) -> Result<String, InstagramError> {
        let req_url = Endpoint::RefreshLongLivedToken {
            access_token: long_lived_access_token,
        }
        .url(self.api_client.origins());
        self.api_client.get(&req_url).await
    }

    /// Verifies a signed request posted to the deauthorize or data deletion callback and
    /// returns its decoded data segment. No network access.
    ///
    /// See [Deauthorize Callback URL](https://developers.facebook.com/docs/instagram-basic-display-api/getting-started#deauthorize-callback-url)
    pub fn parse_signed_request(&self, signed: &str) -> Result<Vec<u8>, InstagramError> {
        signed_request::verify(self.config().client_secret().as_bytes(), signed)
    }

    /// Same as [`Client::parse_signed_request`] with the data decoded
    pub fn parse_signed_payload(
        &self,
        signed: &str,
    ) -> Result<SignedRequestPayload, InstagramError> {
        signed_request::verify_payload(self.config().client_secret().as_bytes(), signed)
    }
}
