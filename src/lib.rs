/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Instagram Basic
//!
//! This library was created for working with the Instagram Basic Display API.
//!
//! For further details on the Rest API refer to the [Basic Display API Docs](https://developers.facebook.com/docs/instagram-basic-display-api)
//!
//! ## Features
//!
//! - OAuth authorization redirect and code exchange
//! - Long lived token exchange and refresh
//! - User profile, user media (with paging), media data and album contents
//! - Verification of signed requests sent to the deauthorize and data deletion callbacks
//!
//! *Responses are returned as the raw body text. Deserializing them is left up to the
//! consumer of this library, as is storing the tokens.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! instagram_basic = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to register an app with the Instagram Basic Display product first**
//!
//! ```rust,no_run
//! use instagram_basic::basic_display::{Client, Config, MediaField, Next};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Paging {
//!     next: Option<Next>,
//! }
//!
//! #[derive(Deserialize)]
//! struct MediaPage {
//!     data: Vec<serde_json::Value>,
//!     paging: Option<Paging>,
//! }
//!
//! async fn all_media(client: &Client, access_token: &str) -> anyhow::Result<Vec<serde_json::Value>> {
//!     let fields = [MediaField::Id, MediaField::Caption, MediaField::MediaUrl];
//!     let mut media = Vec::new();
//!     let mut next: Option<Next> = None;
//!     loop {
//!         let body = client.user_media(access_token, &fields, next.as_ref()).await?;
//!         let page: MediaPage = serde_json::from_str(&body)?;
//!         media.extend(page.data);
//!         next = page.paging.and_then(|p| p.next);
//!         if next.is_none() {
//!             break;
//!         }
//!     }
//!     Ok(media)
//! }
//! ```
//!
pub mod basic_display;
