/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Signed requests are what Instagram posts to the deauthorize and data deletion callback
//! URLs. They take the form `<signature>.<data>`, both halves base64url encoded without
//! padding, where the signature is an HMAC-SHA256 of the *encoded* data keyed with the app
//! secret.
//!
//! See [Parsing the Signed Request](https://developers.facebook.com/docs/games/gamesonfacebook/login#parsingsr)

use crate::basic_display::errors::InstagramError;
use crate::basic_display::parsers::from_string_or_number;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// The only algorithm Instagram signs callbacks with
pub const SIGNED_REQUEST_ALGORITHM: &str = "HMAC-SHA256";

/// Decoded data of a deauthorize or data deletion callback.
#[derive(Deserialize, Debug, Clone)]
pub struct SignedRequestPayload {
    pub algorithm: String,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,

    #[serde(deserialize_with = "from_string_or_number")]
    pub user_id: String,
}

fn mac_for(secret: &[u8]) -> Result<HmacSha256, InstagramError> {
    // HMAC accepts keys of any length so this never fails in practice
    HmacSha256::new_from_slice(secret).map_err(|_| InstagramError::InvalidSignature())
}

/// Verifies `signed_request` against `secret` and returns the decoded data segment.
pub(crate) fn verify(secret: &[u8], signed_request: &str) -> Result<Vec<u8>, InstagramError> {
    let (encoded_sig, encoded_data) = signed_request
        .split_once('.')
        .ok_or(InstagramError::MalformedInput())?;

    let sig = URL_SAFE_NO_PAD.decode(encoded_sig)?;
    let data = URL_SAFE_NO_PAD.decode(encoded_data)?;

    let mut mac = mac_for(secret)?;
    mac.update(encoded_data.as_bytes());
    // constant time
    mac.verify_slice(&sig).map_err(|_| {
        log::warn!("Rejected signed request with a bad signature");
        InstagramError::InvalidSignature()
    })?;

    Ok(data)
}

/// Verifies `signed_request` and decodes its data as a [`SignedRequestPayload`].
pub(crate) fn verify_payload(
    secret: &[u8],
    signed_request: &str,
) -> Result<SignedRequestPayload, InstagramError> {
    let data = verify(secret, signed_request)?;
    let payload: SignedRequestPayload = serde_json::from_slice(&data)?;
    if !payload.algorithm.eq_ignore_ascii_case(SIGNED_REQUEST_ALGORITHM) {
        return Err(InstagramError::UnsupportedAlgorithm(payload.algorithm));
    }
    Ok(payload)
}

/// Builds a signed request for `data` the same way Instagram does.
///
/// Handy for exercising callback handlers locally.
pub fn sign_request(
    secret: impl AsRef<[u8]>,
    data: impl AsRef<[u8]>,
) -> Result<String, InstagramError> {
    let encoded_data = URL_SAFE_NO_PAD.encode(data);
    let mut mac = mac_for(secret.as_ref())?;
    mac.update(encoded_data.as_bytes());
    let sig = mac.finalize().into_bytes();
    Ok(format!("{}.{}", URL_SAFE_NO_PAD.encode(sig), encoded_data))
}
