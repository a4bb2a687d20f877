/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum InstagramError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Signed request is malformed, expected <signature>.<data>")]
    MalformedInput(),

    #[error("Signed request segment is not valid base64url")]
    Decoding(#[from] base64::DecodeError),

    // Never carry the computed digest in here
    #[error("Signed request signature is invalid")]
    InvalidSignature(),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("Signed request uses an unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
