/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod fields;
pub mod paging;
mod parsers;
pub mod signed_request;

pub use api::{ApiClient, ApiParams};
pub use client::*;
pub use config::*;
pub use errors::*;
pub use fields::{MediaField, UserField};
pub use paging::*;
pub use signed_request::{SIGNED_REQUEST_ALGORITHM, SignedRequestPayload, sign_request};
