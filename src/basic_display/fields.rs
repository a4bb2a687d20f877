/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{AsRefStr, EnumString, IntoStaticStr};

/// Fields that can be requested on a User node.
///
/// See [User reference](https://developers.facebook.com/docs/instagram-basic-display-api/reference/user#fields)
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum UserField {
    AccountType,
    Id,
    MediaCount,
    Username,
}

/// Fields that can be requested on a Media node.
///
/// See [Media reference](https://developers.facebook.com/docs/instagram-basic-display-api/reference/media#fields)
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MediaField {
    Caption,
    Id,
    MediaType,
    MediaUrl,
    Permalink,
    ThumbnailUrl,
    Timestamp,
    Username,
}

// Comma joined in the order given. No dedup.
pub(crate) fn join_fields<F: AsRef<str>>(fields: &[F]) -> String {
    fields
        .iter()
        .map(|f| f.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}
