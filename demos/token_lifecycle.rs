/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate instagram_basic;

use anyhow::Result;
use dotenvy::dotenv;
use instagram_basic::basic_display::{Client, Config};
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Debug)]
struct ShortLivedToken {
    access_token: String,
    user_id: u64,
}

#[derive(Deserialize, Debug)]
struct LongLivedToken {
    access_token: String,
    expires_in: u64,
}

// Walks through authorize -> code exchange -> long lived token -> refresh.
// Run once without INSTAGRAM_AUTH_CODE to get the redirect to open in a browser, then
// again with the code Instagram appended to the redirect uri.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::new(
        std::env::var("INSTAGRAM_CLIENT_ID")?,
        std::env::var("INSTAGRAM_CLIENT_SECRET")?,
        std::env::var("INSTAGRAM_REDIRECT_URI")?,
    );
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let client = Client::with_http_client(config, http);

    let Ok(code) = std::env::var("INSTAGRAM_AUTH_CODE") else {
        println!("Open this to authorize: {}", client.authorize_redirect());
        return Ok(());
    };

    let resp = client.access_token(&code).await?;
    let short: ShortLivedToken = serde_json::from_str(&resp)
        .map_err(|e| anyhow::anyhow!("Code exchange failed: {} ({})", resp, e))?;
    println!("Short lived token for user {}", short.user_id);

    let resp = client.long_lived_token(&short.access_token).await?;
    let long: LongLivedToken = serde_json::from_str(&resp)?;
    println!("Long lived token valid for {} seconds", long.expires_in);

    let resp = client.refresh_long_lived_token(&long.access_token).await?;
    let refreshed: LongLivedToken = serde_json::from_str(&resp)?;
    println!("Refreshed, now valid for {} seconds", refreshed.expires_in);

    Ok(())
}
