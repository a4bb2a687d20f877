/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use httpmock::MockServer;
use instagram_basic::basic_display::{ApiOrigins, Client, Config};

#[allow(dead_code)]
pub(crate) const CLIENT_ID: &str = "990602627938098";
#[allow(dead_code)]
pub(crate) const CLIENT_SECRET: &str = "eb8c7b2c44b4b0d3a1c7";
#[allow(dead_code)]
pub(crate) const REDIRECT_URI: &str = "https://example.com/auth/";

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn test_config() -> Config {
    Config::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URI)
}

// Both origins point at the mock server
#[allow(dead_code)]
pub(crate) fn mock_client(server: &MockServer) -> Client {
    init_logging();
    Client::from_parts(
        test_config(),
        reqwest::Client::new(),
        ApiOrigins::new(server.base_url(), server.base_url()),
    )
}

#[allow(dead_code)]
pub(crate) fn get_live_client() -> anyhow::Result<Client> {
    let client_id = std::env::var("INSTAGRAM_CLIENT_ID")?;
    let client_secret = std::env::var("INSTAGRAM_CLIENT_SECRET")?;
    let redirect_uri = std::env::var("INSTAGRAM_REDIRECT_URI")?;
    init_logging();
    Ok(Client::new(Config::new(client_id, client_secret, redirect_uri)))
}

#[allow(dead_code)]
pub(crate) fn get_live_access_token() -> anyhow::Result<String> {
    Ok(std::env::var("INSTAGRAM_ACCESS_TOKEN")?)
}
