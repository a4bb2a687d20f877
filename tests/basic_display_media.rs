/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use futures::future::join_all;
    use httpmock::prelude::*;
    use instagram_basic::basic_display::{
        ApiOrigins, Client, InstagramError, MediaField, Next, UserField,
    };

    #[tokio::test]
    async fn user_profile_joins_fields_in_order() {
        let server = MockServer::start_async().await;
        let body = r#"{"id":"17841405793187218","username":"jayposiris"}"#;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/me")
                    .query_param("fields", "username,id,account_type")
                    .query_param("access_token", "tok");
                then.status(200).body(body);
            })
            .await;

        let client = helpers::mock_client(&server);
        let resp = client
            .user_profile(
                "tok",
                &[UserField::Username, UserField::Id, UserField::AccountType],
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(resp, body);
    }

    #[tokio::test]
    async fn empty_field_list_sends_empty_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/me")
                    .query_param("fields", "")
                    .query_param("access_token", "tok");
                then.status(200).body("{}");
            })
            .await;

        let client = helpers::mock_client(&server);
        let no_fields: [&str; 0] = [];
        client.user_profile("tok", &no_fields).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn user_media_first_page() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/me/media")
                    .query_param("fields", "id,caption")
                    .query_param("access_token", "tok");
                then.status(200).body(r#"{"data":[{"id":"1"}]}"#);
            })
            .await;

        let client = helpers::mock_client(&server);
        let resp = client
            .user_media("tok", &["id", "caption"], None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(resp, r#"{"data":[{"id":"1"}]}"#);
    }

    #[tokio::test]
    async fn continuation_is_fetched_verbatim() {
        let server = MockServer::start_async().await;
        let first_page = server
            .mock_async(|when, then| {
                when.method(GET).path("/me/media");
                then.status(200).body("first");
            })
            .await;
        let next_page = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/me/media")
                    .query_param("after", "QVFIUmlp")
                    .query_param("fields", "id,caption")
                    .query_param("access_token", "tok");
                then.status(200).body("second");
            })
            .await;

        let client = helpers::mock_client(&server);
        let next = Next::new(server.url(
            "/v1/me/media?access_token=tok&fields=id,caption&limit=25&after=QVFIUmlp",
        ));

        // The fields here differ from the ones in the link and must not be used
        let resp = client
            .user_media("other-token", &[MediaField::MediaUrl], Some(&next))
            .await
            .unwrap();
        assert_eq!(resp, "second");

        let resp = client.next_page(&next).await.unwrap();
        assert_eq!(resp, "second");

        next_page.assert_calls_async(2).await;
        first_page.assert_calls_async(0).await;
    }

    #[tokio::test]
    async fn media_data_and_album_contents() {
        let server = MockServer::start_async().await;
        let media = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/17895695668004550")
                    .query_param("fields", "id,media_type,media_url")
                    .query_param("access_token", "tok");
                then.status(200).body("media");
            })
            .await;
        let album = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/17895695668004550/children")
                    .query_param("fields", "id,media_url")
                    .query_param("access_token", "tok");
                then.status(200).body("children");
            })
            .await;

        let client = helpers::mock_client(&server);
        let resp = client
            .media_data(
                17895695668004550,
                "tok",
                &[MediaField::Id, MediaField::MediaType, MediaField::MediaUrl],
            )
            .await
            .unwrap();
        assert_eq!(resp, "media");

        let resp = client
            .album_contents(17895695668004550, "tok", &["id", "media_url"])
            .await
            .unwrap();
        assert_eq!(resp, "children");

        media.assert_async().await;
        album.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_is_passed_through() {
        let server = MockServer::start_async().await;
        let body = r#"{"error":{"message":"Invalid OAuth access token.","type":"OAuthException","code":190}}"#;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/me");
                then.status(400).body(body);
            })
            .await;

        let client = helpers::mock_client(&server);
        let resp = client.user_profile("expired", &["id"]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(resp, body);
    }

    #[tokio::test]
    async fn server_error_is_passed_through() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/me/media");
                then.status(503).body("unavailable");
            })
            .await;

        let client = helpers::mock_client(&server);
        let resp = client.user_media("tok", &["id"], None).await.unwrap();
        assert_eq!(resp, "unavailable");
    }

    #[tokio::test]
    async fn connection_failure_is_a_request_error() {
        helpers::init_logging();
        // Nothing listens on port 1
        let client = Client::from_parts(
            helpers::test_config(),
            reqwest::Client::new(),
            ApiOrigins::new("http://127.0.0.1:1", "http://127.0.0.1:1"),
        );

        let err = client.user_profile("tok", &["id"]).await.unwrap_err();
        assert!(matches!(err, InstagramError::Request(_)));

        let err = client.access_token("code").await.unwrap_err();
        assert!(matches!(err, InstagramError::Request(_)));
    }

    #[tokio::test]
    async fn bad_continuation_is_a_url_error() {
        let client = Client::new(helpers::test_config());
        let err = client.next_page(&Next::from("not a url")).await.unwrap_err();
        assert!(matches!(err, InstagramError::UrlParsing(_)));
    }

    #[tokio::test]
    async fn clones_share_one_client_concurrently() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/me");
                then.status(200).body("{}");
            })
            .await;

        let client = helpers::mock_client(&server);
        let requests = (0..8).map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.user_profile("tok", &["id"]).await })
        });

        for resp in join_all(requests).await {
            assert_eq!(resp.unwrap().unwrap(), "{}");
        }
        mock.assert_calls_async(8).await;
    }
}
