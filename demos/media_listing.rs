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
use instagram_basic::basic_display::{Client, Config, MediaField, Next};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct Media {
    id: String,
    media_type: String,
    caption: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Paging {
    next: Option<Next>,
}

#[derive(Deserialize, Debug)]
struct MediaPage {
    data: Vec<Media>,
    paging: Option<Paging>,
}

// Lists every media item of the user and the children of any carousel albums.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let client = Client::new(Config::new(
        std::env::var("INSTAGRAM_CLIENT_ID")?,
        std::env::var("INSTAGRAM_CLIENT_SECRET")?,
        std::env::var("INSTAGRAM_REDIRECT_URI")?,
    ));
    let token = std::env::var("INSTAGRAM_ACCESS_TOKEN")?;
    let fields = [MediaField::Id, MediaField::MediaType, MediaField::Caption];

    let mut next: Option<Next> = None;
    loop {
        let resp = client.user_media(&token, &fields, next.as_ref()).await?;
        let page: MediaPage = serde_json::from_str(&resp)?;

        for media in page.data {
            println!(
                "{} {} {}",
                media.id,
                media.media_type,
                media.caption.as_deref().unwrap_or_default()
            );
            if media.media_type == "CAROUSEL_ALBUM" {
                let children = client
                    .album_contents(media.id.parse()?, &token, &[MediaField::Id, MediaField::MediaUrl])
                    .await?;
                println!("    children: {}", children);
            }
        }

        next = page.paging.and_then(|p| p.next);
        if next.is_none() {
            break;
        }
    }

    Ok(())
}
