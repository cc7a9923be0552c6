use std::num::NonZeroU32;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::content::{BlogPost, PostImage};
use crate::util::published_at::PublishedAt;

pub const MARKDOWN_POST: &str = "<!--
[ID]: # (post-1)
[DATE]: # (2024-01-05 10:00:00.000)
[TAGS]: # (rust web)
[IMAGE]: # (../public/img/post1.jpg)
[IMAGE_SIZE]: # (1200x800)
[BLUR]: # (data:image/png;base64,AAAA)
-->

# First post

Rendering cards from posts stored as markdown files.

<!-- more -->

## Details
";

pub const JSON_POSTS: &str = r#"[
  {
    "url": "/blogs/second-post",
    "title": "Second post",
    "tags": ["design"],
    "publishedAt": "2024-02-10T09:15:00.000Z",
    "image": { "filePath": "../public/img/post2.jpg", "blurhashDataUrl": "", "width": 640, "height": 480 }
  },
  {
    "url": "/blogs/third-post",
    "title": "Third post",
    "tags": [],
    "publishedAt": "2023-12-24",
    "image": { "filePath": "/img/post3.jpg", "width": 300, "height": 300 }
  }
]"#;

pub fn sample_post() -> BlogPost {
    BlogPost {
        url: "/blogs/post-1".to_string(),
        title: "First post".to_string(),
        tags: vec!["rust".to_string(), "web".to_string()],
        published_at: PublishedAt(NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )),
        image: PostImage {
            file_path: "../public/img/post1.jpg".to_string(),
            blurhash_data_url: "data:image/png;base64,AAAA".to_string(),
            width: NonZeroU32::new(1200).unwrap(),
            height: NonZeroU32::new(800).unwrap(),
        },
    }
}
