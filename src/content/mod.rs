use std::io;
use std::io::ErrorKind;
use std::num::NonZeroU32;

use serde::Deserialize;

use crate::util::published_at::PublishedAt;

pub mod content_file;
pub mod parsing_utils;
pub mod post_loader;

/// One blog post as consumed by the card renderer. JSON records use the
/// camelCase names of the content exports it is usually read from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: PublishedAt,
    pub image: PostImage,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostImage {
    pub file_path: String,
    #[serde(default)]
    pub blurhash_data_url: String,
    pub width: NonZeroU32,
    pub height: NonZeroU32,
}

impl BlogPost {
    /// Last path segment of the post url, used to address a single post.
    pub fn link(&self) -> &str {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }

    pub fn first_tag(&self) -> Option<&str> {
        self.tags.first().map(|t| t.as_str())
    }

    pub fn validate(&self, require_tag: bool) -> io::Result<()> {
        let mut errors = vec![];
        if self.url.trim().is_empty() {
            errors.push("url is empty");
        }
        if self.title.trim().is_empty() {
            errors.push("title is empty");
        }
        if self.image.file_path.trim().is_empty() {
            errors.push("image file path is empty");
        }
        if require_tag && self.tags.is_empty() {
            errors.push("at least one tag is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(io::Error::new(ErrorKind::InvalidData, format!("Invalid post '{}': {}", self.title, errors.join(", "))))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::sample_post;

    use super::*;

    #[test]
    fn test_link() {
        let mut post = sample_post();
        assert_eq!(post.link(), "post-1");

        post.url = "/blogs/post-2/".to_string();
        assert_eq!(post.link(), "post-2");

        post.url = "post-3".to_string();
        assert_eq!(post.link(), "post-3");
    }

    #[test]
    fn test_validate() {
        let post = sample_post();
        assert!(post.validate(true).is_ok());

        let mut no_tags = sample_post();
        no_tags.tags.clear();
        assert!(no_tags.validate(false).is_ok());
        let err = no_tags.validate(true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("at least one tag is required"));

        let mut broken = sample_post();
        broken.url = " ".to_string();
        broken.image.file_path = "".to_string();
        let err = broken.validate(false).unwrap_err();
        assert!(err.to_string().contains("url is empty, image file path is empty"));
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "url": "/blogs/post-1",
            "title": "First post",
            "tags": ["rust", "web"],
            "publishedAt": "2024-01-05T10:00:00.000Z",
            "image": {
                "filePath": "../public/img/post1.jpg",
                "blurhashDataUrl": "data:image/png;base64,AAAA",
                "width": 1200,
                "height": 800
            }
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post, sample_post());
    }

    #[test]
    fn test_deserialize_zero_width() {
        let json = r#"{
            "url": "/blogs/post-1",
            "title": "First post",
            "publishedAt": "2024-01-05",
            "image": { "filePath": "img.jpg", "width": 0, "height": 800 }
        }"#;
        assert!(serde_json::from_str::<BlogPost>(json).is_err());
    }
}
