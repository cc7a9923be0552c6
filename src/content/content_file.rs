use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::content::{BlogPost, PostImage};
use crate::content::parsing_utils::{parse_post_header, parse_title_markdown};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentFormat {
    /// Markdown with a link-reference header
    Markdown,
    /// One record or an array of records
    Json,
}

pub struct ContentFile {
    pub link: String,
    pub file_path: PathBuf,
    pub format: ContentFormat,
    pub raw_content: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPosts {
    Many(Vec<BlogPost>),
    One(Box<BlogPost>),
}

impl ContentFile {
    pub fn from_file(link: String, file_path: PathBuf) -> io::Result<ContentFile> {
        let format = match Self::guess_type(&file_path) {
            None => return Err(io::Error::new(ErrorKind::Unsupported, format!("Could not guess the type of the file {}", file_path.display()))),
            Some(format) => format,
        };

        let raw_content = fs::read_to_string(&file_path)?;

        Ok(ContentFile {
            link,
            file_path,
            format,
            raw_content,
        })
    }

    pub fn guess_type(file_name: &Path) -> Option<ContentFormat> {
        match file_name.extension().and_then(|ext| ext.to_str()) {
            Some("md") => Some(ContentFormat::Markdown),
            Some("json") => Some(ContentFormat::Json),
            _ => None,
        }
    }

    /// Parses the file into posts. Markdown files without a URL header get
    /// `{url_prefix}/{link}`.
    pub fn parse(&self, url_prefix: &str) -> io::Result<Vec<BlogPost>> {
        match self.format {
            ContentFormat::Markdown => Ok(vec![self.parse_markdown(url_prefix)?]),
            ContentFormat::Json => self.parse_json(),
        }
    }

    fn parse_markdown(&self, url_prefix: &str) -> io::Result<BlogPost> {
        let (header, lines, maybe_line) = parse_post_header(&self.file_path, self.raw_content.lines())?;
        let (title, _lines) = parse_title_markdown(lines, maybe_line);

        let url = header.url.unwrap_or_else(|| {
            format!("{}/{}", url_prefix.trim_end_matches('/'), self.link)
        });
        let (width, height) = header.image_size;

        Ok(BlogPost {
            url,
            title,
            tags: header.tags,
            published_at: header.date,
            image: PostImage {
                file_path: header.image,
                blurhash_data_url: header.blur,
                width,
                height,
            },
        })
    }

    fn parse_json(&self) -> io::Result<Vec<BlogPost>> {
        let posts = serde_json::from_str::<JsonPosts>(&self.raw_content).map_err(|e| {
            io::Error::new(ErrorKind::InvalidData, format!("Error parsing post records: {} - file={}", e, self.file_path.display()))
        })?;

        Ok(match posts {
            JsonPosts::Many(posts) => posts,
            JsonPosts::One(post) => vec![*post],
        })
    }
}
