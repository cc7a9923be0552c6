use std::io;
use std::io::ErrorKind;
use std::num::NonZeroU32;
use std::path::Path;
use std::str::Lines;

use lazy_static::lazy_static;
use regex::Regex;

use crate::util::published_at::PublishedAt;

/// Metadata block found on top of a markdown post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostHeader {
    pub id: String,
    pub date: PublishedAt,
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub image: String,
    pub image_size: (NonZeroU32, NonZeroU32),
    pub blur: String,
}

fn invalid_data(file_name: &Path, desc: &str) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, format!("{} - file={}", desc, file_name.display()))
}

pub fn parse_post_header<'a>(file_name: &Path, lines: Lines<'a>) -> io::Result<(PostHeader, Lines<'a>, Option<&'a str>)> {
    let mut id: String = "".to_string();
    let mut date: String = "".to_string();
    let mut tags: String = "".to_string();
    let mut url: Option<String> = None;
    let mut image: String = "".to_string();
    let mut image_size: String = "".to_string();
    let mut blur: String = "".to_string();

    let mut lines = lines;
    let mut maybe_line = lines.next();

    // The header may be wrapped in an HTML comment
    let mut start_with_comment = false;

    while let Some(line) = maybe_line {
        let line = line.trim();
        if line.is_empty() {
            maybe_line = lines.next();
            continue;
        }

        if line == "<!--" {
            maybe_line = lines.next();
            start_with_comment = true;
        }
        break;
    }

    while let Some(line) = maybe_line {
        if line.trim().is_empty() {
            maybe_line = lines.next();
            continue;
        }

        let Some((key, val)) = extract_header_key_val(line) else {
            break;
        };

        match key {
            "ID" => id = val.to_string(),
            "DATE" => date = val.to_string(),
            "TAGS" => tags = val.to_string(),
            "URL" => url = Some(val.to_string()),
            "IMAGE" => image = val.to_string(),
            "IMAGE_SIZE" => image_size = val.to_string(),
            "BLUR" => blur = val.to_string(),
            _ => {}
        }
        maybe_line = lines.next();
    }

    if start_with_comment {
        loop {
            let Some(line) = maybe_line else {
                return Err(invalid_data(file_name, "End of comment in the header is missing"));
            };

            let line = line.trim();
            if line == "-->" {
                maybe_line = lines.next();
                break;
            }

            maybe_line = lines.next();
        }
    }

    if date.is_empty() {
        return Err(invalid_data(file_name, "Post header without DATE"));
    }
    if image.is_empty() {
        return Err(invalid_data(file_name, "Post header without IMAGE"));
    }

    let date = date.parse::<PublishedAt>().map_err(|e| invalid_data(file_name, &e))?;
    let image_size = parse_image_size(&image_size).map_err(|e| invalid_data(file_name, &e))?;

    let header = PostHeader {
        id,
        date,
        tags: extract_tags(&tags),
        url,
        image,
        image_size,
        blur,
    };

    Ok((header, lines, maybe_line))
}

pub fn parse_title_markdown<'a>(lines: Lines<'a>, mut maybe_line: Option<&'a str>) -> (String, Lines<'a>) {
    let mut lines = lines;
    let title = loop {
        match maybe_line {
            Some(line) if line.starts_with("# ") => break line[2..].trim().to_string(),
            Some(_) => maybe_line = lines.next(),
            None => break "".to_string(),
        }
    };
    (title, lines)
}

/// `1200x800` into (width, height)
pub fn parse_image_size(size: &str) -> Result<(NonZeroU32, NonZeroU32), String> {
    let Some((w, h)) = size.trim().split_once(['x', 'X']) else {
        return Err(format!("Image size must look like WIDTHxHEIGHT, got '{}'", size));
    };

    let parse = |dim: &str| -> Result<NonZeroU32, String> {
        dim.trim()
            .parse::<NonZeroU32>()
            .map_err(|_| format!("Invalid image dimension '{}' in '{}'", dim, size))
    };

    Ok((parse(w)?, parse(h)?))
}

fn extract_tags(tags_str: &str) -> Vec<String> {
    tags_str.split(' ')
        .filter(|x| !x.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn extract_header_key_val(line: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref HEADER_REGEX: Regex = Regex::new(r"\[(?P<key>\w+)\]: # \((?P<value>.+)\)").unwrap();
    }

    HEADER_REGEX.captures(line).and_then(|cap| {
        let key = cap.name("key").map(|key| key.as_str());
        let val = cap.name("value").map(|val| val.as_str());
        match (key, val) {
            (Some(key), Some(val)) => Some((key, val)),
            _ => None
        }
    })
}
