use std::collections::HashSet;
use std::io;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use spdlog::{debug, info, warn};

use crate::content::BlogPost;
use crate::content::content_file::ContentFile;
use crate::post_list::PostList;

pub struct PostLoader {
    pub posts_dir: PathBuf,
    pub index_base_name: String,
    pub url_prefix: String,
    pub require_tag: bool,
}

impl PostLoader {
    /// Loads every post under `posts_dir`, newest first. Files that fail to
    /// parse or validate are logged and skipped. Only a missing or unreadable
    /// posts directory is an error.
    pub fn load(&self) -> io::Result<Vec<BlogPost>> {
        let post_list = PostList {
            root_dir: self.posts_dir.clone(),
            index_base_name: self.index_base_name.clone(),
        };

        let mut posts = vec![];
        for link in post_list.retrieve()? {
            debug!("Loading post {} from {}", link.post_name, link.post_path.display());
            match self.parse_file(link.post_name, link.post_path.clone()) {
                Ok(mut loaded) => posts.append(&mut loaded),
                Err(e) => warn!("Skipping {}: {}", link.post_path.display(), e),
            }
        }

        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        for link in duplicate_links(&posts) {
            warn!("More than one post is addressed as {}. Only the newest one is reachable as a single card", link);
        }
        info!("Loaded {} posts from {}", posts.len(), self.posts_dir.display());
        Ok(posts)
    }

    /// Loads a single post file, addressed the same way `load` addresses it.
    /// Invalid records are logged and skipped.
    pub fn load_file(&self, path: &Path) -> io::Result<Vec<BlogPost>> {
        let Some(link) = PostList::post_name(path, &self.index_base_name) else {
            return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post file name {}", path.display())));
        };
        self.parse_file(link, path.to_path_buf())
    }

    fn parse_file(&self, link: String, path: PathBuf) -> io::Result<Vec<BlogPost>> {
        let content_file = ContentFile::from_file(link, path)?;
        let posts = content_file.parse(&self.url_prefix)?;

        let mut valid = Vec::with_capacity(posts.len());
        for post in posts {
            match post.validate(self.require_tag) {
                Ok(()) => valid.push(post),
                Err(e) => warn!("Skipping post from {}: {}", content_file.file_path.display(), e),
            }
        }
        Ok(valid)
    }
}

/// Links shared by more than one post, in the order they are first repeated.
pub fn duplicate_links(posts: &[BlogPost]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = vec![];
    for post in posts {
        let link = post.link();
        if !seen.insert(link) && !duplicates.contains(&link) {
            duplicates.push(link);
        }
    }
    duplicates
}
