use std::{fs, io};
use std::path::{Path, PathBuf};

use crate::content::content_file::ContentFile;

/// A post file on disk and the link it is addressed by.
#[derive(Debug, Clone, PartialEq)]
pub struct PostLink {
    pub post_name: String,
    pub post_path: PathBuf,
}

pub struct PostList {
    pub root_dir: PathBuf,
    pub index_base_name: String,
}

impl PostList {
    /// Post files directly under the root plus one index file per post directory.
    /// The result is sorted by link so listings are stable.
    pub fn retrieve(&self) -> io::Result<Vec<PostLink>> {
        let mut posts = vec![];

        for dir in Self::list_dirs(&self.root_dir)? {
            let Some(file_name) = Self::find_index(&dir, &self.index_base_name)? else {
                continue;
            };
            let post_path = dir.join(file_name);
            let Some(post_name) = Self::post_name(&post_path, &self.index_base_name) else {
                continue;
            };
            posts.push(PostLink {
                post_name,
                post_path,
            });
        }

        for post_path in self.retrieve_files()? {
            let Some(post_name) = post_path.file_stem().and_then(|n| n.to_str()) else {
                continue;
            };
            posts.push(PostLink {
                post_name: post_name.to_string(),
                post_path: post_path.clone(),
            });
        }

        posts.sort_by(|a, b| a.post_name.cmp(&b.post_name));
        Ok(posts)
    }

    /// Name a post file is addressed by: the parent directory for index
    /// files (`post-1/index.md` is `post-1`), the file stem otherwise.
    pub fn post_name(post_path: &Path, index_base_name: &str) -> Option<String> {
        let file_name = post_path.file_name()?.to_str()?;
        let parent_name = post_path.parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str());

        match parent_name {
            Some(dir_name) if file_name.contains(index_base_name) => Some(dir_name.to_string()),
            _ => post_path.file_stem()?.to_str().map(|s| s.to_string()),
        }
    }

    fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = vec![];
        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() && ContentFile::guess_type(&entry.path()).is_some() {
                files.push(entry.path());
            }
        }
        Ok(files)
    }

    fn list_dirs(posts_dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs: Vec<PathBuf> = vec![];
        for entry in fs::read_dir(posts_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        Ok(dirs)
    }

    fn find_index(dir: &Path, base_name: &str) -> io::Result<Option<String>> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if file_name.contains(base_name) && ContentFile::guess_type(&path).is_some() {
                return Ok(Some(file_name.to_string()));
            }
        }

        Ok(None)
    }
}
