use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::card::sizes::{default_breakpoints, Breakpoint, SizesHint, DEFAULT_FALLBACK};
use crate::card::{CardOptions, DatePattern, DEFAULT_DATE_FORMAT, DEFAULT_PUBLIC_PREFIX};
use crate::content::post_loader::PostLoader;

#[derive(Deserialize)]
pub struct Paths {
    /// Optional overrides for card.tpl and cardlist.tpl
    pub template_dir: Option<PathBuf>,
    pub public_dir: PathBuf,
    pub posts_dir: PathBuf,
}

#[derive(Deserialize)]
pub struct Defaults {
    #[serde(default = "default_index_base_name")]
    pub index_base_name: String,
    pub page_size: u32,
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
}

#[derive(Deserialize)]
#[serde(default)]
pub struct Card {
    pub public_prefix: String,
    pub date_format: String,
    pub require_tag: bool,
    pub sizes: Vec<Breakpoint>,
    pub default_size: String,
}

impl Default for Card {
    fn default() -> Self {
        Card {
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            require_tag: false,
            sizes: default_breakpoints(),
            default_size: DEFAULT_FALLBACK.to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub defaults: Defaults,
    #[serde(default)]
    pub card: Card,
    pub server: Server,
    pub log: Option<Log>,
}

fn default_index_base_name() -> String {
    "index".to_string()
}

fn default_url_prefix() -> String {
    "/blogs".to_string()
}

impl Config {
    pub fn card_options(&self) -> io::Result<CardOptions> {
        let date_pattern = DatePattern::new(&self.card.date_format)
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, format!("Error in [card] date_format: {}", e)))?;

        Ok(CardOptions {
            public_prefix: self.card.public_prefix.clone(),
            date_pattern,
            sizes: SizesHint::new(self.card.sizes.clone(), &self.card.default_size),
        })
    }

    pub fn post_loader(&self) -> PostLoader {
        PostLoader {
            posts_dir: self.paths.posts_dir.clone(),
            index_base_name: self.defaults.index_base_name.clone(),
            url_prefix: self.defaults.url_prefix.clone(),
            require_tag: self.card.require_tag,
        }
    }

    /// Template from `template_dir` when present there, the built-in one otherwise.
    pub fn read_template(&self, file_name: &str, builtin: &str) -> io::Result<String> {
        match self.paths.template_dir {
            Some(ref dir) if dir.join(file_name).exists() => fs::read_to_string(dir.join(file_name)),
            _ => Ok(builtin.to_string()),
        }
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    let Some(str_path) = path.to_str() else {
        return path;
    };
    if !str_path.starts_with("${exe_dir}") {
        return path;
    }

    match env::current_exe().ok().as_deref().and_then(Path::parent).and_then(Path::to_str) {
        Some(exe_dir) => PathBuf::from(str_path.replace("${exe_dir}", exe_dir)),
        None => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if cfg.defaults.page_size == 0 {
        return Err(io::Error::new(ErrorKind::InvalidData, "[defaults] page_size must be greater than 0"));
    }
    // Fail early instead of on the first rendered card
    cfg.card_options()?;

    cfg.paths = Paths {
        template_dir: cfg.paths.template_dir.map(parse_path),
        public_dir: parse_path(cfg.paths.public_dir),
        posts_dir: parse_path(cfg.paths.posts_dir),
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
