pub mod config;
pub mod logger;
pub mod server;
pub mod card;
pub mod content;
pub mod view;
pub mod query_string;
mod paginator;
mod post_list;
mod text_utils;
pub mod util;
#[cfg(test)]
mod test_data;
