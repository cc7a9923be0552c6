pub mod published_at;
