// src/storage/mod.rs

//! Storage abstraction for generated blog posts.
//!
//! Each invocation writes one object keyed by the wall-clock time of the
//! write, under a fixed prefix:
//!
//! ```text
//! blog-output/
//! ├── 091533.txt
//! └── 142207.txt
//! ```

pub mod s3;

use async_trait::async_trait;
use chrono::{Local, Timelike};

use crate::error::Result;

// Re-export for convenience
pub use s3::S3Storage;

/// Trait for blog post storage backends.
#[async_trait]
pub trait BlogStorage: Send + Sync {
    /// Write `content` as a new object at `key`.
    async fn put_blog(&self, key: &str, content: &str) -> Result<()>;
}

/// Derive the object key for a post written now.
///
/// The key carries only an HHMMSS fragment, no date and no randomness, so
/// two writes within the same second collide and the later one wins. Kept
/// as-is to preserve the existing bucket layout.
pub fn blog_key(prefix: &str) -> String {
    blog_key_at(prefix, Local::now())
}

fn blog_key_at<T: Timelike>(prefix: &str, time: T) -> String {
    format!(
        "{}/{:02}{:02}{:02}.txt",
        prefix.trim_end_matches('/'),
        time.hour(),
        time.minute(),
        time.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_key_is_zero_padded() {
        let time = NaiveTime::from_hms_opt(9, 5, 3).unwrap();
        assert_eq!(blog_key_at("blog-output", time), "blog-output/090503.txt");
    }

    #[test]
    fn test_key_trims_trailing_slash_in_prefix() {
        let time = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        assert_eq!(blog_key_at("blog-output/", time), "blog-output/235959.txt");
    }

    #[test]
    fn test_key_matches_expected_pattern() {
        let key = blog_key("blog-output");
        let fragment = key
            .strip_prefix("blog-output/")
            .and_then(|rest| rest.strip_suffix(".txt"))
            .unwrap();
        assert_eq!(fragment.len(), 6);
        assert!(fragment.chars().all(|c| c.is_ascii_digit()));
    }
}
