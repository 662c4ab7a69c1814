//! Social OS Storage Library
//!
//! This crate provides the blob store used for uploaded posters: the `Storage`
//! trait and a local filesystem implementation.
//!
//! # Storage key format
//!
//! Keys are flat filenames: `{32 hex chars}{.jpg|.png}`. A fresh random key is
//! generated for every upload, so concurrent writers never touch the same
//! file and no locking is needed. Key generation and validation live in the
//! `keys` module.

pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult, StoredImage};
