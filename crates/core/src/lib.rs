//! Core library for booksearch
//!
//! This crate implements the **Functional Core** of the booksearch
//! application, following the Functional Core - Imperative Shell
//! architectural pattern.
//!
//! # Architecture Overview
//!
//! The booksearch project uses a two-crate layout to enforce separation of
//! concerns:
//!
//! - **`booksearch_core`** (this crate): Pure transformation functions with zero I/O
//! - **`booksearch`**: HTTP requests, terminal output and orchestration (the Imperative Shell)
//!
//! All functions in this crate are deterministic and side-effect free. They
//! can be exercised with fixture data, so none of the tests need a network
//! connection or any mocking.
//!
//! # Module Organization
//!
//! - [`volumes`]: The volume (book) domain model, the JSON extraction routine
//!   for Google Books API responses, and search phrase handling
//!
//! # Example Usage
//!
//! ```rust
//! use booksearch_core::volumes::extract_books;
//!
//! let body = r#"{
//!     "items": [
//!         { "volumeInfo": { "title": "The Hobbit", "authors": ["J. R. R. Tolkien"] } }
//!     ]
//! }"#;
//!
//! let books = extract_books(body);
//!
//! assert_eq!(books.len(), 1);
//! assert_eq!(books[0].title, "The Hobbit");
//! ```

pub mod volumes;
