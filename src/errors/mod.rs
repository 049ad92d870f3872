//! Error types and error handling for the tokenizer.
//!
//! This module defines the error types used when constructing a pattern
//! table. It includes:
//!
//! - Error variants for rejected rule sets
//! - Error formatting and display functionality
//!
//! Unmatched input text is never an error: the scanner classifies it as an
//! `Unknown` token and keeps going. Only a broken rule table is fatal, and
//! it is rejected before any scan runs.

pub mod errors;
