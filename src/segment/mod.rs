//! Line segmentation module.
//!
//! This module splits a logical line on commas and feeds each surviving
//! fragment to the scanner. The comma acts purely as a delimiter at this
//! layer: it is consumed by the split and never reaches the scanner, so a
//! `Comma` token can only come from scanning a raw string directly.

pub mod segment;

#[cfg(test)]
mod tests;
