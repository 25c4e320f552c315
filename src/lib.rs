//! # collectra
//!
//! An ordered, keyed collection for Rust with functional transformation
//! combinators.
//!
//! ## Overview
//!
//! This library provides [`Collection<K, V>`](collection::Collection), an
//! insertion-ordered container whose entries carry either dense sequential
//! integer keys (list mode, see [`Sequence`](collection::Sequence)) or
//! caller-supplied keys (associative mode). On top of the container sit the
//! transformations functional pipelines are built from:
//!
//! - **Elementwise**: `map`, `map_into`, `map_spread`, `map_to_groups`, `flat_map`
//! - **Filtering**: `filter`, `partition` (key-preserving)
//! - **Combination**: `zip`, `concat`, `combine`, `collapse`
//! - **Aggregation**: `fold`, `reduce`, `sum`, `avg`, `min`, `max`
//! - **Ordering**: `sort`, `sort_desc` (stable, key-preserving)
//! - **Query & rendering**: `first`, `last`, `contains`, `random`, `join`
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize support for [`Collection`](collection::Collection)
//!
//! ## Example
//!
//! ```rust
//! use collectra::prelude::*;
//!
//! let names: Sequence<&str> = Sequence::from_values(["Eko", "Kurniawan", "Khannedy"]);
//! assert_eq!(names.join_final(", ", " and "), "Eko, Kurniawan and Khannedy");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use collectra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
}

pub mod collection;
