//! Ordered, keyed collections.
//!
//! This module provides [`Collection`], an insertion-ordered container of
//! unique-keyed entries, together with the combinator surface functional
//! pipelines are built from.
//!
//! # Key Modes
//!
//! A collection is either in *list mode* — dense sequential `usize` keys,
//! exposed through the [`Sequence`] alias — or in *associative mode* with
//! caller-supplied keys. Operations that cannot preserve a meaningful key
//! association (`concat`, `collapse`, `flat_map`, `zip`) always produce a
//! sequentially keyed [`Sequence`].
//!
//! # Examples
//!
//! ## List mode
//!
//! ```rust
//! use collectra::collection::Sequence;
//!
//! let doubled: Sequence<i32> = Sequence::from_values([1, 2, 3]).map(|x| x * 2);
//! assert_eq!(doubled.into_values(), vec![2, 4, 6]);
//! ```
//!
//! ## Associative mode
//!
//! ```rust
//! use collectra::collection::Collection;
//!
//! let scores = Collection::from_entries([("Adi", 100), ("Budi", 80), ("Joko", 90)]);
//! let passing = scores.filter(|score| *score >= 90);
//!
//! // Surviving entries keep their original keys.
//! assert_eq!(passing.into_entries(), vec![("Adi", 100), ("Joko", 90)]);
//! ```
//!
//! ## Grouping
//!
//! ```rust
//! use collectra::collection::Sequence;
//!
//! let people = Sequence::from_values([("Adi", "IT"), ("Eko", "Design"), ("Salafudin", "IT")]);
//! let by_department = people.map_to_groups(|(name, department)| (department, name));
//!
//! assert_eq!(by_department.len(), 2);
//! assert_eq!(
//!     by_department.get(&"IT").map(|group| group.clone().into_values()),
//!     Some(vec!["Adi", "Salafudin"])
//! );
//! ```
//!
//! # Errors
//!
//! Operations with a precondition fail fast with a [`CollectionError`]
//! describing the exact failure kind; see the error type for the full
//! catalogue.

mod error;
mod keyed;

pub use error::CollectionError;
pub use keyed::Collection;
pub use keyed::CollectionEntries;
pub use keyed::CollectionIntoIterator;
pub use keyed::CollectionIterator;
pub use keyed::Sequence;
