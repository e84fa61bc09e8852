//! # seqgen-core
//! The rule engine of seqgen. A sequence is described by a starting value, one of the rules in
//! the [`Rule`] catalog, and a requested length; the [`SequenceGenerator`] turns such a
//! description into a finite [`Sequence`].
//!
//! Some rules are built on two unbounded lazy streams, the [`PrimeStream`](streams::PrimeStream)
//! and the [`FibonacciStream`](streams::FibonacciStream), which can also be used on their own.
//!
//! ```rust
//! # use seqgen_core::Rule;
//! # use seqgen_core::SequenceGenerator;
//! let generator = SequenceGenerator::with_rule(0, Rule::FractionPattern, 10)
//!     .expect("fraction_pattern never fails");
//!
//! // The fixed table holds six fractions, longer requests are truncated.
//! assert_eq!(
//!     generator.sequence().to_strings(),
//!     vec!["1/7", "7/9", "9/11", "11/15", "15/19", "19/27"]
//! );
//! ```
//!
//! ## Feature Flags
//! - `clap`: Derive `clap::ValueEnum` for [`Rule`].
//! - `debug-checks`: Enable the more expensive internal assertions (e.g. verifying every emitted
//!   prime by trial division).
#[doc(hidden)]
pub mod asserts;
pub(crate) mod basic_types;
pub mod containers;
pub mod rules;
pub mod statistics;
pub mod streams;

pub use convert_case;

// All exports from the API are exported directly from the crate.
mod api;

pub use api::*;

pub use crate::basic_types::Fraction;
pub use crate::basic_types::ParseFractionError;
pub use crate::basic_types::Sequence;
pub use crate::basic_types::SequenceElement;
pub use crate::basic_types::SequenceGenerationError;
pub use crate::rules::Rule;
