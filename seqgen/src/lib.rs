//! # seqgen
//! seqgen produces finite, deterministic sequences from a catalog of named rules. Every sequence
//! is described by a starting value, a rule, and a requested length:
//!
//! ```rust
//! # use seqgen::SequenceGenerator;
//! let generator = SequenceGenerator::new("5/6", "separate_patterns", 7)
//!     .expect("separate_patterns is a known rule");
//!
//! assert_eq!(
//!     generator.sequence().to_strings(),
//!     vec!["5/6", "14/7", "23/9", "32/10", "41/12", "50/13", "59/15"]
//! );
//! ```
//!
//! Rules are identified by name; an unknown name is the one thing construction rejects up front:
//!
//! ```rust
//! # use seqgen::SequenceGenerationError;
//! # use seqgen::SequenceGenerator;
//! let result = SequenceGenerator::new(0, "add_squares", 5);
//!
//! assert_eq!(
//!     result.map(|generator| generator.into_sequence()),
//!     Err(SequenceGenerationError::UnknownRule("add_squares".to_owned()))
//! );
//! ```
//!
//! The rules which need prime numbers or Fibonacci numbers draw them from lazy streams, which are
//! available as ordinary iterators:
//!
//! ```rust
//! # use seqgen::streams::PrimeStream;
//! let primes = PrimeStream::new().take(5).collect::<Vec<_>>();
//!
//! assert_eq!(primes, vec![2, 3, 5, 7, 11]);
//! ```
//!
//! ## Feature Flags
//! - `debug-checks`: Enable the more expensive internal assertions of the rule engine.
pub use seqgen_core::*;
