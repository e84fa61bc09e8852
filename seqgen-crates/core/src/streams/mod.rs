//! Lazy, unbounded number streams which the rules draw their values from.
//!
//! Both streams are plain [`Iterator`]s over `i64`. Every rule which needs one creates a fresh
//! instance and owns it exclusively, so restarting a stream means constructing a new one.
mod fibonacci_stream;
mod prime_stream;

pub use fibonacci_stream::FibonacciStream;
pub use prime_stream::PrimeStream;
