use std::iter::FusedIterator;

/// The Fibonacci numbers 1, 1, 2, 3, 5, 8, ... computed with two running values.
///
/// The stream ends after the largest Fibonacci number which fits in an `i64`.
#[derive(Debug, Clone, Copy)]
pub struct FibonacciStream {
    previous: i64,
    current: Option<i64>,
    num_emitted: usize,
}

impl FibonacciStream {
    pub fn new() -> FibonacciStream {
        FibonacciStream {
            previous: 0,
            current: Some(1),
            num_emitted: 0,
        }
    }

    /// The number of values which have been emitted so far.
    pub fn num_emitted(&self) -> usize {
        self.num_emitted
    }
}

impl Default for FibonacciStream {
    fn default() -> Self {
        FibonacciStream::new()
    }
}

impl Iterator for FibonacciStream {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current?;

        self.current = self.previous.checked_add(value);
        self.previous = value;
        self.num_emitted += 1;

        Some(value)
    }
}

impl FusedIterator for FibonacciStream {}
