//! Internal consistency checks with configurable cost.
//!
//! The cheap checks run in every build. The more expensive ones are only enabled by the
//! `debug-checks` feature and in tests.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const SEQGEN_ASSERT_LEVEL_DEFINITION: u8 = SEQGEN_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const SEQGEN_ASSERT_LEVEL_DEFINITION: u8 = SEQGEN_ASSERT_ADVANCED;

pub const SEQGEN_ASSERT_SIMPLE: u8 = 1;
pub const SEQGEN_ASSERT_MODERATE: u8 = 2;
pub const SEQGEN_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! seqgen_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::SEQGEN_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SEQGEN_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! seqgen_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::SEQGEN_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SEQGEN_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! seqgen_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::SEQGEN_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SEQGEN_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
