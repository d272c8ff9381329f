// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Debug-only diagnostics. Unlike [`crate::logging::log`], nothing here reaches the host's
//! permanent log.

/// Prints a UTF-8 encoded string to the `log` facade at debug level.
pub fn console_log<T: AsRef<str>>(text: T) {
    log::debug!(target: "greeter", "{}", text.as_ref());
}

/// Prints to the console when executing in a debug environment. Otherwise does nothing.
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! console {
    ($($msg:tt)*) => {
        $crate::debug::console_log(format!($($msg)*));
    };
}

/// Prints to the console when executing in a debug environment. Otherwise does nothing.
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! console {
    ($($msg:tt)*) => {{}};
}
