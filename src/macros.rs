/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so call sites carry no cost in default builds.
///
/// ```ignore
/// trace_event!(node = %id, "vertex added");
/// ```
macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)+);
        }
    };
}

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
///
/// Used for operations that were ignored (unknown handles, redundant edits).
macro_rules! debug_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)+);
        }
    };
}
