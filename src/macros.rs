/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so call sites carry no cost and no
/// `cfg` noise. Arguments follow the `tracing` event syntax.
///
/// ```ignore
/// trace_op!(op = "merge_sort", len = input.len());
/// ```
macro_rules! trace_op {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)+);
    };
}

/// Like [`trace_op!`], at `debug` level. Used on error paths.
macro_rules! debug_op {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)+);
    };
}
