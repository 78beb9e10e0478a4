//! Crate-internal tracing hooks.
//!
//! Events are only emitted with the `tracing` feature; otherwise the macros
//! expand to nothing and the library stays silent.

macro_rules! dag_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! dag_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

pub(crate) use dag_debug;
pub(crate) use dag_trace;
