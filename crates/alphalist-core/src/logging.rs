//! Logging facilities for Alphalist.
//!
//! Alphalist uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("alphalist=debug")
//!     .init();
//! ```
//!
//! Section builds and layout rebuilds are wrapped in a [`PerfSpan`], so a
//! subscriber with span timing shows how long each rebuild took.

/// Span names used throughout Alphalist for tracing.
pub mod span_names {
    /// Section sequence rebuild.
    pub const BUILD_SECTIONS: &str = "alphalist::build_sections";
    /// Layout offset table rebuild.
    pub const BUILD_LAYOUT: &str = "alphalist::build_layout";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "alphalist_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "alphalist_core::signal";
    /// Sectioning target.
    pub const MODEL: &str = "alphalist::model";
    /// Layout offset table target.
    pub const LAYOUT: &str = "alphalist::layout";
    /// Letter-index navigation target.
    pub const NAVIGATION: &str = "alphalist::navigation";
    /// List shell target.
    pub const WIDGET: &str = "alphalist::widget";
    /// Performance spans.
    pub const PERF: &str = "alphalist::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of rebuilds.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "alphalist::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[macro_export]
macro_rules! alphalist_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "alphalist_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! alphalist_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "alphalist_core", $($arg)*)
    };
}
