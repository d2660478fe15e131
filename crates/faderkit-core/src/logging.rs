//! Log targets and span names.
//!
//! faderkit uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("faderkit::widget=trace,faderkit::ui=debug")
//!     .init();
//! ```
//!
//! The constants below are the targets used throughout the workspace, so
//! filters can be written against them.

/// Names of the spans opened by the UI context.
pub mod span_names {
    /// Routing of a single input event through the UI context.
    pub const DISPATCH: &str = "faderkit::dispatch";
    /// A draw pass over all visible widgets.
    pub const DRAW: &str = "faderkit::draw";
}

/// One target per subsystem, for `EnvFilter` directives.
pub mod targets {
    /// Listener bookkeeping and emission.
    pub const SIGNAL: &str = "faderkit_core::signal";
    /// Widget interaction state machine.
    pub const WIDGET: &str = "faderkit::widget";
    /// UI context: widget storage, routing, groups and themes.
    pub const UI: &str = "faderkit::ui";
    /// Directory scanning utilities.
    pub const FILE: &str = "faderkit::file";
    /// Toolkit configuration loading.
    pub const CONFIG: &str = "faderkit::config";
    /// Audio-sample loading.
    pub const SAMPLE: &str = "faderkit_multimedia::sample";
}
