//! Tracing utilities for statement compilation.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site. The feature check happens in the *calling* crate, so
//! each crate that expands them declares its own `tracing` feature.

/// Emit a debug-level tracing event with the compiled SQL text and parameter count.
///
/// ```ignore
/// sqlforge_trace_sql!("predicate", &sql, sink_len);
/// ```
#[macro_export]
macro_rules! sqlforge_trace_sql {
    ($kind:literal, $sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(kind = $kind, sql = %$sql, params = $param_count, "sqlforge.compile");
    };
}

/// Emit a trace-level event for schema cache activity.
///
/// ```ignore
/// sqlforge_trace_schema!("fill", schema.name());
/// ```
#[macro_export]
macro_rules! sqlforge_trace_schema {
    ($event:literal, $table:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(event = $event, table = %$table, "sqlforge.schema");
    };
}
