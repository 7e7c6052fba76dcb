/*!
 * Injected externalities for the mapping layer.
 *
 * The mapper is a pure function of its inputs except for two
 * collaborators supplied by the host environment: a unique-id generator
 * and a diagnostic sink. Both are injected through [`BuildContext`] so
 * they can be mocked for deterministic tests.
 */

use log::warn;
use uuid::Uuid;

/// Produces a globally unique string token per call
pub trait IdGenerator {
    /// Create a fresh unique id
    fn create_id(&self) -> String;
}

/// Production id generator backed by random UUIDs
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn create_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Accepts human-readable diagnostics; never fails
pub trait DiagnosticSink {
    /// Report a non-fatal diagnostic
    fn warn(&self, message: &str);
}

/// Production sink forwarding diagnostics to the log facade
pub struct LogDiagnosticSink;

impl DiagnosticSink for LogDiagnosticSink {
    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}

/// The externalities a mapping run needs
pub struct BuildContext<'a> {
    /// Unique-id generator for slide ids
    pub ids: &'a dyn IdGenerator,

    /// Sink for non-fatal diagnostics (date-order violations)
    pub diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> BuildContext<'a> {
    /// Create a context from explicit collaborators
    pub fn new(ids: &'a dyn IdGenerator, diagnostics: &'a dyn DiagnosticSink) -> Self {
        BuildContext { ids, diagnostics }
    }
}

impl Default for BuildContext<'_> {
    fn default() -> Self {
        BuildContext {
            ids: &UuidIdGenerator,
            diagnostics: &LogDiagnosticSink,
        }
    }
}
