use std::fmt;

/// Request-scoped logger.
///
/// Every line carries the request ID so that one request's guard decision
/// can be followed across extractor, verifier, resolver, and authorizer.
/// Callers pass only identifiers and reasons, never raw credentials.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLog<'a> {
    request_id: &'a str,
}

impl<'a> RequestLog<'a> {
    pub(crate) fn new(request_id: &'a str) -> Self {
        Self { request_id }
    }

    /// Returns the request ID associated with this logger.
    pub(crate) fn request_id(&self) -> &'a str {
        self.request_id
    }

    pub(crate) fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(request_id = %self.request_id, "{}", args);
    }

    pub(crate) fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(request_id = %self.request_id, "{}", args);
    }

    pub(crate) fn trace(&self, args: fmt::Arguments<'_>) {
        tracing::trace!(request_id = %self.request_id, "{}", args);
    }
}
