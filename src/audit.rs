//! Audit events for guard decisions.
//!
//! Every terminal guard outcome produces one [`AuditEvent`], emitted as a
//! structured `tracing` event on the [`AUDIT_TARGET`] target. Events hold
//! identifiers and reasons only: never tokens, secrets, or emails.

use std::fmt;

use crate::resource::ResourceKind;

/// `tracing` target used for audit events.
pub const AUDIT_TARGET: &str = "waf_authz::audit";

/// Kind of audit event being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEventKind {
    /// Credential and identity checks
    Authentication,
    /// Admin and resource checks
    Authorization,
}

impl fmt::Display for AuditEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEventKind::Authentication => write!(f, "authentication"),
            AuditEventKind::Authorization => write!(f, "authorization"),
        }
    }
}

/// Outcome of an audited decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// Access granted
    Success,
    /// Access refused
    Denied,
    /// Decision could not be made (client error or store failure)
    Error,
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditOutcome::Success => write!(f, "success"),
            AuditOutcome::Denied => write!(f, "denied"),
            AuditOutcome::Error => write!(f, "error"),
        }
    }
}

/// A structured audit record of one guard decision.
///
/// # Example
///
/// ```
/// use waf_authz::audit::{AuditEvent, AuditEventKind, AuditOutcome};
/// use waf_authz::ResourceKind;
///
/// let event = AuditEvent::new("req-123", AuditEventKind::Authorization, AuditOutcome::Denied)
///     .with_principal(42)
///     .with_resource(ResourceKind::Site, 99)
///     .with_reason("permission denied");
///
/// assert_eq!(event.principal(), Some(42));
/// assert!(event.to_string().contains("resource=site:99"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    request_id: String,
    principal: Option<i64>,
    kind: AuditEventKind,
    outcome: AuditOutcome,
    page: Option<String>,
    resource: Option<(ResourceKind, i64)>,
    reason: Option<String>,
}

impl AuditEvent {
    /// Creates a new audit event with required fields.
    pub fn new(request_id: impl Into<String>, kind: AuditEventKind, outcome: AuditOutcome) -> Self {
        Self {
            request_id: request_id.into(),
            principal: None,
            kind,
            outcome,
            page: None,
            resource: None,
            reason: None,
        }
    }

    /// Sets the acting principal.
    pub fn with_principal(mut self, principal_id: i64) -> Self {
        self.principal = Some(principal_id);
        self
    }

    /// Sets the page being guarded.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Sets the resource being accessed.
    pub fn with_resource(mut self, kind: ResourceKind, id: i64) -> Self {
        self.resource = Some((kind, id));
        self
    }

    /// Sets a short, log-safe reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Returns the request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the principal, if identified.
    pub fn principal(&self) -> Option<i64> {
        self.principal
    }

    /// Returns the event kind.
    pub fn kind(&self) -> AuditEventKind {
        self.kind
    }

    /// Returns the decision outcome.
    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }

    /// Returns the page, if set.
    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    /// Returns the resource, if set.
    pub fn resource(&self) -> Option<(ResourceKind, i64)> {
        self.resource
    }

    /// Returns the reason, if set.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Emits the event through `tracing`.
    pub fn emit(&self) {
        let resource = self.resource.map(|(kind, id)| format!("{kind}:{id}"));
        tracing::info!(
            target: AUDIT_TARGET,
            request_id = %self.request_id,
            principal = ?self.principal,
            kind = %self.kind,
            outcome = %self.outcome,
            page = ?self.page,
            resource = ?resource,
            reason = ?self.reason,
            "audit event"
        );
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuditEvent[kind={}, outcome={}, request_id={}, principal=",
            self.kind, self.outcome, self.request_id
        )?;
        match self.principal {
            Some(id) => write!(f, "{}", id)?,
            None => write!(f, "<none>")?,
        }

        if let Some(page) = &self.page {
            write!(f, ", page={}", page)?;
        }
        if let Some((kind, id)) = self.resource {
            write!(f, ", resource={}:{}", kind, id)?;
        }
        if let Some(reason) = &self.reason {
            write!(f, ", reason={}", reason)?;
        }

        write!(f, "]")
    }
}
