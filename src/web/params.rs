//! Path-parameter parsing.
//!
//! Identifiers in dashboard URLs are decimal integers. Anything else is a
//! client error, reported before any resource lookup happens.

use crate::error::ParamError;

use super::InboundRequest;

/// Path parameter naming the site (or certificate) being addressed.
pub const ID_PARAM: &str = "id";
/// Path parameter naming the WAF rule being addressed.
pub const RULE_ID_PARAM: &str = "ruleId";

/// Parses a decimal identifier.
///
/// Accepts an optional leading `+` or `-` followed by ASCII digits, the
/// same grammar `i64::from_str` accepts. Surrounding whitespace is not
/// tolerated.
pub fn parse_id(name: &'static str, raw: &str) -> Result<i64, ParamError> {
    raw.parse::<i64>().map_err(|_| ParamError::Invalid(name))
}

/// Reads and parses a required path parameter from the request.
///
/// # Examples
///
/// ```
/// use waf_authz::web::{params, RequestAdapter};
///
/// let mut adapter = RequestAdapter::new("req-1".to_string());
/// adapter.add_path_param("id".to_string(), "10".to_string());
///
/// assert_eq!(params::require_id(&adapter, params::ID_PARAM), Ok(10));
/// assert!(params::require_id(&adapter, params::RULE_ID_PARAM).is_err());
/// ```
pub fn require_id<R: InboundRequest + ?Sized>(
    request: &R,
    name: &'static str,
) -> Result<i64, ParamError> {
    let raw = request.path_param(name).ok_or(ParamError::Missing(name))?;
    parse_id(name, raw)
}
