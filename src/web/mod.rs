//! Web framework integration surface.
//!
//! This module provides the boundary between HTTP frameworks and the
//! authorization core. It handles:
//! - Exposing headers, cookies, and path parameters through one trait
//! - Parsing identifiers out of path parameters
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: This module contains no framework-specific code.
//!    It defines interfaces that framework-specific code can implement.
//!
//! 2. **No Authorization**: The web boundary does not decide anything.
//!    Decisions happen in [`PageGuard`](crate::PageGuard).
//!
//! 3. **Explicit Context**: No global state. All context flows through values.
//!
//! # Example Flow
//!
//! ```ignore
//! // In a framework-specific integration (e.g., axum, actix):
//! let adapter = RequestAdapter::from(http_req);
//! match guard.guard_page(&adapter, Page::SiteDetail).disposition(...) {
//!     Disposition::Proceed => render(...),
//!     Disposition::Redirect(to) => redirect(to),
//!     Disposition::Status(code) => abort(code),
//! }
//! ```

mod adapter;
mod extract;
pub mod params;

pub use adapter::RequestAdapter;
pub use extract::InboundRequest;
