//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address (all interfaces)
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default per-request deadline in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// Access Control
// =============================================================================

/// Default shared secret accepted by the repository endpoints
pub const DEFAULT_API_TOKEN: &str = "secret";

/// Default login recognised by the list-repositories endpoint
pub const DEFAULT_KNOWN_LOGIN: &str = "ggicci";

/// Header consulted first when binding the access token
pub const HEADER_API_TOKEN: &str = "X-Api-Token";

/// Header consulted when `X-Api-Token` is absent
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// Query parameter consulted when no token header is present
pub const QUERY_TOKEN: &str = "token";

/// Fallback query parameter for the access token
pub const QUERY_ACCESS_TOKEN: &str = "access_token";
