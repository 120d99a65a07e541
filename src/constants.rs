/// Default origin of the Back Market preproduction server
pub const DEFAULT_BASE_URL: &str = "https://preprod.backmarket.fr";
/// Versioned sub-path under which every buyback endpoint lives
pub const BUYBACK_BASE_PATH: &str = "/ws/buyback/v1";
/// Value sent in the `Accept` header of every request
///
/// The API answers errors as RFC 7807 problem documents, so both media types are accepted.
pub const ACCEPT_HEADER: &str = "application/json, application/problem+json";
/// Scheme prefix used when building the `Authorization` header
pub const AUTH_SCHEME: &str = "Basic";
/// Default ceiling in seconds for a single request round trip
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Page requested when the caller does not ask for a specific one
pub const DEFAULT_PAGE: u32 = 1;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("buyback-client/", env!("CARGO_PKG_VERSION"));
