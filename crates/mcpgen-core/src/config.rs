/// Settings baked into the generated proxy.
///
/// There is no config file: the CLI always runs with [`ProxyConfig::default`],
/// which matches the knowledge-model platform's access-key scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Environment variable the proxy reads its bearer token from.
    pub access_key_env: String,
    /// Header carrying the token on every upstream call.
    pub auth_header: String,
    /// Scheme prefixed to the token in `auth_header`.
    pub auth_scheme: String,
    /// Upstream client timeout, in seconds.
    pub timeout_secs: u64,
}

/// Environment variable read by the generated proxy and smoke-test script.
pub const DEFAULT_ACCESS_KEY_ENV: &str = "KM_ACCESS_KEY";

/// Header the knowledge-model API expects the access key in.
pub const DEFAULT_AUTH_HEADER: &str = "X-KM-AccessKey";

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            access_key_env: DEFAULT_ACCESS_KEY_ENV.to_string(),
            auth_header: DEFAULT_AUTH_HEADER.to_string(),
            auth_scheme: "Bearer".to_string(),
            timeout_secs: 30,
        }
    }
}
