#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Access-token lifetime in seconds. This is also the idle-session
    /// window: the token is never refreshed, so a quiet session expires.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret_key = std::env::var("JWT_SECRET").expect("JWT_SECRET is not set");
        let access_token_expiry = std::env::var("SESSION_IDLE_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30 * 60);

        Self {
            secret_key,
            access_token_expiry,
        }
    }
}
