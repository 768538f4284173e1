use argon2::{Argon2, PasswordHash, PasswordVerifier};

/// The single admin account allowed to sign in
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    email: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.email.is_empty() && !self.password_hash.is_empty()
    }

    /// Checks an email/password pair. Email comparison ignores case.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        if !self.is_configured() || !self.email.eq_ignore_ascii_case(email.trim()) {
            return false;
        }

        match PasswordHash::new(&self.password_hash) {
            Ok(hash) => Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok(),
            Err(e) => {
                tracing::error!("ADMIN_PASSWORD_HASH is not a valid PHC string: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use argon2::{
        PasswordHasher,
        password_hash::{SaltString, rand_core::OsRng},
    };

    pub(crate) fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_verify_accepts_matching_credentials() {
        let creds = AdminCredentials::new("admin@fest.org", hash("s3cret"));
        assert!(creds.verify("admin@fest.org", "s3cret"));
        assert!(creds.verify(" Admin@Fest.org ", "s3cret"));
    }

    #[test]
    fn test_verify_rejects_wrong_password_or_email() {
        let creds = AdminCredentials::new("admin@fest.org", hash("s3cret"));
        assert!(!creds.verify("admin@fest.org", "guess"));
        assert!(!creds.verify("other@fest.org", "s3cret"));
    }

    #[test]
    fn test_unconfigured_admin_cannot_sign_in() {
        let creds = AdminCredentials::new("", "");
        assert!(!creds.is_configured());
        assert!(!creds.verify("", ""));

        let bad_hash = AdminCredentials::new("admin@fest.org", "not-a-hash");
        assert!(!bad_hash.verify("admin@fest.org", "anything"));
    }
}
