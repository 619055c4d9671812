//! Password hashing with bcrypt.
//!
//! Stored hashes are the standard modular crypt string (`$2b$<cost>$<salt+digest>`), so the
//! cost and salt travel with every hash.

use bcrypt::{BcryptError, DEFAULT_COST};

#[cfg(not(test))]
const HASH_COST: u32 = DEFAULT_COST;

#[cfg(test)]
const HASH_COST: u32 = 4; // bcrypt minimum cost (bcrypt::MIN_COST is private)

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// Checks a password against a stored hash. Hashes bcrypt cannot parse never match.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match bcrypt::verify(password, stored) {
        Ok(matches) => matches,
        Err(err) => {
            tracing::warn!("Unreadable password hash: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_own_hash() {
        let hash = hash_password("correct horse").unwrap();

        assert!(hash.starts_with("$2b$"));
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("wrong horse", &hash));
    }

    #[test]
    fn salts_differ_between_hashes() {
        assert_ne!(
            hash_password("same").unwrap(),
            hash_password("same").unwrap()
        );
    }

    /// Hashes carry their cost; a production-cost hash still verifies.
    #[test]
    fn verifies_hash_of_other_cost() {
        let hash = bcrypt::hash("club password", 5).unwrap();

        assert!(hash.starts_with("$2b$05$"));
        assert!(verify_password("club password", &hash));
    }

    #[test]
    fn malformed_hash_never_matches() {
        assert!(!verify_password("x", ""));
        assert!(!verify_password("x", "sha256$00$00"));
        assert!(!verify_password("x", "$2b$04$short"));
    }
}
