use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub fn hash(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::UnexpectedError
        })
}

pub fn verify(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(err) => {
            tracing::error!("Stored password hash is malformed: {}", err);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_verify_hashed_password() {
        let hashed = hash("correct horse battery staple").unwrap();

        assert_ne!(hashed, "correct horse battery staple");
        assert!(verify("correct horse battery staple", &hashed));
        assert!(!verify("wrong password", &hashed));
    }

    #[test]
    fn should_salt_every_hash() {
        assert_ne!(hash("password").unwrap(), hash("password").unwrap());
    }

    #[test]
    fn should_reject_malformed_hash() {
        assert!(!verify("password", "not-a-phc-string"));
    }
}
