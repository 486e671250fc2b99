//! 비밀번호 해싱 서비스
//!
//! bcrypt로 비밀번호를 해싱하고 검증합니다. cost는 생성 시점에 고정되며
//! 운영 환경에서는 [`PasswordConfig::bcrypt_cost`](crate::config::PasswordConfig::bcrypt_cost)를 사용합니다.

use bcrypt::{hash, verify};

use crate::errors::{AppResult, ErrorContext};

/// bcrypt 비밀번호 서비스
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 비밀번호를 해싱합니다.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let start = std::time::Instant::now();
        let hashed = hash(password, self.cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 평문 비밀번호가 해시와 일치하는지 검증합니다.
    pub fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        verify(password, password_hash).context("비밀번호 검증 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_hash_and_verify() {
        let service = PasswordService::new(4);
        let hashed = service.hash("goodpass").unwrap();

        assert_ne!(hashed, "goodpass");
        assert!(service.verify("goodpass", &hashed).unwrap());
        assert!(!service.verify("notgoodpass", &hashed).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let service = PasswordService::new(4);
        assert!(matches!(service.verify("goodpass", "not-a-hash"), Err(AppError::InternalError(_))));
    }
}
