use crate::abstract_trait::hashing::HashingTrait;
use async_trait::async_trait;
use bcrypt::{BcryptError, DEFAULT_COST, hash, verify};

#[derive(Debug, Clone, Copy)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, BcryptError> {
        hash(password, self.cost)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<bool, BcryptError> {
        verify(password, hashed_password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashed_password_verifies() {
        let hashing = Hashing::with_cost(4);
        let hashed = hashing.hash_password("pw1234").await.unwrap();

        assert!(hashing.compare_password(&hashed, "pw1234").await.unwrap());
        assert!(!hashing.compare_password(&hashed, "other").await.unwrap());
    }
}
