//! Argon2 password hashing adapter.
//!
//! The only place in the crate that picks a concrete algorithm. Everything
//! else sees it through the [`Hasher`] port.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;

use crate::config::HashCost;
use crate::domain::Hasher;
use crate::errors::AppResult;

/// Argon2id hasher with a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Hasher {
    cost: HashCost,
}

impl Argon2Hasher {
    pub fn new(cost: HashCost) -> Self {
        Self { cost }
    }

    /// Cost parameters applied to every hash.
    pub fn cost(&self) -> HashCost {
        self.cost
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new(HashCost::default())
    }
}

#[async_trait]
impl Hasher for Argon2Hasher {
    async fn hash(&self, plain_text: &str) -> AppResult<String> {
        let cost = self.cost;
        let plain_text = plain_text.to_owned();

        // CPU bound, keep it off the async workers
        tokio::task::spawn_blocking(move || hash_with_cost(&plain_text, cost)).await?
    }
}

fn hash_with_cost(plain_text: &str, cost: HashCost) -> AppResult<String> {
    let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(plain_text.as_bytes(), &salt)?;
    Ok(hash.to_string())
}
