//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Sign-up request fields
// =============================================================================

/// Wire name of the display name field
pub const FIELD_NAME: &str = "name";

/// Wire name of the email field
pub const FIELD_EMAIL: &str = "email";

/// Wire name of the password field
pub const FIELD_PASSWORD: &str = "password";

/// Wire name of the password confirmation field
pub const FIELD_PASSWORD_CONFIRMATION: &str = "passwordConfirmation";

// =============================================================================
// Password hashing (Argon2id)
// =============================================================================

/// Default memory cost in KiB (argon2 crate default)
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19 * 1024;

/// Default number of passes
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Default degree of parallelism
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

// =============================================================================
// Environment variables
// =============================================================================

pub const ENV_HASH_MEMORY_KIB: &str = "HASH_MEMORY_KIB";
pub const ENV_HASH_ITERATIONS: &str = "HASH_ITERATIONS";
pub const ENV_HASH_PARALLELISM: &str = "HASH_PARALLELISM";
