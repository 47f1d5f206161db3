//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default access token lifetime in minutes
pub const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 30;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Secret used by debug builds when JWT_SECRET is not set
pub const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Token type reported alongside issued access tokens
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (file-backed SQLite, created on demand)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// Default connection pool size
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

// =============================================================================
// Validation
// =============================================================================

/// bcrypt only reads the first 72 bytes of its input
pub const MAX_PASSWORD_BYTES: usize = 72;
