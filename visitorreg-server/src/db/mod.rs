//! Database layer - connection pool
//!
//! The `visitors` table is provisioned outside this service:
//!
//! ```sql
//! CREATE TABLE visitors (name text, email text, registered_at timestamp);
//! ```

pub mod pool;

pub use pool::create_pool;
