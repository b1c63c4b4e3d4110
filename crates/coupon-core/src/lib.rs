//! coupon-core — the data side of the coupon service.
//!
//! Loads a `code,discount` CSV table once at startup and answers point
//! lookups against it. The table is immutable after the load step, so
//! it can be shared behind an `Arc` across any number of request tasks
//! without locking.
//!
//! # Architecture
//!
//! ```text
//! ServiceConfig (TOML, optional)
//!   └── coupons.path
//!         └── loader::load_file()
//!               ├── clamp_discount() per row → [0, 100]
//!               └── (CouponTable, LoadOutcome)
//!                     └── CouponTable::redeem(code) → Redemption
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod table;

pub use config::ServiceConfig;
pub use error::{ConfigError, LoadError};
pub use loader::{LoadOutcome, LoadReport, load_file, load_reader};
pub use table::{CouponTable, DiscountValue, Redemption, clamp_discount};
