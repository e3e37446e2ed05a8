#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Rolodex - a small customer-record manager
//!
//! Rolodex lists, creates, updates, and deletes customer records in a SQLite
//! table through a server-rendered web interface. It can be used as both a
//! command-line application and a library.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | (none)  | Store, repository, and validation core | `rusqlite` |
//! | `server` | Web interface (router, handlers, pages) | `axum`, `tokio` |
//! | `cli` | Full CLI binary (serve, init, list) | All above + `clap` |
//!
//! ```toml
//! # Minimal - just the store and validation core
//! rolodex = { version = "0.3", default-features = false }
//!
//! # Embed the web interface without the CLI
//! rolodex = { version = "0.3", default-features = false, features = ["server"] }
//!
//! # Default (CLI binary)
//! rolodex = "0.3"
//! ```
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - **[`database`]**: All database functionality (always available)
//!   - `core`: SQLite connection management and schema definitions
//!   - `customer`: The customer model and repository
//!   - `store`: The `Store` handle, one scoped connection per operation
//!
//! - **[`validate`]**: Form validation (always available)
//!
//! - **[`server`]**: Web interface (feature-gated)
//!   - `flash`: Outcome notices carried across redirects
//!   - `pages`: Server-rendered HTML
//!   - `handlers`: One handler per route
//!
//! - **[`config`]**: Configuration management
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rolodex::database::Store;
//! use rolodex::validate::{CustomerFields, CustomerForm};
//!
//! let store = Store::open("~/.rolodex/rolodex.db")?;
//!
//! let form = CustomerForm {
//!     first_name: "Jo".into(),
//!     last_name: "Li".into(),
//!     email: "jo@x.com".into(),
//!     location: "NY".into(),
//!     gender: "Other".into(),
//! };
//!
//! let fields = CustomerFields::try_from(form)?;
//! let id = store.insert_customer(&fields)?;
//! let customers = store.list_customers()?;
//! ```

pub mod config;
pub mod database;
#[cfg(feature = "server")]
pub mod server;
pub mod validate;

pub use config::RolodexConfig;
pub use database::{Customer, CustomerRepository, Store};
pub use validate::{validate, CustomerFields, CustomerForm, Gender};
