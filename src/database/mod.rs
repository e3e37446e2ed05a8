//! Database module
//!
//! This module provides all database functionality for rolodex, organized into:
//!
//! - **core**: Core database infrastructure (SQLite connections, schema management)
//! - **customer**: The customer record repository
//! - **store**: The `Store` handle managing one scoped connection per operation
//!
//! # Architecture
//!
//! ```text
//! database/
//! ├── core/           # Foundation
//! │   ├── connection  # SQLite DatabaseConn wrapper
//! │   └── schema      # Schema definitions and management
//! │
//! ├── customer        # Customer model and CustomerRepository
//! └── store           # Store: scoped connection manager + operation wrappers
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use rolodex::database::Store;
//!
//! let store = Store::open("~/.rolodex/rolodex.db")?;
//! let customers = store.list_customers()?;
//! ```

pub mod core;
pub mod customer;
pub mod store;

pub use core::{DatabaseConn, SchemaDefinitions, SchemaManager, SchemaStatus, SCHEMA_VERSION};
pub use customer::{Customer, CustomerRepository};
pub use store::Store;
