//! A minimal four-field user record.
//!
//! The crate defines [`UserRecord`], a fixed-shape account profile with a
//! display name, email address, placeholder password and free-form
//! identifier, together with the one example instance it is usually built
//! from.
//!
//! # Overview
//!
//! - [`UserRecord::example`] returns the example user
//! - [`UserRecord::try_new`] builds a record from arbitrary text
//! - `with_*` methods derive new records without mutating the original
//! - JSON round-trips through [`UserRecord::from_json`] and
//!   [`UserRecord::to_json`]
//!
//! Nothing here authenticates, persists, or hashes anything; the password is
//! plain text by construction.
//!
//! # Example
//!
//! ```
//! use user_record::UserRecord;
//!
//! let user = UserRecord::example();
//! let renamed = user.clone().with_name("Jane Roe").expect("valid name");
//!
//! assert_eq!(user.name(), "John Doe");
//! assert_eq!(renamed.name(), "Jane Roe");
//! assert_eq!(renamed.id(), user.id());
//! ```

pub mod cli;
mod error;
mod record;

pub use error::RecordError;
pub use record::{EXAMPLE_EMAIL, EXAMPLE_ID, EXAMPLE_NAME, EXAMPLE_PASSWORD, UserRecord};
