//! CLI support for printing the example user record.
//!
//! The binary delegates to these functions so option handling and rendering
//! can be exercised in tests without spawning a subprocess.

mod error;

use std::io::Write;

use clap::Parser;
use tracing::debug;

use crate::record::UserRecord;

pub use error::CliError;

/// Mask written in place of the password when redaction is requested.
pub const PASSWORD_MASK: &str = "********";

/// Options for the `user-record` binary.
///
/// Every override may also be supplied through its environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "user-record",
    about = "Print the example user record as JSON, optionally with overridden fields",
    version
)]
pub struct Options {
    /// Replace the display name.
    #[arg(long, value_name = "text", env = "USER_RECORD_NAME")]
    name: Option<String>,
    /// Replace the email address.
    #[arg(long, value_name = "text", env = "USER_RECORD_EMAIL")]
    email: Option<String>,
    /// Replace the password.
    #[arg(long, value_name = "text", env = "USER_RECORD_PASSWORD")]
    password: Option<String>,
    /// Replace the identifier.
    #[arg(long, value_name = "text", env = "USER_RECORD_ID")]
    id: Option<String>,
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
    /// Print a mask instead of the password.
    #[arg(long = "redact-password")]
    redact_password: bool,
}

impl Options {
    /// Returns `true` when no field override was supplied.
    ///
    /// # Example
    ///
    /// ```
    /// use clap::Parser;
    /// use user_record::cli::Options;
    ///
    /// let options = Options::try_parse_from(["user-record", "--pretty"]).expect("parse");
    /// assert!(options.is_example());
    /// ```
    #[must_use]
    pub const fn is_example(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.id.is_none()
    }
}

/// Builds the record described by `options`.
///
/// Starts from [`UserRecord::example`] and applies each supplied override.
///
/// # Errors
///
/// Returns [`CliError::RecordError`] when an override is rejected, such as a
/// blank name.
pub fn build_record(options: &Options) -> Result<UserRecord, CliError> {
    let mut record = UserRecord::example();
    if let Some(name) = &options.name {
        record = record.with_name(name.as_str())?;
    }
    if let Some(email) = &options.email {
        record = record.with_email(email.as_str());
    }
    if let Some(password) = &options.password {
        record = record.with_password(password.as_str());
    }
    if let Some(id) = &options.id {
        record = record.with_id(id.as_str());
    }
    if options.redact_password {
        record = record.with_password(PASSWORD_MASK);
    }
    // Password is never logged.
    debug!(
        id = %record.id(),
        example = options.is_example(),
        redacted = options.redact_password,
        "built user record"
    );
    Ok(record)
}

/// Renders the record described by `options` as JSON.
///
/// # Errors
///
/// Returns [`CliError`] when the record cannot be built or serialised.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use user_record::cli::{Options, render};
///
/// let options = Options::try_parse_from(["user-record", "--id", "42"]).expect("parse");
/// let json = render(&options).expect("render");
///
/// assert!(json.contains(r#""id":"42""#));
/// ```
pub fn render(options: &Options) -> Result<String, CliError> {
    let record = build_record(options)?;
    let json = if options.pretty {
        record.to_json_pretty()?
    } else {
        record.to_json()?
    };
    Ok(json)
}

/// Renders the record and writes it, newline-terminated, to `out`.
///
/// # Errors
///
/// Returns [`CliError`] when rendering or writing fails.
pub fn run(options: &Options, mut out: impl Write) -> Result<(), CliError> {
    let json = render(options)?;
    writeln!(out, "{json}").map_err(|err| CliError::WriteError {
        message: err.to_string(),
    })
}
