//! The user record shape and its example instance.
//!
//! A [`UserRecord`] carries four required text fields. Values are immutable
//! once built: fields are private, and the `with_*` methods consume the record
//! and hand back a new one.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::RecordError;

/// Display name of the example user.
pub const EXAMPLE_NAME: &str = "John Doe";

/// Email address of the example user.
pub const EXAMPLE_EMAIL: &str = "john.doe@exemple.com";

/// Placeholder password of the example user.
pub const EXAMPLE_PASSWORD: &str = "password";

/// Identifier of the example user.
pub const EXAMPLE_ID: &str = "123456789";

const REDACTED: &str = "<redacted>";

/// A minimal account profile.
///
/// ## Invariants
/// - All four fields are present and text-valued.
/// - `name` is non-empty once trimmed of whitespace.
///
/// `email` is not checked for format, `password` is kept as plain text, and
/// `id` is free-form; none of these carry further guarantees.
///
/// # Example
///
/// ```
/// use user_record::UserRecord;
///
/// let user = UserRecord::example();
///
/// assert_eq!(user.name(), "John Doe");
/// assert_eq!(user.email(), "john.doe@exemple.com");
/// assert_eq!(user.password(), "password");
/// assert_eq!(user.id(), "123456789");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UserRecordDto", into = "UserRecordDto")]
pub struct UserRecord {
    name: String,
    email: String,
    password: String,
    id: String,
}

impl UserRecord {
    /// Returns the example user.
    #[must_use]
    pub fn example() -> Self {
        Self {
            name: EXAMPLE_NAME.to_owned(),
            email: EXAMPLE_EMAIL.to_owned(),
            password: EXAMPLE_PASSWORD.to_owned(),
            id: EXAMPLE_ID.to_owned(),
        }
    }

    /// Builds a record from arbitrary text values.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyField`] when `name` is empty or
    /// whitespace-only.
    ///
    /// # Example
    ///
    /// ```
    /// use user_record::{RecordError, UserRecord};
    ///
    /// let user = UserRecord::try_new("Ada", "ada@example.com", "hunter2", "42")
    ///     .expect("valid record");
    /// assert_eq!(user.name(), "Ada");
    ///
    /// let err = UserRecord::try_new(" ", "ada@example.com", "hunter2", "42");
    /// assert_eq!(err, Err(RecordError::EmptyField { field: "name" }));
    /// ```
    pub fn try_new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            name: checked_name(name.into())?,
            email: email.into(),
            password: password.into(),
            id: id.into(),
        })
    }

    /// Parses a record from a JSON object with exactly the four text fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::ParseError`] if the JSON is malformed, a field
    /// is missing, not a string, or unknown, and
    /// [`RecordError::EmptyField`] if `name` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use user_record::UserRecord;
    ///
    /// let json = r#"{
    ///     "name": "John Doe",
    ///     "email": "john.doe@exemple.com",
    ///     "password": "password",
    ///     "id": "123456789"
    /// }"#;
    ///
    /// let user = UserRecord::from_json(json).expect("valid record");
    /// assert_eq!(user, UserRecord::example());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let dto: UserRecordDto =
            serde_json::from_str(json).map_err(|e| RecordError::ParseError {
                message: e.to_string(),
            })?;
        let record = Self::try_from(dto)?;
        debug!(id = %record.id, "parsed user record");
        Ok(record)
    }

    /// Serialises the record as a compact JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::SerializeError`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string(self).map_err(|e| RecordError::SerializeError {
            message: e.to_string(),
        })
    }

    /// Serialises the record as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::SerializeError`] if serialisation fails.
    pub fn to_json_pretty(&self) -> Result<String, RecordError> {
        serde_json::to_string_pretty(self).map_err(|e| RecordError::SerializeError {
            message: e.to_string(),
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address, unvalidated.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Plain-text placeholder password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Free-form identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a new record with `name` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyField`] when `name` is empty or
    /// whitespace-only.
    pub fn with_name(self, name: impl Into<String>) -> Result<Self, RecordError> {
        Ok(Self {
            name: checked_name(name.into())?,
            ..self
        })
    }

    /// Returns a new record with `email` replaced.
    #[must_use]
    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self
        }
    }

    /// Returns a new record with `password` replaced.
    #[must_use]
    pub fn with_password(self, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            ..self
        }
    }

    /// Returns a new record with `id` replaced.
    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self
        }
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("id", &self.id)
            .finish()
    }
}

fn checked_name(name: String) -> Result<String, RecordError> {
    if name.trim().is_empty() {
        return Err(RecordError::EmptyField { field: "name" });
    }
    Ok(name)
}

/// Wire representation; every field is required and must be a string.
///
/// Deserialisation accepts maps only, so positional sequences are rejected.
#[derive(Debug, Clone, Serialize)]
struct UserRecordDto {
    name: String,
    email: String,
    password: String,
    id: String,
}

const DTO_FIELDS: &[&str] = &["name", "email", "password", "id"];

impl<'de> Deserialize<'de> for UserRecordDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(UserRecordDtoVisitor)
    }
}

struct UserRecordDtoVisitor;

impl<'de> Visitor<'de> for UserRecordDtoVisitor {
    type Value = UserRecordDto;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a user record object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut name = None;
        let mut email = None;
        let mut password = None;
        let mut id = None;

        while let Some(key) = map.next_key::<String>()? {
            let (field, slot) = match key.as_str() {
                "name" => ("name", &mut name),
                "email" => ("email", &mut email),
                "password" => ("password", &mut password),
                "id" => ("id", &mut id),
                other => return Err(de::Error::unknown_field(other, DTO_FIELDS)),
            };
            if slot.is_some() {
                return Err(de::Error::duplicate_field(field));
            }
            *slot = Some(map.next_value::<String>()?);
        }

        Ok(UserRecordDto {
            name: name.ok_or_else(|| de::Error::missing_field("name"))?,
            email: email.ok_or_else(|| de::Error::missing_field("email"))?,
            password: password.ok_or_else(|| de::Error::missing_field("password"))?,
            id: id.ok_or_else(|| de::Error::missing_field("id"))?,
        })
    }
}

impl From<UserRecord> for UserRecordDto {
    fn from(value: UserRecord) -> Self {
        let UserRecord {
            name,
            email,
            password,
            id,
        } = value;
        Self {
            name,
            email,
            password,
            id,
        }
    }
}

impl TryFrom<UserRecordDto> for UserRecord {
    type Error = RecordError;

    fn try_from(value: UserRecordDto) -> Result<Self, Self::Error> {
        Self::try_new(value.name, value.email, value.password, value.id)
    }
}

#[cfg(test)]
mod tests {
    //! Covers construction, immutability, and the JSON shape of records.

    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;

    #[fixture]
    fn example() -> UserRecord {
        UserRecord::example()
    }

    #[rstest]
    fn example_matches_literal_values(example: UserRecord) {
        assert_eq!(example.name(), "John Doe");
        assert_eq!(example.email(), "john.doe@exemple.com");
        assert_eq!(example.password(), "password");
        assert_eq!(example.id(), "123456789");
    }

    #[rstest]
    fn example_equals_record_built_from_literals(example: UserRecord) {
        let built =
            UserRecord::try_new("John Doe", "john.doe@exemple.com", "password", "123456789")
                .expect("valid record");
        assert_eq!(example, built);
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    fn rejects_blank_names(#[case] name: &str) {
        let result = UserRecord::try_new(name, EXAMPLE_EMAIL, EXAMPLE_PASSWORD, EXAMPLE_ID);
        assert_eq!(result, Err(RecordError::EmptyField { field: "name" }));
    }

    #[test]
    fn other_fields_accept_empty_text() {
        let user = UserRecord::try_new(EXAMPLE_NAME, "", "", "").expect("valid record");
        assert_eq!(user.email(), "");
        assert_eq!(user.password(), "");
        assert_eq!(user.id(), "");
    }

    #[rstest]
    fn with_methods_leave_original_untouched(example: UserRecord) {
        let original = example.clone();
        let changed = example
            .with_name("Jane Roe")
            .expect("valid name")
            .with_email("jane@example.com")
            .with_password("s3cret")
            .with_id("987654321");

        assert_eq!(original, UserRecord::example());
        assert_eq!(changed.name(), "Jane Roe");
        assert_eq!(changed.email(), "jane@example.com");
        assert_eq!(changed.password(), "s3cret");
        assert_eq!(changed.id(), "987654321");
    }

    #[rstest]
    fn with_name_rejects_blank(example: UserRecord) {
        assert_eq!(
            example.with_name("   "),
            Err(RecordError::EmptyField { field: "name" })
        );
    }

    #[rstest]
    fn debug_redacts_password(example: UserRecord) {
        let user = example.with_password("hunter2");
        let rendered = format!("{user:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));
        assert!(rendered.contains("John Doe"));
    }

    #[rstest]
    fn serializes_with_plain_field_names(example: UserRecord) {
        let value = serde_json::to_value(&example).expect("serialize");
        assert_eq!(
            value,
            json!({
                "name": "John Doe",
                "email": "john.doe@exemple.com",
                "password": "password",
                "id": "123456789"
            })
        );
    }

    #[rstest]
    #[case::missing_id(json!({"name": "a", "email": "b", "password": "c"}))]
    #[case::numeric_id(json!({"name": "a", "email": "b", "password": "c", "id": 123_456_789}))]
    #[case::null_email(json!({"name": "a", "email": null, "password": "c", "id": "d"}))]
    #[case::unknown_field(
        json!({"name": "a", "email": "b", "password": "c", "id": "d", "role": "admin"})
    )]
    #[case::positional_array(json!(["John Doe", "john.doe@exemple.com", "password", "123456789"]))]
    #[case::string(json!("John Doe"))]
    fn rejects_json_without_record_shape(#[case] value: serde_json::Value) {
        let result = UserRecord::from_json(&value.to_string());
        assert!(matches!(result, Err(RecordError::ParseError { .. })));
    }

    #[test]
    fn serde_impl_rejects_positional_array() {
        let value = json!(["John Doe", "john.doe@exemple.com", "password", "123456789"]);
        let result = serde_json::from_value::<UserRecord>(value);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_json_with_duplicate_field() {
        let json = r#"{"name": "a", "name": "b", "email": "c", "password": "d", "id": "e"}"#;
        let result = UserRecord::from_json(json);
        let Err(RecordError::ParseError { message }) = result else {
            panic!("expected parse error, got {result:?}");
        };
        assert!(message.contains("duplicate field `name`"), "{message}");
    }

    #[test]
    fn rejects_json_with_blank_name() {
        let value = json!({"name": "", "email": "b", "password": "c", "id": "d"});
        let result = UserRecord::from_json(&value.to_string());
        assert_eq!(result, Err(RecordError::EmptyField { field: "name" }));
    }

    #[rstest]
    fn pretty_json_parses_back(example: UserRecord) {
        let pretty = example.to_json_pretty().expect("serialize");
        assert!(pretty.contains('\n'));
        let parsed = UserRecord::from_json(&pretty).expect("parse");
        assert_eq!(parsed, example);
    }
}
