//! # Domain models for student records
//!
//! Defines the data exchanged with the `/students` REST resource and the form
//! state used to create or edit a record. Wire names are camelCase
//! (`guardianName`, `guardianContact`) to match the service.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`StudentId`] | Opaque server-assigned identifier. The service may hand out numbers or strings, so both are accepted and rendered back verbatim in URLs. |
//! | [`StudentRecord`] | A stored student as returned by the server. |
//! | [`StudentPayload`] | The body of a POST/PUT: every field except `id`, with `age` already parsed. |
//! | [`Draft`] | The form's staging copy. Every field is kept as typed text until submit. |
//! | [`Field`] | One of the five editable fields, with its wire name and form label. |
//!
//! ## Validation
//!
//! [`Draft::validate`] is a presence check only: a field is missing when its
//! text is empty. Age is converted with [`parse_age`], which is lenient in the
//! way a browser's `parseInt` is. Text that holds no leading digits produces
//! `None` and is sent as `null`; rejecting it is left to the server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned identifier of a student.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    Number(i64),
    Text(String),
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentId::Number(n) => write!(f, "{n}"),
            StudentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StudentId {
    fn from(n: i64) -> Self {
        StudentId::Number(n)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        StudentId::Text(s.to_string())
    }
}

/// A student as stored by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub age: i64,
    pub address: String,
    pub guardian_name: String,
    pub guardian_contact: String,
}

impl StudentRecord {
    /// Build a record from a payload and the id the server gave it.
    ///
    /// A payload without a parsable age is stored as `0`.
    pub fn from_payload(id: StudentId, payload: StudentPayload) -> Self {
        Self {
            id,
            name: payload.name,
            age: payload.age.unwrap_or_default(),
            address: payload.address,
            guardian_name: payload.guardian_name,
            guardian_contact: payload.guardian_contact,
        }
    }
}

/// Request body for create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub name: String,
    /// `None` when the typed age held no digits; serialized as `null`.
    pub age: Option<i64>,
    pub address: String,
    pub guardian_name: String,
    pub guardian_contact: String,
}

/// The five editable fields of a student.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Age,
    Address,
    GuardianName,
    GuardianContact,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Age,
        Field::Address,
        Field::GuardianName,
        Field::GuardianContact,
    ];

    /// Wire / input name: "name", "age", "address", "guardianName", "guardianContact".
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Address => "address",
            Field::GuardianName => "guardianName",
            Field::GuardianContact => "guardianContact",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Address => "Address",
            Field::GuardianName => "Guardian",
            Field::GuardianContact => "Contact",
        }
    }

    /// HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Age => "number",
            _ => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown student field: {0}")]
pub struct FieldParseError(pub String);

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

/// Raised when a draft is submitted with empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill all fields")]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

/// Form state for an in-progress create or edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub age: String,
    pub address: String,
    pub guardian_name: String,
    pub guardian_contact: String,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Address => &self.address,
            Field::GuardianName => &self.guardian_name,
            Field::GuardianContact => &self.guardian_contact,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Address => &mut self.address,
            Field::GuardianName => &mut self.guardian_name,
            Field::GuardianContact => &mut self.guardian_contact,
        };
        *slot = value;
    }

    /// Fields whose text is empty, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Check presence of every field and build the request body.
    pub fn validate(&self) -> Result<StudentPayload, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }
        Ok(StudentPayload {
            name: self.name.clone(),
            age: parse_age(&self.age),
            address: self.address.clone(),
            guardian_name: self.guardian_name.clone(),
            guardian_contact: self.guardian_contact.clone(),
        })
    }
}

impl From<&StudentRecord> for Draft {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age.to_string(),
            address: record.address.clone(),
            guardian_name: record.guardian_name.clone(),
            guardian_contact: record.guardian_contact.clone(),
        }
    }
}

/// Lenient integer parse: leading whitespace, optional sign, then leading digits.
/// Anything after the digits is ignored. Returns `None` when no digits are found.
/// Digit runs too long for `i64` saturate at `i64::MAX` (or its negation).
pub fn parse_age(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let value = digits.bytes().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -value } else { value })
}
