use std::fmt;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use super::types::{User, Users};

/// Development-time problems with the inputs handed to `UserListItem`.
///
/// These are reported as warnings. The item still renders with whatever
/// could be salvaged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropError {
  #[error("required prop `user` was not supplied to `UserListItem`")]
  MissingUser,
  #[error("prop `user` of type `{0}` supplied to `UserListItem`, expected `object`")]
  UserNotObject(&'static str),
  #[error("prop `user.name` of type `{0}` supplied to `UserListItem`, expected `string`")]
  NameNotText(&'static str),
  #[error("required prop `on_mouse_down` was not supplied to `UserListItem`")]
  MissingHandler,
}

/// A prop warning tied to the position of the offending record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
  pub index: usize,
  pub error: PropError,
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "user #{}: {}", self.index, self.error)
  }
}

fn type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// Checks the shape of an untyped user record.
///
/// An absent or null `name` is allowed and renders as empty text.
pub fn validate_user(user: Option<&Value>) -> Vec<PropError> {
  match user {
    None | Some(Value::Null) => vec![PropError::MissingUser],
    Some(Value::Object(map)) => match map.get("name") {
      None | Some(Value::Null) | Some(Value::String(_)) => vec![],
      Some(other) => vec![PropError::NameNotText(type_name(other))],
    },
    Some(other) => vec![PropError::UserNotObject(type_name(other))],
  }
}

/// Checks both required inputs of `UserListItem` when they come from an untyped boundary.
pub fn validate_props(user: Option<&Value>, has_handler: bool) -> Result<(), Vec<PropError>> {
  let mut errors = validate_user(user);
  if !has_handler {
    errors.push(PropError::MissingHandler);
  }
  if errors.is_empty() { Ok(()) } else { Err(errors) }
}

impl User {
  /// Best-effort conversion of an untyped record. Never fails; every problem
  /// found is logged as a warning and returned alongside the user.
  pub fn from_untyped(value: Option<&Value>) -> (User, Vec<PropError>) {
    let problems = validate_user(value);
    for problem in &problems {
      warn!("{problem}");
    }
    let user = match value {
      Some(Value::Object(map)) => User {
        name: map.get("name").and_then(Value::as_str).map(str::to_owned),
        title: map.get("title").and_then(Value::as_str).map(str::to_owned),
      },
      _ => User::default(),
    };
    (user, problems)
  }
}

/// Converts a batch of untyped records, keeping one user per record so
/// positions line up with the input.
pub fn users_from_values(values: &[Value]) -> (Users, Vec<Diagnostic>) {
  let mut users = Users(Vec::with_capacity(values.len()));
  let mut diagnostics = Vec::new();
  for (index, value) in values.iter().enumerate() {
    let (user, problems) = User::from_untyped(Some(value));
    diagnostics.extend(problems.into_iter().map(|error| Diagnostic { index, error }));
    users.push(user);
  }
  (users, diagnostics)
}
