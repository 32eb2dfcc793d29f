use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::Error;

/// Parses an array of untyped user records. Set `json5` for JSON5 input.
pub fn parse_users(text: &str, json5: bool) -> Result<Vec<Value>, Error> {
  let value: Value = if json5 { json5::from_str(text)? } else { serde_json::from_str(text)? };
  match value {
    Value::Array(values) => Ok(values),
    _ => Err(Error::UsersNotArray),
  }
}

/// Reads user records from a `.json` or `.json5` file.
pub fn load_users_file(path: &Path) -> Result<Vec<Value>, Error> {
  let text = std::fs::read_to_string(path)?;
  let json5 = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json5"));
  let values = parse_users(&text, json5)?;
  info!("Loaded {} user records from {}", values.len(), path.display());
  Ok(values)
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;

  #[test]
  fn test_parse_json() {
    let values = parse_users(r#"[{ "name": "fraserxu", "title": "Frontend Developer" }]"#, false).unwrap();

    assert_eq!(values, vec![json!({ "name": "fraserxu", "title": "Frontend Developer" })]);
  }

  #[test]
  fn test_parse_json5() {
    let values = parse_users("[{ name: 'ada' }, { title: 'nameless', },]", true).unwrap();

    assert_eq!(values, vec![json!({ "name": "ada" }), json!({ "title": "nameless" })]);
  }

  #[test]
  fn test_parse_rejects_non_array() {
    let result = parse_users(r#"{ "name": "fraserxu" }"#, false);

    assert!(matches!(result, Err(Error::UsersNotArray)));
  }

  #[test]
  fn test_load_missing_file() {
    let result = load_users_file(Path::new("/definitely/not/here/users.json"));

    assert!(matches!(result, Err(Error::Io(_))));
  }
}
