use derive_deref::{Deref, DerefMut};
use serde::{Deserialize, Serialize};

/// A user record as handed to the list. Only `name` is displayed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub title: Option<String>,
}

impl User {
  pub fn new(name: impl Into<String>) -> Self {
    User { name: Some(name.into()), title: None }
  }

  pub fn with_title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  /// The name exactly as supplied, or an empty string when there is none.
  pub fn display_name(&self) -> &str {
    self.name.as_deref().unwrap_or_default()
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deref, DerefMut)]
pub struct Users(pub Vec<User>);

impl FromIterator<User> for Users {
  fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
    Users(iter.into_iter().collect())
  }
}
