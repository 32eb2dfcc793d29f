use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
  Error(String),
  ExitDiagnostics,
  Quit,
  Render,
  Resize(u16, u16),
  Resume,
  SelectNext,
  SelectPrevious,
  ShowDiagnostics,
  Suspend,
  Tick,
  UserPressed(usize), // index into the user list
}
