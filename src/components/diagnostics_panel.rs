use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
  prelude::*,
  widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::{action::Action, user::Diagnostic};

/// Scrollable list of the prop warnings collected while loading users.
#[derive(Default)]
pub struct DiagnosticsPanel {
  lines: Vec<String>,
  scroll: u16,
  last_height: u16,
}

impl DiagnosticsPanel {
  pub fn new(diagnostics: &[Diagnostic]) -> Self {
    DiagnosticsPanel { lines: diagnostics.iter().map(ToString::to_string).collect(), scroll: 0, last_height: 0 }
  }

  fn has_scrolled_to_bottom(&self) -> bool {
    usize::from(self.scroll) + usize::from(self.last_height) >= self.lines.len()
  }
}

#[async_trait::async_trait]
impl Component for DiagnosticsPanel {
  fn draw(&mut self, frame: &mut Frame, area: Rect) -> color_eyre::Result<()> {
    self.last_height = area.height.saturating_sub(2);
    let text = if self.lines.is_empty() { "No prop warnings".to_string() } else { self.lines.join("\n") };
    let paragraph = Paragraph::new(text)
      .block(Block::default().title("Diagnostics").style(Style::default().fg(Color::Yellow)).borders(Borders::ALL))
      .scroll((self.scroll, 0));

    frame.render_widget(paragraph, area);
    Ok(())
  }

  async fn handle_key_events(&mut self, key: KeyEvent) -> color_eyre::Result<Option<Action>> {
    let action = match key.code {
      KeyCode::Up => {
        self.scroll = self.scroll.saturating_sub(1);
        None
      },
      KeyCode::Down => {
        if !self.has_scrolled_to_bottom() {
          self.scroll = self.scroll.saturating_add(1);
        }
        None
      },
      KeyCode::Esc | KeyCode::Char('d') => {
        self.scroll = 0;
        Some(Action::ExitDiagnostics)
      },
      _ => None,
    };
    Ok(action)
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::KeyModifiers;
  use pretty_assertions::assert_eq;
  use ratatui::backend::TestBackend;

  use super::*;
  use crate::user::PropError;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn diagnostics(count: usize) -> Vec<Diagnostic> {
    (0..count).map(|index| Diagnostic { index, error: PropError::MissingUser }).collect()
  }

  #[tokio::test]
  async fn test_scroll_stops_at_bottom() {
    let mut panel = DiagnosticsPanel::new(&diagnostics(5));
    let mut terminal = Terminal::new(TestBackend::new(80, 5)).unwrap();
    terminal.draw(|f| panel.draw(f, f.area()).unwrap()).unwrap();

    for _ in 0..10 {
      panel.handle_key_events(key(KeyCode::Down)).await.unwrap();
    }

    assert_eq!(panel.scroll, 2);
  }

  #[tokio::test]
  async fn test_scroll_past_u16_line_count() {
    let mut panel = DiagnosticsPanel { lines: vec![String::new(); 70_000], scroll: 4_461, last_height: 3 };

    panel.handle_key_events(key(KeyCode::Down)).await.unwrap();

    assert_eq!(panel.scroll, 4_462);
  }

  #[tokio::test]
  async fn test_escape_closes() {
    let mut panel = DiagnosticsPanel::new(&diagnostics(1));

    let action = panel.handle_key_events(key(KeyCode::Esc)).await.unwrap();

    assert_eq!(action, Some(Action::ExitDiagnostics));
  }

  #[test]
  fn test_draws_warnings() {
    let mut panel = DiagnosticsPanel::new(&diagnostics(1));
    let mut terminal = Terminal::new(TestBackend::new(90, 3)).unwrap();

    terminal.draw(|f| panel.draw(f, f.area()).unwrap()).unwrap();

    let row: String = (0..90).map(|x| terminal.backend().buffer()[(x, 1)].symbol().to_string()).collect();
    assert!(row.contains("user #0: required prop `user` was not supplied"));
  }
}
