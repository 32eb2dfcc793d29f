use color_eyre::Result;
use ratatui::{layout::Rect, widgets::Paragraph};

use super::Component;
use crate::tui::Frame;

/// Throwaway demo component. Shows a fixed string and nothing else.
#[derive(Debug, Default, Clone)]
pub struct DummyComponent {
  content: String,
}

impl DummyComponent {
  pub fn new(content: impl Into<String>) -> Self {
    DummyComponent { content: content.into() }
  }

  pub fn render(&self) -> Paragraph<'_> {
    Paragraph::new(self.content.as_str())
  }
}

#[async_trait::async_trait]
impl Component for DummyComponent {
  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()> {
    frame.render_widget(self.render(), area);
    Ok(())
  }
}
