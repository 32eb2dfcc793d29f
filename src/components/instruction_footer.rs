use ratatui::{
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::tui::Frame;

#[derive(Default)]
pub struct InstructionFooter {}

impl InstructionFooter {
  /// Renders the key hints, followed by the most recently pressed user if any.
  pub fn render(&self, frame: &mut Frame<'_>, area: Rect, instructions: &[&str], pressed: Option<&str>) {
    if instructions.is_empty() && pressed.is_none() {
      return;
    }

    let mut spans = vec![Span::raw(instructions.join(" | "))];
    if let Some(name) = pressed {
      if !instructions.is_empty() {
        spans.push(Span::raw(" | "));
      }
      spans.push(Span::styled(format!("Pressed: {name}"), Style::default().add_modifier(Modifier::BOLD)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
      .block(Block::default().borders(Borders::ALL))
      .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
  }
}
