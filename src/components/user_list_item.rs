use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  text::Text,
  widgets::{ListItem, Widget},
};

use crate::user::User;

/// A single list row showing a user's name.
///
/// Mouse presses that the host routes to this row are handed to
/// `on_mouse_down` untouched. The item keeps no state of its own, so building
/// it again from the same inputs always yields the same row.
pub struct UserListItem<'a, F>
where
  F: Fn(MouseEvent),
{
  user: &'a User,
  on_mouse_down: F,
}

impl<'a, F> UserListItem<'a, F>
where
  F: Fn(MouseEvent),
{
  pub fn new(user: &'a User, on_mouse_down: F) -> Self {
    UserListItem { user, on_mouse_down }
  }

  pub fn user(&self) -> &'a User {
    self.user
  }

  pub fn text(&self) -> &'a str {
    self.user.display_name()
  }

  pub fn render(&self) -> ListItem<'a> {
    ListItem::new(self.text())
  }

  /// Calls the handler once with the event as received.
  pub fn on_mouse_down(&self, event: MouseEvent) {
    (self.on_mouse_down)(event);
  }

  /// Entry point for events that landed on this row. Only presses are
  /// forwarded; returns whether the handler ran.
  pub fn handle_mouse_event(&self, event: MouseEvent) -> bool {
    match event.kind {
      MouseEventKind::Down(_) => {
        self.on_mouse_down(event);
        true
      },
      _ => false,
    }
  }
}

impl<F> Widget for &UserListItem<'_, F>
where
  F: Fn(MouseEvent),
{
  fn render(self, area: Rect, buf: &mut Buffer) {
    Text::raw(self.text()).render(area, buf);
  }
}
