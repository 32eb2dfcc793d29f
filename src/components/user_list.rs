use std::cell::Cell;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
  layout::{Constraint, Direction, Layout, Position, Rect},
  style::{Modifier, Style},
  widgets::{Block, Borders, List, ListState},
};
use tracing::{debug, info};

use super::{Component, instruction_footer::InstructionFooter, user_list_item::UserListItem};
use crate::{action::Action, tui::Frame, user::Users};

const INSTRUCTIONS: [&str; 4] = ["click/enter: press", "up/down: select", "d: diagnostics", "q: quit"];

/// Lays out one `UserListItem` per user and routes mouse presses to the row
/// under the pointer.
pub struct UserList {
  users: Users,
  list_state: ListState,
  // Inner area of the list as of the last draw, used for hit-testing.
  list_area: Rect,
  last_pressed: Option<usize>,
  footer: InstructionFooter,
}

impl UserList {
  pub fn new(users: Users) -> Self {
    let selected = if users.is_empty() { None } else { Some(0) };
    UserList {
      users,
      list_state: ListState::default().with_selected(selected),
      list_area: Rect::default(),
      last_pressed: None,
      footer: InstructionFooter::default(),
    }
  }

  pub fn selected(&self) -> Option<usize> {
    self.list_state.selected()
  }

  pub fn last_pressed(&self) -> Option<usize> {
    self.last_pressed
  }

  /// Index of the user drawn at the given terminal cell, if any.
  ///
  /// Walks the visible items from the list offset using the same item heights
  /// the `List` widget laid out, so multi-line names span several rows.
  fn row_at(&self, column: u16, row: u16) -> Option<usize> {
    if !self.list_area.contains(Position::new(column, row)) {
      return None;
    }
    let mut top = self.list_area.y;
    for (index, user) in self.users.iter().enumerate().skip(self.list_state.offset()) {
      let height = UserListItem::new(user, |_| {}).render().height();
      let bottom = top.saturating_add(u16::try_from(height).unwrap_or(u16::MAX));
      if row < bottom {
        return Some(index);
      }
      if bottom >= self.list_area.bottom() {
        break;
      }
      top = bottom;
    }
    None
  }

  fn dispatch_mouse(&self, mouse: MouseEvent) -> Option<Action> {
    let index = self.row_at(mouse.column, mouse.row)?;
    let pressed = Cell::new(None);
    let item = UserListItem::new(&self.users[index], |event: MouseEvent| {
      debug!("mouse down on row {index}: {event:?}");
      pressed.set(Some(Action::UserPressed(index)));
    });
    item.handle_mouse_event(mouse);
    pressed.take()
  }

  fn select_next(&mut self) {
    if self.users.is_empty() {
      return;
    }
    let next = match self.list_state.selected() {
      Some(i) if i + 1 < self.users.len() => i + 1,
      Some(i) => i,
      None => 0,
    };
    self.list_state.select(Some(next));
  }

  fn select_previous(&mut self) {
    if self.users.is_empty() {
      return;
    }
    let previous = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
    self.list_state.select(Some(previous));
  }
}

#[async_trait::async_trait]
impl Component for UserList {
  async fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    let action = match key.code {
      KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
      KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
      KeyCode::Enter => self.list_state.selected().map(Action::UserPressed),
      _ => None,
    };
    Ok(action)
  }

  async fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
    Ok(self.dispatch_mouse(mouse))
  }

  async fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::SelectNext => self.select_next(),
      Action::SelectPrevious => self.select_previous(),
      Action::UserPressed(index) if index < self.users.len() => {
        info!("Pressed user #{index} ({:?})", self.users[index].display_name());
        self.list_state.select(Some(index));
        self.last_pressed = Some(index);
      },
      _ => {},
    }
    Ok(None)
  }

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()> {
    let chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Min(1), Constraint::Length(3)])
      .split(area);

    let block = Block::default().title("Users").borders(Borders::ALL);
    self.list_area = block.inner(chunks[0]);

    let items: Vec<_> = self.users.iter().map(|user| UserListItem::new(user, |_| {}).render()).collect();
    let list = List::new(items).block(block).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, chunks[0], &mut self.list_state);

    let pressed = self.last_pressed.and_then(|i| self.users.get(i)).map(|user| user.display_name());
    self.footer.render(frame, chunks[1], &INSTRUCTIONS, pressed);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
  use pretty_assertions::assert_eq;
  use ratatui::{Terminal, backend::TestBackend};

  use super::*;
  use crate::{tui::Event, user::User};

  fn users() -> Users {
    Users(vec![User::new("fraserxu").with_title("Frontend Developer"), User::new("ada"), User::new("grace")])
  }

  fn press(column: u16, row: u16) -> MouseEvent {
    MouseEvent { kind: MouseEventKind::Down(MouseButton::Left), column, row, modifiers: KeyModifiers::NONE }
  }

  // 30x10 terminal: list rows are y = 1..=5, footer below.
  fn drawn(list: &mut UserList) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
    terminal.draw(|f| list.draw(f, f.area()).unwrap()).unwrap();
    terminal
  }

  #[tokio::test]
  async fn test_press_on_row_dispatches_to_that_user() {
    let mut list = UserList::new(users());
    drawn(&mut list);

    assert_eq!(list.handle_mouse_events(press(5, 1)).await.unwrap(), Some(Action::UserPressed(0)));
    assert_eq!(list.handle_mouse_events(press(5, 2)).await.unwrap(), Some(Action::UserPressed(1)));
    assert_eq!(list.handle_mouse_events(press(20, 3)).await.unwrap(), Some(Action::UserPressed(2)));
  }

  #[tokio::test]
  async fn test_press_outside_rows_dispatches_nothing() {
    let mut list = UserList::new(users());
    drawn(&mut list);

    // border, empty row below the last user, footer
    for (column, row) in [(5, 0), (0, 2), (5, 4), (5, 8)] {
      assert_eq!(list.handle_mouse_events(press(column, row)).await.unwrap(), None);
    }
  }

  #[tokio::test]
  async fn test_non_press_mouse_events_are_ignored() {
    let mut list = UserList::new(users());
    drawn(&mut list);

    for kind in [MouseEventKind::Up(MouseButton::Left), MouseEventKind::Moved, MouseEventKind::ScrollDown] {
      let event = MouseEvent { kind, ..press(5, 1) };
      assert_eq!(list.handle_mouse_events(event).await.unwrap(), None);
    }
  }

  #[tokio::test]
  async fn test_press_on_multi_line_name() {
    let mut list = UserList::new(Users(vec![User::new("fraser\nxu"), User::new("ada")]));
    let terminal = drawn(&mut list);
    let buffer = terminal.backend().buffer();
    let row = |y: u16| -> String { (0..8).map(|x| buffer[(x, y)].symbol().to_string()).collect() };
    assert_eq!([row(1), row(2), row(3)], ["│fraser ", "│xu     ", "│ada    "].map(String::from));

    assert_eq!(list.handle_mouse_events(press(2, 1)).await.unwrap(), Some(Action::UserPressed(0)));
    assert_eq!(list.handle_mouse_events(press(2, 2)).await.unwrap(), Some(Action::UserPressed(0)));
    assert_eq!(list.handle_mouse_events(press(2, 3)).await.unwrap(), Some(Action::UserPressed(1)));
    assert_eq!(list.handle_mouse_events(press(2, 4)).await.unwrap(), None);
  }

  #[tokio::test]
  async fn test_press_after_list_scrolled() {
    let users: Users = (0..8).map(|i| User::new(format!("user{i}"))).collect();
    let mut list = UserList::new(users);
    list.update(Action::UserPressed(7)).await.unwrap();
    let terminal = drawn(&mut list);
    let buffer = terminal.backend().buffer();
    let row = |y: u16| -> String { (0..7).map(|x| buffer[(x, y)].symbol().to_string()).collect() };

    // five visible rows with the last user selected
    assert_eq!(list.list_state.offset(), 3);
    assert_eq!(row(1), "│user3 ");
    assert_eq!(row(5), "│user7 ");
    assert_eq!(list.handle_mouse_events(press(2, 1)).await.unwrap(), Some(Action::UserPressed(3)));
    assert_eq!(list.handle_mouse_events(press(2, 5)).await.unwrap(), Some(Action::UserPressed(7)));
  }

  #[tokio::test]
  async fn test_events_route_to_mouse_and_key_handlers() {
    let mut list = UserList::new(users());
    drawn(&mut list);

    let action = list.handle_events(Some(Event::Mouse(press(5, 2)))).await.unwrap();
    assert_eq!(action, Some(Action::UserPressed(1)));

    let action = list.handle_events(Some(Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)))).await.unwrap();
    assert_eq!(action, Some(Action::SelectPrevious));

    assert_eq!(list.handle_events(Some(Event::Tick)).await.unwrap(), None);
  }

  #[tokio::test]
  async fn test_update_records_pressed_user() {
    let mut list = UserList::new(users());

    list.update(Action::UserPressed(2)).await.unwrap();

    assert_eq!(list.selected(), Some(2));
    assert_eq!(list.last_pressed(), Some(2));

    list.update(Action::UserPressed(9)).await.unwrap();
    assert_eq!(list.last_pressed(), Some(2));
  }

  #[tokio::test]
  async fn test_keyboard_selection() {
    let mut list = UserList::new(users());

    let action = list.handle_key_events(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)).await.unwrap();
    assert_eq!(action, Some(Action::SelectNext));
    list.update(Action::SelectNext).await.unwrap();
    list.update(Action::SelectNext).await.unwrap();
    list.update(Action::SelectNext).await.unwrap();
    assert_eq!(list.selected(), Some(2));

    list.update(Action::SelectPrevious).await.unwrap();
    assert_eq!(list.selected(), Some(1));

    let action = list.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).await.unwrap();
    assert_eq!(action, Some(Action::UserPressed(1)));
  }

  #[test]
  fn test_draw_shows_names() {
    let mut list = UserList::new(users());
    let terminal = drawn(&mut list);
    let buffer = terminal.backend().buffer();
    let row = |y: u16| -> String { (0..30).map(|x| buffer[(x, y)].symbol().to_string()).collect() };

    assert_eq!(row(1), "│fraserxu                    │");
    assert_eq!(row(2), "│ada                         │");
    assert_eq!(row(3), "│grace                       │");
    assert_eq!(row(8), "│click/enter: press | up/down│");
  }

  #[test]
  fn test_footer_shows_last_pressed() {
    let mut list = UserList::new(users());
    list.last_pressed = Some(1);
    let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
    terminal.draw(|f| list.draw(f, f.area()).unwrap()).unwrap();
    let buffer = terminal.backend().buffer();
    let footer: String = (0..100).map(|x| buffer[(x, 8)].symbol().to_string()).collect();

    assert!(footer.contains("q: quit | Pressed: ada"));
  }

  #[test]
  fn test_empty_list() {
    let mut list = UserList::new(Users::default());
    drawn(&mut list);

    assert_eq!(list.selected(), None);
    assert_eq!(list.dispatch_mouse(press(5, 1)), None);
  }
}
