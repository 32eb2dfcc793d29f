use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::{Constraint, Direction, Layout, Rect};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::{
  action::Action,
  cli::Cli,
  components::{Component, diagnostics_panel::DiagnosticsPanel, dummy::DummyComponent, user_list::UserList},
  config::Config,
  mode::Mode,
  tui::{self, Frame, Tui},
  user::{source::load_users_file, users_from_values},
};

pub struct App {
  pub banner: Box<dyn Component>,
  pub user_list: Box<dyn Component>,
  pub diagnostics: Box<dyn Component>,
  pub should_quit: bool,
  pub should_suspend: bool,
  pub mode: Mode,
  pub tick_rate: f64,
  pub frame_rate: f64,
}

/// Keys handled before the focused component sees the event.
fn global_action(mode: Mode, key: KeyEvent) -> Option<Action> {
  match (mode, key.code, key.modifiers) {
    (_, KeyCode::Char('c' | 'C'), KeyModifiers::CONTROL) => Some(Action::Quit),
    (_, KeyCode::Char('z' | 'Z'), KeyModifiers::CONTROL) => Some(Action::Suspend),
    (Mode::Default, KeyCode::Char('q'), _) => Some(Action::Quit),
    (Mode::Default, KeyCode::Char('d'), _) => Some(Action::ShowDiagnostics),
    _ => None,
  }
}

impl App {
  pub fn new(args: &Cli) -> Result<Self> {
    let config = Config::new()?;
    let values = match &args.users {
      Some(path) => load_users_file(path)?,
      None => config.users.clone(),
    };
    let (users, diagnostics) = users_from_values(&values);
    if !diagnostics.is_empty() {
      warn!("{} prop warning(s) while loading users, press 'd' to review", diagnostics.len());
    }
    info!("Starting with {} users", users.len());

    Ok(Self {
      banner: Box::new(DummyComponent::new(config.banner)),
      user_list: Box::new(UserList::new(users)),
      diagnostics: Box::new(DiagnosticsPanel::new(&diagnostics)),
      should_quit: false,
      should_suspend: false,
      mode: Mode::Default,
      tick_rate: args.tick_rate,
      frame_rate: args.frame_rate,
    })
  }

  fn focused(&mut self) -> &mut Box<dyn Component> {
    match self.mode {
      Mode::Default => &mut self.user_list,
      Mode::Diagnostics => &mut self.diagnostics,
    }
  }

  fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
    let chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Length(1), Constraint::Min(0)])
      .split(frame.area());
    self.banner.draw(frame, chunks[0])?;
    self.focused().draw(frame, chunks[1])
  }

  fn new_tui(&self) -> Result<Tui> {
    Ok(Tui::new()?.tick_rate(self.tick_rate).frame_rate(self.frame_rate).mouse(true))
  }

  pub async fn run(&mut self) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();

    let mut tui = self.new_tui()?;
    tui.enter()?;

    self.banner.register_action_handler(action_tx.clone())?;
    self.user_list.register_action_handler(action_tx.clone())?;
    self.diagnostics.register_action_handler(action_tx.clone())?;

    loop {
      if let Some(e) = tui.next().await {
        match e {
          tui::Event::Tick => action_tx.send(Action::Tick)?,
          tui::Event::Render => action_tx.send(Action::Render)?,
          tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
          tui::Event::Key(key) => {
            if let Some(action) = global_action(self.mode, key) {
              action_tx.send(action)?;
            }
          },
          _ => {},
        }

        if let Some(action) = self.focused().handle_events(Some(e.clone())).await? {
          action_tx.send(action)?;
        }
      }

      while let Ok(action) = action_rx.try_recv() {
        if action != Action::Tick && action != Action::Render {
          log::debug!("{action:?}");
        }

        match action {
          Action::ShowDiagnostics => self.mode = Mode::Diagnostics,
          Action::ExitDiagnostics => self.mode = Mode::Default,
          Action::Quit => self.should_quit = true,
          Action::Suspend => self.should_suspend = true,
          Action::Resume => self.should_suspend = false,
          Action::Error(ref message) => error!("{message}"),
          Action::Resize(w, h) => {
            tui.resize(Rect::new(0, 0, w, h))?;
            tui.draw(|f| {
              if let Err(e) = self.render(f) {
                let _ = action_tx.send(Action::Error(format!("Failed to draw: {:?}", e)));
              }
            })?;
          },
          Action::Render => {
            tui.draw(|f| {
              if let Err(e) = self.render(f) {
                let _ = action_tx.send(Action::Error(format!("Failed to draw: {:?}", e)));
              }
            })?;
          },
          _ => {},
        }
        if let Some(action) = self.focused().update(action.clone()).await? {
          action_tx.send(action)?
        };
      }
      if self.should_suspend {
        tui.suspend()?;
        action_tx.send(Action::Resume)?;
        tui = self.new_tui()?;
        tui.enter()?;
      } else if self.should_quit {
        tui.stop()?;
        break;
      }
    }
    tui.exit()?;
    Ok(())
  }
}
