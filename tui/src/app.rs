//! Main Application
//!
//! The App is a thin client over the headless session:
//! 1. Converts terminal key events into `UserAction`s
//! 2. Applies them to the `Session`
//! 3. Renders from the session's read-only views
//!
//! Numeric form fields keep local text buffers; every edit is parsed and
//! forwarded, and a rejected outcome reverts the buffer. That is how the
//! core's clamp-by-rejection reaches the user.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ledger_core::{Roster, Session, TallyConfig, UserAction, UuidIds};

use crate::view;
use crate::widgets::InputField;

/// Which part of the screen receives keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// The friend list
    Roster,
    /// The add-friend form
    AddForm(AddField),
    /// The split-bill form
    SplitForm(SplitField),
}

/// Fields of the add-friend form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddField {
    /// Friend name
    Name,
    /// Image URL
    Image,
}

/// Fields of the split-bill form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitField {
    /// Bill value
    Bill,
    /// Your expense
    UserShare,
    /// Who is paying
    Payer,
}

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Headless session - owns all domain state
    session: Session,
    /// Loaded configuration (currency symbol for rendering)
    config: TallyConfig,
    /// Current keyboard focus
    focus: Focus,
    /// Cursor row in the friend list
    roster_cursor: usize,

    // Local text buffers for form fields
    add_name: InputField,
    add_image: InputField,
    bill: InputField,
    user_share: InputField,
}

impl App {
    /// Create a new App from loaded configuration
    pub fn new(config: TallyConfig) -> Self {
        let roster = if config.seed_demo_roster {
            Roster::seeded()
        } else {
            Roster::new()
        };
        let session =
            Session::with_avatar_base(roster, config.avatar_base.clone(), Box::new(UuidIds));

        Self {
            running: true,
            session,
            config,
            focus: Focus::Roster,
            roster_cursor: 0,
            add_name: InputField::new(),
            add_image: InputField::new(),
            bill: InputField::new(),
            user_share: InputField::new(),
        }
    }

    // === Read-only views for rendering ===

    /// The headless session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The loaded configuration
    pub fn config(&self) -> &TallyConfig {
        &self.config
    }

    /// Current focus
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Cursor row in the friend list
    pub fn roster_cursor(&self) -> usize {
        self.roster_cursor
    }

    /// Add-friend name buffer
    pub fn add_name(&self) -> &InputField {
        &self.add_name
    }

    /// Add-friend image buffer
    pub fn add_image(&self) -> &InputField {
        &self.add_image
    }

    /// Bill total buffer
    pub fn bill(&self) -> &InputField {
        &self.bill
    }

    /// User share buffer
    pub fn user_share(&self) -> &InputField {
        &self.user_share
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| view::render(frame, self))?;

            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only handle Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key);
                            }
                            Event::Resize(..) => {} // redrawn next frame
                            _ => {}
                        }
                    }
                }
                // Idle tick so config/terminal changes still repaint
                _ = tokio::time::sleep(Duration::from_millis(250)) => {}
            }
        }

        Ok(())
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        match self.focus {
            Focus::Roster => self.handle_roster_key(key),
            Focus::AddForm(field) => self.handle_add_form_key(key, field),
            Focus::SplitForm(field) => self.handle_split_form_key(key, field),
        }
        self.reconcile_focus();
    }

    fn handle_roster_key(&mut self, key: KeyEvent) {
        let len = self.session.roster().len();
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Up => self.roster_cursor = self.roster_cursor.saturating_sub(1),
            KeyCode::Down => {
                if len > 0 {
                    self.roster_cursor = (self.roster_cursor + 1).min(len - 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(friend) = self.session.roster().friends().get(self.roster_cursor) {
                    let id = friend.id.clone();
                    if self
                        .session
                        .apply(UserAction::SelectFriend(id))
                        .is_applied()
                    {
                        // Fresh draft, fresh buffers
                        self.bill.clear();
                        self.user_share.clear();
                        if self.session.split_draft().is_some() {
                            self.focus = Focus::SplitForm(SplitField::Bill);
                        }
                    }
                }
            }
            KeyCode::Char('a') => {
                self.session.apply(UserAction::ToggleAddFriend);
                if self.session.show_add_friend() {
                    self.add_name.clear();
                    self.add_image.set_value(self.session.add_draft().image.clone());
                    self.focus = Focus::AddForm(AddField::Name);
                }
            }
            KeyCode::Tab => {
                if self.session.split_draft().is_some() {
                    self.focus = Focus::SplitForm(SplitField::Bill);
                }
            }
            _ => {}
        }
    }

    fn handle_add_form_key(&mut self, key: KeyEvent, field: AddField) {
        match key.code {
            KeyCode::Esc => {
                self.session.apply(UserAction::ToggleAddFriend);
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.focus = Focus::AddForm(match field {
                    AddField::Name => AddField::Image,
                    AddField::Image => AddField::Name,
                });
            }
            KeyCode::Enter => {
                // Rejected submits leave the form open with its buffers intact
                self.session.apply(UserAction::SubmitAddFriend);
            }
            _ => {
                let input = match field {
                    AddField::Name => &mut self.add_name,
                    AddField::Image => &mut self.add_image,
                };
                if input.handle_key(key) {
                    let value = input.value().to_string();
                    let action = match field {
                        AddField::Name => UserAction::AddFriendNameEdited(value),
                        AddField::Image => UserAction::AddFriendImageEdited(value),
                    };
                    self.session.apply(action);
                }
            }
        }
    }

    fn handle_split_form_key(&mut self, key: KeyEvent, field: SplitField) {
        match key.code {
            KeyCode::Esc => {
                // Back to the list; selection and draft stay alive
                self.focus = Focus::Roster;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = Focus::SplitForm(match field {
                    SplitField::Bill => SplitField::UserShare,
                    SplitField::UserShare => SplitField::Payer,
                    SplitField::Payer => SplitField::Bill,
                });
            }
            KeyCode::Up => {
                self.focus = Focus::SplitForm(match field {
                    SplitField::Bill => SplitField::Payer,
                    SplitField::UserShare => SplitField::Bill,
                    SplitField::Payer => SplitField::UserShare,
                });
            }
            KeyCode::Enter => {
                self.session.apply(UserAction::SubmitSplitBill);
            }
            _ if field == SplitField::Payer => {
                if matches!(
                    key.code,
                    KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                ) {
                    if let Some(draft) = self.session.split_draft() {
                        let next = draft.payer().other();
                        self.session.apply(UserAction::SplitPayerChosen(next));
                    }
                }
            }
            _ => self.edit_numeric_field(key, field),
        }
    }

    /// Edit a numeric buffer and forward the parsed value
    ///
    /// Reverts the buffer when the text does not parse or the core rejects
    /// the value (user share above the bill total).
    fn edit_numeric_field(&mut self, key: KeyEvent, field: SplitField) {
        let input = match field {
            SplitField::Bill => &mut self.bill,
            SplitField::UserShare => &mut self.user_share,
            SplitField::Payer => return,
        };
        let previous = input.value().to_string();
        if !input.handle_key(key) {
            return;
        }

        let parsed = if input.value().is_empty() {
            Some(0.0)
        } else {
            input.value().parse::<f64>().ok()
        };

        let applied = match parsed {
            Some(value) => {
                let action = match field {
                    SplitField::Bill => UserAction::SplitBillTotalEdited(value),
                    SplitField::UserShare => UserAction::SplitPaidByUserEdited(value),
                    SplitField::Payer => unreachable!(),
                };
                self.session.apply(action).is_applied()
            }
            None => false,
        };

        if !applied {
            tracing::debug!(field = ?field, "Reverted rejected numeric edit");
            let input = match field {
                SplitField::Bill => &mut self.bill,
                SplitField::UserShare => &mut self.user_share,
                SplitField::Payer => return,
            };
            input.set_value(previous);
        }
    }

    /// Drop focus (and stale buffers) for panels the session closed
    fn reconcile_focus(&mut self) {
        if !self.session.show_add_friend() {
            if matches!(self.focus, Focus::AddForm(_)) {
                self.focus = Focus::Roster;
            }
            self.add_name.clear();
        }
        if self.session.split_draft().is_none() {
            if matches!(self.focus, Focus::SplitForm(_)) {
                self.focus = Focus::Roster;
            }
            self.bill.clear();
            self.user_share.clear();
        }

        let len = self.session.roster().len();
        if len > 0 && self.roster_cursor >= len {
            self.roster_cursor = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::{Payer, Selection};
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(TallyConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_selects_friend_under_cursor() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        let sarah = ledger_core::FriendId::from("933372");
        assert!(app.session().selection().is_selected(&sarah));
        assert_eq!(app.focus(), Focus::SplitForm(SplitField::Bill));
    }

    #[test]
    fn test_full_split_through_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter)); // select Clark
        type_str(&mut app, "50");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "20");
        app.handle_key(key(KeyCode::Enter)); // submit

        let clark = ledger_core::FriendId::from("118837");
        assert_eq!(app.session().roster().get(&clark).unwrap().balance, 23.0);
        assert_eq!(*app.session().selection(), Selection::Unselected);
        assert_eq!(app.focus(), Focus::Roster);
        assert_eq!(app.bill().value(), "");
    }

    #[test]
    fn test_over_limit_keystroke_reverts_buffer() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "50");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "6"); // fine: 6 <= 50
        type_str(&mut app, "0"); // would be 60 > 50

        assert_eq!(app.user_share().value(), "6");
        assert_eq!(app.session().split_draft().unwrap().paid_by_user(), 6.0);
    }

    #[test]
    fn test_non_numeric_keystroke_reverts_buffer() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        type_str(&mut app, "5x");
        assert_eq!(app.bill().value(), "5");
    }

    #[test]
    fn test_add_friend_through_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.focus(), Focus::AddForm(AddField::Name));
        // Image field is prefilled with the configured avatar base
        assert_eq!(app.add_image().value(), "https://i.pravatar.cc/48");

        type_str(&mut app, "Mia");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.session().roster().len(), 4);
        assert_eq!(app.focus(), Focus::Roster);
    }

    #[test]
    fn test_rejected_add_submit_keeps_form_open() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Enter)); // empty name

        assert_eq!(app.session().roster().len(), 3);
        assert!(app.session().show_add_friend());
        assert!(matches!(app.focus(), Focus::AddForm(_)));
    }

    #[test]
    fn test_esc_closes_add_form() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        type_str(&mut app, "Mi");
        app.handle_key(key(KeyCode::Esc));

        assert!(!app.session().show_add_friend());
        assert_eq!(app.focus(), Focus::Roster);
        // Reopening starts from a clean draft and buffer
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.add_name().value(), "");
    }

    #[test]
    fn test_payer_toggle() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab)); // payer field
        assert_eq!(app.focus(), Focus::SplitForm(SplitField::Payer));

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.session().split_draft().unwrap().payer(), Payer::Friend);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.session().split_draft().unwrap().payer(), Payer::User);
    }

    #[test]
    fn test_empty_roster_without_seed() {
        let config = TallyConfig {
            seed_demo_roster: false,
            ..TallyConfig::default()
        };
        let mut app = App::new(config);
        app.handle_key(key(KeyCode::Enter)); // nothing to select
        assert_eq!(*app.session().selection(), Selection::Unselected);
    }
}
