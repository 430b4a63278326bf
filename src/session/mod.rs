//! Desk session state machine
//!
//! A session loops on the login/registration menu until the user is
//! authenticated or exits, then runs a single borrow or return interaction
//! against a freshly seeded catalog. All user interaction goes through a
//! [`Frontend`], so the same flow serves the console and any other surface.

pub mod frontend;


use std::mem;
use std::path::PathBuf;

use crate::{
    config::{AppConfig, SeedBook},
    error::{AppError, AppResult},
    models::{LoanAction, User},
    services::{Catalog, CredentialStore},
};

pub use frontend::{Frontend, Message, Prompt};

/// Entry in the login/registration menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Login,
    Register,
    Exit,
}

impl std::str::FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Login),
            "2" => Ok(MenuChoice::Register),
            "0" => Ok(MenuChoice::Exit),
            other => Err(AppError::InvalidMenuChoice(other.to_string())),
        }
    }
}

/// Settings a session needs from the application configuration
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub credentials_path: PathBuf,
    pub persist_on_register: bool,
    pub seed: Vec<SeedBook>,
}

impl From<&AppConfig> for SessionSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            credentials_path: config.credentials.path.clone(),
            persist_on_register: config.credentials.persist_on_register,
            seed: config.catalog.seed.clone(),
        }
    }
}

/// How a session ended
#[derive(Debug)]
pub enum SessionOutcome {
    /// The user left before completing a loan interaction
    Exited,
    Borrowed { user: User, title: String },
    Returned { user: User, title: String },
    /// The interaction ended on an error shown to the user
    Rejected { user: User, error: AppError },
}

#[derive(Debug)]
pub enum SessionState {
    AwaitingMenuChoice,
    LoggingIn,
    Registering,
    Authenticated(User),
    SelectingBook(User),
    ChoosingAction { user: User, title: String },
    Borrowing { user: User, title: String },
    Returning { user: User, title: String },
    Done(SessionOutcome),
}

pub struct SessionFlow<F: Frontend> {
    frontend: F,
    credentials: CredentialStore,
    catalog: Catalog,
    settings: SessionSettings,
    state: SessionState,
    /// Registrations not yet written to the credentials file
    unsaved: bool,
}

impl<F: Frontend> SessionFlow<F> {
    pub fn new(frontend: F, credentials: CredentialStore, settings: SessionSettings) -> Self {
        Self {
            frontend,
            credentials,
            catalog: Catalog::new(),
            settings,
            state: SessionState::AwaitingMenuChoice,
            unsaved: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, SessionState::Done(_))
    }

    pub fn outcome(&self) -> Option<&SessionOutcome> {
        match &self.state {
            SessionState::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn into_parts(self) -> (F, CredentialStore, Catalog) {
        (self.frontend, self.credentials, self.catalog)
    }

    /// Greet the user and drive the session until it is done
    pub fn run(&mut self) -> AppResult<()> {
        self.frontend.display(&Message::Welcome)?;
        while !self.is_done() {
            self.step()?;
        }
        Ok(())
    }

    /// Perform a single transition. Errors come only from the front end;
    /// pending registrations are flushed before such an error is returned.
    pub fn step(&mut self) -> AppResult<()> {
        let state = mem::replace(&mut self.state, SessionState::AwaitingMenuChoice);
        match self.advance(state) {
            Ok(next) => {
                self.state = next;
                tracing::debug!(state = ?self.state, "Session transition");
                Ok(())
            }
            Err(error) => {
                if self.unsaved {
                    if let Err(e) = self.save_credentials() {
                        tracing::error!(code = e.code() as u32, "Changes not persisted: {}", e);
                    }
                }
                Err(error)
            }
        }
    }

    fn advance(&mut self, state: SessionState) -> AppResult<SessionState> {
        match state {
            SessionState::AwaitingMenuChoice => self.await_menu_choice(),
            SessionState::LoggingIn => self.log_in(),
            SessionState::Registering => self.register(),
            SessionState::Authenticated(user) => {
                self.catalog = Catalog::seeded(&self.settings.seed);
                self.frontend
                    .display(&Message::Catalog(self.catalog.list_books()))?;
                Ok(SessionState::SelectingBook(user))
            }
            SessionState::SelectingBook(user) => self.select_book(user),
            SessionState::ChoosingAction { user, title } => self.choose_action(user, title),
            SessionState::Borrowing { user, title } => match self.catalog.borrow(&title).map(|_| ()) {
                Ok(()) => {
                    self.frontend.display(&Message::Borrowed(title.clone()))?;
                    self.complete(SessionOutcome::Borrowed { user, title })
                }
                Err(error) => self.reject(user, error),
            },
            SessionState::Returning { user, title } => {
                match self.catalog.return_book(&title).map(|_| ()) {
                    Ok(()) => {
                        self.frontend.display(&Message::Returned(title.clone()))?;
                        self.complete(SessionOutcome::Returned { user, title })
                    }
                    Err(error) => self.reject(user, error),
                }
            }
            SessionState::Done(outcome) => Ok(SessionState::Done(outcome)),
        }
    }

    fn await_menu_choice(&mut self) -> AppResult<SessionState> {
        self.frontend.display(&Message::Menu)?;
        let Some(input) = self.frontend.prompt(Prompt::MenuChoice)? else {
            return self.exit();
        };

        match input.parse::<MenuChoice>() {
            Ok(MenuChoice::Login) => Ok(SessionState::LoggingIn),
            Ok(MenuChoice::Register) => Ok(SessionState::Registering),
            Ok(MenuChoice::Exit) => self.exit(),
            Err(error) => {
                self.report(&error)?;
                Ok(SessionState::AwaitingMenuChoice)
            }
        }
    }

    fn log_in(&mut self) -> AppResult<SessionState> {
        let Some((username, password)) = self.ask_credentials(Prompt::Username, Prompt::Password)?
        else {
            return self.exit();
        };

        if self.credentials.authenticate(&username, &password) {
            self.frontend.display(&Message::LoginSucceeded)?;
            Ok(SessionState::Authenticated(User::new(username)))
        } else {
            self.report(&AppError::Authentication(format!(
                "invalid username or password for {}",
                username
            )))?;
            Ok(SessionState::AwaitingMenuChoice)
        }
    }

    fn register(&mut self) -> AppResult<SessionState> {
        let Some((username, password)) =
            self.ask_credentials(Prompt::NewUsername, Prompt::NewPassword)?
        else {
            return self.exit();
        };

        match self.credentials.register(&username, &password) {
            Ok(()) => {
                self.unsaved = true;
                if self.settings.persist_on_register {
                    self.persist()?;
                }
                self.frontend.display(&Message::AccountCreated)?;
                Ok(SessionState::Authenticated(User::new(username)))
            }
            Err(error) => {
                self.report(&error)?;
                Ok(SessionState::AwaitingMenuChoice)
            }
        }
    }

    fn select_book(&mut self, user: User) -> AppResult<SessionState> {
        let Some(title) = self.frontend.prompt(Prompt::BookTitle)? else {
            return self.exit();
        };

        let lookup = self.catalog.get_book(&title).map(|book| book.borrowed);
        match lookup {
            Ok(true) => self.reject(user, AppError::AlreadyBorrowed(title)),
            Ok(false) => Ok(SessionState::ChoosingAction { user, title }),
            Err(error) => self.reject(user, error),
        }
    }

    fn choose_action(&mut self, user: User, title: String) -> AppResult<SessionState> {
        let Some(input) = self.frontend.prompt(Prompt::LoanAction)? else {
            return self.exit();
        };

        match input.parse::<LoanAction>() {
            Ok(LoanAction::Borrow) => Ok(SessionState::Borrowing { user, title }),
            Ok(LoanAction::Return) => Ok(SessionState::Returning { user, title }),
            Err(error) => self.reject(user, error),
        }
    }

    fn ask_credentials(
        &mut self,
        username_prompt: Prompt,
        password_prompt: Prompt,
    ) -> AppResult<Option<(String, String)>> {
        let Some(username) = self.frontend.prompt(username_prompt)? else {
            return Ok(None);
        };
        let Some(password) = self.frontend.prompt(password_prompt)? else {
            return Ok(None);
        };
        Ok(Some((username, password)))
    }

    /// Log an error and show the matching message
    fn report(&mut self, error: &AppError) -> AppResult<()> {
        tracing::warn!(code = error.code() as u32, "{}", error);
        let message = match error {
            AppError::InvalidMenuChoice(_) => Message::InvalidChoice,
            AppError::Authentication(_) => Message::LoginFailed,
            AppError::DuplicateUser(_) => Message::AccountCreationFailed,
            AppError::BookNotFound(_) => Message::BookNotAvailable,
            AppError::AlreadyBorrowed(_) => Message::AlreadyBorrowed,
            AppError::NotBorrowed(title) => Message::NotBorrowed(title.clone()),
            AppError::InvalidAction(_) => Message::InvalidAction,
            AppError::Io(_) | AppError::Config(_) => Message::NotPersisted(error.to_string()),
        };
        self.frontend.display(&message)
    }

    fn reject(&mut self, user: User, error: AppError) -> AppResult<SessionState> {
        self.report(&error)?;
        self.complete(SessionOutcome::Rejected { user, error })
    }

    /// Leave the session; only registrations not yet on disk are written
    fn exit(&mut self) -> AppResult<SessionState> {
        if self.unsaved {
            self.persist()?;
        }
        self.frontend.display(&Message::Exiting)?;
        Ok(SessionState::Done(SessionOutcome::Exited))
    }

    /// End a completed loan interaction, flushing the credential store
    fn complete(&mut self, outcome: SessionOutcome) -> AppResult<SessionState> {
        self.persist()?;
        Ok(SessionState::Done(outcome))
    }

    /// Save the store, telling the user when that fails
    fn persist(&mut self) -> AppResult<()> {
        match self.save_credentials() {
            Ok(()) => Ok(()),
            Err(error) => self.report(&error),
        }
    }

    fn save_credentials(&mut self) -> AppResult<()> {
        self.credentials.save(&self.settings.credentials_path)?;
        self.unsaved = false;
        Ok(())
    }
}
