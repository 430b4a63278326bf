//! Prompts, messages and the front end capability driving a session

use crate::{error::AppResult, models::BookShort};

/// Input the session asks the user for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    MenuChoice,
    Username,
    Password,
    NewUsername,
    NewPassword,
    BookTitle,
    LoanAction,
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Prompt::MenuChoice => "Enter your choice:",
            Prompt::Username => "Enter your username:",
            Prompt::Password => "Enter your password:",
            Prompt::NewUsername => "Enter a username for your new account:",
            Prompt::NewPassword => "Enter a password for your new account:",
            Prompt::BookTitle => "Which book would you like to borrow or return?",
            Prompt::LoanAction => "Would you like to borrow the book (B) or return the book (R)?",
        };
        f.write_str(text)
    }
}

/// Output the session shows to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Welcome,
    Menu,
    InvalidChoice,
    LoginSucceeded,
    LoginFailed,
    AccountCreated,
    AccountCreationFailed,
    Exiting,
    Catalog(Vec<BookShort>),
    BookNotAvailable,
    AlreadyBorrowed,
    Borrowed(String),
    Returned(String),
    NotBorrowed(String),
    InvalidAction,
    NotPersisted(String),
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::Welcome => write!(f, "Welcome to the Library Management System!"),
            Message::Menu => write!(f, "1. Login\n2. Create a new account\n0. Exit"),
            Message::InvalidChoice => write!(f, "Invalid choice. Please try again."),
            Message::LoginSucceeded => write!(f, "Login successful!"),
            Message::LoginFailed => {
                write!(f, "Invalid username or password. Please try again.")
            }
            Message::AccountCreated => write!(f, "Account created successfully!"),
            Message::AccountCreationFailed => {
                write!(f, "Account creation failed. Username already exists.")
            }
            Message::Exiting => write!(f, "Exiting the program..."),
            Message::Catalog(books) => {
                write!(f, "Books available in the library:")?;
                for book in books {
                    write!(f, "\n{}", book)?;
                }
                Ok(())
            }
            Message::BookNotAvailable => write!(f, "That book is not available."),
            Message::AlreadyBorrowed => write!(f, "The book is already borrowed."),
            Message::Borrowed(title) => {
                write!(f, "You have successfully borrowed the book {}", title)
            }
            Message::Returned(title) => {
                write!(f, "You have successfully returned the book {}", title)
            }
            Message::NotBorrowed(title) => {
                write!(f, "The book {} is not currently borrowed.", title)
            }
            Message::InvalidAction => write!(f, "Invalid action. Please try again."),
            Message::NotPersisted(reason) => write!(f, "Error saving credentials: {}", reason),
        }
    }
}

/// Capabilities a front end provides to a session.
///
/// A console, a dialog-based UI or a test script can all drive the same
/// [`SessionFlow`](super::SessionFlow).
#[cfg_attr(test, mockall::automock)]
pub trait Frontend {
    /// Ask the user for input. `None` means no more input will arrive.
    fn prompt(&mut self, prompt: Prompt) -> AppResult<Option<String>>;

    /// Show a message to the user
    fn display(&mut self, message: &Message) -> AppResult<()>;
}
