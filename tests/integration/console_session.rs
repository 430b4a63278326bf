//! Full console sessions with scripted input

use std::io::Cursor;

use elidune_kiosk::{
    config::AppConfig,
    console::ConsoleFrontend,
    services::CredentialStore,
    session::{SessionFlow, SessionOutcome, SessionSettings},
    AppError,
};
use tempfile::TempDir;

type ScriptedConsole = ConsoleFrontend<Cursor<String>, Vec<u8>>;

fn session(temp: &TempDir, input: &str, store: CredentialStore) -> SessionFlow<ScriptedConsole> {
    let mut config = AppConfig::default();
    config.credentials.path = temp.path().join("credentials.txt");
    let console = ConsoleFrontend::new(Cursor::new(input.to_string()), Vec::new());
    SessionFlow::new(console, store, SessionSettings::from(&config))
}

fn transcript(session: SessionFlow<ScriptedConsole>) -> String {
    let (console, _, _) = session.into_parts();
    let (_, output) = console.into_inner();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_register_then_borrow() {
    let temp = TempDir::new().unwrap();
    let mut session = session(
        &temp,
        "2\ncarol\npw1\nThe Hunger Games\nB\n",
        CredentialStore::new(),
    );
    session.run().unwrap();

    assert!(matches!(session.outcome(), Some(SessionOutcome::Borrowed { .. })));
    let book = session.catalog().get_book("The Hunger Games").unwrap();
    assert_eq!(book.author, "Suzanne Collins");
    assert!(book.borrowed);

    let output = transcript(session);
    assert!(output.contains("Welcome to the Library Management System!"));
    assert!(output.contains("Account created successfully!"));
    assert!(output.contains("The Lord of the Rings by J.R.R. Tolkien"));
    assert!(output.contains("You have successfully borrowed the book The Hunger Games"));

    let reloaded = CredentialStore::load(&temp.path().join("credentials.txt")).unwrap();
    assert!(reloaded.authenticate("carol", "pw1"));
}

#[test]
fn test_retry_after_bad_login() {
    let temp = TempDir::new().unwrap();
    let mut store = CredentialStore::new();
    store.register("alice", "x").unwrap();

    let mut session = session(
        &temp,
        "9\n1\nalice\nwrong\n1\nalice\nx\nDune\n",
        store,
    );
    session.run().unwrap();

    assert!(matches!(
        session.outcome(),
        Some(SessionOutcome::Rejected { error: AppError::BookNotFound(_), .. })
    ));

    let output = transcript(session);
    assert!(output.contains("Invalid choice. Please try again."));
    assert!(output.contains("Invalid username or password. Please try again."));
    assert!(output.contains("Login successful!"));
    assert!(output.ends_with("That book is not available.\n"));
}

#[test]
fn test_return_is_rejected_for_available_book() {
    let temp = TempDir::new().unwrap();
    let mut store = CredentialStore::new();
    store.register("alice", "x").unwrap();

    let mut session = session(&temp, "1\nalice\nx\nThe Hunger Games\nreturn\n", store);
    session.run().unwrap();

    assert!(matches!(
        session.outcome(),
        Some(SessionOutcome::Rejected { error: AppError::NotBorrowed(_), .. })
    ));
    assert!(transcript(session).contains("is not currently borrowed"));
}

#[test]
fn test_exit_and_closed_input() {
    let temp = TempDir::new().unwrap();

    let mut exited = session(&temp, "0\n", CredentialStore::new());
    exited.run().unwrap();
    assert!(matches!(exited.outcome(), Some(SessionOutcome::Exited)));
    assert!(transcript(exited).ends_with("Exiting the program...\n"));

    let mut closed = session(&temp, "", CredentialStore::new());
    closed.run().unwrap();
    assert!(matches!(closed.outcome(), Some(SessionOutcome::Exited)));

    assert!(!temp.path().join("credentials.txt").exists());
}

#[test]
fn test_closed_input_after_login() {
    let temp = TempDir::new().unwrap();
    let mut store = CredentialStore::new();
    store.register("alice", "x").unwrap();

    let mut session = session(&temp, "1\nalice\nx\n", store);
    session.run().unwrap();

    assert!(matches!(session.outcome(), Some(SessionOutcome::Exited)));
    assert!(transcript(session).ends_with("Exiting the program...\n"));
    assert!(!temp.path().join("credentials.txt").exists());
}
