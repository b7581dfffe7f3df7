//! TUI-less "ask" command

use std::error::Error;
use std::fmt;

use crate::core::app::ServiceContext;
use crate::core::config::settings::ServiceSettings;
use crate::core::query_service::QueryService;
use crate::core::session::{DisplayState, QuerySession};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskError {
    EmptyQuestion,
    /// The cycle ended in the failed state; carries the display message.
    Failed(String),
    /// The query task went away without reporting.
    NoOutcome,
}

impl fmt::Display for AskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AskError::EmptyQuestion => f.write_str("Question is empty"),
            AskError::Failed(message) => write!(f, "Error: {message}"),
            AskError::NoOutcome => f.write_str("Error: query finished without a result"),
        }
    }
}

impl Error for AskError {}

/// Run one full question/answer cycle and return the answer text.
pub async fn ask_question(context: &ServiceContext, question: &str) -> Result<String, AskError> {
    let mut session = QuerySession::new();
    let submission = session.submit(question).ok_or(AskError::EmptyQuestion)?;

    let (query_service, mut rx) = QueryService::new();
    query_service.spawn_query(context.query_params(submission));
    drop(query_service);

    while let Some((outcome, outcome_cycle)) = rx.recv().await {
        if session.resolve(outcome_cycle, outcome) {
            break;
        }
    }

    match session.snapshot().display {
        DisplayState::Success(answer) => Ok(answer.to_string()),
        DisplayState::Failed(error) => Err(AskError::Failed(error.to_string())),
        DisplayState::Pending | DisplayState::InitialEmpty => Err(AskError::NoOutcome),
    }
}

pub async fn run_ask(
    question: Vec<String>,
    settings: ServiceSettings,
) -> Result<(), Box<dyn Error>> {
    let question = question.join(" ");
    if question.trim().is_empty() {
        eprintln!("Usage: warehouse-chat ask <question>");
        std::process::exit(1);
    }

    let context = ServiceContext::new(settings)?;
    match ask_question(&context, &question).await {
        Ok(answer) => {
            println!("{answer}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
