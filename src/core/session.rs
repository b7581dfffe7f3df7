//! The single question/answer cycle behind the chat screen.
//!
//! `QuerySession` is the only owner of the request lifecycle. A cycle starts
//! with [`QuerySession::submit`], which hands back the [`Submission`] the
//! caller must turn into exactly one outbound call, and ends with
//! [`QuerySession::resolve`] once that call reports back.

use tracing::{debug, info};

use crate::core::query_service::QueryOutcome;

/// Lifecycle of the latest exchange. The answer and the error live inside
/// their variants, so at most one of them exists and neither exists while a
/// call is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    Initial,
    Pending { cycle_id: u64 },
    Success { answer: String },
    Failed { error: String },
}

/// What the renderer should show for the assistant side of the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState<'a> {
    InitialEmpty,
    Pending,
    Success(&'a str),
    Failed(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot<'a> {
    pub last_question: &'a str,
    pub display: DisplayState<'a>,
}

/// A question accepted for sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub cycle_id: u64,
    pub question: String,
}

#[derive(Debug)]
pub struct QuerySession {
    last_question: String,
    status: QueryStatus,
    next_cycle_id: u64,
}

impl Default for QuerySession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuerySession {
    pub fn new() -> Self {
        Self {
            last_question: String::new(),
            status: QueryStatus::Initial,
            next_cycle_id: 1,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, QueryStatus::Pending { .. })
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn last_question(&self) -> &str {
        &self.last_question
    }

    /// Start a new cycle for `raw_input`.
    ///
    /// Returns `None`, leaving the session untouched, when the trimmed input
    /// is empty or a cycle is already pending.
    pub fn submit(&mut self, raw_input: &str) -> Option<Submission> {
        let question = raw_input.trim();
        if question.is_empty() {
            return None;
        }
        if self.is_pending() {
            debug!("submission ignored while a query is pending");
            return None;
        }

        let cycle_id = self.next_cycle_id;
        self.next_cycle_id = self.next_cycle_id.wrapping_add(1);
        self.last_question = question.to_string();
        self.status = QueryStatus::Pending { cycle_id };
        info!(cycle_id, "question submitted");

        Some(Submission {
            cycle_id,
            question: self.last_question.clone(),
        })
    }

    /// Settle the pending cycle. Outcomes for any other cycle, or arriving
    /// when nothing is pending, are dropped; returns whether the outcome was
    /// applied.
    pub fn resolve(&mut self, cycle_id: u64, outcome: QueryOutcome) -> bool {
        match self.status {
            QueryStatus::Pending { cycle_id: pending } if pending == cycle_id => {}
            _ => {
                debug!(cycle_id, status = ?self.status, "stale query outcome dropped");
                return false;
            }
        }

        self.status = match outcome {
            QueryOutcome::Answered(body) => QueryStatus::Success {
                answer: body.into_display_text(),
            },
            QueryOutcome::Failed(err) => QueryStatus::Failed {
                error: err.to_string(),
            },
        };
        let success = matches!(self.status, QueryStatus::Success { .. });
        info!(cycle_id, success, "query resolved");
        true
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        let display = match &self.status {
            QueryStatus::Initial => DisplayState::InitialEmpty,
            QueryStatus::Pending { .. } => DisplayState::Pending,
            QueryStatus::Success { answer } => DisplayState::Success(answer),
            QueryStatus::Failed { error } => DisplayState::Failed(error),
        };
        SessionSnapshot {
            last_question: &self.last_question,
            display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResponseBody;
    use crate::core::query_service::{QueryError, TRANSPORT_ERROR_MESSAGE};
    use serde_json::json;

    fn answered(value: serde_json::Value) -> QueryOutcome {
        QueryOutcome::Answered(ResponseBody::from_value(value))
    }

    fn resolved_success(question: &str, answer: &str) -> QuerySession {
        let mut session = QuerySession::new();
        let submission = session.submit(question).expect("accepted");
        assert!(session.resolve(
            submission.cycle_id,
            answered(json!({"natural_language_response": answer}))
        ));
        session
    }

    #[test]
    fn starts_in_initial_empty_state() {
        let session = QuerySession::new();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.last_question, "");
        assert_eq!(snapshot.display, DisplayState::InitialEmpty);
        assert!(!session.is_pending());
    }

    #[test]
    fn submit_trims_and_enters_pending() {
        let mut session = QuerySession::new();
        let submission = session.submit("  stock for 3/8 hoses?\n").expect("accepted");

        assert_eq!(submission.question, "stock for 3/8 hoses?");
        assert_eq!(session.last_question(), "stock for 3/8 hoses?");
        assert_eq!(
            session.status(),
            &QueryStatus::Pending {
                cycle_id: submission.cycle_id
            }
        );
        assert_eq!(session.snapshot().display, DisplayState::Pending);
    }

    #[test]
    fn blank_input_is_ignored_in_every_state() {
        let mut session = QuerySession::new();
        assert!(session.submit("").is_none());
        assert!(session.submit(" \t\n ").is_none());
        assert_eq!(session.status(), &QueryStatus::Initial);

        let mut session = resolved_success("q", "a");
        assert!(session.submit("   ").is_none());
        assert_eq!(
            session.status(),
            &QueryStatus::Success {
                answer: "a".to_string()
            }
        );
    }

    #[test]
    fn submit_while_pending_is_a_no_op() {
        let mut session = QuerySession::new();
        let first = session.submit("first").expect("accepted");

        assert!(session.submit("second").is_none());
        assert_eq!(session.last_question(), "first");
        assert_eq!(
            session.status(),
            &QueryStatus::Pending {
                cycle_id: first.cycle_id
            }
        );
    }

    #[test]
    fn each_submission_gets_a_fresh_cycle() {
        let mut session = QuerySession::new();
        let first = session.submit("one").expect("accepted");
        session.resolve(first.cycle_id, QueryOutcome::Failed(QueryError::Transport));
        let second = session.submit("two").expect("accepted");
        assert_ne!(first.cycle_id, second.cycle_id);
    }

    #[test]
    fn resolves_success_with_recognized_field() {
        let session = resolved_success("q", "X");
        assert_eq!(session.snapshot().display, DisplayState::Success("X"));
    }

    #[test]
    fn resolves_success_with_serialized_fallback() {
        let mut session = QuerySession::new();
        let submission = session.submit("q").expect("accepted");
        session.resolve(submission.cycle_id, answered(json!({"foo": "bar"})));
        assert_eq!(
            session.snapshot().display,
            DisplayState::Success(r#"{"foo":"bar"}"#)
        );
    }

    #[test]
    fn resolves_failures_to_messages() {
        let cases = [
            (
                QueryError::Service {
                    status: 404,
                    detail: Some("not found".to_string()),
                },
                "not found",
            ),
            (
                QueryError::Service {
                    status: 500,
                    detail: None,
                },
                "HTTP 500",
            ),
            (QueryError::Transport, TRANSPORT_ERROR_MESSAGE),
        ];

        for (error, expected) in cases {
            let mut session = QuerySession::new();
            let submission = session.submit("q").expect("accepted");
            assert!(session.resolve(submission.cycle_id, QueryOutcome::Failed(error)));
            assert_eq!(session.snapshot().display, DisplayState::Failed(expected));
        }
    }

    #[test]
    fn second_resolution_for_same_cycle_is_dropped() {
        let mut session = QuerySession::new();
        let submission = session.submit("q").expect("accepted");
        assert!(session.resolve(submission.cycle_id, answered(json!({"answer": "first"}))));
        assert!(!session.resolve(
            submission.cycle_id,
            QueryOutcome::Failed(QueryError::Transport)
        ));
        assert_eq!(session.snapshot().display, DisplayState::Success("first"));
    }

    #[test]
    fn outcome_for_other_cycle_is_dropped() {
        let mut session = QuerySession::new();
        let submission = session.submit("q").expect("accepted");
        assert!(!session.resolve(
            submission.cycle_id + 1,
            answered(json!({"answer": "wrong"}))
        ));
        assert!(session.is_pending());
    }

    #[test]
    fn resolve_without_submission_is_dropped() {
        let mut session = QuerySession::new();
        assert!(!session.resolve(1, QueryOutcome::Failed(QueryError::Transport)));
        assert_eq!(session.snapshot().display, DisplayState::InitialEmpty);
    }

    #[test]
    fn new_submission_clears_previous_outcome_before_call() {
        let mut session = resolved_success("old", "old answer");
        let submission = session.submit("new").expect("accepted");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.last_question, "new");
        assert_eq!(snapshot.display, DisplayState::Pending);
        assert_eq!(submission.question, "new");

        session.resolve(
            submission.cycle_id,
            QueryOutcome::Failed(QueryError::Service {
                status: 502,
                detail: None,
            }),
        );
        let submission = session.submit("newer").expect("accepted from failed");
        assert_eq!(session.snapshot().display, DisplayState::Pending);
        assert_eq!(submission.question, "newer");
    }
}
