//! Confirmation flow for id-targeted mutations
//!
//! ```text
//! SelectingTarget --TargetSelected(id)--> Confirming{id}
//! Confirming{id}  --yes-->                Applying{id}     (terminal)
//! Confirming{id}  --no-->                 SelectingTarget
//! any live state  --cancel-->             Cancelled        (terminal)
//! ```
//!
//! Unrecognized answers leave the state unchanged. The transition function is
//! pure; prompting and applying the mutation belong to the caller.

use crate::record::RecordId;
use crate::validate::is_sentinel;

/// Operator reply to "is this the record?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Cancel,
    Unrecognized,
}

impl Answer {
    pub fn parse(raw: &str) -> Self {
        if is_sentinel(raw) {
            return Answer::Cancel;
        }
        let reply = raw.trim();
        if reply.eq_ignore_ascii_case("yes") {
            Answer::Yes
        } else if reply.eq_ignore_ascii_case("no") {
            Answer::No
        } else {
            Answer::Unrecognized
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEvent {
    TargetSelected(RecordId),
    Answer(Answer),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmState {
    #[default]
    SelectingTarget,
    Confirming {
        id: RecordId,
    },
    Applying {
        id: RecordId,
    },
    Cancelled,
}

impl ConfirmState {
    /// Pure transition function
    pub fn next(self, event: ConfirmEvent) -> Self {
        use ConfirmEvent as E;
        use ConfirmState as S;

        match (self, event) {
            (S::Applying { .. } | S::Cancelled, _) => self,
            (_, E::Cancel | E::Answer(Answer::Cancel)) => S::Cancelled,
            (S::SelectingTarget, E::TargetSelected(id)) => S::Confirming { id },
            (S::Confirming { id }, E::Answer(Answer::Yes)) => S::Applying { id },
            (S::Confirming { .. }, E::Answer(Answer::No)) => S::SelectingTarget,
            _ => self,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ConfirmState::Applying { .. } | ConfirmState::Cancelled)
    }

    /// Id currently being confirmed or applied
    pub fn target(&self) -> Option<RecordId> {
        match self {
            ConfirmState::Confirming { id } | ConfirmState::Applying { id } => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ID: RecordId = RecordId(3003);

    fn run(events: &[ConfirmEvent]) -> ConfirmState {
        events
            .iter()
            .fold(ConfirmState::default(), |state, event| state.next(*event))
    }

    #[test]
    fn test_answer_parse() {
        assert_eq!(Answer::parse("yes"), Answer::Yes);
        assert_eq!(Answer::parse(" YES\n"), Answer::Yes);
        assert_eq!(Answer::parse("No"), Answer::No);
        assert_eq!(Answer::parse("0"), Answer::Cancel);
        assert_eq!(Answer::parse("y"), Answer::Unrecognized);
        assert_eq!(Answer::parse(""), Answer::Unrecognized);
    }

    #[test]
    fn test_select_then_yes_applies() {
        let state = run(&[
            ConfirmEvent::TargetSelected(ID),
            ConfirmEvent::Answer(Answer::Yes),
        ]);
        assert_eq!(state, ConfirmState::Applying { id: ID });
        assert!(state.is_terminal());
    }

    #[test]
    fn test_no_returns_to_selection() {
        let state = run(&[
            ConfirmEvent::TargetSelected(ID),
            ConfirmEvent::Answer(Answer::No),
        ]);
        assert_eq!(state, ConfirmState::SelectingTarget);

        let state = state
            .next(ConfirmEvent::TargetSelected(RecordId(3004)))
            .next(ConfirmEvent::Answer(Answer::Yes));
        assert_eq!(state, ConfirmState::Applying { id: RecordId(3004) });
    }

    #[test]
    fn test_unrecognized_keeps_state() {
        let confirming = ConfirmState::Confirming { id: ID };
        assert_eq!(
            confirming.next(ConfirmEvent::Answer(Answer::Unrecognized)),
            confirming
        );
    }

    #[test]
    fn test_cancel_from_any_live_state() {
        assert_eq!(
            ConfirmState::SelectingTarget.next(ConfirmEvent::Cancel),
            ConfirmState::Cancelled
        );
        assert_eq!(
            ConfirmState::Confirming { id: ID }.next(ConfirmEvent::Answer(Answer::Cancel)),
            ConfirmState::Cancelled
        );
    }

    #[test]
    fn test_terminal_states_absorb() {
        let applying = ConfirmState::Applying { id: ID };
        assert_eq!(applying.next(ConfirmEvent::Cancel), applying);
        assert_eq!(
            ConfirmState::Cancelled.next(ConfirmEvent::TargetSelected(ID)),
            ConfirmState::Cancelled
        );
    }

    #[test]
    fn test_answers_ignored_while_selecting() {
        assert_eq!(
            ConfirmState::SelectingTarget.next(ConfirmEvent::Answer(Answer::Yes)),
            ConfirmState::SelectingTarget
        );
    }

    #[test]
    fn test_target() {
        assert_eq!(ConfirmState::SelectingTarget.target(), None);
        assert_eq!(ConfirmState::Confirming { id: ID }.target(), Some(ID));
    }
}
