// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Detection of the obsolete tuple-assignment form.
//!
//! The syntax `(x1, ..., xN) := expression` without a leading `let` was valid
//! in old Gobstones and is rejected with a dedicated message so users get a
//! better diagnostic than a generic parse error. Detection runs as a small
//! automaton over the tag stream the lexer emits, which keeps the lexer body
//! flat and lets the table be tested in isolation.
//!
//! States:
//!
//! 1. neutral
//! 2. after `(` or `,` inside a candidate tuple pattern (no `let` before it)
//! 3. after a lower identifier in that context
//! 4. after the closing `)` in that context
//! 5. after `let`, which disarms the automaton for the following tuple
//!
//! Reaching state 4 and then seeing `:=` is the obsolete form. Any tag the
//! table does not name resets to neutral.

use super::TokenKind;

/// Automaton state. See the module docs for the numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Neutral,
    AfterOpen,
    AfterItem,
    AfterClose,
    AfterLet,
}

/// Tracks token tags looking for `( lowerid, ... ) :=` without `let`.
#[derive(Debug, Clone)]
pub(crate) struct TupleAssignmentDetector {
    state: State,
}

impl TupleAssignmentDetector {
    pub(crate) fn new() -> Self {
        Self {
            state: State::Neutral,
        }
    }

    /// Observes one emitted tag.
    ///
    /// Returns `true` when the tag is the `:=` completing an obsolete tuple
    /// assignment; the caller reports the error at that token's position.
    pub(crate) fn feed(&mut self, kind: &TokenKind) -> bool {
        if self.state == State::AfterClose && matches!(kind, TokenKind::Assign) {
            self.state = State::Neutral;
            return true;
        }

        self.state = match (self.state, kind) {
            (_, TokenKind::Let) => State::AfterLet,
            (State::AfterLet, _) => State::Neutral,
            (State::Neutral | State::AfterClose, TokenKind::LeftParen) => State::AfterOpen,
            (State::AfterOpen, TokenKind::LowerId(_)) => State::AfterItem,
            (State::AfterItem, TokenKind::Comma) => State::AfterOpen,
            (State::AfterItem, TokenKind::RightParen) => State::AfterClose,
            _ => State::Neutral,
        };
        false
    }
}
