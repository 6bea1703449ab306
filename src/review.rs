//! Review Session State Machine
//!
//! Models the checkout review overlay and the mock order submission as an
//! explicit state machine instead of a pair of loose booleans.
//!
//! # State Flow
//!
//! ```text
//! Closed --open()--> Open --submit()--> Submitted
//!   ^                 |                     |
//!   +----close()------+--------close()------+
//! ```
//!
//! There is no terminal state: the cycle can be re-entered any number of
//! times per session. `Submitted` implies the overlay is open, so a submitted
//! order behind a closed overlay cannot be represented.

use rand::Rng;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Review overlay states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReviewState {
    /// Overlay hidden, nothing submitted
    #[default]
    Closed,
    /// Overlay visible, order not yet placed
    Open,
    /// Overlay visible, mock order placed
    Submitted,
}

impl ReviewState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::Submitted)
    }

    pub const fn is_submitted(self) -> bool {
        matches!(self, Self::Submitted)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::Open => "Reviewing order",
            Self::Submitted => "Order placed",
        }
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Errors for review transitions that break the caller contract
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTransitionError {
    /// `submit()` was called while the overlay was closed
    #[error("cannot submit an order while the review is closed")]
    NotOpen,
}

/// Display-only order reference shown on the review screen.
///
/// Not unique across sessions and never used for identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderReference(String);

impl OrderReference {
    const PREFIX: &'static str = "HF-";
    const ALPHABET: &'static [u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
    const LEN: usize = 6;

    /// Generate a random reference like `HF-7KQ2MX`.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let token: String = (0..Self::LEN)
            .map(|_| {
                let idx = rng.random_range(0..Self::ALPHABET.len());
                char::from(Self::ALPHABET[idx])
            })
            .collect();
        Self(format!("{}{}", Self::PREFIX, token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Review session owned by a configuration engine.
///
/// # Example
///
/// ```
/// use hotfixers::review::{ReviewSession, ReviewState};
///
/// let mut review = ReviewSession::new();
/// assert!(review.submit().is_err());
///
/// review.open();
/// review.submit().unwrap();
/// assert_eq!(review.state(), ReviewState::Submitted);
///
/// review.close();
/// assert_eq!(review.state(), ReviewState::Closed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReviewSession {
    state: ReviewState,
    reference: Option<OrderReference>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_submitted(&self) -> bool {
        self.state.is_submitted()
    }

    /// Cosmetic order reference, present while the overlay is open
    pub fn order_reference(&self) -> Option<&OrderReference> {
        self.reference.as_ref()
    }

    /// Show the overlay. Opening an already open session keeps its state.
    pub fn open(&mut self) {
        if self.state.is_open() {
            debug!(state = %self.state, "review already open");
            return;
        }
        self.state = ReviewState::Open;
        self.reference = Some(OrderReference::generate());
        debug!(reference = ?self.reference, "review opened");
    }

    /// Place the mock order. Only valid while the overlay is open.
    pub fn submit(&mut self) -> Result<(), ReviewTransitionError> {
        match self.state {
            ReviewState::Closed => {
                warn!("submit requested while review is closed");
                Err(ReviewTransitionError::NotOpen)
            }
            ReviewState::Open | ReviewState::Submitted => {
                self.state = ReviewState::Submitted;
                debug!("mock order submitted");
                Ok(())
            }
        }
    }

    /// Hide the overlay and discard any submission.
    pub fn close(&mut self) {
        self.state = ReviewState::Closed;
        self.reference = None;
        debug!("review closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_closed() {
        let review = ReviewSession::new();
        assert_eq!(review.state(), ReviewState::Closed);
        assert!(!review.is_open());
        assert!(!review.is_submitted());
        assert!(review.order_reference().is_none());
    }

    #[test]
    fn test_submit_while_closed_is_rejected() {
        let mut review = ReviewSession::new();
        assert_eq!(review.submit(), Err(ReviewTransitionError::NotOpen));
        assert_eq!(review.state(), ReviewState::Closed);
    }

    #[test]
    fn test_open_submit_close_cycle() {
        let mut review = ReviewSession::new();
        review.open();
        assert_eq!(review.state(), ReviewState::Open);
        assert!(review.order_reference().is_some());

        review.submit().unwrap();
        assert!(review.is_open());
        assert!(review.is_submitted());

        review.close();
        assert_eq!(review.state(), ReviewState::Closed);
        assert!(review.order_reference().is_none());
    }

    #[test]
    fn test_reopen_keeps_submitted_state() {
        let mut review = ReviewSession::new();
        review.open();
        review.submit().unwrap();
        let reference = review.order_reference().cloned();
        review.open();
        assert_eq!(review.state(), ReviewState::Submitted);
        assert_eq!(review.order_reference().cloned(), reference);
    }

    #[test]
    fn test_order_reference_shape() {
        let reference = OrderReference::generate();
        let s = reference.as_str();
        assert!(s.starts_with("HF-"));
        assert_eq!(s.len(), 9);
        assert!(s[3..].chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
