// src/domain/carousel/state.rs
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Started { from: usize, to: usize },
    /// Another transition is still in flight; the request is dropped.
    Busy,
    AlreadyShowing,
    /// The owning controller has been torn down.
    Halted,
}

impl TransitionOutcome {
    pub fn started(self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// Position of a carousel over `len` slides.
///
/// `current_index` is always in `0..len` and a transition may only begin from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current_index: usize,
    transitioning: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> DomainResult<Self> {
        if len == 0 {
            return Err(DomainError::Validation(
                "carousel needs at least one slide".into(),
            ));
        }
        Ok(Self {
            len,
            current_index: 0,
            transitioning: false,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn phase(&self) -> Phase {
        if self.transitioning {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    pub fn next_index(&self) -> usize {
        (self.current_index + 1) % self.len
    }

    pub fn prev_index(&self) -> usize {
        (self.current_index + self.len - 1) % self.len
    }

    /// Request a move to `index`, normalized modulo the slide count.
    pub fn begin(&mut self, index: usize) -> TransitionOutcome {
        let to = index % self.len;
        if self.transitioning {
            return TransitionOutcome::Busy;
        }
        if to == self.current_index {
            return TransitionOutcome::AlreadyShowing;
        }
        let from = self.current_index;
        self.transitioning = true;
        self.current_index = to;
        TransitionOutcome::Started { from, to }
    }

    pub fn complete(&mut self) {
        self.transitioning = false;
    }
}
