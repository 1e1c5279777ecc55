//! Durable interaction state of the page session.
//!
//! The state is a small `Copy` value and every transition is a pure function
//! returning the next state. The controller owns the current value and the
//! dismissal schedule; the frontend only ever reads it.

use crate::constants::{
    BIG_BUTTON_MESSAGE_DELAY, BIG_BUTTON_REWARD, BUTTERFLY_MESSAGE_DELAY, BUTTERFLY_REWARD,
    HEART_MESSAGE_DELAY, HEART_REWARD, SORRY_TEXT_CAP,
};
use std::time::Duration;

/// Something the user clicked that sends more sorries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    Heart,
    BigButton,
    Butterfly,
}

impl Activation {
    /// Sorries added to the counter.
    pub const fn reward(self) -> u32 {
        match self {
            Activation::Heart => HEART_REWARD,
            Activation::BigButton => BIG_BUTTON_REWARD,
            Activation::Butterfly => BUTTERFLY_REWARD,
        }
    }

    /// How long the message panel stays visible after this activation.
    pub const fn message_delay(self) -> Duration {
        match self {
            Activation::Heart => HEART_MESSAGE_DELAY,
            Activation::BigButton => BIG_BUTTON_MESSAGE_DELAY,
            Activation::Butterfly => BUTTERFLY_MESSAGE_DELAY,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Activation::Heart => "heart",
            Activation::BigButton => "big-button",
            Activation::Butterfly => "butterfly",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub sorry_count: u32,
    pub message_visible: bool,
}

impl InteractionState {
    pub const fn new() -> Self {
        Self {
            sorry_count: 0,
            message_visible: false,
        }
    }

    /// Next state after `activation`: the counter grows and the panel shows.
    #[must_use]
    pub fn activated(self, activation: Activation) -> Self {
        Self {
            sorry_count: self.sorry_count.saturating_add(activation.reward()),
            message_visible: true,
        }
    }

    /// Next state after the pending dismissal fired.
    #[must_use]
    pub fn dismissed(self) -> Self {
        Self {
            message_visible: false,
            ..self
        }
    }

    /// Number of floating sorry captions to draw for the current count.
    pub fn sorry_text_count(&self) -> usize {
        sorry_text_count(self.sorry_count)
    }
}

#[inline]
pub fn sorry_text_count(sorry_count: u32) -> usize {
    (sorry_count as usize).min(SORRY_TEXT_CAP)
}
