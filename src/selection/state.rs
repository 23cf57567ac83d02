use serde::Serialize;

use crate::GeoPoint;

/// Role of a clicked point. The first click is the Sun, the second Earth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Body {
    Sun,
    Earth,
}

impl Body {
    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Earth => "Earth",
        }
    }
}

/// Points placed so far. Never more than two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum SelectionState {
    #[default]
    Empty,
    OneSelected {
        sun: GeoPoint,
    },
    TwoSelected {
        sun: GeoPoint,
        earth: GeoPoint,
    },
}

/// Result of feeding one click to the state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickOutcome {
    pub body: Body,
    /// True when the click arrived with two points already placed and
    /// everything had to be cleared first.
    pub reset: bool,
}

impl SelectionState {
    pub fn click(&mut self, at: GeoPoint) -> ClickOutcome {
        let (next, outcome) = match *self {
            SelectionState::Empty => (
                SelectionState::OneSelected { sun: at },
                ClickOutcome { body: Body::Sun, reset: false },
            ),
            SelectionState::OneSelected { sun } => (
                SelectionState::TwoSelected { sun, earth: at },
                ClickOutcome { body: Body::Earth, reset: false },
            ),
            SelectionState::TwoSelected { .. } => (
                SelectionState::OneSelected { sun: at },
                ClickOutcome { body: Body::Sun, reset: true },
            ),
        };
        *self = next;
        outcome
    }

    pub fn clear(&mut self) {
        *self = SelectionState::Empty;
    }

    pub fn len(&self) -> usize {
        match self {
            SelectionState::Empty => 0,
            SelectionState::OneSelected { .. } => 1,
            SelectionState::TwoSelected { .. } => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionState::Empty)
    }

    pub fn pair(&self) -> Option<(GeoPoint, GeoPoint)> {
        match *self {
            SelectionState::TwoSelected { sun, earth } => Some((sun, earth)),
            _ => None,
        }
    }

    pub fn points(&self) -> Vec<GeoPoint> {
        match *self {
            SelectionState::Empty => Vec::new(),
            SelectionState::OneSelected { sun } => vec![sun],
            SelectionState::TwoSelected { sun, earth } => vec![sun, earth],
        }
    }
}
