//! Screen graph and navigation controller.
//!
//! The order flow is a fixed, linear graph of four screens. Transitions are
//! data: an explicit `(screen, event) -> screen` table that can be exercised
//! without any rendering attached. Back navigation is not a table edge; it
//! replays the history stack.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{OrderState, StringKey};

/// The four screens of the order flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Start,
    Flavor,
    Pickup,
    Summary,
}

impl Screen {
    /// Localization key for the screen's display title.
    pub fn title(&self) -> StringKey {
        match self {
            Self::Start => StringKey::AppName,
            Self::Flavor => StringKey::ChooseFlavor,
            Self::Pickup => StringKey::ChoosePickupDate,
            Self::Summary => StringKey::OrderSummary,
        }
    }

    /// Whether the selection this screen asks for has been made.
    ///
    /// This is the "next is enabled" guard: quantity on Start, flavor on
    /// Flavor, pickup date on Pickup. Summary asks for nothing.
    pub fn selection_complete(
        &self,
        order: &OrderState,
    ) -> bool {
        match self {
            Self::Start => order.has_quantity(),
            Self::Flavor => order.has_flavor(),
            Self::Pickup => order.has_date(),
            Self::Summary => true,
        }
    }
}

/// Events a screen can emit at the navigation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Next,
    Back,
    Cancel,
    Send,
}

/// Directed edges of the screen graph.
///
/// `Back` is deliberately absent: it pops the history stack instead of
/// following an edge, so it never needs to be kept in sync with this table.
const TRANSITIONS: &[(Screen, NavEvent, Screen)] = &[
    (Screen::Start, NavEvent::Next, Screen::Flavor),
    (Screen::Flavor, NavEvent::Next, Screen::Pickup),
    (Screen::Flavor, NavEvent::Cancel, Screen::Start),
    (Screen::Pickup, NavEvent::Next, Screen::Summary),
    (Screen::Pickup, NavEvent::Cancel, Screen::Start),
    (Screen::Summary, NavEvent::Cancel, Screen::Start),
    (Screen::Summary, NavEvent::Send, Screen::Start),
];

/// Looks up the screen reached from `from` on `event`, if the graph has such
/// an edge.
pub fn transition(
    from: Screen,
    event: NavEvent,
) -> Option<Screen> {
    TRANSITIONS
        .iter()
        .find(|(source, trigger, _)| *source == from && *trigger == event)
        .map(|(_, _, target)| *target)
}

/// A refused navigation request. Navigation state is unchanged when one of
/// these comes back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// The current screen has no edge for the event.
    #[error("{0:?} does not accept {1:?}")]
    UnsupportedTransition(Screen, NavEvent),

    /// Back was requested with an empty history stack.
    #[error("no screen to navigate back to")]
    HistoryEmpty,

    /// Next was requested before the screen's required selection was made.
    #[error("{0:?} requires a selection before continuing")]
    SelectionMissing(Screen),
}

/// Tracks the current screen and the back-stack of prior screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    current: Screen,
    back_stack: Vec<Screen>,
}

impl NavigationController {
    /// Starts at [`Screen::Start`] with an empty history.
    pub fn new() -> Self {
        Self {
            current: Screen::Start,
            back_stack: Vec::new(),
        }
    }

    /// Screen currently shown.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// True iff there is a prior screen to return to. False exactly on
    /// Start, where the flow begins and cancel/send land.
    pub fn can_navigate_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Follows the graph edge for `event` from the current screen.
    ///
    /// `Next` pushes the departed screen onto the history; `Cancel` and
    /// `Send` clear it. `Back` has no edge; use [`Self::back`].
    pub fn advance(
        &mut self,
        event: NavEvent,
    ) -> Result<Screen, NavError> {
        let target = transition(self.current, event)
            .ok_or(NavError::UnsupportedTransition(self.current, event))?;
        if event == NavEvent::Next {
            self.back_stack.push(self.current);
        } else {
            self.back_stack.clear();
        }
        debug!(from = ?self.current, ?event, to = ?target, "navigating");
        self.current = target;
        Ok(target)
    }

    /// Pops the history stack and returns to the previous screen.
    pub fn back(&mut self) -> Result<Screen, NavError> {
        let previous = self.back_stack.pop().ok_or(NavError::HistoryEmpty)?;
        debug!(from = ?self.current, to = ?previous, "navigating back");
        self.current = previous;
        Ok(previous)
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // transition table tests
    // =========================================================================

    #[test]
    fn next_walks_the_flow_in_order() {
        assert_eq!(transition(Screen::Start, NavEvent::Next), Some(Screen::Flavor));
        assert_eq!(transition(Screen::Flavor, NavEvent::Next), Some(Screen::Pickup));
        assert_eq!(transition(Screen::Pickup, NavEvent::Next), Some(Screen::Summary));
        assert_eq!(transition(Screen::Summary, NavEvent::Next), None);
    }

    #[test]
    fn cancel_returns_to_start_from_every_later_screen() {
        for screen in [Screen::Flavor, Screen::Pickup, Screen::Summary] {
            assert_eq!(transition(screen, NavEvent::Cancel), Some(Screen::Start));
        }
        assert_eq!(transition(Screen::Start, NavEvent::Cancel), None);
    }

    #[test]
    fn send_is_only_accepted_on_summary() {
        assert_eq!(transition(Screen::Summary, NavEvent::Send), Some(Screen::Start));
        for screen in [Screen::Start, Screen::Flavor, Screen::Pickup] {
            assert_eq!(transition(screen, NavEvent::Send), None);
        }
    }

    #[test]
    fn back_is_never_a_table_edge() {
        for screen in [Screen::Start, Screen::Flavor, Screen::Pickup, Screen::Summary] {
            assert_eq!(transition(screen, NavEvent::Back), None);
        }
    }

    // =========================================================================
    // controller tests
    // =========================================================================

    #[test]
    fn controller_starts_on_start_with_no_history() {
        let nav = NavigationController::new();

        assert_eq!(nav.current(), Screen::Start);
        assert!(!nav.can_navigate_back());
    }

    #[test]
    fn advance_tracks_history_for_back() {
        let mut nav = NavigationController::new();

        nav.advance(NavEvent::Next).unwrap();
        nav.advance(NavEvent::Next).unwrap();

        assert_eq!(nav.current(), Screen::Pickup);
        assert_eq!(nav.back(), Ok(Screen::Flavor));
        assert_eq!(nav.back(), Ok(Screen::Start));
        assert!(!nav.can_navigate_back());
    }

    #[test]
    fn back_with_empty_history_is_refused() {
        let mut nav = NavigationController::new();

        assert_eq!(nav.back(), Err(NavError::HistoryEmpty));
        assert_eq!(nav.current(), Screen::Start);
    }

    #[test]
    fn unsupported_event_leaves_state_unchanged() {
        let mut nav = NavigationController::new();

        let result = nav.advance(NavEvent::Cancel);

        assert_eq!(
            result,
            Err(NavError::UnsupportedTransition(Screen::Start, NavEvent::Cancel))
        );
        assert_eq!(nav.current(), Screen::Start);
    }

    #[test]
    fn cancel_clears_the_history() {
        let mut nav = NavigationController::new();
        nav.advance(NavEvent::Next).unwrap();
        nav.advance(NavEvent::Next).unwrap();

        nav.advance(NavEvent::Cancel).unwrap();

        assert_eq!(nav.current(), Screen::Start);
        assert!(!nav.can_navigate_back());
    }

    #[test]
    fn can_navigate_back_is_false_exactly_on_start() {
        let mut nav = NavigationController::new();
        assert!(!nav.can_navigate_back());

        nav.advance(NavEvent::Next).unwrap();
        assert!(nav.can_navigate_back());
        nav.advance(NavEvent::Next).unwrap();
        assert!(nav.can_navigate_back());
        nav.advance(NavEvent::Next).unwrap();
        assert!(nav.can_navigate_back());
    }
}
