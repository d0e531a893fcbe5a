//! Order flow facade: the observable store composed with navigation.

use thiserror::Error;
use tracing::info;

use crate::models::OrderState;
use crate::navigation::{NavError, NavEvent, NavigationController, Screen};
use crate::pricing::PricePolicy;
use crate::store::{OrderError, OrderStore, Subscription};

/// Collaborator that presents a composed order to the outside world.
///
/// The flow hands over a subject and a summary and does not inspect the
/// result.
pub trait OrderSharer {
    fn share(
        &mut self,
        subject: &str,
        summary: &str,
    );
}

/// A refused flow operation. Order and navigation state are unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Nav(#[from] NavError),

    /// The operation belongs to a different screen than the current one.
    #[error("expected to be on {expected:?}, currently on {actual:?}")]
    WrongScreen { expected: Screen, actual: Screen },
}

/// One user's pass through the order flow.
///
/// Owns the [`OrderStore`] and the [`NavigationController`] and keeps them
/// honest together: `next` is refused until the current screen's selection
/// has been made, and `cancel` discards the order on its way back to Start.
/// Explicitly constructed and explicitly scoped; create one per session and
/// hand it to whatever composes navigation and rendering.
pub struct OrderFlow {
    store: OrderStore,
    nav: NavigationController,
}

impl OrderFlow {
    pub fn new() -> Self {
        Self::with_policy(PricePolicy::default())
    }

    pub fn with_policy(policy: PricePolicy) -> Self {
        Self {
            store: OrderStore::with_policy(policy),
            nav: NavigationController::new(),
        }
    }

    /// Screen currently shown.
    pub fn screen(&self) -> Screen {
        self.nav.current()
    }

    /// Latest order snapshot.
    pub fn order(&self) -> &OrderState {
        self.store.state()
    }

    /// Registers an observer on the underlying store.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&OrderState) + 'static,
    ) -> Subscription {
        self.store.subscribe(observer)
    }

    /// Drops a previously registered observer.
    pub fn unsubscribe(
        &mut self,
        subscription: Subscription,
    ) {
        self.store.unsubscribe(subscription);
    }

    /// True iff the current screen's required selection has been made, i.e.
    /// whether a Next affordance should be enabled.
    pub fn can_proceed(&self) -> bool {
        self.nav.current().selection_complete(self.store.state())
    }

    /// True iff there is a prior screen to return to.
    pub fn can_navigate_back(&self) -> bool {
        self.nav.can_navigate_back()
    }

    /// Picks one of the quantity packages on Start and moves straight on to
    /// Flavor, the way the start screen's one-tap buttons behave.
    pub fn select_quantity(
        &mut self,
        quantity: u32,
    ) -> Result<Screen, FlowError> {
        self.expect_screen(Screen::Start)?;
        self.store.set_quantity(quantity)?;
        Ok(self.nav.advance(NavEvent::Next)?)
    }

    /// Picks a flavor on the Flavor screen. Moving on is a separate
    /// [`Self::next`].
    pub fn select_flavor(
        &mut self,
        flavor: &str,
    ) -> Result<(), FlowError> {
        self.expect_screen(Screen::Flavor)?;
        self.store.set_flavor(flavor)?;
        Ok(())
    }

    /// Picks a pickup date on the Pickup screen.
    pub fn select_date(
        &mut self,
        date: &str,
    ) -> Result<(), FlowError> {
        self.expect_screen(Screen::Pickup)?;
        self.store.set_date(date)?;
        Ok(())
    }

    /// Moves forward one screen. Refused, never silently ignored, while the
    /// required selection is missing.
    pub fn next(&mut self) -> Result<Screen, FlowError> {
        let screen = self.nav.current();
        if !screen.selection_complete(self.store.state()) {
            return Err(NavError::SelectionMissing(screen).into());
        }
        Ok(self.nav.advance(NavEvent::Next)?)
    }

    /// Returns to the previous screen, selections kept.
    pub fn back(&mut self) -> Result<Screen, FlowError> {
        Ok(self.nav.back()?)
    }

    /// Abandons the order: every selection cleared, back on Start.
    pub fn cancel(&mut self) -> Result<Screen, FlowError> {
        let screen = self.nav.advance(NavEvent::Cancel)?;
        self.store.reset();
        info!("order cancelled");
        Ok(screen)
    }

    /// Hands the composed order to `sharer`, then starts a fresh order back
    /// on Start. The flow resets itself rather than waiting for an explicit
    /// cancel.
    pub fn send(
        &mut self,
        subject: &str,
        summary: &str,
        sharer: &mut dyn OrderSharer,
    ) -> Result<Screen, FlowError> {
        self.expect_screen(Screen::Summary)?;
        sharer.share(subject, summary);
        let screen = self.nav.advance(NavEvent::Send)?;
        self.store.reset();
        info!("order sent");
        Ok(screen)
    }

    fn expect_screen(
        &self,
        expected: Screen,
    ) -> Result<(), FlowError> {
        let actual = self.nav.current();
        if actual == expected {
            Ok(())
        } else {
            Err(FlowError::WrongScreen { expected, actual })
        }
    }
}

impl Default for OrderFlow {
    fn default() -> Self {
        Self::new()
    }
}
