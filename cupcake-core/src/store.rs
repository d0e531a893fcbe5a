//! Observable order store.
//!
//! [`OrderStore`] holds the single in-progress order and republishes a full
//! snapshot after every mutation. Notification is synchronous: by the time a
//! setter returns, every observer has seen the new state. The store is an
//! explicitly constructed value, not a process-wide singleton; whoever
//! composes the application decides its scope.

use thiserror::Error;
use tracing::debug;

use crate::models::{OrderState, offers_quantity};
use crate::pickup;
use crate::pricing::PricePolicy;

/// A rejected selection. The prior state is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The quantity is not one of the catalog package sizes.
    #[error("quantity {0} is not an offered package size")]
    QuantityNotOffered(u32),

    /// The flavor label is empty.
    #[error("flavor must not be empty")]
    EmptyFlavor,

    /// The date is not one of the currently offered pickup dates.
    #[error("'{0}' is not an offered pickup date")]
    DateNotOffered(String),
}

/// Handle identifying a registered observer.
pub type Subscription = usize;

type Observer = Box<dyn FnMut(&OrderState)>;

/// Holds the current [`OrderState`], applies mutations, and publishes every
/// new snapshot to observers.
///
/// The derived price is recomputed before each publish, so observers never
/// see a price that disagrees with the selections.
pub struct OrderStore {
    policy: PricePolicy,
    state: OrderState,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: Subscription,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::with_policy(PricePolicy::default())
    }

    pub fn with_policy(policy: PricePolicy) -> Self {
        let state = fresh_state(&policy);
        Self {
            policy,
            state,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Latest published snapshot. Non-blocking; always reflects the most
    /// recent mutation.
    pub fn state(&self) -> &OrderState {
        &self.state
    }

    /// Registers `observer` for synchronous notification after every
    /// publish, in subscription order.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&OrderState) + 'static,
    ) -> Subscription {
        let subscription = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Drops the observer registered under `subscription`. Unknown handles
    /// are ignored.
    pub fn unsubscribe(
        &mut self,
        subscription: Subscription,
    ) {
        self.observers.retain(|(id, _)| *id != subscription);
    }

    /// Sets the cupcake quantity. Rejects sizes the catalog does not offer.
    pub fn set_quantity(
        &mut self,
        quantity: u32,
    ) -> Result<(), OrderError> {
        if !offers_quantity(quantity) {
            return Err(OrderError::QuantityNotOffered(quantity));
        }
        self.state.quantity = Some(quantity);
        debug!(quantity, "quantity selected");
        self.publish();
        Ok(())
    }

    /// Sets the flavor label. Rejects empty labels.
    pub fn set_flavor(
        &mut self,
        flavor: &str,
    ) -> Result<(), OrderError> {
        if flavor.trim().is_empty() {
            return Err(OrderError::EmptyFlavor);
        }
        self.state.flavor = Some(flavor.to_string());
        debug!(flavor, "flavor selected");
        self.publish();
        Ok(())
    }

    /// Sets the pickup date. Rejects anything outside the current options.
    pub fn set_date(
        &mut self,
        date: &str,
    ) -> Result<(), OrderError> {
        if !self.state.pickup_options.iter().any(|option| option == date) {
            return Err(OrderError::DateNotOffered(date.to_string()));
        }
        self.state.date = Some(date.to_string());
        debug!(date, "pickup date selected");
        self.publish();
        Ok(())
    }

    /// Discards the order and starts fresh: selections cleared, pickup
    /// options regenerated anchored to today.
    pub fn reset(&mut self) {
        self.state = fresh_state(&self.policy);
        debug!("order reset");
        self.publish();
    }

    /// Recomputes the derived price, then notifies observers before
    /// returning to the caller.
    fn publish(&mut self) {
        self.state.price = self.policy.price_label(&self.state);
        for (_, observer) in &mut self.observers {
            observer(&self.state);
        }
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_state(policy: &PricePolicy) -> OrderState {
    let mut state = OrderState {
        pickup_options: pickup::options(),
        ..OrderState::default()
    };
    state.price = policy.price_label(&state);
    state
}
