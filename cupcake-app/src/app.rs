//! Interactive driver for the order flow.
//!
//! Owns one [`OrderFlow`] and translates line input into flow operations.
//! Rendering is plain text: each screen prints its options and the keys it
//! accepts. The loop is generic over reader and writer so the whole session
//! can be exercised in tests.

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};
use cupcake_core::{FLAVORS, OrderFlow, OrderSharer, PricePolicy, QUANTITY_OPTIONS, Screen, StringKey};
use tracing::{debug, warn};

use crate::screens::{OrderSummaryScreen, SelectOptionScreen, StartOrderScreen};
use crate::share::ConsoleSharer;
use crate::strings;

/// One interactive session over a single order flow.
pub struct CupcakeApp {
    flow: OrderFlow,
    sharer: Box<dyn OrderSharer>,
}

impl CupcakeApp {
    pub fn new(policy: PricePolicy) -> Self {
        Self::with_sharer(policy, Box::new(ConsoleSharer))
    }

    pub fn with_sharer(
        policy: PricePolicy,
        sharer: Box<dyn OrderSharer>,
    ) -> Self {
        let mut flow = OrderFlow::with_policy(policy);
        flow.subscribe(|state| debug!(price = %state.price, "order updated"));
        Self { flow, sharer }
    }

    /// Runs the input loop until the user quits or input ends.
    ///
    /// Refused operations are reported and the loop continues; only I/O
    /// failures end the session early.
    pub fn run(
        &mut self,
        input: impl BufRead,
        mut output: impl Write,
    ) -> Result<()> {
        self.render(&mut output)?;
        for line in input.lines() {
            let line = line?;
            let command = line.trim();
            if command.is_empty() {
                continue;
            }
            if command.eq_ignore_ascii_case("q") {
                break;
            }
            if let Err(error) = self.handle(command) {
                warn!(%error, command, "input rejected");
                writeln!(output, "! {error}")?;
            }
            self.render(&mut output)?;
        }
        Ok(())
    }

    fn handle(
        &mut self,
        command: &str,
    ) -> Result<()> {
        match (self.flow.screen(), command) {
            (_, "c") => {
                self.flow.cancel()?;
            }
            (_, "b") => {
                self.flow.back()?;
            }
            (_, "n") => {
                self.flow.next()?;
            }
            (Screen::Summary, "s") => {
                let summary = OrderSummaryScreen::details(self.flow.order());
                let subject = strings::resolve(StringKey::NewCupcakeOrder);
                self.flow.send(subject, &summary, self.sharer.as_mut())?;
            }
            (screen, choice) => {
                let choice: usize = choice
                    .parse()
                    .map_err(|_| anyhow!("unrecognized input '{command}'"))?;
                self.select(screen, choice)?;
            }
        }
        Ok(())
    }

    fn select(
        &mut self,
        screen: Screen,
        choice: usize,
    ) -> Result<()> {
        match screen {
            Screen::Start => {
                let quantity = StartOrderScreen::quantity_at(choice)
                    .ok_or_else(|| anyhow!("no package {choice} on the menu"))?;
                self.flow.select_quantity(quantity)?;
            }
            Screen::Flavor => {
                let flavors = resolved_flavors();
                let flavor = SelectOptionScreen::option_at(&flavors, choice)
                    .ok_or_else(|| anyhow!("no flavor {choice} on the menu"))?;
                self.flow.select_flavor(flavor)?;
            }
            Screen::Pickup => {
                let date = SelectOptionScreen::option_at(&self.flow.order().pickup_options, choice)
                    .ok_or_else(|| anyhow!("no pickup date {choice} on offer"))?
                    .to_string();
                self.flow.select_date(&date)?;
            }
            Screen::Summary => return Err(anyhow!("nothing to pick here; [s] sends the order")),
        }
        Ok(())
    }

    fn render(
        &self,
        output: &mut impl Write,
    ) -> Result<()> {
        let screen = self.flow.screen();
        let order = self.flow.order();
        writeln!(output)?;
        writeln!(output, "=== {} ===", strings::resolve(screen.title()))?;
        let body = match screen {
            Screen::Start => StartOrderScreen::render(),
            Screen::Flavor => SelectOptionScreen::render(
                &resolved_flavors(),
                order.flavor.as_deref(),
                &order.price,
                self.flow.can_proceed(),
            ),
            Screen::Pickup => SelectOptionScreen::render(
                &order.pickup_options,
                order.date.as_deref(),
                &order.price,
                self.flow.can_proceed(),
            ),
            Screen::Summary => OrderSummaryScreen::render(order),
        };
        write!(output, "{body}")?;
        writeln!(output, "{}", self.hints(screen))?;
        output.flush()?;
        Ok(())
    }

    /// Key hints for the current screen, status-bar style.
    fn hints(
        &self,
        screen: Screen,
    ) -> String {
        let mut hints: Vec<String> = Vec::new();
        match screen {
            Screen::Start => hints.push(format!("[1-{}] choose a box", QUANTITY_OPTIONS.len())),
            Screen::Flavor => hints.push(format!("[1-{}] choose", FLAVORS.len())),
            Screen::Pickup => {
                hints.push(format!("[1-{}] choose", self.flow.order().pickup_options.len()));
            }
            Screen::Summary => hints.push(format!("[s] {}", strings::resolve(StringKey::SendOrder))),
        }
        if screen != Screen::Start {
            hints.push(format!("[c] {}", strings::resolve(StringKey::Cancel)));
        }
        if self.flow.can_navigate_back() {
            hints.push(format!("[b] {}", strings::resolve(StringKey::BackButton)));
        }
        hints.push("[q] Quit".to_string());
        hints.join(" │ ")
    }
}

fn resolved_flavors() -> Vec<String> {
    FLAVORS.iter().map(|key| strings::resolve(*key).to_string()).collect()
}
