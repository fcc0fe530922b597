/// Cancellable scheduled task for the search box
///
/// Every keystroke schedules a new ticket; only the most recent ticket is
/// allowed to fire. A superseded timer still wakes up but its ticket no
/// longer matches, so it is ignored. Requests already sent are not cancelled.

use std::time::Duration;

/// Identifies one scheduled firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: bool,
}

impl Debouncer {
    /// Schedule a new firing, cancelling any unfired one
    pub fn schedule(&mut self) -> Ticket {
        self.generation += 1;
        self.pending = true;
        Ticket(self.generation)
    }

    /// Drop the pending firing, if any
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = false;
    }

    /// Consume `ticket`; true only for the latest unfired ticket
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }
}

/// Sleep for `delay`, then hand the ticket back to the event loop
pub async fn wait(ticket: Ticket, delay: Duration) -> Ticket {
    tokio::time::sleep(delay).await;
    ticket
}
