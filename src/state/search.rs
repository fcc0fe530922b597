use super::data::{RecipeSummary, SortField, SortOrder};
use super::debounce::{Debouncer, Ticket};

/// What the event loop should do after the query text changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryChange {
    /// Blank query: results were cleared locally, nothing to fetch
    Cleared,
    /// A debounced fetch should fire for this ticket
    Scheduled(Ticket),
}

/// Search/list screen state
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub loading: bool,
    results: Vec<RecipeSummary>,
    debounce: Debouncer,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, text: String) -> QueryChange {
        self.query = text;
        if self.query.trim().is_empty() {
            self.debounce.cancel();
            self.results.clear();
            return QueryChange::Cleared;
        }
        QueryChange::Scheduled(self.debounce.schedule())
    }

    /// Debounce timer fired; returns the query to send if the ticket is still current
    pub fn debounce_elapsed(&mut self, ticket: Ticket) -> Option<String> {
        if !self.debounce.fire(ticket) {
            return None;
        }
        self.loading = true;
        Some(self.query.clone())
    }

    /// Accept a search response. Responses are applied in arrival order.
    pub fn results_loaded(&mut self, results: Vec<RecipeSummary>) {
        self.loading = false;
        self.results = results;
    }

    /// Same field flips the order; a new field starts ascending
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Ascending;
        }
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Results ordered by the current field and order.
    ///
    /// Case-insensitive; ties keep their response order.
    pub fn sorted(&self) -> Vec<RecipeSummary> {
        sort_summaries(&self.results, self.sort_field, self.sort_order)
    }

    /// Empty-state text, shown only for a settled non-blank query with no hits
    pub fn empty_message(&self) -> Option<String> {
        if self.loading || self.query.trim().is_empty() || !self.results.is_empty() {
            return None;
        }
        Some(format!("No meals found for \"{}\"", self.query))
    }
}

pub fn sort_summaries(results: &[RecipeSummary], field: SortField, order: SortOrder) -> Vec<RecipeSummary> {
    let mut keyed: Vec<(String, &RecipeSummary)> = results
        .iter()
        .map(|summary| (field.key(summary), summary))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Ascending => a.cmp(b),
        SortOrder::Descending => b.cmp(a),
    });

    keyed.into_iter().map(|(_, summary)| summary.clone()).collect()
}
