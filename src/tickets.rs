//! In-memory ticket collection for the authenticated user.
//!
//! The store owns the ordered collection and its derived views (stats,
//! filters, recency). Persistence is the caller's concern: every mutation
//! reports whether anything changed so the app layer knows when to write
//! the collection back out.

use jiff::Timestamp;
use std::cmp::Reverse;
use std::str::FromStr;

use crate::error::TicflowError;
use crate::id::IdGenerator;
use crate::types::{Ticket, TicketPriority, TicketStatus};
use crate::validation::{self, FieldErrors, TicketForm};

/// How many tickets the dashboard's recent list shows.
pub const RECENT_TICKET_COUNT: usize = 5;

/// Status dropdown value: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(TicketStatus),
}

impl StatusFilter {
    fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(status) => ticket.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TicflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            Ok(StatusFilter::Status(s.parse()?))
        }
    }
}

/// Priority dropdown value: everything, or one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Priority(TicketPriority),
}

impl PriorityFilter {
    fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Priority(priority) => ticket.priority == *priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = TicflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(PriorityFilter::All)
        } else {
            Ok(PriorityFilter::Priority(s.parse()?))
        }
    }
}

/// Counts of tickets by status, recomputed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// The current user's ordered ticket collection.
#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection, e.g. after loading a user's tickets.
    pub fn replace_all(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
    }

    pub fn clear(&mut self) {
        self.tickets.clear();
    }

    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Validate and append a new ticket, returning its id.
    ///
    /// On validation failure the collection is unchanged and no id is
    /// consumed. Both timestamps start equal.
    pub fn create(
        &mut self,
        form: &TicketForm,
        ids: &mut IdGenerator,
        now: &str,
    ) -> Result<u64, FieldErrors> {
        let errors = validation::validate_ticket(form);
        if !errors.is_empty() {
            return Err(errors);
        }

        let id = ids.next_id();
        self.tickets.push(Ticket {
            id,
            title: form.title.clone(),
            description: form.description.clone(),
            status: form.status,
            priority: form.priority,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        });
        Ok(id)
    }

    /// Validate and apply an edit to the ticket named by `form.id`.
    ///
    /// Returns `Ok(true)` when a ticket was updated. An unknown or missing
    /// id is a silent no-op (`Ok(false)`): the edit modal can only be
    /// opened from an existing ticket, so this covers stale state only.
    pub fn update(&mut self, form: &TicketForm, now: &str) -> Result<bool, FieldErrors> {
        let errors = validation::validate_ticket(form);
        if !errors.is_empty() {
            return Err(errors);
        }

        let Some(id) = form.id else {
            return Ok(false);
        };
        match self.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                ticket.title = form.title.clone();
                ticket.description = form.description.clone();
                ticket.status = form.status;
                ticket.priority = form.priority;
                ticket.updated_at = now.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the ticket with the given id, preserving the order of the
    /// survivors. Returns whether a ticket was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.id != id);
        self.tickets.len() != before
    }

    pub fn stats(&self) -> TicketStats {
        let mut stats = TicketStats {
            total: self.tickets.len(),
            ..Default::default()
        };
        for ticket in &self.tickets {
            match ticket.status {
                TicketStatus::Open => stats.open += 1,
                TicketStatus::InProgress => stats.in_progress += 1,
                TicketStatus::Resolved => stats.resolved += 1,
            }
        }
        stats
    }

    /// Tickets matching both filters, newest first.
    ///
    /// The sort is stable, so tickets sharing a `createdAt` keep their
    /// insertion order.
    pub fn filtered(&self, status: StatusFilter, priority: PriorityFilter) -> Vec<&Ticket> {
        let mut filtered: Vec<&Ticket> = self
            .tickets
            .iter()
            .filter(|t| status.matches(t) && priority.matches(t))
            .collect();
        // A `createdAt` that fails to parse sorts last, behind every
        // well-formed timestamp.
        filtered.sort_by_cached_key(|t| Reverse(t.created_at.parse::<Timestamp>().ok()));
        filtered
    }

    /// The `n` newest tickets.
    pub fn recent(&self, n: usize) -> Vec<&Ticket> {
        let mut recent = self.filtered(StatusFilter::All, PriorityFilter::All);
        recent.truncate(n);
        recent
    }
}
