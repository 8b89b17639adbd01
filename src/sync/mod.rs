//! Dropdown Synchronizer
//!
//! Keeps the program dropdown consistent with the selected university.
//! An empty university shows the baseline captured at startup; any other
//! value asks the [`ProgramSource`] for that university's programs.

use std::cell::Cell;

use log::{debug, error};

use crate::config::FilterConfig;
use crate::field::SelectField;
use crate::models::SelectOption;
use crate::options::{self, Baseline};
use crate::source::ProgramSource;


/// What a single refresh ended up rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No university selected; the baseline programs are shown
    Baseline { shown: usize },
    /// The endpoint's programs are shown
    Filtered { shown: usize, restored: bool },
    /// The request failed; only the empty option is left
    Failed,
    /// A newer refresh started first and stale responses are discarded
    Superseded,
}

/// Values captured when a refresh was triggered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    university_id: String,
    prior: String,
    ticket: u64,
}

impl PendingFetch {
    pub fn university_id(&self) -> &str {
        &self.university_id
    }
}

/// Result of [`DropdownSync::begin_refresh`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshStep {
    /// Nothing left to fetch
    Done(RefreshOutcome),
    Fetch(PendingFetch),
}

pub struct DropdownSync<F, S> {
    parent: F,
    dependent: F,
    source: S,
    baseline: Baseline,
    empty_label: String,
    discard_stale: bool,
    /// Bumped by every refresh
    generation: Cell<u64>,
}

impl<F: SelectField, S: ProgramSource> DropdownSync<F, S> {
    /// Capture the baseline from `dependent`. Call before any refresh.
    pub fn new(parent: F, dependent: F, source: S, config: &FilterConfig) -> Self {
        let baseline = Baseline::capture(dependent.options());
        debug!("All programs stored: {}", baseline.len());
        Self {
            parent,
            dependent,
            source,
            baseline,
            empty_label: config.empty_label.clone(),
            discard_stale: config.discard_stale_responses,
            generation: Cell::new(0),
        }
    }

    pub fn parent(&self) -> &F {
        &self.parent
    }

    pub fn dependent(&self) -> &F {
        &self.dependent
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// A university chosen before the page finished loading needs a refresh right away
    pub fn needs_initial_refresh(&self) -> bool {
        !self.parent.value().is_empty()
    }

    /// Recompute the dependent options from the current university.
    ///
    /// Same as [`begin_refresh`](Self::begin_refresh) followed by
    /// [`complete_refresh`](Self::complete_refresh).
    pub async fn refresh(&self) -> RefreshOutcome {
        let step = self.begin_refresh();
        self.complete_refresh(step).await
    }

    /// The synchronous half of a refresh, run inside the change handler.
    ///
    /// Reads the university and the prior program, resets the field to the
    /// empty option and, for an empty university, renders the baseline.
    pub fn begin_refresh(&self) -> RefreshStep {
        let university_id = self.parent.value();
        let prior = self.dependent.value();
        let ticket = self.generation.get().wrapping_add(1);
        self.generation.set(ticket);

        if !self.render(&options::placeholder_only(&self.empty_label)) {
            return RefreshStep::Done(RefreshOutcome::Failed);
        }

        if university_id.is_empty() {
            debug!("No university selected, showing all programs");
            let options = options::from_baseline(&self.baseline, &self.empty_label);
            if !self.render(&options) {
                return RefreshStep::Done(RefreshOutcome::Failed);
            }
            return RefreshStep::Done(RefreshOutcome::Baseline {
                shown: options.len() - 1,
            });
        }

        RefreshStep::Fetch(PendingFetch {
            university_id,
            prior,
            ticket,
        })
    }

    /// The asynchronous half: fetch and render the programs.
    ///
    /// Overlapping refreshes are not ordered unless stale responses are
    /// discarded: the last response to arrive is rendered.
    pub async fn complete_refresh(&self, step: RefreshStep) -> RefreshOutcome {
        let fetch = match step {
            RefreshStep::Done(outcome) => return outcome,
            RefreshStep::Fetch(fetch) => fetch,
        };

        debug!("Fetching programs for university {}", fetch.university_id);
        let records = match self.source.programs_for(&fetch.university_id).await {
            Ok(records) => records,
            Err(e) => {
                error!("Error fetching programs for university {}: {}", fetch.university_id, e);
                return RefreshOutcome::Failed;
            }
        };

        if self.discard_stale && self.generation.get() != fetch.ticket {
            debug!(
                "Dropping {} programs for university {}: superseded by a newer selection",
                records.len(),
                fetch.university_id
            );
            return RefreshOutcome::Superseded;
        }

        debug!("Received programs: {}", records.len());
        let options = options::from_records(&records, &fetch.prior, &self.empty_label);
        let restored = options.iter().any(|o| o.selected);
        if !self.render(&options) {
            return RefreshOutcome::Failed;
        }
        RefreshOutcome::Filtered {
            shown: options.len() - 1,
            restored,
        }
    }

    fn render(&self, options: &[SelectOption]) -> bool {
        match self.dependent.replace_options(options) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to update program options: {}", e);
                false
            }
        }
    }
}
