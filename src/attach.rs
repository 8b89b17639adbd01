//! Attach Checks
//!
//! Everything that decides whether a page gets a synchronizer, in the
//! order it is checked: host scripts, both fields, existing binding.
//! Nothing is read from or written to a field until all checks pass.

use log::debug;

use crate::config::FilterConfig;
use crate::error::{FilterError, FilterResult};
use crate::field::SelectField;
use crate::source::ProgramSource;
use crate::sync::DropdownSync;

/// The page the fields live on
pub trait FieldLookup {
    type Field: SelectField;

    /// Whether the host admin scripts are loaded
    fn host_ready(&self, config: &FilterConfig) -> bool;

    fn find(&self, id: &str) -> Option<Self::Field>;
}

/// Build the synchronizer for `page`, claiming its dependent field.
///
/// A second call for the same dependent field fails with
/// [`FilterError::AlreadyAttached`] before the baseline is captured.
pub fn prepare<L, S>(page: &L, source: S, config: &FilterConfig) -> FilterResult<DropdownSync<L::Field, S>>
where
    L: FieldLookup,
    S: ProgramSource,
{
    if !config.host_global.is_empty() && !page.host_ready(config) {
        return Err(FilterError::HostUnavailable(config.host_global_path()));
    }

    let parent = page.find(&config.parent_field_id);
    let dependent = page.find(&config.dependent_field_id);
    debug!(
        "University field found: {}, program field found: {}",
        parent.is_some(),
        dependent.is_some()
    );
    let parent = parent.ok_or_else(|| FilterError::MissingField(config.parent_field_id.clone()))?;
    let dependent =
        dependent.ok_or_else(|| FilterError::MissingField(config.dependent_field_id.clone()))?;

    if dependent.is_bound() {
        return Err(FilterError::AlreadyAttached(config.dependent_field_id.clone()));
    }
    dependent.mark_bound()?;

    Ok(DropdownSync::new(parent, dependent, source, config))
}
