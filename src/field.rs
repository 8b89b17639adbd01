//! Select Field Abstraction
//!
//! The synchronizer talks to dropdowns through [`SelectField`]. The
//! browser build wraps an `HtmlSelectElement`; [`MemorySelect`] keeps the
//! options in memory and follows the same value rules as the DOM.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::FilterResult;
use crate::models::SelectOption;

/// A single-choice dropdown.
///
/// Methods take `&self`: the DOM mutates through shared handles and all
/// calls happen on one thread.
pub trait SelectField {
    /// Current value; empty when nothing (or the empty option) is chosen
    fn value(&self) -> String;

    /// Rendered options in document order
    fn options(&self) -> Vec<SelectOption>;

    /// Replace every option with `options`
    fn replace_options(&self, options: &[SelectOption]) -> FilterResult<()>;

    /// Whether a synchronizer already owns this field
    fn is_bound(&self) -> bool;

    /// Record that a synchronizer owns this field
    fn mark_bound(&self) -> FilterResult<()>;
}

impl<T: SelectField + ?Sized> SelectField for Rc<T> {
    fn value(&self) -> String {
        (**self).value()
    }

    fn options(&self) -> Vec<SelectOption> {
        (**self).options()
    }

    fn replace_options(&self, options: &[SelectOption]) -> FilterResult<()> {
        (**self).replace_options(options)
    }

    fn is_bound(&self) -> bool {
        (**self).is_bound()
    }

    fn mark_bound(&self) -> FilterResult<()> {
        (**self).mark_bound()
    }
}

/// In-memory dropdown.
///
/// Like `<select>`, its value is the first option flagged selected, or
/// the first option when none is.
#[derive(Debug, Default)]
pub struct MemorySelect {
    options: RefCell<Vec<SelectOption>>,
    bound: Cell<bool>,
}

impl MemorySelect {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options: RefCell::new(options),
            bound: Cell::new(false),
        }
    }

    /// Choose `value` the way a user would; returns false if no option has it
    pub fn select(&self, value: &str) -> bool {
        let mut options = self.options.borrow_mut();
        if !options.iter().any(|o| o.value == value) {
            return false;
        }
        let mut chosen = false;
        for option in options.iter_mut() {
            option.selected = !chosen && option.value == value;
            chosen |= option.selected;
        }
        true
    }
}

impl SelectField for MemorySelect {
    fn value(&self) -> String {
        let options = self.options.borrow();
        options
            .iter()
            .find(|o| o.selected)
            .or_else(|| options.first())
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }

    fn options(&self) -> Vec<SelectOption> {
        self.options.borrow().clone()
    }

    fn replace_options(&self, options: &[SelectOption]) -> FilterResult<()> {
        *self.options.borrow_mut() = options.to_vec();
        Ok(())
    }

    fn is_bound(&self) -> bool {
        self.bound.get()
    }

    fn mark_bound(&self) -> FilterResult<()> {
        self.bound.set(true);
        Ok(())
    }
}
