//! DOM Select Field
//!
//! `SelectField` over a live `<select>` element.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement, Window};

use crate::attach::FieldLookup;
use crate::config::FilterConfig;
use crate::error::{FilterError, FilterResult};
use crate::field::SelectField;
use crate::models::SelectOption;

use super::host;

/// Set on a `<select>` once a synchronizer owns it
const BOUND_ATTRIBUTE: &str = "data-program-filter";

/// The live page
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl FieldLookup for DomPage {
    type Field = DomSelect;

    fn host_ready(&self, config: &FilterConfig) -> bool {
        host::host_ready(&self.window, &config.host_global)
    }

    fn find(&self, id: &str) -> Option<DomSelect> {
        DomSelect::find(&self.document, id).ok()
    }
}

pub struct DomSelect {
    element: HtmlSelectElement,
}

impl DomSelect {
    /// Look up a `<select>` by id; anything else with that id counts as missing
    pub fn find(document: &Document, id: &str) -> FilterResult<Self> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .map(|element| Self { element })
            .ok_or_else(|| FilterError::MissingField(id.to_string()))
    }

    pub fn element(&self) -> &HtmlSelectElement {
        &self.element
    }
}

impl SelectField for DomSelect {
    fn value(&self) -> String {
        self.element.value()
    }

    fn options(&self) -> Vec<SelectOption> {
        (0..self.element.length())
            .filter_map(|i| self.element.item(i))
            .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
            .map(|opt| SelectOption::new(opt.value(), opt.text()).with_selected(opt.selected()))
            .collect()
    }

    fn replace_options(&self, options: &[SelectOption]) -> FilterResult<()> {
        self.element.set_length(0);
        for option in options {
            let element = HtmlOptionElement::new_with_text_and_value_and_default_selected_and_selected(
                &option.label,
                &option.value,
                option.selected,
                option.selected,
            )
            .map_err(dom_error)?;
            self.element
                .add_with_html_option_element(&element)
                .map_err(dom_error)?;
        }
        Ok(())
    }

    fn is_bound(&self) -> bool {
        self.element.has_attribute(BOUND_ATTRIBUTE)
    }

    fn mark_bound(&self) -> FilterResult<()> {
        self.element
            .set_attribute(BOUND_ATTRIBUTE, "attached")
            .map_err(dom_error)
    }
}

pub fn dom_error(err: JsValue) -> FilterError {
    FilterError::Dom(format!("{:?}", err))
}
