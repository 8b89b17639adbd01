//! Browser Entry Points
//!
//! Wires the synchronizer to the admin change form: reads page overrides,
//! waits for the document, checks the host scripts, binds the university
//! field's `change` event.

mod dom;
mod host;
mod http;

use std::rc::Rc;

use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::attach::prepare;
use crate::config::{FilterConfig, CONFIG_ELEMENT_ID};
use crate::error::{FilterError, FilterResult};
use crate::sync::DropdownSync;
use crate::LOG_PREFIX;

use dom::{dom_error, DomPage, DomSelect};
use http::HttpProgramSource;

type BrowserSync = DropdownSync<DomSelect, HttpProgramSource>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = match page_config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&FilterConfig::default());
            error!("{}", e);
            return;
        }
    };
    init_logging(&config);
    debug!("Filter programs script loaded");

    if !config.auto_attach {
        debug!("Auto attach disabled, waiting for attachProgramFilter()");
        return;
    }
    when_document_ready(move || {
        debug!("Document ready");
        match attach(&config) {
            Ok(()) => {}
            Err(FilterError::MissingField(id)) => {
                info!("Field #{} not on this page, program filter inactive", id);
            }
            Err(FilterError::AlreadyAttached(id)) => {
                info!("Program filter already attached to #{}", id);
            }
            Err(FilterError::HostUnavailable(path)) => {
                error!(
                    "{} not found. Make sure this script loads after the admin scripts.",
                    path
                );
            }
            Err(e) => error!("Program filter not attached: {}", e),
        }
    });
}

/// Attach with explicit settings, e.g. for a form using other field ids.
///
/// `config` is a plain object with any subset of the configuration keys;
/// `undefined` means defaults. Fails if the fields are already attached,
/// so pages that attach by hand should set `auto_attach: false` in their
/// JSON config element.
#[wasm_bindgen(js_name = attachProgramFilter)]
pub fn attach_program_filter(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        FilterConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<FilterConfig>(config)
            .map_err(|e| FilterError::Config(e.to_string()))
            .map_err(to_js)?
    };
    config.validate().map_err(to_js)?;
    attach(&config).map_err(to_js)
}

fn attach(config: &FilterConfig) -> FilterResult<()> {
    let window = web_sys::window().ok_or_else(|| FilterError::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| FilterError::Dom("no document".to_string()))?;
    let page = DomPage::new(window, document);

    let sync: Rc<BrowserSync> = Rc::new(prepare(&page, HttpProgramSource::new(config), config)?);
    let target = sync.parent().element().clone();

    if sync.needs_initial_refresh() {
        debug!("Initial university value: {}", sync.parent().value());
        spawn_refresh(&sync);
    }

    let on_change = {
        let sync = Rc::clone(&sync);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            debug!("University changed");
            spawn_refresh(&sync);
        })
    };
    target
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    // Lives as long as the page
    on_change.forget();

    info!(
        "Program filter attached: #{} filters #{}",
        config.parent_field_id, config.dependent_field_id
    );
    Ok(())
}

/// Read the fields now, fetch on the event loop
fn spawn_refresh(sync: &Rc<BrowserSync>) {
    let step = sync.begin_refresh();
    let sync = Rc::clone(sync);
    spawn_local(async move {
        let outcome = sync.complete_refresh(step).await;
        debug!("Refresh finished: {:?}", outcome);
    });
}

/// Overrides from the page's JSON config element, defaults when absent
fn page_config() -> FilterResult<FilterConfig> {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match json {
        Some(json) => FilterConfig::from_json(&json),
        None => Ok(FilterConfig::default()),
    }
}

fn init_logging(config: &FilterConfig) {
    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if console_logger::init(LOG_PREFIX, level).is_err() {
        debug!("Logger already installed");
    }
}

/// Run `f` now, or on `DOMContentLoaded` if the document is still loading
fn when_document_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        error!("Could not wait for DOMContentLoaded: {:?}", e);
    }
}

fn to_js(err: FilterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
