use std::cell::RefCell;
use std::rc::Rc;

use pagefx::{RevealConfig, RevealSet};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom::{query_all, Observer};

/// Adds the visible class to each candidate the first time it scrolls into view.
pub struct RevealController {
    _observer: Observer,
    pending: Rc<RefCell<RevealSet<Element>>>,
}

impl RevealController {
    pub fn new(document: &Document, config: &RevealConfig) -> Result<Option<Self>, JsValue> {
        let elements = query_all(document, config.selector)?;
        if elements.is_empty() {
            return Ok(None);
        }

        let pending = Rc::new(RefCell::new(RevealSet::new()));
        let visible_class = config.visible_class;
        let set = pending.clone();
        let observer = Observer::new(config.threshold, Some(config.root_margin), move |entries, observer| {
            for entry in entries {
                let revealed = set
                    .borrow_mut()
                    .on_intersection(&entry.target(), entry.is_intersecting());
                if let Some(el) = revealed {
                    if let Err(err) = el.class_list().add_1(visible_class) {
                        log::warn!("reveal: {:?}", err);
                    }
                    observer.unobserve(&el);
                }
            }
        })?;

        for el in elements {
            observer.observe(&el);
            pending.borrow_mut().observe(el);
        }

        Ok(Some(Self {
            _observer: observer,
            pending,
        }))
    }

    /// Elements still waiting for their first intersection.
    pub fn pending(&self) -> usize {
        self.pending.borrow().pending()
    }
}
