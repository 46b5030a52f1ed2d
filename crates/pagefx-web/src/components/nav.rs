use std::cell::RefCell;
use std::rc::Rc;

use pagefx::{NavConfig, ScrollMarker};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::dom::{scroll_y, set_class, Listener};

/// A class on one element that tracks "scroll offset > threshold", driven by
/// its own passive scroll listener.
pub struct ScrollClass {
    _listener: Listener,
    marker: Rc<RefCell<ScrollMarker>>,
}

impl ScrollClass {
    pub fn new(window: &Window, el: Element, class: &'static str, threshold: f64) -> Result<Self, JsValue> {
        let marker = Rc::new(RefCell::new(ScrollMarker::new(threshold)));
        let apply = {
            let marker = marker.clone();
            let window = window.clone();
            move || {
                let on = marker.borrow_mut().update(scroll_y(&window));
                set_class(&el, class, on);
            }
        };
        apply();
        let listener = Listener::passive(window, "scroll", move |_| apply())?;
        Ok(Self {
            _listener: listener,
            marker,
        })
    }

    pub fn is_active(&self) -> bool {
        self.marker.borrow().is_active()
    }
}

/// The nav bar's `scrolled` state.
pub struct NavBarController {
    scrolled: ScrollClass,
}

impl NavBarController {
    pub fn new(window: &Window, document: &Document, config: &NavConfig) -> Result<Option<Self>, JsValue> {
        let Some(nav) = document.get_element_by_id(config.nav_id) else {
            return Ok(None);
        };
        let scrolled = ScrollClass::new(window, nav, config.scrolled_class, config.scrolled_threshold)?;
        Ok(Some(Self { scrolled }))
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.is_active()
    }
}

/// Hides the scroll hint once the page is scrolled past its threshold.
pub struct ScrollHintController {
    hidden: ScrollClass,
}

impl ScrollHintController {
    pub fn new(window: &Window, document: &Document, config: &NavConfig) -> Result<Option<Self>, JsValue> {
        let Some(indicator) = document.get_element_by_id(config.indicator_id) else {
            return Ok(None);
        };
        let hidden = ScrollClass::new(window, indicator, config.hidden_class, config.indicator_threshold)?;
        Ok(Some(Self { hidden }))
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.is_active()
    }
}
