use std::cell::RefCell;
use std::rc::Rc;

use pagefx::{MenuConfig, MenuState};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::{query_all_within, set_class, Listener};

/// Mobile navigation: the toggle opens and closes the panel, any link inside
/// the panel closes it.
pub struct MobileMenuController {
    _listeners: Vec<Listener>,
    state: Rc<RefCell<MenuState>>,
}

impl MobileMenuController {
    pub fn new(document: &Document, config: &MenuConfig) -> Result<Option<Self>, JsValue> {
        let (Some(toggle), Some(menu)) = (
            document.get_element_by_id(config.toggle_id),
            document.get_element_by_id(config.menu_id),
        ) else {
            return Ok(None);
        };

        // Markup may ship the panel already open.
        let initially_open = menu.class_list().contains(config.open_class);
        let state = Rc::new(RefCell::new(MenuState::with_open(initially_open)));
        let render = {
            let (toggle, menu) = (toggle.clone(), menu.clone());
            let (active, open_class) = (config.active_class, config.open_class);
            Rc::new(move |open: bool| {
                set_class(&toggle, active, open);
                set_class(&menu, open_class, open);
            })
        };

        let mut listeners = Vec::new();
        {
            let state = state.clone();
            let render = render.clone();
            listeners.push(Listener::new(&toggle, "click", move |_| {
                let open = state.borrow_mut().toggle();
                render(open);
            })?);
        }
        for link in query_all_within(&menu, config.link_selector)? {
            let state = state.clone();
            let render = render.clone();
            listeners.push(Listener::new(&link, "click", move |_| {
                state.borrow_mut().close();
                render(false);
            })?);
        }

        Ok(Some(Self {
            _listeners: listeners,
            state,
        }))
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }
}
