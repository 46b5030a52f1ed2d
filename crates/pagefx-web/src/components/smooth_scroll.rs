use pagefx::{resolve_click, scroll_target, SmoothScrollConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{query_all, scroll_y, Listener};

/// Same-page anchors scroll smoothly to their target, leaving room for the
/// fixed nav bar.
pub struct SmoothScrollController {
    listeners: Vec<Listener>,
}

impl SmoothScrollController {
    pub fn new(
        window: &Window,
        document: &Document,
        nav: Option<Element>,
        config: &SmoothScrollConfig,
    ) -> Result<Option<Self>, JsValue> {
        let links = query_all(document, config.link_selector)?;
        if links.is_empty() {
            return Ok(None);
        }
        let nav: Option<HtmlElement> = nav.and_then(|el| el.dyn_into().ok());

        let mut listeners = Vec::with_capacity(links.len());
        for link in links {
            let window = window.clone();
            let document = document.clone();
            let nav = nav.clone();
            let gap = config.gap;
            let anchor = link.clone();
            listeners.push(Listener::new(&link, "click", move |event| {
                let href = anchor.get_attribute("href");
                let Some(element_top) = resolve_click(href.as_deref(), |selector| {
                    // query_selector throws on fragments that are not valid selectors.
                    document
                        .query_selector(selector)
                        .ok()
                        .flatten()
                        .map(|target| target.get_bounding_client_rect().top())
                }) else {
                    return;
                };
                event.prevent_default();

                let nav_height = nav.as_ref().map_or(0.0, |n| n.offset_height() as f64);
                let top = scroll_target(
                    element_top,
                    scroll_y(&window),
                    nav_height,
                    gap,
                );
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            })?);
        }

        Ok(Some(Self { listeners }))
    }

    pub fn links(&self) -> usize {
        self.listeners.len()
    }
}
