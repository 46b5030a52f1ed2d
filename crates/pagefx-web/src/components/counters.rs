use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Intl, Object};
use pagefx::{parse_target, CounterConfig, CounterPanel};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::dom::{query_all, Observer};
use crate::frame::AnimationLoop;

/// Formats numbers with the browser's default locale grouping (`1,234` / `1.234`).
#[derive(Clone)]
struct LocaleFormat {
    format: Function,
}

impl LocaleFormat {
    fn new() -> Self {
        let format = Intl::NumberFormat::new(&Array::new(), &Object::new()).format();
        Self { format }
    }

    fn format(&self, value: f64) -> String {
        self.format
            .call1(&JsValue::UNDEFINED, &JsValue::from_f64(value))
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_else(|| value.to_string())
    }
}

/// Counts every statistic up from zero the first time the stats panel is in view.
pub struct CounterAnimator {
    _observer: Observer,
    panel: Rc<RefCell<CounterPanel>>,
    running: Rc<RefCell<Vec<AnimationLoop>>>,
}

impl CounterAnimator {
    pub fn new(window: &Window, document: &Document, config: &CounterConfig) -> Result<Option<Self>, JsValue> {
        let Some(stats) = document.query_selector(config.panel_selector)? else {
            return Ok(None);
        };
        let counters = query_all(document, config.counter_selector)?;

        let panel = Rc::new(RefCell::new(CounterPanel::new(config)));
        let running: Rc<RefCell<Vec<AnimationLoop>>> = Rc::default();
        let format = LocaleFormat::new();
        let attribute = config.target_attribute;

        let observer = {
            let window = window.clone();
            let panel = panel.clone();
            let running = running.clone();
            Observer::new(config.threshold, None, move |entries, observer| {
                // A batch can hold several records for the panel; the last one is
                // its current state, so a stale leading record cannot trigger.
                let Some(is_intersecting) = entries.last().map(|e| e.is_intersecting()) else {
                    return;
                };
                let now = window.performance().map_or(0.0, |p| p.now());
                let targets = counters
                    .iter()
                    .map(|el| parse_target(el.get_attribute(attribute).as_deref()));
                let Some(animations) = panel.borrow_mut().on_visibility(is_intersecting, now, targets) else {
                    return;
                };
                observer.disconnect();

                let mut running = running.borrow_mut();
                for (el, animation) in counters.iter().zip(animations) {
                    let el: Element = el.clone();
                    let format = format.clone();
                    let counter = AnimationLoop::new(&window, move |timestamp| {
                        el.set_text_content(Some(&format.format(animation.value_at(timestamp))));
                        !animation.is_complete(timestamp)
                    });
                    counter.start();
                    running.push(counter);
                }
                log::info!("pagefx: {} counters started", running.len());
            })?
        };
        observer.observe(&stats);

        Ok(Some(Self {
            _observer: observer,
            panel,
            running,
        }))
    }

    pub fn is_done(&self) -> bool {
        self.panel.borrow().is_done()
    }

    /// Counters still animating.
    pub fn active(&self) -> usize {
        self.running.borrow().iter().filter(|c| c.is_running()).count()
    }
}
