use std::cell::RefCell;
use std::rc::Rc;

use pagefx::{FieldState, ParticleConfig, ParticleField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::canvas::CanvasSurface;
use crate::dom::{Listener, Observer};
use crate::frame::AnimationLoop;

/// Match the canvas backing store to its layout size and return it.
fn fit_backing_store(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// The hero's particle background. Runs while the hero section is on screen.
pub struct HeroParticles {
    _resize: Listener,
    _visibility: Option<Observer>,
    field: Rc<RefCell<ParticleField>>,
    animation: AnimationLoop,
}

impl HeroParticles {
    pub fn new(window: &Window, document: &Document, config: &ParticleConfig) -> Result<Option<Self>, JsValue> {
        let Some(canvas) = document
            .get_element_by_id(config.canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            return Ok(None);
        };
        let Some(ctx) = canvas
            .get_context("2d")?
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return Ok(None);
        };

        let field = Rc::new(RefCell::new(ParticleField::new(config.clone(), random_seed())));
        {
            let (width, height) = fit_backing_store(&canvas);
            field.borrow_mut().resize(width, height);
        }

        let animation = {
            let field = field.clone();
            let mut surface = CanvasSurface::new(ctx);
            AnimationLoop::new(window, move |_| {
                field.borrow_mut().frame(&mut surface);
                true
            })
        };

        let resize = {
            let field = field.clone();
            Listener::new(window, "resize", move |_| {
                let (width, height) = fit_backing_store(&canvas);
                field.borrow_mut().resize(width, height);
            })?
        };

        let visibility = match document.query_selector(config.section_selector)? {
            Some(section) => {
                let field = field.clone();
                let animation = animation.clone();
                let observer = Observer::new(0.0, None, move |entries, _| {
                    // Newest record wins when one batch reports several changes.
                    let Some(entry) = entries.last() else {
                        return;
                    };
                    if field.borrow_mut().on_section_visibility(entry.is_intersecting()) {
                        animation.start();
                    } else {
                        animation.stop();
                    }
                })?;
                observer.observe(&section);
                Some(observer)
            }
            None => None,
        };

        field.borrow_mut().start();
        animation.start();

        Ok(Some(Self {
            _resize: resize,
            _visibility: visibility,
            field,
            animation,
        }))
    }

    pub fn state(&self) -> FieldState {
        self.field.borrow().state()
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().particles().len()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }
}
