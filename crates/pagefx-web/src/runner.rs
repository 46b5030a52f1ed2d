use pagefx::PageConfig;
use wasm_bindgen::prelude::*;

use crate::components::{
    CounterAnimator, HeroParticles, MobileMenuController, NavBarController,
    RevealController, ScrollHintController, SmoothScrollController,
};
use crate::dom::{document, window};

/// Owns every page component for the lifetime of a page view.
///
/// The bridge keeps one `PageRunner` in a `thread_local!` because wasm-bindgen
/// exports free functions, not stateful objects. Dropping it removes all
/// listeners, disconnects observers and cancels pending frames.
pub struct PageRunner {
    reveal: Option<RevealController>,
    counters: Option<CounterAnimator>,
    nav: Option<NavBarController>,
    scroll_hint: Option<ScrollHintController>,
    menu: Option<MobileMenuController>,
    smooth_scroll: Option<SmoothScrollController>,
    hero: Option<HeroParticles>,
}

/// Log the outcome of one component's setup. A failure disables only that
/// component.
fn attach<T>(name: &str, result: Result<Option<T>, JsValue>) -> Option<T> {
    match result {
        Ok(Some(component)) => {
            log::info!("pagefx: {} ready", name);
            Some(component)
        }
        Ok(None) => {
            log::debug!("pagefx: {} skipped, elements absent", name);
            None
        }
        Err(err) => {
            log::warn!("pagefx: {} failed to start: {:?}", name, err);
            None
        }
    }
}

impl PageRunner {
    /// Read the DOM and start every component whose elements exist.
    pub fn init(config: &PageConfig) -> Result<Self, JsValue> {
        let window = window()?;
        let document = document(&window)?;
        let nav_el = document.get_element_by_id(config.nav.nav_id);

        let reveal = attach("reveal", RevealController::new(&document, &config.reveal));
        let counters = attach(
            "counters",
            CounterAnimator::new(&window, &document, &config.counters),
        );
        let nav = attach("nav", NavBarController::new(&window, &document, &config.nav));
        let scroll_hint = attach(
            "scroll hint",
            ScrollHintController::new(&window, &document, &config.nav),
        );
        let menu = attach("mobile menu", MobileMenuController::new(&document, &config.menu));
        let smooth_scroll = attach(
            "smooth scroll",
            SmoothScrollController::new(&window, &document, nav_el, &config.smooth_scroll),
        );
        let hero = attach("hero particles", HeroParticles::new(&window, &document, &config.particles));

        Ok(Self {
            reveal,
            counters,
            nav,
            scroll_hint,
            menu,
            smooth_scroll,
            hero,
        })
    }

    /// One-line status for the console.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(reveal) = &self.reveal {
            parts.push(format!("reveal pending={}", reveal.pending()));
        }
        if let Some(counters) = &self.counters {
            parts.push(format!("counters done={} active={}", counters.is_done(), counters.active()));
        }
        if let Some(nav) = &self.nav {
            parts.push(format!("nav scrolled={}", nav.is_scrolled()));
        }
        if let Some(hint) = &self.scroll_hint {
            parts.push(format!("hint hidden={}", hint.is_hidden()));
        }
        if let Some(menu) = &self.menu {
            parts.push(format!("menu open={}", menu.is_open()));
        }
        if let Some(smooth_scroll) = &self.smooth_scroll {
            parts.push(format!("anchors={}", smooth_scroll.links()));
        }
        if let Some(hero) = &self.hero {
            parts.push(format!(
                "hero {:?} particles={} animating={}",
                hero.state(),
                hero.particle_count(),
                hero.is_animating()
            ));
        }
        parts.join(", ")
    }
}
