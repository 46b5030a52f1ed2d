use crate::renderer::color::Rgb;

/// Configuration for every page component.
///
/// The defaults are the shipped behavior. The browser entry point always uses
/// `PageConfig::default()`; custom values exist for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    pub reveal: RevealConfig,
    pub counters: CounterConfig,
    pub nav: NavConfig,
    pub menu: MenuConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub particles: ParticleConfig,
}

/// Scroll-triggered fade-in.
#[derive(Debug, Clone)]
pub struct RevealConfig {
    /// Elements to watch.
    pub selector: &'static str,
    /// Class added on first intersection.
    pub visible_class: &'static str,
    /// Visible fraction that counts as "in view" (default: 0.15).
    pub threshold: f64,
    /// Observer root margin. The negative bottom inset fires slightly before full entry.
    pub root_margin: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".fade-up",
            visible_class: "visible",
            threshold: 0.15,
            root_margin: "0px 0px -40px 0px",
        }
    }
}

/// Animated statistic counters.
#[derive(Debug, Clone)]
pub struct CounterConfig {
    /// The panel whose visibility triggers the animation.
    pub panel_selector: &'static str,
    /// Counter elements, searched document-wide.
    pub counter_selector: &'static str,
    /// Attribute holding the integer target.
    pub target_attribute: &'static str,
    /// Visible fraction of the panel that activates the counters (default: 0.3).
    pub threshold: f64,
    /// Wall-clock animation length in milliseconds (default: 1800).
    pub duration_ms: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            panel_selector: ".stats-bar",
            counter_selector: ".stat-number",
            target_attribute: "data-target",
            threshold: 0.3,
            duration_ms: 1800.0,
        }
    }
}

/// Sticky navigation bar and the scroll hint below the hero.
#[derive(Debug, Clone)]
pub struct NavConfig {
    pub nav_id: &'static str,
    pub scrolled_class: &'static str,
    /// `scrolled` is present iff the scroll offset exceeds this (default: 60).
    pub scrolled_threshold: f64,
    pub indicator_id: &'static str,
    pub hidden_class: &'static str,
    /// The indicator is hidden iff the scroll offset exceeds this (default: 100).
    pub indicator_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            nav_id: "nav",
            scrolled_class: "scrolled",
            scrolled_threshold: 60.0,
            indicator_id: "scrollIndicator",
            hidden_class: "hidden",
            indicator_threshold: 100.0,
        }
    }
}

/// Mobile menu toggle and panel.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    pub toggle_id: &'static str,
    pub menu_id: &'static str,
    pub active_class: &'static str,
    pub open_class: &'static str,
    /// Links inside the panel that close it.
    pub link_selector: &'static str,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_id: "navToggle",
            menu_id: "mobileMenu",
            active_class: "active",
            open_class: "open",
            link_selector: "a",
        }
    }
}

/// Same-page anchor scrolling.
#[derive(Debug, Clone)]
pub struct SmoothScrollConfig {
    pub link_selector: &'static str,
    /// Extra space left between the nav bar and the scrolled-to element (default: 16).
    pub gap: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            link_selector: "a[href^=\"#\"]",
            gap: 16.0,
        }
    }
}

/// Hero particle background.
#[derive(Debug, Clone)]
pub struct ParticleConfig {
    pub canvas_id: &'static str,
    /// Section whose visibility pauses and resumes the animation.
    pub section_selector: &'static str,
    /// Canvas area (px²) per particle (default: 18000).
    pub area_per_particle: f64,
    /// Radius range, half-open.
    pub radius: (f64, f64),
    /// Per-axis velocity range in px/frame, half-open.
    pub velocity: (f64, f64),
    /// Opacity range, half-open.
    pub opacity: (f64, f64),
    /// Pairs closer than this are connected (default: 120).
    pub link_distance: f64,
    /// Connection alpha at distance zero (default: 0.06).
    pub link_alpha: f64,
    pub link_width: f64,
    pub color: Rgb,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            canvas_id: "heroCanvas",
            section_selector: ".hero",
            area_per_particle: 18000.0,
            radius: (0.5, 2.0),
            velocity: (-0.15, 0.15),
            opacity: (0.05, 0.35),
            link_distance: 120.0,
            link_alpha: 0.06,
            link_width: 0.5,
            color: Rgb::new(131, 83, 253),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_thresholds() {
        let config = PageConfig::default();
        assert_eq!(config.reveal.threshold, 0.15);
        assert_eq!(config.counters.threshold, 0.3);
        assert_eq!(config.counters.duration_ms, 1800.0);
    }

    #[test]
    fn particle_ranges_are_half_open_and_ordered() {
        let p = ParticleConfig::default();
        for (lo, hi) in [p.radius, p.velocity, p.opacity] {
            assert!(lo < hi);
        }
        assert_eq!(p.velocity.0, -p.velocity.1);
    }
}
