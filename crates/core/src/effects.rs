//! Scroll and pointer geometry for the interaction handlers.
//!
//! Every handler on the page is a stateless reaction to one event: it reads
//! the current geometry, runs one of these functions, and writes the derived
//! presentation back. Keeping the math here leaves the handlers as thin
//! web-sys glue and makes the behavior natively testable.

/// Hero translate/fade while the hero is still in view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    pub translate_y_px: f64,
    pub opacity: f64,
}

/// `None` once the page has scrolled past the viewport height; the hero is
/// off-screen and its style is left alone.
pub fn hero_parallax(scroll_y: f64, viewport_h: f64) -> Option<HeroParallax> {
    if scroll_y >= viewport_h {
        return None;
    }
    Some(HeroParallax {
        translate_y_px: scroll_y * 0.4,
        opacity: (1.0 - scroll_y / 700.0).max(0.0),
    })
}

/// Background blur radius: 1px per 50px scrolled, capped at 10px.
pub fn background_blur_px(scroll_y: f64) -> f64 {
    (scroll_y / 50.0).min(10.0).max(0.0)
}

/// Picks the nav link to highlight: the last section whose top edge (less a
/// 200px lead) has scrolled past. `sections` is `(id, document_top)` in page
/// order.
pub fn active_section<'a>(scroll_y: f64, sections: &'a [(String, f64)]) -> Option<&'a str> {
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - 200.0 {
            current = Some(id.as_str());
        }
    }
    current
}

/// 3D tilt for a hovered card, from the pointer position within the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

const TILT_MAX_DEG: f64 = 10.0;

pub fn card_tilt(pointer_x: f64, pointer_y: f64, width: f64, height: f64) -> CardTilt {
    let cx = (width / 2.0).max(1.0);
    let cy = (height / 2.0).max(1.0);
    CardTilt {
        rotate_x_deg: ((pointer_y - cy) / cy * -TILT_MAX_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
        rotate_y_deg: ((pointer_x - cx) / cx * TILT_MAX_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
    }
}

impl CardTilt {
    /// Inline transform for the hovered state.
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.05, 1.05, 1.05)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

/// Inline transform restoring a card once the pointer leaves.
pub const CARD_REST_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_stops_past_the_viewport() {
        assert!(hero_parallax(900.0, 900.0).is_none());
        assert!(hero_parallax(1500.0, 900.0).is_none());

        let p = hero_parallax(350.0, 900.0).unwrap();
        assert_eq!(p.translate_y_px, 140.0);
        assert!((p.opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn parallax_opacity_never_goes_negative() {
        let p = hero_parallax(800.0, 900.0).unwrap();
        assert_eq!(p.opacity, 0.0);
    }

    #[test]
    fn blur_caps_at_ten_px() {
        assert_eq!(background_blur_px(0.0), 0.0);
        assert_eq!(background_blur_px(250.0), 5.0);
        assert_eq!(background_blur_px(500.0), 10.0);
        assert_eq!(background_blur_px(5_000.0), 10.0);
    }

    #[test]
    fn active_section_takes_the_last_passed_top() {
        let sections = vec![
            ("home".to_string(), 0.0),
            ("features".to_string(), 900.0),
            ("join".to_string(), 2_000.0),
        ];
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(650.0, &sections), Some("home"));
        // The 200px lead flips the highlight slightly before the edge.
        assert_eq!(active_section(700.0, &sections), Some("features"));
        assert_eq!(active_section(1_900.0, &sections), Some("join"));
        assert_eq!(active_section(100.0, &[]), None);
    }

    #[test]
    fn tilt_is_bounded_and_centered() {
        let center = card_tilt(150.0, 100.0, 300.0, 200.0);
        assert_eq!(center.rotate_x_deg, 0.0);
        assert_eq!(center.rotate_y_deg, 0.0);

        let corner = card_tilt(300.0, 0.0, 300.0, 200.0);
        assert_eq!(corner.rotate_x_deg, 10.0);
        assert_eq!(corner.rotate_y_deg, 10.0);

        // Pointer outside the rect (fast exits) still clamps.
        let wild = card_tilt(9_000.0, -9_000.0, 300.0, 200.0);
        assert_eq!(wild.rotate_x_deg, 10.0);
        assert_eq!(wild.rotate_y_deg, 10.0);
    }

    #[test]
    fn tilt_transform_formats_both_axes() {
        let t = CardTilt {
            rotate_x_deg: -3.5,
            rotate_y_deg: 7.25,
        };
        assert_eq!(
            t.transform(),
            "perspective(1000px) rotateX(-3.50deg) rotateY(7.25deg) scale3d(1.05, 1.05, 1.05)"
        );
    }
}
