//! Hero card hover effects: pointer-driven 3D tilt and flex weights.

use crate::config::EffectsConfig;

/// Rotation applied to a hovered card, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    /// CSS `transform` value.
    pub fn transform(&self, perspective_px: f64) -> String {
        format!(
            "perspective({perspective_px}px) rotateY({}deg) rotateX({}deg)",
            self.rotate_y_deg, self.rotate_x_deg
        )
    }
}

/// Tilt for one card. Only the hovered card tilts; the angle grows with the
/// pointer's distance from the viewport centre.
pub fn card_tilt(
    pointer: (f64, f64),
    viewport: (f64, f64),
    hovered: bool,
    cfg: &EffectsConfig,
) -> Tilt {
    if !hovered {
        return Tilt::FLAT;
    }
    let (x, y) = pointer;
    let (width, height) = viewport;
    Tilt {
        rotate_y_deg: (x - width / 2.0) * cfg.tilt_factor,
        rotate_x_deg: (y - height / 2.0) * cfg.tilt_factor,
    }
}

/// Last known pointer position. Every move is recorded, so a card entered
/// after the pointer travelled elsewhere tilts from where the pointer is now.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTrail {
    latest: (f64, f64),
}

impl PointerTrail {
    pub fn latest(&self) -> (f64, f64) {
        self.latest
    }

    /// Record a move. Returns `true` when a hovered card has to redraw.
    pub fn record(&mut self, position: (f64, f64), hovering: bool) -> bool {
        self.latest = position;
        hovering
    }
}

/// Flex weight of card `index` given which card (if any) is hovered.
/// With no hover the first card leads.
pub fn card_flex(index: usize, hovered: Option<usize>) -> f64 {
    match hovered {
        Some(h) if h == index => 4.0,
        Some(_) => 0.8,
        None if index == 0 => 3.0,
        None => 1.0,
    }
}
