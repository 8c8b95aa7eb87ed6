//! Custom cursor model: a dot pinned to the pointer and a ring that trails it.

/// Elements that put the ring into its hover state.
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, [role=button], input, textarea, select, summary, label";

pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorState {
    pointer: (f64, f64),
    ring: (f64, f64),
    follow: f64,
    pub hovering: bool,
    pub pressed: bool,
    pub hidden: bool,
}

impl CursorState {
    /// Both layers start at `origin` (the viewport centre).
    pub fn new(origin: (f64, f64), follow: f64) -> Self {
        Self {
            pointer: origin,
            ring: origin,
            follow: follow.clamp(0.0, 1.0),
            hovering: false,
            pressed: false,
            hidden: false,
        }
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    pub fn ring(&self) -> (f64, f64) {
        self.ring
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Advance the ring one frame towards the pointer.
    pub fn step(&mut self) -> (f64, f64) {
        self.ring = (
            lerp(self.ring.0, self.pointer.0, self.follow),
            lerp(self.ring.1, self.pointer.1, self.follow),
        );
        self.ring
    }

    pub fn dot_class(&self) -> String {
        self.class_list("cursor-dot", false)
    }

    pub fn ring_class(&self) -> String {
        self.class_list("cursor-ring", self.hovering)
    }

    fn class_list(&self, base: &str, hover: bool) -> String {
        let mut classes = String::from(base);
        if self.pressed {
            classes.push_str(" cursor-active");
        }
        if self.hidden {
            classes.push_str(" cursor-hidden");
        }
        if hover {
            classes.push_str(" cursor-hover");
        }
        classes
    }
}

pub fn translate3d((x, y): (f64, f64)) -> String {
    format!("translate3d({x}px, {y}px, 0)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_converges_on_pointer() {
        let mut cursor = CursorState::new((500.0, 400.0), 0.18);
        cursor.move_to(600.0, 400.0);
        let first = cursor.step();
        assert!((first.0 - 518.0).abs() < 1e-9);
        let mut previous = first.0;
        for _ in 0..60 {
            let (x, _) = cursor.step();
            assert!(x > previous && x <= 600.0);
            previous = x;
        }
        assert!((600.0 - previous) < 0.01);
    }

    #[test]
    fn reduced_motion_snaps() {
        let mut cursor = CursorState::new((0.0, 0.0), 1.0);
        cursor.move_to(42.0, 7.0);
        assert_eq!(cursor.step(), (42.0, 7.0));
    }

    #[test]
    fn class_lists() {
        let mut cursor = CursorState::new((0.0, 0.0), 0.18);
        assert_eq!(cursor.ring_class(), "cursor-ring");
        cursor.hovering = true;
        cursor.pressed = true;
        assert_eq!(cursor.ring_class(), "cursor-ring cursor-active cursor-hover");
        assert_eq!(cursor.dot_class(), "cursor-dot cursor-active");
        cursor.hidden = true;
        assert!(cursor.dot_class().ends_with("cursor-hidden"));
    }

    #[test]
    fn transform_string() {
        assert_eq!(translate3d((1.5, 2.0)), "translate3d(1.5px, 2px, 0)");
    }
}
