//! Screen layout and hit-testing
//!
//! Layout is a pure function of the viewport size; hit-testing is a pure
//! function of that layout and a point. Neither depends on what was drawn or
//! in which order, so click resolution can be tested without a renderer.

use glam::Vec2;
use serde::Serialize;

use crate::sim::upgrades::{UPGRADE_COUNT, UpgradeKind};

/// Menu and pause-overlay buttons
pub const BUTTON_SIZE: Vec2 = Vec2::new(300.0, 60.0);
/// Upgrade shop buttons
pub const UPGRADE_BUTTON_SIZE: Vec2 = Vec2::new(230.0, 80.0);
/// Distance from the viewport edge to the shop columns
pub const MARGIN: f32 = 20.0;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Half-open: the right and bottom edges belong to the neighbour
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Boundary counts as inside
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuButton {
    Start,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PauseButton {
    Resume,
    MainMenu,
}

/// Where everything clickable sits for a given viewport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub viewport: Vec2,
    pub planet: Circle,
    pub start_button: Rect,
    pub quit_button: Rect,
    pub resume_button: Rect,
    pub menu_button: Rect,
    /// Indexed by `UpgradeKind::index`
    pub upgrade_buttons: [Rect; UPGRADE_COUNT],
}

impl Layout {
    pub fn new(viewport: Vec2, planet_radius: f32) -> Self {
        let center = viewport / 2.0;
        let button_x = center.x - BUTTON_SIZE.x / 2.0;
        let button = |y: f32| Rect::new(button_x, y, BUTTON_SIZE.x, BUTTON_SIZE.y);

        Self {
            viewport,
            planet: Circle {
                center,
                radius: planet_radius,
            },
            start_button: button(300.0),
            quit_button: button(400.0),
            resume_button: button(center.y),
            menu_button: button(center.y + 100.0),
            upgrade_buttons: std::array::from_fn(|i| upgrade_button(viewport, i)),
        }
    }

    pub fn hit_menu(&self, point: Vec2) -> Option<MenuButton> {
        if self.start_button.contains(point) {
            Some(MenuButton::Start)
        } else if self.quit_button.contains(point) {
            Some(MenuButton::Quit)
        } else {
            None
        }
    }

    pub fn hit_pause(&self, point: Vec2) -> Option<PauseButton> {
        if self.resume_button.contains(point) {
            Some(PauseButton::Resume)
        } else if self.menu_button.contains(point) {
            Some(PauseButton::MainMenu)
        } else {
            None
        }
    }

    /// First shop button under `point`, in catalog order
    pub fn hit_upgrade(&self, point: Vec2) -> Option<UpgradeKind> {
        self.upgrade_buttons
            .iter()
            .position(|rect| rect.contains(point))
            .map(|i| UpgradeKind::ALL[i])
    }

    pub fn upgrade_button(&self, kind: UpgradeKind) -> Rect {
        self.upgrade_buttons[kind.index()]
    }
}

/// First four upgrades stack down the right edge, the rest down the left edge
/// under the HUD text.
fn upgrade_button(viewport: Vec2, index: usize) -> Rect {
    let (x, y) = if index < 4 {
        (
            viewport.x - UPGRADE_BUTTON_SIZE.x - MARGIN,
            MARGIN + index as f32 * 100.0,
        )
    } else {
        (MARGIN, 190.0 + (index - 4) as f32 * 95.0)
    };
    Rect::new(x, y, UPGRADE_BUTTON_SIZE.x, UPGRADE_BUTTON_SIZE.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, PLANET_RADIUS};

    fn default_layout() -> Layout {
        Layout::new(Vec2::new(DEFAULT_WIDTH, DEFAULT_HEIGHT), PLANET_RADIUS)
    }

    #[test]
    fn test_rect_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(29.9, 29.9)));
        assert!(!rect.contains(Vec2::new(30.0, 15.0)));
        assert_eq!(rect.center(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_planet_centered() {
        let layout = default_layout();
        assert_eq!(layout.planet.center, Vec2::new(400.0, 300.0));
        assert!(layout.planet.contains(Vec2::new(450.0, 300.0)));
        assert!(!layout.planet.contains(Vec2::new(451.0, 300.0)));
    }

    #[test]
    fn test_menu_and_pause_hits() {
        let layout = default_layout();
        assert_eq!(layout.hit_menu(layout.start_button.center()), Some(MenuButton::Start));
        assert_eq!(layout.hit_menu(layout.quit_button.center()), Some(MenuButton::Quit));
        assert_eq!(layout.hit_menu(Vec2::new(5.0, 5.0)), None);
        assert_eq!(layout.hit_pause(layout.resume_button.center()), Some(PauseButton::Resume));
        assert_eq!(layout.hit_pause(layout.menu_button.center()), Some(PauseButton::MainMenu));
    }

    #[test]
    fn test_upgrade_buttons_are_disjoint_and_on_screen() {
        let layout = default_layout();
        for (i, a) in layout.upgrade_buttons.iter().enumerate() {
            assert!(a.min.x >= 0.0 && a.min.y >= 0.0);
            assert!(a.max().x <= DEFAULT_WIDTH && a.max().y <= DEFAULT_HEIGHT);
            assert!(!layout.planet.contains(a.center()));
            for b in &layout.upgrade_buttons[i + 1..] {
                let overlap = a.min.x < b.max().x && b.min.x < a.max().x && a.min.y < b.max().y && b.min.y < a.max().y;
                assert!(!overlap, "{a:?} overlaps {b:?}");
            }
        }
        for kind in UpgradeKind::ALL {
            assert_eq!(layout.hit_upgrade(layout.upgrade_button(kind).center()), Some(kind));
        }
    }

    #[test]
    fn test_layout_follows_viewport() {
        let layout = Layout::new(Vec2::new(1280.0, 720.0), PLANET_RADIUS);
        assert_eq!(layout.planet.center, Vec2::new(640.0, 360.0));
        assert_eq!(layout.upgrade_buttons[0].min, Vec2::new(1030.0, 20.0));
        assert_eq!(layout.resume_button.min.y, 360.0);
    }
}
