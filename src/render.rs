//! Frame layout and redraw tracking.
//!
//! [`render`] turns an animated [`FlowerPose`] into a [`FlowerFrame`]: where
//! every petal sits on screen, how large it is, and how opaque. It does no
//! drawing, so the layout is testable without a display.
//!
//! [`PanelState`] tracks what the header and control panel last showed, so
//! those regions are only redrawn when something visible changed. The flower
//! is redrawn while it animates and once more when it settles.
//!
//! # Petal Transform
//!
//! Each petal is a circle of the configured diameter. For minimize progress
//! `m` (0 = expanded, 1 = minimized), petal `i` at angle `θ` is placed at:
//! ```text
//! local    = (1 - m) * (d / 2) * (cos θ, sin θ)
//! rotation = -90° * m - 60°
//! scale    = lerp(1, 0.3, m)
//! screen   = center + mirror_x(rotate(rotation, scale * local))
//! radius   = scale * d / 2
//! ```
//! Expanded petals pivot on their leading edge, which puts their centres on a
//! ring around the flower centre. Minimized petals pivot on their own centre
//! and collapse onto the flower centre.
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Flower area | Every frame | Clear and redraw (petals animate) |
//! | Header | On FPS change / toggle | Conditional redraw |
//! | Panel | On value, button or log change | Conditional redraw |

use embedded_graphics::prelude::Point;
use heapless::Vec;

use crate::config::{
    FLOWER_CENTER_X,
    FLOWER_CENTER_Y,
    MAX_PETALS,
    MINIMIZED_ROTATION,
    MINIMIZED_SCALE,
    ORIENTATION_ROTATION,
    Settings,
};
use crate::geometry::petals;

// =============================================================================
// Pose
// =============================================================================

/// Interpolated flower state at one instant, produced by
/// [`FlowerAnimator`](crate::animations::FlowerAnimator).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowerPose {
    /// Displayed (tweened) petal count.
    pub petal_count: f32,
    /// Minimize progress, 0 = expanded, 1 = minimized.
    pub minimize: f32,
    /// Model flag, flips immediately when a breath toggles.
    pub minimized: bool,
    pub halo_opacity: f32,
    pub halo_scale: f32,
    /// Seconds applied to layout transitions.
    pub layout_duration: f32,
    /// Seconds of the halo removal fade.
    pub fade_duration: f32,
}

// =============================================================================
// Frame Layout
// =============================================================================

/// Pivot a petal rotates around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Left edge of the petal (expanded).
    Leading,
    /// Petal centre (minimized).
    Center,
}

/// On-screen placement of one petal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetalLayout {
    pub index: usize,
    pub angle_deg: f32,
    /// Fade opacity in `[0, 1]`, before the petal colour's own opacity.
    pub opacity: f32,
    pub anchor: Anchor,
    pub center: Point,
    pub radius: f32,
}

impl PetalLayout {
    /// Circle diameter in whole pixels.
    #[inline]
    pub fn diameter(&self) -> u32 {
        (self.radius * 2.0).round().max(0.0) as u32
    }
}

/// Petal list, one entry per rendered index.
pub type Petals = Vec<PetalLayout, MAX_PETALS>;

/// The overlay flower shown while expanded.
#[derive(Clone, Debug, PartialEq)]
pub struct Halo {
    /// Overall opacity multiplier.
    pub opacity: f32,
    pub petals: Petals,
}

/// Everything needed to draw the flower for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowerFrame {
    pub petals: Petals,
    /// `None` once the halo has fully faded.
    pub halo: Option<Halo>,
    pub layout_duration: f32,
    pub fade_duration: f32,
}

/// Lay out the flower for `pose`.
pub fn render(
    pose: &FlowerPose,
    settings: &Settings,
) -> FlowerFrame {
    let center = Point::new(FLOWER_CENTER_X, FLOWER_CENTER_Y);
    let diameter = settings.petal_diameter as f32;
    let anchor = if pose.minimized { Anchor::Center } else { Anchor::Leading };

    let scale = (MINIMIZED_SCALE - 1.0).mul_add(pose.minimize, 1.0);
    let flower = layout_petals(pose.petal_count, pose.minimize, scale, anchor, diameter, center);

    // Removed views keep their last (expanded) layout while fading out
    let halo = (pose.halo_opacity > 0.0).then(|| Halo {
        opacity: pose.halo_opacity,
        petals: layout_petals(
            pose.petal_count,
            0.0,
            pose.halo_scale,
            Anchor::Leading,
            diameter,
            center,
        ),
    });

    FlowerFrame {
        petals: flower,
        halo,
        layout_duration: pose.layout_duration,
        fade_duration: pose.fade_duration,
    }
}

fn layout_petals(
    petal_count: f32,
    minimize: f32,
    scale: f32,
    anchor: Anchor,
    diameter: f32,
    center: Point,
) -> Petals {
    let spread = (1.0 - minimize) * diameter / 2.0;
    let (sin_r, cos_r) = MINIMIZED_ROTATION
        .mul_add(minimize, ORIENTATION_ROTATION)
        .to_radians()
        .sin_cos();

    let mut out = Petals::new();
    for petal in petals(petal_count) {
        let (sin_t, cos_t) = petal.angle_deg.to_radians().sin_cos();
        let (lx, ly) = (spread * cos_t * scale, spread * sin_t * scale);
        let rx = lx * cos_r - ly * sin_r;
        let ry = lx * sin_r + ly * cos_r;

        // rendered_petals() caps the count at capacity
        out.push(PetalLayout {
            index: petal.index,
            angle_deg: petal.angle_deg,
            opacity: petal.opacity,
            anchor,
            center: center + Point::new((-rx).round() as i32, ry.round() as i32),
            radius: diameter / 2.0 * scale,
        })
        .ok();
    }
    out
}

// =============================================================================
// Panel State Tracking
// =============================================================================

/// What the control panel shows, reduced to what changes its pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelValues {
    /// Petal slider value in tenths.
    pub petal_tenths: u16,
    pub breath_tenths: u16,
    pub breathing: bool,
    /// Bumped by the event log on every push.
    pub log_revision: u32,
}

impl PanelValues {
    pub fn new(
        petal_count: f32,
        breath_tenths: u16,
        breathing: bool,
        log_revision: u32,
    ) -> Self {
        Self {
            petal_tenths: (petal_count * 10.0).round() as u16,
            breath_tenths,
            breathing,
            log_revision,
        }
    }
}

/// Tracks header, panel and flower state for conditional redraws.
pub struct PanelState {
    /// Previous FPS display state.
    prev_show_fps: bool,

    /// Previous FPS value (rounded to avoid unnecessary redraws).
    prev_fps_rounded: u32,

    /// Panel values last drawn, `None` until the first draw.
    prev_panel: Option<PanelValues>,

    /// Whether the flower moved on the previous frame.
    prev_animating: bool,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,
}

impl PanelState {
    pub const fn new() -> Self {
        Self {
            prev_show_fps: true,
            prev_fps_rounded: 0,
            prev_panel: None,
            prev_animating: false,
            first_frame: true,
        }
    }

    /// Check if header/FPS needs redrawing.
    ///
    /// Uses `fps.round()` to match the display formatting (`{:.0}`).
    pub const fn check_header_dirty(
        &mut self,
        show_fps: bool,
        fps: f32,
    ) -> bool {
        let fps_rounded = fps.round() as u32;
        let dirty = self.first_frame
            || show_fps != self.prev_show_fps
            || (show_fps && fps_rounded != self.prev_fps_rounded);

        self.prev_show_fps = show_fps;
        self.prev_fps_rounded = fps_rounded;
        dirty
    }

    /// Check if the panel needs redrawing and remember `values`.
    pub fn check_panel_dirty(&mut self, values: PanelValues) -> bool {
        let dirty = self.first_frame || self.prev_panel != Some(values);
        self.prev_panel = Some(values);
        dirty
    }

    /// Check if the flower needs redrawing.
    ///
    /// The frame after the animation settles is still drawn so the final
    /// pose lands on screen.
    pub const fn check_flower_dirty(&mut self, animating: bool) -> bool {
        let dirty = self.first_frame || animating || self.prev_animating;
        self.prev_animating = animating;
        dirty
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HALO_OPACITY, PETAL_DIAMETER, PETAL_DURATION};

    fn pose(petal_count: f32, minimize: f32) -> FlowerPose {
        FlowerPose {
            petal_count,
            minimize,
            minimized: minimize >= 1.0,
            halo_opacity: if minimize > 0.0 { 0.0 } else { HALO_OPACITY },
            halo_scale: 1.0,
            layout_duration: PETAL_DURATION,
            fade_duration: 2.52,
        }
    }

    fn center() -> Point {
        Point::new(FLOWER_CENTER_X, FLOWER_CENTER_Y)
    }

    fn distance(a: Point, b: Point) -> f32 {
        let d = a - b;
        ((d.x * d.x + d.y * d.y) as f32).sqrt()
    }

    // -------------------------------------------------------------------------
    // Layout Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_petal_count_and_fade() {
        let frame = render(&pose(5.0, 0.0), &Settings::default());
        assert_eq!(frame.petals.len(), 6);
        assert_eq!(frame.petals[5].opacity, 0.0, "extra index invisible at integral count");
        assert!(frame.petals[..5].iter().all(|p| p.opacity == 1.0));
    }

    #[test]
    fn test_expanded_petals_on_ring() {
        let frame = render(&pose(5.0, 0.0), &Settings::default());
        let ring = PETAL_DIAMETER as f32 / 2.0;

        for petal in &frame.petals {
            assert_eq!(petal.anchor, Anchor::Leading);
            assert_eq!(petal.diameter(), PETAL_DIAMETER);
            let r = distance(petal.center, center());
            assert!((r - ring).abs() <= 1.0, "petal {} at radius {r}", petal.index);
        }
    }

    #[test]
    fn test_expanded_petals_distinct() {
        let frame = render(&pose(5.0, 0.0), &Settings::default());
        for (i, a) in frame.petals[..5].iter().enumerate() {
            for b in &frame.petals[i + 1..5] {
                assert!(distance(a.center, b.center) > 10.0);
            }
        }
    }

    #[test]
    fn test_minimized_petals_collapse() {
        let frame = render(&pose(7.0, 1.0), &Settings::default());
        let expected = (PETAL_DIAMETER as f32 * MINIMIZED_SCALE).round() as u32;

        for petal in &frame.petals {
            assert_eq!(petal.anchor, Anchor::Center);
            assert_eq!(petal.center, center());
            assert_eq!(petal.diameter(), expected);
        }
        assert!(frame.halo.is_none());
    }

    #[test]
    fn test_halfway_shrinks_ring() {
        let frame = render(&pose(4.0, 0.5), &Settings::default());
        let r = distance(frame.petals[0].center, center());
        let ring = PETAL_DIAMETER as f32 / 2.0;
        assert!(r > 0.0 && r < ring / 2.0, "radius {r}");
    }

    #[test]
    fn test_max_petals_fit() {
        let frame = render(&pose(10.0, 0.0), &Settings::default());
        assert_eq!(frame.petals.len(), MAX_PETALS);
    }

    #[test]
    fn test_halo_follows_pose() {
        let mut p = pose(5.0, 0.0);
        p.halo_scale = 1.5;
        p.halo_opacity = 0.3;
        let frame = render(&p, &Settings::default());

        let halo = frame.halo.expect("halo visible");
        assert_eq!(halo.opacity, 0.3);
        assert_eq!(halo.petals.len(), frame.petals.len());
        assert_eq!(halo.petals[0].diameter(), 120);
    }

    #[test]
    fn test_frame_carries_durations() {
        let frame = render(&pose(5.0, 0.0), &Settings::default());
        assert_eq!(frame.layout_duration, PETAL_DURATION);
        assert_eq!(frame.fade_duration, 2.52);
    }

    // -------------------------------------------------------------------------
    // Header Dirty Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_check_header_dirty_first_frame() {
        let mut state = PanelState::new();
        assert!(state.check_header_dirty(true, 50.0));
    }

    #[test]
    fn test_check_header_dirty_fps_change() {
        let mut state = PanelState::new();
        state.end_frame();
        state.check_header_dirty(true, 50.0);

        assert!(!state.check_header_dirty(true, 50.4), "50.4 still rounds to 50");
        assert!(state.check_header_dirty(true, 50.5), "50.5 rounds to 51");
    }

    #[test]
    fn test_check_header_dirty_hidden_fps() {
        let mut state = PanelState::new();
        state.end_frame();
        state.check_header_dirty(false, 50.0);

        assert!(!state.check_header_dirty(false, 60.0));
        assert!(state.check_header_dirty(true, 60.0), "toggle on redraws");
    }

    // -------------------------------------------------------------------------
    // Panel Dirty Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_check_panel_dirty() {
        let mut state = PanelState::new();
        let values = PanelValues::new(5.0, 42, false, 0);

        assert!(state.check_panel_dirty(values), "first frame");
        state.end_frame();
        assert!(!state.check_panel_dirty(values));

        assert!(state.check_panel_dirty(PanelValues::new(5.26, 42, false, 0)));
        assert!(state.check_panel_dirty(PanelValues::new(5.26, 42, true, 0)));
        assert!(state.check_panel_dirty(PanelValues::new(5.26, 42, true, 1)));
        assert!(!state.check_panel_dirty(PanelValues::new(5.27, 42, true, 1)), "same tenth");
    }

    // -------------------------------------------------------------------------
    // Flower Dirty Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_check_flower_dirty_first_frame() {
        let mut state = PanelState::default();
        assert!(state.check_flower_dirty(false));
        state.end_frame();
        assert!(!state.check_flower_dirty(false), "still flower skips redraw");
    }

    #[test]
    fn test_check_flower_dirty_settles_one_frame_late() {
        let mut state = PanelState::new();
        state.end_frame();

        assert!(state.check_flower_dirty(true));
        assert!(state.check_flower_dirty(true));
        assert!(state.check_flower_dirty(false), "final pose is drawn once");
        assert!(!state.check_flower_dirty(false));
    }
}
