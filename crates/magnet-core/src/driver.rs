//! Per-step magnetic easing over a grid.
//!
//! Each marker is eased toward a target displacement that points at the
//! pointer and grows as the pointer gets closer. Out of range the target is
//! zero and an extra decay pulls the marker home faster. Values under
//! `epsilon` snap to zero so the loop can stop once everything is at rest.

use crate::config::MagnetConfig;
use crate::grid::Grid;
use crate::surface::Surface;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Idle,
    Running,
}

/// What one pass over the grid did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// At least one marker was written to the surface.
    pub changed: bool,
    /// Pointer differed from the previous step's position.
    pub moved: bool,
    pub writes: usize,
    /// Markers bypassed by the settle-skip fast path.
    pub skipped: usize,
    /// Out-of-range markers still decaying toward zero.
    pub settling: usize,
}

impl StepOutcome {
    #[inline]
    pub fn keep_running(&self) -> bool {
        self.changed || self.moved || self.settling > 0
    }
}

/// Target displacement for a marker centered at `center`, and the pointer distance.
#[inline]
pub fn target_offset(
    center: Vec2,
    pointer: Vec2,
    cell_size: f32,
    cfg: &MagnetConfig,
) -> (Vec2, f32) {
    let delta = pointer - center;
    let distance = delta.length();
    if distance < cfg.pull_distance {
        let force = (1.0 - distance / cfg.pull_distance) * cfg.pull_strength;
        // atan2 is defined at the origin, so a pointer dead on center pulls along +x
        let angle = delta.y.atan2(delta.x);
        let target = Vec2::new(angle.cos(), angle.sin()) * force * cell_size;
        (target, distance)
    } else {
        (Vec2::ZERO, distance)
    }
}

#[inline]
fn snap(v: f32, epsilon: f32) -> f32 {
    if v.abs() < epsilon {
        0.0
    } else {
        v
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advance {
    pub offset: Vec2,
    /// Pointer was inside the pull distance.
    pub in_range: bool,
}

/// Next displacement for one marker, or `None` when it is at rest and the
/// pointer has not moved.
pub fn advance_offset(
    offset: Vec2,
    center: Vec2,
    pointer: Vec2,
    moved: bool,
    cell_size: f32,
    cfg: &MagnetConfig,
) -> Option<Advance> {
    if !moved && offset.x.abs() < cfg.epsilon && offset.y.abs() < cfg.epsilon {
        return None;
    }
    let (target, distance) = target_offset(center, pointer, cell_size, cfg);
    let in_range = distance < cfg.pull_distance;
    let mut next = offset + (target - offset) * cfg.ease;
    if !in_range {
        next *= cfg.decay;
    }
    Some(Advance {
        offset: Vec2::new(snap(next.x, cfg.epsilon), snap(next.y, cfg.epsilon)),
        in_range,
    })
}

/// True when `next` differs from what the surface shows by more than epsilon.
/// Reaching exact rest is always committed.
#[inline]
pub fn needs_write(next: Vec2, last_written: Vec2, epsilon: f32) -> bool {
    let d = next - last_written;
    d.x.abs() > epsilon
        || d.y.abs() > epsilon
        || (next == Vec2::ZERO && last_written != Vec2::ZERO)
}

/// Run one step over every marker, writing changed displacements to `surface`.
pub fn step_grid<S: Surface>(
    grid: &mut Grid<S::Handle>,
    surface: &mut S,
    pointer: Vec2,
    moved: bool,
    cfg: &MagnetConfig,
) -> StepOutcome {
    let cell_size = grid.cell_size;
    let mut out = StepOutcome {
        moved,
        ..StepOutcome::default()
    };
    for marker in grid.markers.iter_mut() {
        let center = marker.center(cell_size);
        let Some(Advance { offset: next, in_range }) =
            advance_offset(marker.offset, center, pointer, moved, cell_size, cfg)
        else {
            out.skipped += 1;
            continue;
        };
        marker.offset = next;
        if !in_range && next != Vec2::ZERO {
            out.settling += 1;
        }
        if needs_write(next, marker.last_written, cfg.epsilon) {
            surface.set_translation(&marker.handle, next);
            marker.last_written = next;
            out.writes += 1;
            out.changed = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> MagnetConfig {
        MagnetConfig::default()
    }

    #[test]
    fn target_at_center_points_along_x() {
        let (t, d) = target_offset(Vec2::new(25.0, 25.0), Vec2::new(25.0, 25.0), 50.0, &cfg());
        assert_eq!(d, 0.0);
        assert!((t.x - 20.0).abs() < 1e-5);
        assert!(t.y.abs() < 1e-5);
    }

    #[test]
    fn target_fades_to_zero_at_pull_distance() {
        let c = Vec2::ZERO;
        let (near, _) = target_offset(c, Vec2::new(0.0, 599.0), 50.0, &cfg());
        assert!(near.y > 0.0 && near.y < 0.05);
        let (edge, d) = target_offset(c, Vec2::new(0.0, 600.0), 50.0, &cfg());
        assert_eq!(d, 600.0);
        assert_eq!(edge, Vec2::ZERO);
    }

    #[test]
    fn first_step_at_center_moves_four_px() {
        let c = Vec2::new(25.0, 25.0);
        let adv = advance_offset(Vec2::ZERO, c, c, true, 50.0, &cfg()).unwrap();
        assert!(adv.in_range);
        let next = adv.offset;
        assert!((next.x - 4.0).abs() < 1e-5, "got {next:?}");
        assert_eq!(next.y, 0.0);
    }

    #[test]
    fn settle_skip_only_when_unmoved_and_at_rest() {
        let c = Vec2::new(25.0, 25.0);
        let far = Vec2::new(5000.0, 5000.0);
        assert_eq!(advance_offset(Vec2::new(0.005, -0.005), c, far, false, 50.0, &cfg()), None);
        assert!(advance_offset(Vec2::ZERO, c, far, true, 50.0, &cfg()).is_some());
        assert!(advance_offset(Vec2::new(0.5, 0.0), c, far, false, 50.0, &cfg()).is_some());
    }

    #[test]
    fn out_of_range_decays_and_snaps() {
        let c = Vec2::ZERO;
        let far = Vec2::new(1000.0, 0.0);
        let adv = advance_offset(Vec2::new(10.0, -10.0), c, far, false, 50.0, &cfg()).unwrap();
        assert!(!adv.in_range);
        let next = adv.offset;
        // 10 * 0.8 * 0.9
        assert!((next.x - 7.2).abs() < 1e-5);
        assert!((next.y + 7.2).abs() < 1e-5);

        let tiny = advance_offset(Vec2::new(0.012, 0.5), c, far, false, 50.0, &cfg())
            .unwrap()
            .offset;
        assert_eq!(tiny.x, 0.0);
        assert!((tiny.y - 0.36).abs() < 1e-5);
    }

    #[test]
    fn out_of_range_residue_settles_then_commits_zero() {
        use crate::grid::build_grid;
        use crate::surface::MemorySurface;

        let mut surface = MemorySurface::new();
        let mut grid = build_grid(&mut surface, 0.0, 0.0, 50.0, "+", 0).unwrap();
        let m = &mut grid.markers[0];
        m.offset = Vec2::new(0.02, 0.0);
        m.last_written = m.offset;
        let far = Vec2::new(5000.0, 5000.0);

        // 0.02 -> 0.0144 -> 0.0104: under the write threshold but still decaying
        for _ in 0..2 {
            let out = step_grid(&mut grid, &mut surface, far, false, &cfg());
            assert_eq!(out.writes, 0);
            assert_eq!(out.settling, 1);
            assert!(out.keep_running());
        }
        // 0.0104 * 0.72 snaps to zero, which is always committed
        let out = step_grid(&mut grid, &mut surface, far, false, &cfg());
        assert_eq!((out.writes, out.settling), (1, 0));
        assert!(!out.keep_running());
        assert_eq!(grid.markers[0].offset, Vec2::ZERO);
        assert_eq!(grid.markers[0].last_written, Vec2::ZERO);
        assert_eq!(surface.writes(), 1);

        let out = step_grid(&mut grid, &mut surface, far, false, &cfg());
        assert_eq!((out.writes, out.skipped), (0, 1));
    }

    #[test]
    fn write_threshold_is_strict() {
        assert!(!needs_write(Vec2::new(1.005, 0.0), Vec2::new(1.0, 0.0), 0.01));
        assert!(needs_write(Vec2::new(1.02, 0.0), Vec2::new(1.0, 0.0), 0.01));
        assert!(needs_write(Vec2::new(0.0, -0.5), Vec2::ZERO, 0.01));
        // snapping home is committed even below the threshold
        assert!(needs_write(Vec2::ZERO, Vec2::new(0.004, 0.0), 0.01));
        assert!(!needs_write(Vec2::ZERO, Vec2::ZERO, 0.01));
    }

    #[test]
    fn keep_running_needs_change_or_motion() {
        assert!(!StepOutcome::default().keep_running());
        let moved = StepOutcome {
            moved: true,
            ..StepOutcome::default()
        };
        assert!(moved.keep_running());
        let changed = StepOutcome {
            changed: true,
            writes: 3,
            ..StepOutcome::default()
        };
        assert!(changed.keep_running());
        let settling = StepOutcome {
            settling: 1,
            ..StepOutcome::default()
        };
        assert!(settling.keep_running());
    }
}
