//! Angle sweeps: drive a page back and forth and sample the invariant.
//!
//! This is the computational half of the book animation: the page swings
//! from its start angle to `start + span` and back in fixed steps, and each
//! frame can be measured. Drawing and pacing are left to the caller.

use crate::book::BookGeometry;
use crate::error::GeomError;
use crate::invariant::{complementary, inadvertent, relative_gap};
use crate::page::{Facing, Page};
use crate::tetra::VolumeCfg;
use crate::vector::Point3;

const DEFAULT_STEP_DEG: f64 = 1.0;
const DEFAULT_SPAN_DEG: f64 = 180.0;

/// Upper bound on the frames of one schedule or angle list.
pub const MAX_FRAMES: usize = 4_000_000;

/// Sweep schedule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepCfg {
    /// Angle increment per frame (degrees, > 0).
    pub step_deg: f64,
    /// Width of one leg (degrees).
    pub span_deg: f64,
    /// Number of out-and-back passes.
    pub passes: usize,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            step_deg: DEFAULT_STEP_DEG,
            span_deg: DEFAULT_SPAN_DEG,
            passes: 1,
        }
    }
}

impl SweepCfg {
    /// Frames per leg; 0 when the step is not a positive finite number.
    /// Saturates at `usize::MAX` for vanishing steps.
    pub fn leg_len(&self) -> usize {
        if !(self.step_deg > 0.0) || !self.step_deg.is_finite() || !(self.span_deg > 0.0) {
            return 0;
        }
        (self.span_deg / self.step_deg).round() as usize
    }

    /// Total frames `2 · passes · leg_len + 1`.
    ///
    /// Fails with `SweepTooLong` above `MAX_FRAMES` (including arithmetic overflow).
    pub fn frame_count(&self) -> Result<usize, GeomError> {
        self.passes
            .checked_mul(self.leg_len())
            .and_then(|n| n.checked_mul(2))
            .and_then(|n| n.checked_add(1))
            .filter(|&n| n <= MAX_FRAMES)
            .ok_or(GeomError::SweepTooLong { limit: MAX_FRAMES })
    }
}

/// Iterator over page snapshots of an oscillating sweep.
///
/// Yields the starting page, then one snapshot after every `delta_angle`,
/// reversing direction after each leg. A full schedule has
/// `2 · passes · leg_len + 1` frames and ends at the start angle.
#[derive(Clone, Debug)]
pub struct Oscillation {
    page: Page,
    step: f64,
    leg_len: usize,
    taken_in_leg: usize,
    frames_left: usize,
    started: bool,
}

impl Oscillation {
    /// Schedule starting at `page`. Fails when `cfg.frame_count()` does.
    pub fn new(page: Page, cfg: SweepCfg) -> Result<Self, GeomError> {
        let frames_left = cfg.frame_count()?;
        Ok(Self {
            page,
            step: cfg.step_deg,
            leg_len: cfg.leg_len(),
            taken_in_leg: 0,
            frames_left,
            started: false,
        })
    }
}

impl Iterator for Oscillation {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        if self.frames_left == 0 {
            return None;
        }
        if self.started {
            if self.taken_in_leg == self.leg_len {
                self.step = -self.step;
                self.taken_in_leg = 0;
            }
            self.page.delta_angle(self.step);
            self.taken_in_leg += 1;
        } else {
            self.started = true;
        }
        self.frames_left -= 1;
        Some(self.page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.frames_left, Some(self.frames_left))
    }
}

impl ExactSizeIterator for Oscillation {}

/// One measured frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub angle: f64,
    pub facing: Facing,
    pub tip: Point3,
    /// Volumes over `[C0, C1]`.
    pub complementary: [f64; 2],
    /// `None` when the inadvertent tetrahedron is unreachable at this angle.
    pub inadvertent: Option<f64>,
}

impl Sample {
    /// `|V0 − V1| / max(V0, V1)`, 0 for a closed book.
    pub fn relative_deviation(&self) -> f64 {
        relative_gap(self.complementary[0], self.complementary[1])
    }
}

/// Measure one frame. Unreachable inadvertent configurations become `None`;
/// every other error is returned.
pub fn sample(page: &Page, book: &BookGeometry, cfg: VolumeCfg) -> Result<Sample, GeomError> {
    let volumes = complementary(page, book).volumes(cfg)?;
    let inadvertent = match inadvertent(page, book) {
        Ok(t) => Some(t.volume(cfg)?),
        Err(GeomError::UnreachableConfiguration { .. }) => None,
        Err(e) => return Err(e),
    };
    Ok(Sample {
        angle: page.angle(),
        facing: page.facing(),
        tip: page.tip(),
        complementary: volumes,
        inadvertent,
    })
}

/// Measure every frame of an oscillating sweep starting at angle 0.
pub fn sweep(
    book: &BookGeometry,
    facing: Facing,
    schedule: SweepCfg,
    cfg: VolumeCfg,
) -> Result<Vec<Sample>, GeomError> {
    Oscillation::new(Page::on(book, 0.0, facing), schedule)?
        .map(|page| sample(&page, book, cfg))
        .collect()
}

/// Measure independent pages at the given angles (no shared state between samples).
pub fn sample_angles(
    book: &BookGeometry,
    facing: Facing,
    angles: &[f64],
    cfg: VolumeCfg,
) -> Result<Vec<Sample>, GeomError> {
    angles
        .iter()
        .map(|&angle| sample(&Page::on(book, angle, facing), book, cfg))
        .collect()
}

/// Angles `0, step, 2·step, …` below 360°. A step that is not positive and
/// finite yields only `0`; more than `MAX_FRAMES` angles is `SweepTooLong`.
pub fn full_turn_angles(step_deg: f64) -> Result<Vec<f64>, GeomError> {
    if !(step_deg > 0.0) || !step_deg.is_finite() {
        return Ok(vec![0.0]);
    }
    let n = (360.0 / step_deg).ceil();
    if !(n <= MAX_FRAMES as f64) {
        return Err(GeomError::SweepTooLong { limit: MAX_FRAMES });
    }
    Ok((0..n as usize)
        .map(|k| k as f64 * step_deg)
        .filter(|&deg| deg < 360.0)
        .collect())
}

/// Largest complementary deviation over `samples` (0 for an empty slice).
pub fn max_relative_deviation(samples: &[Sample]) -> f64 {
    samples
        .iter()
        .map(Sample::relative_deviation)
        .fold(0.0, f64::max)
}

/// Largest gap between the inadvertent and the first complementary volume,
/// over the samples where the inadvertent tetrahedron exists.
pub fn max_inadvertent_deviation(samples: &[Sample]) -> f64 {
    samples
        .iter()
        .filter_map(|s| s.inadvertent.map(|v| relative_gap(s.complementary[0], v)))
        .fold(0.0, f64::max)
}

/// Number of samples whose inadvertent tetrahedron was skipped.
pub fn skipped(samples: &[Sample]) -> usize {
    samples.iter().filter(|s| s.inadvertent.is_none()).count()
}
