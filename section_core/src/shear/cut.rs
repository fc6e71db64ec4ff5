//! # Horizontal Shear Cut
//!
//! Splits a polygonal section with the horizontal line `y = c` (relative to
//! the centroid) and returns the part lying away from the centroid: above the
//! line for `c ≥ 0`, below it for `c < 0`.
//!
//! ## Algorithm
//!
//! 1. The boundary rings (outer counter-clockwise, holes clockwise) are
//!    snapped to [`CutConfig::precision`] and split into segments.
//! 2. Segments straddling the cut keep their beyond endpoint; the other end
//!    moves to the crossing point. Segments with nothing strictly beyond the
//!    cut are dropped, horizontal ones lying on the cut are kept.
//! 3. The survivors are linked into chains (`p2 == next.p1`). Every open
//!    chain starts and ends on the cut line. Each chain end is closed onto
//!    the nearest free chain start further along the cut (rightwards above
//!    the centroid, leftwards below), so the closing edges span material
//!    and never a gap. Separate rings are spliced together with
//!    there-and-back bridges that cancel in every integral.
//! 4. The width is read from the fragment's edges lying on the cut line.
//!    When it is ambiguous (the cut runs exactly along a step in the
//!    outline) the cut is repeated once, [`CutConfig::retry_offset`] further
//!    from the centroid, and the width is taken from there.
//!
//! ## Width rules
//!
//! | Edges on the cut line                 | Width                        |
//! |---------------------------------------|------------------------------|
//! | one                                   | its length                   |
//! | several, some overlapping             | net length (see below)       |
//! | several, disjoint                     | sum of lengths               |
//! | several, touching end to end, or none | retry once, then error       |
//!
//! Edges overlap where the outline doubles back along the cut, such as the
//! floor of a channel cut exactly at its inner face. The net length counts
//! edges running in the fragment's own direction positive and the doubled
//! back ones negative, which leaves the material just beyond the cut. With
//! a single closing edge this is the longest edge minus the others.
//!
//! ## Example
//!
//! ```rust
//! use section_core::section::shapes::rectangle;
//! use section_core::shear::{CutConfig, ShearCut};
//!
//! let rect = rectangle(100.0, 200.0).unwrap();
//! let cut = rect.cut_at_height(0.0, &CutConfig::default()).unwrap();
//! assert_eq!(cut.width, 100.0);
//! assert!((cut.first_moment() - 500_000.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

use crate::errors::{SectionError, SectionResult};
use crate::geometry::{LineSegment, Point, Precision};
use crate::section::{HollowPolygon, Polygon, SectionProperties};

/// Rounding and retry settings of the shear cut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutConfig {
    /// Every coordinate touched by the cut is snapped to this precision
    pub precision: Precision,
    /// Distance of the one-shot retry when the width is ambiguous
    pub retry_offset: f64,
}

impl Default for CutConfig {
    fn default() -> Self {
        CutConfig {
            precision: Precision::new(9),
            retry_offset: 1e-6,
        }
    }
}

/// Rounding finer than this leaves no fractional digits to spare in an f64.
const MAX_DECIMALS: i32 = 15;

impl CutConfig {
    /// # Errors
    /// `InvalidInput` when `precision.decimals` is outside `0..=15`, or
    /// `retry_offset` is not a finite distance of at least one rounding step.
    pub fn validate(&self) -> SectionResult<()> {
        let decimals = self.precision.decimals;
        if !(0..=MAX_DECIMALS).contains(&decimals) {
            return Err(SectionError::invalid_input(
                "precision.decimals",
                decimals.to_string(),
                format!("Cut precision must be between 0 and {MAX_DECIMALS} decimals"),
            ));
        }
        let step = self.precision.tolerance();
        if !(self.retry_offset.is_finite() && self.retry_offset >= step) {
            return Err(SectionError::invalid_input(
                "retry_offset",
                self.retry_offset.to_string(),
                format!("Retry offset must be finite and at least the rounding step {step:e}"),
            ));
        }
        Ok(())
    }
}

/// How the cut width was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutWidthKind {
    /// A single edge on the cut line
    Single,
    /// Several separate edges, summed
    Disjoint,
    /// Overlapping edges; their net length along the cut
    Overlapping,
}

/// Fragment beyond a horizontal cut and the material width at the cut.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShearCutResult {
    /// Requested cut height, relative to the section centroid
    pub height: f64,
    /// Part of the section beyond the cut, in the centroid-relative frame
    pub fragment: Polygon,
    pub width: f64,
    pub width_kind: CutWidthKind,
    /// Height the width was measured at (differs from `height` after a retry)
    pub width_height: f64,
}

impl ShearCutResult {
    pub fn area(&self) -> f64 {
        self.fragment.area()
    }

    /// Distance from the section centroid to the fragment centroid
    pub fn centroid_distance(&self) -> f64 {
        self.fragment.centroid().y.abs()
    }

    /// `Q = A_cut · |y_c,cut|`
    pub fn first_moment(&self) -> f64 {
        self.area() * self.centroid_distance()
    }
}

/// Sections that can be cut horizontally.
pub trait ShearCut: SectionProperties {
    /// Boundary rings relative to the centroid: the outer ring
    /// counter-clockwise first, then any holes clockwise.
    fn boundary_rings(&self) -> Vec<Vec<Point>>;

    /// Cut at height `y` above the centroid (below it for negative `y`).
    ///
    /// # Errors
    /// - `InvalidInput` for a non-finite height or an invalid `config`
    /// - `Geometry` when `y` is not strictly between the extreme fibres, or
    ///   when the width cannot be determined even after the retry
    fn cut_at_height(&self, y: f64, config: &CutConfig) -> SectionResult<ShearCutResult> {
        cut_section(self, y, config)
    }
}

impl ShearCut for Polygon {
    fn boundary_rings(&self) -> Vec<Vec<Point>> {
        vec![self.vertices()]
    }
}

impl ShearCut for HollowPolygon {
    fn boundary_rings(&self) -> Vec<Vec<Point>> {
        let centre = self.centroid();
        let precision = self.inner().precision();
        let hole = self
            .inner()
            .points()
            .iter()
            .rev()
            .map(|p| precision.snap_point(*p - centre))
            .collect();
        vec![self.outer().vertices(), hole]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Side {
    Above,
    Below,
}

impl Side {
    fn of(height: f64) -> Self {
        if height >= 0.0 {
            Side::Above
        } else {
            Side::Below
        }
    }

    /// `y` is on this side of the cut or on the cut itself
    fn reaches(self, y: f64, cut: f64) -> bool {
        match self {
            Side::Above => y >= cut,
            Side::Below => y <= cut,
        }
    }

    /// `y` is strictly on this side of the cut
    fn beyond(self, y: f64, cut: f64) -> bool {
        match self {
            Side::Above => y > cut,
            Side::Below => y < cut,
        }
    }

    /// Position along the cut line in the direction the fragment's own
    /// edges on the cut run: left to right above, right to left below.
    fn along(self, x: f64) -> f64 {
        match self {
            Side::Above => x,
            Side::Below => -x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum WidthReading {
    Resolved(f64, CutWidthKind),
    /// Edges on the cut line join into one continuous run
    Ambiguous,
    /// No edge on the cut line
    Missing,
}

fn cut_section<S: ShearCut + ?Sized>(
    shape: &S,
    y: f64,
    config: &CutConfig,
) -> SectionResult<ShearCutResult> {
    config.validate()?;
    if !y.is_finite() {
        return Err(SectionError::invalid_input(
            "height",
            y.to_string(),
            "Cut height must be finite",
        ));
    }
    let extent = shape.extent();
    let height = config.precision.snap(y);
    if !extent.spans_height(height) {
        return Err(SectionError::geometry(
            "cut_at_height",
            format!(
                "height {y} is not strictly between the extreme fibres ({} to {})",
                extent.y_min, extent.y_max
            ),
        ));
    }

    let segments = ring_segments(&shape.boundary_rings(), config.precision);
    let fragment = cut_fragment(&segments, height, config.precision)?;

    let reading = measure_width(&fragment, height, config.precision);
    let (width, width_kind, width_height) = match reading {
        WidthReading::Resolved(width, kind) => (width, kind, height),
        reading => {
            let retry = match Side::of(height) {
                Side::Above => config.precision.snap(height + config.retry_offset),
                Side::Below => config.precision.snap(height - config.retry_offset),
            };
            debug!(height, retry, ?reading, "cut width not resolved, retrying");
            if !extent.spans_height(retry) {
                return Err(indeterminate_width(height));
            }
            let retry_fragment = cut_fragment(&segments, retry, config.precision)?;
            match measure_width(&retry_fragment, retry, config.precision) {
                WidthReading::Resolved(width, kind) => (width, kind, retry),
                _ => return Err(indeterminate_width(height)),
            }
        }
    };

    Ok(ShearCutResult {
        height: y,
        fragment,
        width,
        width_kind,
        width_height,
    })
}

fn indeterminate_width(height: f64) -> SectionError {
    SectionError::geometry(
        "cut_at_height",
        format!("cut width cannot be determined at height {height}"),
    )
}

/// Snapped, non-degenerate segments of every ring, in ring order.
fn ring_segments(rings: &[Vec<Point>], precision: Precision) -> Vec<LineSegment> {
    let mut segments = Vec::new();
    for ring in rings {
        let points: Vec<Point> = ring.iter().map(|p| precision.snap_point(*p)).collect();
        let n = points.len();
        segments.extend(
            (0..n)
                .map(|i| LineSegment::new(points[i], points[(i + 1) % n]))
                .filter(|s| !s.is_degenerate()),
        );
    }
    segments
}

/// The part of `segment` on `side` of the cut, if any.
fn clip(segment: &LineSegment, cut: f64, side: Side, precision: Precision) -> Option<LineSegment> {
    if segment.is_horizontal() {
        return side.reaches(segment.p1.y, cut).then_some(*segment);
    }
    let reaches_beyond = match side {
        Side::Above => side.beyond(segment.max_y(), cut),
        Side::Below => side.beyond(segment.min_y(), cut),
    };
    if !reaches_beyond {
        return None;
    }
    if !(segment.min_y() < cut && segment.max_y() > cut) {
        return Some(*segment);
    }
    let crossing = precision.snap_point(Point::new(segment.x_at(cut)?, cut));
    if side.beyond(segment.p1.y, cut) {
        Some(LineSegment::new(segment.p1, crossing))
    } else {
        Some(LineSegment::new(crossing, segment.p2))
    }
}

/// Linked run of segments, `p2` of each meeting `p1` of the next.
#[derive(Debug)]
struct Chain(VecDeque<LineSegment>);

impl Chain {
    fn is_closed(&self) -> bool {
        self.ends().is_some_and(|(start, end)| start == end)
    }

    /// First and last point of the run.
    fn ends(&self) -> Option<(Point, Point)> {
        Some((self.0.front()?.p1, self.0.back()?.p2))
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.0
            .front()
            .map(|s| s.p1)
            .into_iter()
            .chain(self.0.iter().map(|s| s.p2))
    }
}

fn assemble(mut pool: Vec<LineSegment>) -> Vec<Chain> {
    let mut chains = Vec::new();
    while !pool.is_empty() {
        let mut chain = VecDeque::from([pool.remove(0)]);
        loop {
            let tail = chain.back().map(|s| s.p2);
            if let Some(i) = pool.iter().position(|s| Some(s.p1) == tail) {
                chain.push_back(pool.remove(i));
                continue;
            }
            let head = chain.front().map(|s| s.p1);
            if let Some(i) = pool.iter().position(|s| Some(s.p2) == head) {
                chain.push_front(pool.remove(i));
                continue;
            }
            break;
        }
        chains.push(Chain(chain));
    }
    chains
}

/// Close the open chains into rings along the cut line.
///
/// Every open chain starts and ends on the cut. Walking the fragment
/// counter-clockwise, its edges on the cut run left to right above the
/// centroid and right to left below it, so each chain end links to the
/// nearest free chain start lying further along in that direction. The
/// closing edges then span material only.
fn close_along_cut(open: &[&Chain], side: Side) -> Vec<Vec<Point>> {
    let ends: Vec<(Point, Point)> = open.iter().filter_map(|c| c.ends()).collect();
    let n = ends.len();
    let start_at = |i: usize| side.along(ends[i].0.x);
    let end_at = |i: usize| side.along(ends[i].1.x);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| end_at(a).total_cmp(&end_at(b)));

    let mut free: Vec<usize> = (0..n).collect();
    let mut next: Vec<Option<usize>> = vec![None; n];
    for i in order {
        let ahead = (0..free.len())
            .filter(|&k| start_at(free[k]) >= end_at(i))
            .min_by(|&a, &b| start_at(free[a]).total_cmp(&start_at(free[b])));
        // an end with no start ahead of it only occurs on degenerate input
        let pick = ahead.or_else(|| {
            let gap = |k: usize| (start_at(free[k]) - end_at(i)).abs();
            (0..free.len()).min_by(|&a, &b| gap(a).total_cmp(&gap(b)))
        });
        if let Some(k) = pick {
            next[i] = Some(free.swap_remove(k));
        }
    }

    let mut visited = vec![false; n];
    let mut rings = Vec::new();
    for first in 0..n {
        let mut ring = Vec::new();
        let mut i = Some(first);
        while let Some(current) = i.filter(|&c| !visited[c]) {
            visited[current] = true;
            ring.extend(open[current].points());
            i = next[current];
        }
        if !ring.is_empty() {
            rings.push(ring);
        }
    }
    rings
}

fn cut_fragment(
    segments: &[LineSegment],
    cut: f64,
    precision: Precision,
) -> SectionResult<Polygon> {
    let side = Side::of(cut);
    let kept: Vec<LineSegment> = segments
        .iter()
        .filter_map(|s| clip(s, cut, side, precision))
        .filter(|s| !s.is_degenerate())
        .collect();
    let chains = assemble(kept);
    let (open, closed): (Vec<&Chain>, Vec<&Chain>) = chains.iter().partition(|c| !c.is_closed());
    trace!(cut, open = open.len(), closed = closed.len(), "assembled cut chains");

    // Closed loops are holes wholly beyond the cut.
    let mut rings = close_along_cut(&open, side);
    rings.extend(closed.iter().map(|c| c.points().collect::<Vec<_>>()));

    // Rings after the first are spliced in with a there-and-back bridge.
    let mut rings = rings.into_iter();
    let mut vertices: Vec<Point> = rings.next().unwrap_or_default();
    for ring in rings {
        let anchor = vertices.last().copied();
        vertices.extend(ring.iter().copied());
        vertices.extend(ring.first().copied());
        vertices.extend(anchor);
    }
    vertices.dedup();

    debug!(cut, vertices = vertices.len(), "cut fragment assembled");
    Polygon::fragment(&vertices, precision).map_err(|err| {
        SectionError::geometry(
            "cut_at_height",
            format!("cut at {cut} does not leave a valid fragment: {err}"),
        )
    })
}

/// Width of material crossed by the cut, read from the fragment's edges on
/// the cut line.
fn measure_width(fragment: &Polygon, cut: f64, precision: Precision) -> WidthReading {
    let side = Side::of(cut);
    let mut edges: Vec<LineSegment> = fragment
        .edges()
        .filter(|e| e.p1.y == cut && e.p2.y == cut)
        .collect();

    // bridges to spliced rings run both ways and carry no material
    let mut i = 0;
    while i < edges.len() {
        let reversed = edges[i].reversed();
        if let Some(j) = edges[i + 1..].iter().position(|e| *e == reversed) {
            edges.remove(i + 1 + j);
            edges.remove(i);
        } else {
            i += 1;
        }
    }

    let mut spans: Vec<(f64, f64)> = edges.iter().map(|e| (e.min_x(), e.max_x())).collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));
    // edges facing the fragment's material count positive, edges the
    // outline doubles back along count negative
    let net: f64 = edges.iter().map(|e| side.along(e.p2.x - e.p1.x)).sum();
    let tol = precision.tolerance();

    let kind = match spans.as_slice() {
        [] => return WidthReading::Missing,
        [_] => CutWidthKind::Single,
        [first, rest @ ..] => {
            let mut reach = first.1;
            let (mut overlapping, mut touching) = (false, false);
            for &(lo, hi) in rest {
                if lo < reach - tol {
                    overlapping = true;
                } else if lo <= reach + tol {
                    touching = true;
                }
                reach = reach.max(hi);
            }
            if overlapping {
                CutWidthKind::Overlapping
            } else if touching {
                return WidthReading::Ambiguous;
            } else {
                CutWidthKind::Disjoint
            }
        }
    };
    if net > tol {
        WidthReading::Resolved(net, kind)
    } else {
        WidthReading::Ambiguous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::shapes::{
        c_shape, h_shape, hollow_rectangle, pi_shape, rectangle, z_shape,
    };
    use crate::shear::TransverseShear;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPSILON * b.abs().max(1.0)
    }

    fn cut<S: ShearCut>(shape: &S, y: f64) -> ShearCutResult {
        shape.cut_at_height(y, &CutConfig::default()).unwrap()
    }

    /// Net material width along `y = c` from the sorted boundary crossings.
    fn crossing_width<S: ShearCut>(shape: &S, c: f64) -> f64 {
        let mut xs = Vec::new();
        for ring in shape.boundary_rings() {
            let n = ring.len();
            for i in 0..n {
                let (a, b) = (ring[i], ring[(i + 1) % n]);
                if (a.y > c) != (b.y > c) {
                    xs.push(a.x + (c - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
        }
        xs.sort_by(f64::total_cmp);
        xs.chunks(2).map(|pair| pair[1] - pair[0]).sum()
    }

    /// Heights spread over the depth, clear of every vertex level.
    fn sample_heights<S: ShearCut>(shape: &S, count: usize) -> Vec<f64> {
        let e = shape.extent();
        let levels: Vec<f64> = shape.boundary_rings().concat().iter().map(|p| p.y).collect();
        (0..count)
            .map(|k| e.y_min + e.depth() * (k as f64 + 0.5) / count as f64)
            .filter(|y| levels.iter().all(|level| (level - y).abs() > 1e-3))
            .collect()
    }

    /// Three 10 x 20 teeth standing on a 100 x 60 base.
    fn comb() -> Polygon {
        Polygon::new(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 80.0),
            (90.0, 80.0),
            (90.0, 60.0),
            (55.0, 60.0),
            (55.0, 80.0),
            (45.0, 80.0),
            (45.0, 60.0),
            (10.0, 60.0),
            (10.0, 80.0),
            (0.0, 80.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_rectangle_cut_at_centroid() {
        let rect = rectangle(100.0, 200.0).unwrap();
        let up = cut(&rect, 0.0);
        assert_eq!(up.width, 100.0);
        assert_eq!(up.width_kind, CutWidthKind::Single);
        assert_eq!(up.width_height, 0.0);
        assert!(approx_eq(up.area(), 10_000.0));
        assert!(approx_eq(up.centroid_distance(), 50.0));
        assert!(approx_eq(up.first_moment(), 500_000.0));
    }

    #[test]
    fn test_rectangle_cut_below_centroid() {
        let rect = rectangle(100.0, 200.0).unwrap();
        let down = cut(&rect, -60.0);
        assert_eq!(down.width, 100.0);
        assert!(approx_eq(down.area(), 4_000.0));
        assert!(down.fragment.centroid().y < 0.0);
        // Q = b/2 (h²/4 − y²)
        assert!(approx_eq(down.first_moment(), 50.0 * (10_000.0 - 3_600.0)));
    }

    #[test]
    fn test_cut_outside_section_is_rejected() {
        let rect = rectangle(100.0, 200.0).unwrap();
        let config = CutConfig::default();
        assert!(rect.cut_at_height(100.0, &config).unwrap_err().is_geometry());
        assert!(rect.cut_at_height(-150.0, &config).unwrap_err().is_geometry());
        assert_eq!(
            rect.cut_at_height(f64::NAN, &config).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_flange_web_junction_retries() {
        let beam = h_shape(240.0, 300.0, 15.0, 20.0).unwrap();
        let at_step = cut(&beam, 100.0);
        let just_above = cut(&beam, 100.001);
        assert_eq!(at_step.width, 300.0);
        assert_eq!(just_above.width, 300.0);
        assert!(at_step.width_height > 100.0);
        // Q still comes from the requested height
        assert!(approx_eq(at_step.first_moment(), 300.0 * 20.0 * 110.0));

        let below_step = cut(&beam, -100.0);
        assert_eq!(below_step.width, 300.0);
        assert!(below_step.width_height < -100.0);
    }

    #[test]
    fn test_h_web() {
        let beam = h_shape(240.0, 300.0, 15.0, 20.0).unwrap();
        let web = cut(&beam, 50.0);
        assert_eq!(web.width, 15.0);
        assert_eq!(web.width_kind, CutWidthKind::Single);
        let q = 300.0 * 20.0 * 110.0 + 15.0 * 50.0 * 75.0;
        assert!(approx_eq(web.first_moment(), q));
    }

    #[test]
    fn test_hollow_rectangle_walls() {
        let tube = hollow_rectangle(100.0, 200.0, 10.0).unwrap();
        let centre = cut(&tube, 0.0);
        assert_eq!(centre.width, 20.0);
        assert_eq!(centre.width_kind, CutWidthKind::Disjoint);
        let q = 100.0 * 10.0 * 95.0 + 2.0 * 10.0 * 90.0 * 45.0;
        assert!(approx_eq(centre.first_moment(), q));

        let low = cut(&tube, -50.0);
        assert_eq!(low.width, 20.0);
        assert!(approx_eq(low.area(), 100.0 * 10.0 + 2.0 * 10.0 * 40.0));
    }

    #[test]
    fn test_hollow_cut_through_bottom_wall() {
        let tube = hollow_rectangle(100.0, 200.0, 10.0).unwrap();
        let result = cut(&tube, -95.0);
        assert_eq!(result.width, 100.0);
        assert_eq!(result.width_kind, CutWidthKind::Single);
        assert!(approx_eq(result.area(), 500.0));
        assert!(approx_eq(result.first_moment(), 500.0 * 97.5));
    }

    /// 100 x 200 block with a 40 x 40 hole sitting wholly above the centroid
    struct OffsetHole {
        block: Polygon,
    }

    impl SectionProperties for OffsetHole {
        fn area(&self) -> f64 {
            self.block.area() - 1_600.0
        }

        fn centroid(&self) -> Point {
            Point::ORIGIN
        }

        fn second_moments(&self) -> crate::section::SecondMoments {
            self.block.second_moments()
        }

        fn extent(&self) -> crate::section::Extent {
            self.block.extent()
        }
    }

    impl ShearCut for OffsetHole {
        fn boundary_rings(&self) -> Vec<Vec<Point>> {
            let hole = [(-20.0, 60.0), (20.0, 60.0), (20.0, 20.0), (-20.0, 20.0)];
            vec![
                self.block.vertices(),
                hole.iter().map(|&p| Point::from(p)).collect(),
            ]
        }
    }

    #[test]
    fn test_hole_beyond_cut_is_spliced_in() {
        let shape = OffsetHole {
            block: rectangle(100.0, 200.0).unwrap(),
        };
        let result = cut(&shape, 0.0);
        assert_eq!(result.width, 100.0);
        assert_eq!(result.width_kind, CutWidthKind::Single);
        assert!(approx_eq(result.area(), 10_000.0 - 1_600.0));
        assert!(approx_eq(result.first_moment(), 500_000.0 - 1_600.0 * 40.0));
    }

    #[test]
    fn test_channel_opening_upward() {
        let u = c_shape(200.0, 100.0, 10.0, 10.0, FRAC_PI_2).unwrap();
        let y_top = u.extent().y_max;
        let legs = cut(&u, 30.0);
        assert!(approx_eq(legs.width, 20.0));
        assert_eq!(legs.width_kind, CutWidthKind::Disjoint);
        let q = 2.0 * 10.0 * (y_top.powi(2) - 30.0f64.powi(2)) / 2.0;
        assert!(approx_eq(legs.first_moment(), q));
    }

    #[test]
    fn test_pi_shape_legs() {
        let pi = pi_shape(250.0, 145.0, 310.0, 10.0, 10.0).unwrap();
        let e = pi.extent();

        let down = cut(&pi, -100.0);
        assert!(approx_eq(down.width, 20.0));
        assert_eq!(down.width_kind, CutWidthKind::Disjoint);
        let q = 20.0 * (e.y_min.powi(2) - 100.0f64.powi(2)) / 2.0;
        assert!(approx_eq(down.first_moment(), q));

        let up = cut(&pi, 50.0);
        assert!(approx_eq(up.width, 20.0));
        assert_eq!(up.width_kind, CutWidthKind::Disjoint);
    }

    #[test]
    fn test_z_web() {
        let z = z_shape(100.0, 100.0, 10.0, 10.0, 0.0).unwrap();
        let result = cut(&z, 0.0);
        assert_eq!(result.width, 100.0);
        assert_eq!(result.width_kind, CutWidthKind::Single);
    }

    #[test]
    fn test_rotated_z_crosses_three_pieces() {
        // at 45 degrees every level between the web corners crosses both
        // flanges and the web: (10 + 8 + 10) / cos 45
        let z = z_shape(100.0, 80.0, 8.0, 10.0, FRAC_PI_4).unwrap();
        for y in [0.0137, 22.924, 24.197, -24.197, -25.442] {
            let result = cut(&z, y);
            assert!(approx_eq(result.width, crossing_width(&z, y)), "y = {y}");
            assert_eq!(result.width_kind, CutWidthKind::Disjoint, "y = {y}");
        }
        assert!(approx_eq(cut(&z, 0.0137).width, 28.0 * 2f64.sqrt()));
        assert!(approx_eq(cut(&z, 22.924).width, 30.519_532_368));
    }

    #[test]
    fn test_rotated_z_width_and_stress_through_depth() {
        for z in [
            z_shape(100.0, 80.0, 8.0, 10.0, FRAC_PI_4).unwrap(),
            z_shape(100.0, 100.0, 10.0, 10.0, FRAC_PI_6).unwrap(),
        ] {
            let i = z.i_xx();
            let shear = TransverseShear::new(1_000.0, z.clone()).unwrap();
            for y in sample_heights(&z, 60) {
                let result = cut(&z, y);
                let t = crossing_width(&z, y);
                assert!(approx_eq(result.width, t), "y = {y}: {} vs {t}", result.width);
                let tau = 1_000.0 * result.first_moment() / (i * t);
                assert!(approx_eq(shear.tau(y).unwrap(), tau), "y = {y}");
            }
        }
        let z30 = z_shape(100.0, 100.0, 10.0, 10.0, FRAC_PI_6).unwrap();
        for y in [-14.5, 0.0, 5.0, 14.5] {
            assert!(approx_eq(cut(&z30, y).width, 43.094_010_768), "y = {y}");
        }
    }

    #[test]
    fn test_comb_teeth() {
        let comb = comb();
        let y_c = comb.centroid().y;

        // through the teeth: three separate pieces
        let teeth = cut(&comb, 70.0 - y_c);
        assert!(approx_eq(teeth.width, 30.0));
        assert_eq!(teeth.width_kind, CutWidthKind::Disjoint);
        assert!(approx_eq(teeth.area(), 300.0));
        assert!(approx_eq(teeth.first_moment(), 300.0 * (75.0 - y_c)));

        // along the top of the base the gaps between the teeth cancel
        let roots = cut(&comb, 60.0 - y_c);
        assert!(approx_eq(roots.width, 30.0));
        assert_eq!(roots.width_kind, CutWidthKind::Overlapping);
        assert!(approx_eq(roots.area(), 600.0));

        // just below it the base is solid
        let base = cut(&comb, 59.0 - y_c);
        assert!(approx_eq(base.width, 100.0));
        assert_eq!(base.width_kind, CutWidthKind::Single);
    }

    #[test]
    fn test_chains_close_onto_the_next_start_along_the_cut() {
        let p = |x: f64, y: f64| Point::new(x, y);
        let tooth = |x0: f64, x1: f64| {
            Chain(VecDeque::from([
                LineSegment::new(p(x1, 0.0), p(x1, 1.0)),
                LineSegment::new(p(x1, 1.0), p(x0, 1.0)),
                LineSegment::new(p(x0, 1.0), p(x0, 0.0)),
            ]))
        };
        // listed out of order along the cut
        let chains = [tooth(9.0, 10.0), tooth(0.0, 1.0), tooth(4.0, 5.0)];
        let open: Vec<&Chain> = chains.iter().collect();

        let rings = close_along_cut(&open, Side::Above);
        assert_eq!(rings.len(), 3);
        for ring in &rings {
            let (first, last) = (ring[0], ring[ring.len() - 1]);
            assert_eq!(last.x + 1.0, first.x);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let rect = rectangle(100.0, 200.0).unwrap();
        let config = CutConfig {
            retry_offset: 0.0,
            ..CutConfig::default()
        };
        let err = rect.cut_at_height(0.0, &config).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(CutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_h_first_moment_through_depth() {
        let beam = h_shape(240.0, 300.0, 15.0, 20.0).unwrap();
        let expected = |y: f64| {
            let y = y.abs();
            if y >= 100.0 {
                300.0 * (120.0 * 120.0 - y * y) / 2.0
            } else {
                300.0 * 20.0 * 110.0 + 15.0 * (100.0 * 100.0 - y * y) / 2.0
            }
        };
        for y in [-110.0, -30.0, 0.0, 45.0, 115.0] {
            let result = cut(&beam, y);
            assert!(approx_eq(result.first_moment(), expected(y)), "y = {y}");
            let width = if y.abs() > 100.0 { 300.0 } else { 15.0 };
            assert!(approx_eq(result.width, width), "y = {y}");
        }
    }

    #[test]
    fn test_chain_assembly_links_both_ways() {
        let p = |x: f64, y: f64| Point::new(x, y);
        let segments = vec![
            LineSegment::new(p(1.0, 1.0), p(0.0, 1.0)),
            LineSegment::new(p(1.0, 0.0), p(1.0, 1.0)),
            LineSegment::new(p(5.0, 0.0), p(5.0, 1.0)),
            LineSegment::new(p(0.0, 1.0), p(0.0, 0.0)),
        ];
        let chains = assemble(segments);
        assert_eq!(chains.len(), 2);
        let first: Vec<Point> = chains[0].points().collect();
        assert_eq!(first, vec![p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)]);
        assert!(!chains[0].is_closed());
    }

    #[test]
    fn test_config_serialization() {
        let json = serde_json::to_string(&CutConfig::default()).unwrap();
        let back: CutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CutConfig::default());
        assert!(json.contains("\"decimals\":9"));
    }
}
