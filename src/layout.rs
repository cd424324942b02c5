//! Lath pattern layout.
//!
//! Laths of fixed width are laid head to foot along the silhouette with a
//! fixed gap between them. A lath that does not fit at the end of one link
//! spills into the next: the next link starts `-leftover` into its length,
//! which overlaps a partial lath back across the joint.

use crate::defaults;
use crate::errors::{GeometryError, Result};
use crate::geometry::arc_chord_length;
use crate::log::{debug, warn};
use crate::silhouette::{ArcLink, PathLink, Silhouette};
use crate::types::{Length, Segment, Vector};

/// Lath stock: width of each lath and the gap between neighbours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LathPattern {
    width: f64,
    gap: f64,
}

impl Default for LathPattern {
    fn default() -> Self {
        LathPattern {
            width: defaults::LATH_WIDTH,
            gap: defaults::LATH_GAP,
        }
    }
}

impl LathPattern {
    /// Both `width` and `gap` must be positive
    pub fn new(width: f64, gap: f64) -> Result<Self> {
        let width = Length::try_positive(width).map_err(|e| GeometryError::numeric("lath_width", e))?;
        let gap = Length::try_positive(gap).map_err(|e| GeometryError::numeric("lath_gap", e))?;
        Ok(LathPattern {
            width: width.raw(),
            gap: gap.raw(),
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Distance from one lath to the next
    pub fn pitch(&self) -> f64 {
        self.width + self.gap
    }

    /// Lay laths along a straight link, measured from `p2` back toward `p1`.
    pub fn lay_out_straight(&self, segment: &Segment, offset: f64) -> LinkLayout {
        let length = segment.length();
        let count = whole_count((length - offset + self.gap) / self.pitch());
        let leftover = length - count as f64 * self.pitch() - offset;

        let direction = Vector::from_polar(1.0, segment.reversed().angle());
        let laths = (0..count)
            .map(|k| {
                let start = offset + k as f64 * self.pitch();
                let end = start + self.width;
                Segment::new(segment.p2 + direction * start, segment.p2 + direction * end)
            })
            .collect();

        LinkLayout {
            count,
            leftover,
            laths,
            degenerate: false,
        }
    }

    /// Lay laths along an arc, from its start angle in its orientation.
    ///
    /// Widths become angles through `asin(width / radius)`. When a width or
    /// the offset exceeds the radius no lath fits and the whole chord is
    /// carried over.
    pub fn lay_out_arc(&self, arc: &ArcLink, offset: f64) -> LinkLayout {
        let radius = arc.circle.radius;
        let sweep = arc.sweep();
        let direction = arc.orientation.direction();

        let (Some(offset_angle), Some(lath_angle), Some(gap_angle)) = (
            chord_angle(offset, radius),
            chord_angle(self.width, radius),
            chord_angle(self.gap, radius),
        ) else {
            warn!(
                "lath pattern does not fit an arc of radius {}, carrying the chord over",
                radius
            );
            return LinkLayout {
                count: 0,
                leftover: arc_chord_length(radius, sweep.abs()) - offset,
                laths: Vec::new(),
                degenerate: true,
            };
        };
        let offset_angle = offset_angle * direction;
        let lath_angle = lath_angle * direction;
        let gap_angle = gap_angle * direction;
        let pitch_angle = lath_angle + gap_angle;

        let count = whole_count((sweep - offset_angle + gap_angle) / pitch_angle);
        let remaining = (sweep - count as f64 * pitch_angle - offset_angle) * direction;
        let leftover = arc_chord_length(radius, remaining);

        let laths = (0..count)
            .map(|k| {
                let start = arc.start_angle + offset_angle + k as f64 * pitch_angle;
                Segment::new(arc.circle.point_at(start), arc.circle.point_at(start + lath_angle))
            })
            .collect();

        LinkLayout {
            count,
            leftover,
            laths,
            degenerate: false,
        }
    }

    pub fn lay_out_link(&self, link: &PathLink, offset: f64) -> LinkLayout {
        match link {
            PathLink::Straight(segment) => self.lay_out_straight(segment, offset),
            PathLink::Arc(arc) => self.lay_out_arc(arc, offset),
        }
    }

    /// Lay laths along consecutive links, threading each leftover into the
    /// next link as a negative offset.
    pub fn lay_out_path(&self, links: &[PathLink]) -> LathLayout {
        let mut offset = 0.0;
        let mut layouts = Vec::with_capacity(links.len());
        for link in links {
            let layout = self.lay_out_link(link, offset);
            debug!("link laid out: {} laths, leftover {:.2}", layout.count, layout.leftover);
            offset = -layout.leftover;
            layouts.push(layout);
        }
        LathLayout {
            links: layouts,
            gap: self.gap,
        }
    }

    /// Lay laths from head to foot along a silhouette
    pub fn lay_out_silhouette(&self, silhouette: &Silhouette) -> LathLayout {
        self.lay_out_path(&silhouette.traversal())
    }
}

/// Angle subtending a chord of `length` on a circle of `radius`, if one exists
fn chord_angle(length: f64, radius: f64) -> Option<f64> {
    let ratio = length / radius;
    (ratio.is_finite() && (-1.0..=1.0).contains(&ratio)).then(|| ratio.asin())
}

/// Truncate a lath count; negative and non-finite counts are zero
fn whole_count(raw: f64) -> usize {
    if raw.is_finite() && raw > 0.0 { raw.trunc() as usize } else { 0 }
}

/// Laths placed on one link
#[derive(Debug, Clone, PartialEq)]
pub struct LinkLayout {
    pub count: usize,
    /// Unused length at the end of the link; negative when the offset
    /// already overran it
    pub leftover: f64,
    /// One segment per lath, from its leading edge to its trailing edge
    pub laths: Vec<Segment>,
    /// The arc was too tight for the pattern and received no laths
    pub degenerate: bool,
}

/// Laths placed along a whole path
#[derive(Debug, Clone, PartialEq)]
pub struct LathLayout {
    pub links: Vec<LinkLayout>,
    gap: f64,
}

impl LathLayout {
    pub fn total_count(&self) -> usize {
        self.links.iter().map(|l| l.count).sum()
    }

    pub fn final_leftover(&self) -> f64 {
        self.links.last().map_or(0.0, |l| l.leftover)
    }

    /// Stock left over at the foot, including the gap after the last lath
    pub fn unused_stock_length(&self) -> f64 {
        self.final_leftover() + self.gap
    }

    pub fn laths(&self) -> impl Iterator<Item = &Segment> {
        self.links.iter().flat_map(|l| l.laths.iter())
    }

    pub fn has_degenerate_link(&self) -> bool {
        self.links.iter().any(|l| l.degenerate)
    }
}
