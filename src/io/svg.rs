//! SVG serialization of an [`AntennaGeometry`].

use crate::aabb::Bounds;
use crate::float_types::{PI, Real};
use crate::geometry::{AnnularSector, AntennaGeometry, sector::layout_angle};
use crate::math::{format_number, polar_to_cartesian};
use crate::params::DesignParameters;
use ::svg::Document;
use ::svg::node::element::{Group, Line, Path, Text};
use log::warn;
use nalgebra::Point2;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n";

/// Decimal places written for path coordinates.
const COORD_DECIMALS: usize = 4;

const TOOTH_FILL: &str = "#2563eb";
const TOOTH_STROKE: &str = "#1e3a8a";
const BETA_FILL: &str = "#059669";
const FEED_FILL: &str = "#f59e0b";
const REFERENCE_GREY: &str = "#666";
const REFERENCE_ALPHA: &str = "#e11d48";
const REFERENCE_BETA: &str = "#059669";

/// Distance of the angle labels beyond the reference-line ends, in mm.
const LABEL_OFFSET: Real = 20.0;

/// Rendering switches for [`to_svg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    /// Total viewBox padding as a fraction of the bounds' width and height.
    pub padding_fraction: Real,
    /// Dashed lines at 0°, α and 90° and their 180° mirrors.
    pub reference_lines: bool,
    /// Prefix the serialized document with an XML declaration.
    pub xml_declaration: bool,
    /// Frame the viewBox by every shape instead of the teeth alone, so the
    /// beta wedges and reference lines are not cropped.
    pub frame_full_extent: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            padding_fraction: 0.10,
            reference_lines: true,
            xml_declaration: true,
            frame_full_extent: false,
        }
    }
}

#[inline]
fn coord(v: Real) -> String {
    // avoid "-0.0000"
    let s = format_number(v, COORD_DECIMALS);
    if s.chars().all(|c| matches!(c, '-' | '0' | '.')) {
        "0".to_string()
    } else {
        s
    }
}

#[inline]
fn xy(p: &Point2<Real>) -> String {
    format!("{} {}", coord(p.x), coord(p.y))
}

/// Path data for one sector: `M, L, A (outer), L, A (inner), Z`.
///
/// The outer arc sweeps in the direction of increasing angle (sweep flag 1),
/// the inner arc returns against it (sweep flag 0). Spans above π set the
/// large-arc flag.
pub fn sector_path(sector: &AnnularSector) -> String {
    let large_arc = if sector.span().abs() > PI { 1 } else { 0 };
    let (r_out, r_in) = (coord(sector.outer_radius), coord(sector.inner_radius));
    format!(
        "M {} L {} A {r_out} {r_out} 0 {large_arc} 1 {} L {} A {r_in} {r_in} 0 {large_arc} 0 {} Z",
        xy(&sector.inner_start()),
        xy(&sector.outer_start()),
        xy(&sector.outer_end()),
        xy(&sector.inner_end()),
        xy(&sector.inner_start()),
    )
}

/// Closed straight-edged path through `vertices`.
pub fn polygon_path(vertices: &[Point2<Real>]) -> String {
    let mut d = String::new();
    for (i, p) in vertices.iter().enumerate() {
        d.push_str(if i == 0 { "M " } else { " L " });
        d.push_str(&xy(p));
    }
    if !vertices.is_empty() {
        d.push_str(" Z");
    }
    d
}

/// Bounds the viewBox is derived from: the teeth, or every shape when
/// there are no teeth to frame.
fn framing_bounds(geometry: &AntennaGeometry, full_extent: bool) -> Bounds {
    if full_extent {
        geometry.extent()
    } else if geometry.bounds.is_empty() {
        if !geometry.is_empty() {
            warn!("no teeth to frame, falling back to the full geometry extent for the viewBox");
        }
        geometry.extent()
    } else {
        geometry.bounds
    }
}

fn reference_line(end: Point2<Real>, color: &str, stroke_width: &str) -> Line {
    Line::new()
        .set("class", "reference-line")
        .set("x1", "0")
        .set("y1", "0")
        .set("x2", coord(end.x))
        .set("y2", coord(end.y))
        .set("stroke", color)
        .set("stroke-width", stroke_width)
        .set("stroke-dasharray", "2, 2")
}

fn angle_label(position: Point2<Real>, color: &str, content: String) -> Text {
    Text::new(content)
        .set("class", "dimension-text")
        .set("x", coord(position.x))
        .set("y", coord(position.y))
        .set("text-anchor", "middle")
        .set("fill", color)
}

/// `0°`, `α=..°`, `β=..°` and `180°` next to the reference lines.
fn angle_labels(radius: Real, alpha: Real) -> [Text; 4] {
    let beta = 90.0 - alpha;
    [
        angle_label(Point2::new(0.0, -radius - LABEL_OFFSET), REFERENCE_GREY, "0°".to_string()),
        angle_label(
            polar_to_cartesian(radius + LABEL_OFFSET, layout_angle(alpha)),
            REFERENCE_ALPHA,
            format!("α={alpha}°"),
        ),
        angle_label(
            Point2::new(radius + LABEL_OFFSET, 0.0),
            REFERENCE_BETA,
            format!("β={beta}°"),
        ),
        angle_label(
            Point2::new(0.0, radius + LABEL_OFFSET + 10.0),
            REFERENCE_GREY,
            "180°".to_string(),
        ),
    ]
}

/// Builds the SVG document for screen display or export.
pub fn to_svg(geometry: &AntennaGeometry, params: &DesignParameters, options: &SvgOptions) -> Document {
    let view = framing_bounds(geometry, options.frame_full_extent).padded(options.padding_fraction);
    let stroke_width = coord((view.width().max(view.height()) * 0.002).max(1e-4));
    let unit = params.output_unit;

    let mut group = Group::new().set("id", "antenna-group");

    for beta in &geometry.beta_sections {
        group = group.add(
            Path::new()
                .set("d", sector_path(&beta.sector))
                .set("class", "beta-section")
                .set("data-side", beta.side.index().to_string())
                .set("fill", BETA_FILL)
                .set("fill-opacity", "0.35")
                .set("stroke", "none"),
        );
    }

    for tooth in &geometry.teeth {
        group = group.add(
            Path::new()
                .set("d", sector_path(&tooth.sector))
                .set("class", format!("antenna-tooth-filled {}", tooth.quadrant.css_class()))
                .set("data-tooth-index", tooth.pair_index.to_string())
                .set("data-tooth-side", tooth.side.index().to_string())
                .set("data-tooth-pair", format!("{}-{}", tooth.inner.n, tooth.outer.n))
                .set(
                    "data-frequency",
                    format!(
                        "{}-{}",
                        format_number(tooth.inner.frequency_in(unit), 3),
                        format_number(tooth.outer.frequency_in(unit), 3)
                    ),
                )
                .set(
                    "data-radius",
                    format!(
                        "{}-{}",
                        format_number(tooth.inner.inner_radius_m, 6),
                        format_number(tooth.outer.inner_radius_m, 6)
                    ),
                )
                .set("fill", TOOTH_FILL)
                .set("stroke", TOOTH_STROKE)
                .set("stroke-width", stroke_width.as_str()),
        );
    }

    if let Some(feed) = &geometry.feed_gap {
        group = group.add(
            Path::new()
                .set("d", polygon_path(&feed.vertices))
                .set("class", "feed-gap")
                .set("fill", FEED_FILL)
                .set("stroke", "none"),
        );
    }

    if options.reference_lines {
        if let Some(radius) = geometry.beta_sections.first().map(|b| b.sector.outer_radius) {
            let alpha = params.tooth_angle_deg;
            let mut lines = Group::new().set("class", "reference-lines");
            for (deg, color) in [
                (0.0, REFERENCE_GREY),
                (alpha, REFERENCE_ALPHA),
                (90.0, REFERENCE_BETA),
                (180.0, REFERENCE_GREY),
                (180.0 + alpha, REFERENCE_ALPHA),
                (270.0, REFERENCE_BETA),
            ] {
                let end = polar_to_cartesian(radius, layout_angle(deg));
                lines = lines.add(reference_line(end, color, &stroke_width));
            }
            for label in angle_labels(radius, alpha) {
                lines = lines.add(label);
            }
            group = group.add(lines);
        }
    }

    Document::new()
        .set("xmlns", SVG_NS)
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                coord(view.mins.x),
                coord(view.mins.y),
                coord(view.width()),
                coord(view.height())
            ),
        )
        .set("preserveAspectRatio", "xMidYMid meet")
        .add(group)
}

/// Standalone SVG file contents with the default options.
pub fn to_svg_document(geometry: &AntennaGeometry, params: &DesignParameters) -> String {
    to_svg_document_with(geometry, params, &SvgOptions::default())
}

pub fn to_svg_document_with(
    geometry: &AntennaGeometry,
    params: &DesignParameters,
    options: &SvgOptions,
) -> String {
    let body = to_svg(geometry, params, options).to_string();
    if options.xml_declaration {
        format!("{XML_DECLARATION}{body}")
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_path_grammar() {
        let sector = AnnularSector::from_degrees(10.0, 20.0, 0.0, 30.0);
        let d = sector_path(&sector);
        let commands: Vec<&str> = d
            .split_whitespace()
            .filter(|t| t.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();
        assert_eq!(commands, vec!["M", "L", "A", "L", "A", "Z"]);
        assert!(d.starts_with("M 0 -10.0000 L 0 -20.0000 A 20.0000 20.0000 0 0 1 "));
        assert!(d.contains("A 10.0000 10.0000 0 0 0 0 -10.0000 Z"));
    }

    #[test]
    fn large_arc_flag_above_half_turn() {
        let sector = AnnularSector::from_degrees(1.0, 2.0, 0.0, 200.0);
        assert!(sector_path(&sector).contains("A 2.0000 2.0000 0 1 1"));
    }

    #[test]
    fn angle_labels_sit_beyond_the_lines() {
        let labels: Vec<String> = angle_labels(100.0, 30.0).iter().map(ToString::to_string).collect();
        assert!(labels[0].contains("y=\"-120.0000\""));
        assert!(labels[0].contains("0°"));
        assert!(labels[1].contains("α=30°"));
        assert!(labels[2].contains("x=\"120.0000\"") && labels[2].contains("β=60°"));
        assert!(labels[3].contains("y=\"130.0000\"") && labels[3].contains("180°"));
        assert!(labels.iter().all(|l| l.contains("class=\"dimension-text\"")));
    }

    #[test]
    fn negative_zero_is_normalised() {
        assert_eq!(coord(-0.00001), "0");
        assert_eq!(coord(-1.5), "-1.5000");
    }
}
