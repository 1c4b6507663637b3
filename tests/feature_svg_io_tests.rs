#![cfg(feature = "svg-io")]

mod support;

use support::{params_with_pairs, reference_params};
use toothed_lpa::io::svg::{SvgOptions, to_svg_document, to_svg_document_with};
use toothed_lpa::{build_geometry, calculate};

fn reference_svg() -> String {
    let params = reference_params();
    let calc = calculate(&params).unwrap();
    let geometry = build_geometry(&calc.results, &params);
    to_svg_document(&geometry, &params)
}

#[test]
fn svg_document_shape() {
    let svg = reference_svg();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("viewBox=\""));
    assert!(svg.contains("id=\"antenna-group\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_has_one_path_per_shape() {
    let svg = reference_svg();
    // 6 teeth, 2 beta wedges and the feed gap
    assert_eq!(svg.matches("<path").count(), 9);
    assert_eq!(svg.matches("antenna-tooth-filled").count(), 6);
    assert_eq!(svg.matches("class=\"beta-section\"").count(), 2);
    assert_eq!(svg.matches("class=\"feed-gap\"").count(), 1);
    assert!(svg.contains("data-tooth-pair=\"1-2\""));
    assert!(svg.contains("data-tooth-pair=\"3-4\""));
    assert_eq!(svg.matches("quadrant-3").count(), 2);
}

#[test]
fn svg_viewbox_is_padded_tooth_bounds() {
    let params = reference_params();
    let calc = calculate(&params).unwrap();
    let geometry = build_geometry(&calc.results, &params);
    let svg = to_svg_document(&geometry, &params);

    let start = svg.find("viewBox=\"").unwrap() + "viewBox=\"".len();
    let view: Vec<f64> = svg[start..start + svg[start..].find('"').unwrap()]
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    let b = geometry.bounds;
    let (dx, dy) = (b.width() * 0.05, b.height() * 0.05);
    assert!((view[0] - (b.mins.x - dx)).abs() < 1e-3);
    assert!((view[1] - (b.mins.y - dy)).abs() < 1e-3);
    assert!((view[2] - b.width() * 1.1).abs() < 1e-3);
    assert!((view[3] - b.height() * 1.1).abs() < 1e-3);
}

#[test]
fn svg_full_extent_frames_the_beta_wedges() {
    let params = reference_params();
    let calc = calculate(&params).unwrap();
    let geometry = build_geometry(&calc.results, &params);
    let options = SvgOptions {
        frame_full_extent: true,
        ..SvgOptions::default()
    };
    let svg = to_svg_document_with(&geometry, &params, &options);

    let start = svg.find("viewBox=\"").unwrap() + "viewBox=\"".len();
    let view: Vec<f64> = svg[start..start + svg[start..].find('"').unwrap()]
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    let (min_x, max_x) = (view[0], view[0] + view[2]);
    for beta in &geometry.beta_sections {
        for v in &beta.sector.vertices {
            assert!(v.x >= min_x && v.x <= max_x);
        }
    }
    // teeth-only framing crops the wedge
    let b = geometry.bounds.padded(0.10);
    assert!(
        geometry
            .beta_sections
            .iter()
            .flat_map(|beta| beta.sector.vertices)
            .any(|v| !b.contains(&v))
    );
}

#[test]
fn svg_reference_lines_carry_angle_labels() {
    let svg = reference_svg();
    assert_eq!(svg.matches("class=\"dimension-text\"").count(), 4);
    assert!(svg.contains("α=30°"));
    assert!(svg.contains("β=60°"));
    assert!(svg.contains("180°"));
}

#[test]
fn svg_is_deterministic() {
    assert_eq!(reference_svg(), reference_svg());
}

#[test]
fn svg_paths_use_the_sector_grammar() {
    let svg = reference_svg();
    for chunk in svg.split(" d=\"").skip(1) {
        let d = &chunk[..chunk.find('"').unwrap()];
        assert!(d.starts_with("M "));
        assert!(d.ends_with(" Z"));
        assert!(!d.contains("NaN") && !d.contains("inf"));
    }
}

#[test]
fn svg_options_switch_parts_off() {
    let params = reference_params();
    let calc = calculate(&params).unwrap();
    let geometry = build_geometry(&calc.results, &params);
    let options = SvgOptions {
        reference_lines: false,
        xml_declaration: false,
        ..SvgOptions::default()
    };
    let svg = to_svg_document_with(&geometry, &params, &options);
    assert!(svg.starts_with("<svg"));
    assert!(!svg.contains("reference-line"));
    assert!(!svg.contains("dimension-text"));

    let with_lines = to_svg_document(&geometry, &params);
    assert_eq!(with_lines.matches("class=\"reference-line\"").count(), 6);
}

#[test]
fn svg_without_teeth_still_frames_the_wedges() {
    let params = params_with_pairs(1);
    let calc = calculate(&params).unwrap();
    let geometry = build_geometry(&calc.results, &params);
    let svg = to_svg_document(&geometry, &params);
    assert_eq!(svg.matches("<path").count(), 3);
    assert!(!svg.contains("viewBox=\"0 0 0 0\""));
}
