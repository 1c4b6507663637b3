//! DXF export of the antenna layout.
//!
//! Writes an ASCII drawing-interchange document: CRLF between every
//! group-code/value line, fixed-point numbers (no scientific notation),
//! ASCII-only text and a monotonic hexadecimal entity handle.
//!
//! Sections:
//! - HEADER: version, code page, units (mm) and extents
//! - TABLES: LTYPE, LAYER (`0`, `ANTENNA`, `BETA`, `DIMENSIONS`, `REFERENCE`), STYLE
//! - BLOCKS: model and paper space
//! - ENTITIES: one closed LWPOLYLINE per tooth and beta wedge with bulged
//!   arc edges, the feed-gap marker, reference lines and text annotations

use crate::aabb::Bounds;
use crate::calculator::{ToothResult, feed_gap_meters};
use crate::float_types::{METER, Real};
use crate::geometry::{AnnularSector, build_geometry, sector::layout_angle};
use crate::math::{deg_to_rad, format_number, polar_to_cartesian};
use crate::params::DesignParameters;
use log::trace;
use nalgebra::Point2;
use std::borrow::Cow;
use std::fmt::Display;
use std::io::Write;

/// `$ACADVER` written to the header (R2010 class).
pub const ACAD_VERSION: &str = "AC1024";

/// First handle handed out to table records and entities.
pub const HANDLE_BASE: u32 = 100;

/// Decimal places for coordinates and other reals.
const DECIMALS: usize = 4;

/// Decimal places for bulge factors.
const BULGE_DECIMALS: usize = 6;

pub const TITLE: &str = "PLANAR TOOTHED LOG-PERIODIC ANTENNA";

/// Drawing layers and their ACI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Default,
    Antenna,
    Beta,
    Dimensions,
    Reference,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::Default,
        Layer::Antenna,
        Layer::Beta,
        Layer::Dimensions,
        Layer::Reference,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Layer::Default => "0",
            Layer::Antenna => "ANTENNA",
            Layer::Beta => "BETA",
            Layer::Dimensions => "DIMENSIONS",
            Layer::Reference => "REFERENCE",
        }
    }

    /// AutoCAD colour index.
    pub const fn color(self) -> i16 {
        match self {
            Layer::Default => 7,
            Layer::Antenna => 5,
            Layer::Beta => 3,
            Layer::Dimensions => 1,
            Layer::Reference => 8,
        }
    }
}

/// Transliterates `text` to ASCII for strict DXF readers.
///
/// `°` becomes `" deg"`, Greek design symbols are spelled out and anything
/// else outside ASCII becomes `?`.
pub fn to_dxf_ascii(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            c if c.is_ascii() => out.push(c),
            '°' => out.push_str(" deg"),
            'α' => out.push_str("alpha"),
            'β' => out.push_str("beta"),
            'Γ' | 'γ' => out.push_str("Gamma"),
            'ε' => out.push_str("eps"),
            'µ' | 'μ' => out.push('u'),
            'λ' => out.push_str("lambda"),
            _ => out.push('?'),
        }
    }
    trace!("transliterated DXF text '{text}' to '{out}'");
    Cow::Owned(out)
}

/// Bulge of an arc edge sweeping `span` radians: `tan(span / 4)`.
#[inline]
pub fn bulge(span: Real) -> Real {
    (span / 4.0).tan()
}

/// A text annotation placed before anything is written, so that the header
/// extents can include it.
#[derive(Debug, Clone, PartialEq)]
struct Annotation {
    text: String,
    position: Point2<Real>,
    height: Real,
}

/// Indices of the tooth pairs whose radius is labelled: first, ⅓, ⅔ and last.
pub fn labelled_indices(len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut indices = vec![0, len / 3, (2 * len) / 3, len - 1];
    indices.sort_unstable();
    indices.dedup();
    indices
}

fn plan_annotations(results: &[ToothResult], params: &DesignParameters, extent: &Bounds) -> Vec<Annotation> {
    let Some(last) = results.last() else {
        return Vec::new();
    };
    let size = extent.width().max(extent.height()).max(Real::EPSILON);
    let title_height = size * 0.04;
    let line_height = size * 0.02;
    let label_height = size * 0.016;

    let outer = last.outer_radius_m(params.scaling_factor) * METER;
    let title_y = -outer * 1.2;
    let feed_gap_mm = feed_gap_meters(params.effective_permittivity, results[0].frequency_hz) * METER;
    let unit = params.output_unit;

    let mut notes = vec![
        Annotation {
            text: TITLE.to_string(),
            position: Point2::new(0.0, title_y),
            height: title_height,
        },
        Annotation {
            text: format!(
                "Gamma={}  Alpha={}°  Beta={}°  Eeff={}  Pairs={}  Feed gap={} mm",
                params.scaling_factor,
                params.tooth_angle_deg,
                params.beta_angle_deg(),
                params.effective_permittivity,
                params.tooth_pair_count,
                format_number(feed_gap_mm, 3),
            ),
            position: Point2::new(0.0, title_y - title_height * 1.5),
            height: line_height,
        },
    ];

    for index in labelled_indices(results.len()) {
        let result = &results[index];
        let radius = result.inner_radius_m * METER;
        notes.push(Annotation {
            text: format!(
                "r{}={}m f{}={} {}",
                result.n,
                format_number(result.inner_radius_m, 4),
                result.n,
                format_number(result.frequency_in(unit), 3),
                unit,
            ),
            position: polar_to_cartesian(radius * 1.1, deg_to_rad(index as Real * 15.0)),
            height: label_height,
        });
    }
    notes
}

/// Group-code writer with its own handle counter.
struct DxfWriter<W: Write> {
    writer: W,
    next_handle: u32,
}

impl<W: Write> DxfWriter<W> {
    const fn new(writer: W) -> Self {
        Self {
            writer,
            next_handle: HANDLE_BASE,
        }
    }

    fn pair(&mut self, code: i32, value: impl Display) -> std::io::Result<()> {
        write!(self.writer, "{code}\r\n{value}\r\n")
    }

    fn real(&mut self, code: i32, value: Real) -> std::io::Result<()> {
        self.pair(code, format_number(value, DECIMALS))
    }

    fn point(&mut self, code: i32, p: &Point2<Real>) -> std::io::Result<()> {
        self.real(code, p.x)?;
        self.real(code + 10, p.y)
    }

    fn handle(&mut self) -> String {
        let handle = format!("{:X}", self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn section(&mut self, name: &str) -> std::io::Result<()> {
        self.pair(0, "SECTION")?;
        self.pair(2, name)
    }

    fn end_section(&mut self) -> std::io::Result<()> {
        self.pair(0, "ENDSEC")
    }

    fn header(&mut self, extent: &Bounds) -> std::io::Result<()> {
        self.section("HEADER")?;
        self.pair(9, "$ACADVER")?;
        self.pair(1, ACAD_VERSION)?;
        self.pair(9, "$DWGCODEPAGE")?;
        self.pair(3, "ANSI_1252")?;

        self.pair(9, "$INSBASE")?;
        self.point(10, &Point2::origin())?;
        self.real(30, 0.0)?;

        self.pair(9, "$EXTMIN")?;
        self.point(10, &extent.mins)?;
        self.real(30, 0.0)?;
        self.pair(9, "$EXTMAX")?;
        self.point(10, &extent.maxs)?;
        self.real(30, 0.0)?;

        // millimetres, metric
        self.pair(9, "$INSUNITS")?;
        self.pair(70, 4)?;
        self.pair(9, "$MEASUREMENT")?;
        self.pair(70, 1)?;

        self.pair(9, "$LIMMIN")?;
        self.point(10, &extent.mins)?;
        self.pair(9, "$LIMMAX")?;
        self.point(10, &extent.maxs)?;
        self.end_section()
    }

    fn tables(&mut self) -> std::io::Result<()> {
        self.section("TABLES")?;

        self.pair(0, "TABLE")?;
        self.pair(2, "LTYPE")?;
        self.pair(5, "5")?;
        self.pair(100, "AcDbSymbolTable")?;
        self.pair(70, 1)?;
        self.pair(0, "LTYPE")?;
        let handle = self.handle();
        self.pair(5, handle)?;
        self.pair(100, "AcDbSymbolTableRecord")?;
        self.pair(100, "AcDbLinetypeTableRecord")?;
        self.pair(2, "CONTINUOUS")?;
        self.pair(70, 0)?;
        self.pair(3, "Solid line")?;
        self.pair(72, 65)?;
        self.pair(73, 0)?;
        self.real(40, 0.0)?;
        self.pair(0, "ENDTAB")?;

        self.pair(0, "TABLE")?;
        self.pair(2, "LAYER")?;
        self.pair(5, "2")?;
        self.pair(100, "AcDbSymbolTable")?;
        self.pair(70, Layer::ALL.len())?;
        for layer in Layer::ALL {
            self.layer(layer)?;
        }
        self.pair(0, "ENDTAB")?;

        self.pair(0, "TABLE")?;
        self.pair(2, "STYLE")?;
        self.pair(5, "3")?;
        self.pair(100, "AcDbSymbolTable")?;
        self.pair(70, 1)?;
        self.pair(0, "STYLE")?;
        self.pair(5, "11")?;
        self.pair(100, "AcDbSymbolTableRecord")?;
        self.pair(100, "AcDbTextStyleTableRecord")?;
        self.pair(2, "STANDARD")?;
        self.pair(70, 0)?;
        self.real(40, 0.0)?;
        self.real(41, 1.0)?;
        self.real(50, 0.0)?;
        self.pair(71, 0)?;
        self.real(42, 2.5)?;
        self.pair(3, "txt")?;
        self.pair(4, "")?;
        self.pair(0, "ENDTAB")?;

        self.end_section()
    }

    fn layer(&mut self, layer: Layer) -> std::io::Result<()> {
        self.pair(0, "LAYER")?;
        let handle = self.handle();
        self.pair(5, handle)?;
        self.pair(100, "AcDbSymbolTableRecord")?;
        self.pair(100, "AcDbLayerTableRecord")?;
        self.pair(2, layer.name())?;
        self.pair(70, 0)?;
        self.pair(62, layer.color())?;
        self.pair(6, "CONTINUOUS")?;
        self.pair(290, 1)?;
        self.pair(370, -3)
    }

    fn block(&mut self, name: &str, begin: &str, end: &str) -> std::io::Result<()> {
        self.pair(0, "BLOCK")?;
        self.pair(5, begin)?;
        self.pair(100, "AcDbEntity")?;
        self.pair(8, Layer::Default.name())?;
        self.pair(100, "AcDbBlockBegin")?;
        self.pair(2, name)?;
        self.pair(70, 0)?;
        self.point(10, &Point2::origin())?;
        self.real(30, 0.0)?;
        self.pair(3, name)?;
        self.pair(1, "")?;
        self.pair(0, "ENDBLK")?;
        self.pair(5, end)?;
        self.pair(100, "AcDbEntity")?;
        self.pair(8, Layer::Default.name())?;
        self.pair(100, "AcDbBlockEnd")
    }

    fn blocks(&mut self) -> std::io::Result<()> {
        self.section("BLOCKS")?;
        self.block("*MODEL_SPACE", "20", "21")?;
        self.block("*PAPER_SPACE", "1C", "1D")?;
        self.end_section()
    }

    fn lwpolyline_start(&mut self, layer: Layer, count: usize) -> std::io::Result<()> {
        self.pair(0, "LWPOLYLINE")?;
        let handle = self.handle();
        self.pair(5, handle)?;
        self.pair(100, "AcDbEntity")?;
        self.pair(8, layer.name())?;
        self.pair(100, "AcDbPolyline")?;
        self.pair(90, count)?;
        // closed
        self.pair(70, 1)?;
        self.real(43, 0.0)
    }

    /// Closed polyline around a sector: straight radial edges, bulged arcs.
    ///
    /// The outer arc (outer-start → outer-end) carries `+tan(span/4)`, the inner
    /// arc (inner-end → inner-start) runs backwards and carries the negation.
    fn sector(&mut self, sector: &AnnularSector, layer: Layer) -> std::io::Result<()> {
        let b = bulge(sector.span());
        self.lwpolyline_start(layer, 4)?;
        for (vertex, vertex_bulge) in sector.vertices.iter().zip([0.0, b, 0.0, -b]) {
            self.point(10, vertex)?;
            self.pair(42, format_number(vertex_bulge, BULGE_DECIMALS))?;
        }
        Ok(())
    }

    fn polygon(&mut self, vertices: &[Point2<Real>], layer: Layer) -> std::io::Result<()> {
        self.lwpolyline_start(layer, vertices.len())?;
        for vertex in vertices {
            self.point(10, vertex)?;
        }
        Ok(())
    }

    fn line(&mut self, start: &Point2<Real>, end: &Point2<Real>, layer: Layer) -> std::io::Result<()> {
        self.pair(0, "LINE")?;
        let handle = self.handle();
        self.pair(5, handle)?;
        self.pair(100, "AcDbEntity")?;
        self.pair(8, layer.name())?;
        self.pair(100, "AcDbLine")?;
        self.point(10, start)?;
        self.real(30, 0.0)?;
        self.point(11, end)?;
        self.real(31, 0.0)
    }

    fn text(&mut self, note: &Annotation, layer: Layer) -> std::io::Result<()> {
        let text = to_dxf_ascii(&note.text);
        self.pair(0, "TEXT")?;
        let handle = self.handle();
        self.pair(5, handle)?;
        self.pair(100, "AcDbEntity")?;
        self.pair(8, layer.name())?;
        self.pair(100, "AcDbText")?;
        self.point(10, &note.position)?;
        self.real(30, 0.0)?;
        self.real(40, note.height)?;
        self.pair(1, text)?;
        self.real(50, 0.0)?;
        self.real(41, 1.0)?;
        self.real(51, 0.0)?;
        self.pair(7, "STANDARD")?;
        self.pair(71, 0)?;
        // centre-aligned about the second alignment point
        self.pair(72, 1)?;
        self.point(11, &note.position)?;
        self.real(31, 0.0)?;
        self.pair(100, "AcDbText")?;
        self.pair(73, 2)
    }
}

/// Streams the DXF document for `results` to `writer`.
///
/// The layout is the one [`build_geometry`] produces for the same inputs.
pub fn write_dxf<W: Write>(results: &[ToothResult], params: &DesignParameters, writer: W) -> std::io::Result<()> {
    let geometry = build_geometry(results, params);
    let shape_extent = geometry.extent();
    let notes = plan_annotations(results, params, &shape_extent);
    let extent = if notes.is_empty() {
        shape_extent
    } else {
        shape_extent.union(&Bounds::from_points(notes.iter().map(|n| &n.position)))
    };

    let mut dxf = DxfWriter::new(writer);
    dxf.header(&extent)?;
    dxf.tables()?;
    dxf.blocks()?;

    dxf.section("ENTITIES")?;
    for tooth in &geometry.teeth {
        dxf.sector(&tooth.sector, Layer::Antenna)?;
    }
    for beta in &geometry.beta_sections {
        dxf.sector(&beta.sector, Layer::Beta)?;
    }
    if let Some(feed) = &geometry.feed_gap {
        dxf.polygon(&feed.vertices, Layer::Reference)?;
    }
    if let Some(beta) = geometry.beta_sections.first() {
        let radius = beta.sector.outer_radius;
        let origin = Point2::origin();
        for deg in [0.0, params.tooth_angle_deg, 90.0, 180.0, 180.0 + params.tooth_angle_deg, 270.0] {
            dxf.line(&origin, &polar_to_cartesian(radius, layout_angle(deg)), Layer::Reference)?;
        }
    }
    for note in &notes {
        dxf.text(note, Layer::Dimensions)?;
    }
    dxf.end_section()?;
    dxf.pair(0, "EOF")?;

    trace!(
        "wrote DXF: {} teeth, {} beta sections, {} annotations, last handle {:X}",
        geometry.teeth.len(),
        geometry.beta_sections.len(),
        notes.len(),
        dxf.next_handle - 1
    );
    dxf.writer.flush()
}

/// The DXF document for `results` as a string.
pub fn to_dxf_document(results: &[ToothResult], params: &DesignParameters) -> Result<String, super::IoError> {
    let mut buffer = Vec::new();
    write_dxf(results, params, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;

    #[test]
    fn transliteration() {
        assert_eq!(to_dxf_ascii("Alpha=30°"), "Alpha=30 deg");
        assert_eq!(to_dxf_ascii("α β Γ ε"), "alpha beta Gamma eps");
        assert_eq!(to_dxf_ascii("plain"), "plain");
        assert!(matches!(to_dxf_ascii("plain"), Cow::Borrowed(_)));
        assert_eq!(to_dxf_ascii("→"), "?");
    }

    #[test]
    fn bulge_of_quarter_turn() {
        assert!((bulge(PI / 2.0) - (PI / 8.0).tan()).abs() < 1e-15);
        assert!((bulge(PI) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn labelled_indices_dedup() {
        assert_eq!(labelled_indices(0), Vec::<usize>::new());
        assert_eq!(labelled_indices(1), vec![0]);
        assert_eq!(labelled_indices(3), vec![0, 1, 2]);
        assert_eq!(labelled_indices(9), vec![0, 3, 6, 8]);
    }

    #[test]
    fn handles_are_upper_hex_from_base() {
        let mut w = DxfWriter::new(Vec::new());
        assert_eq!(w.handle(), "64");
        for _ in 0..10 {
            w.handle();
        }
        assert_eq!(w.handle(), "6F");
    }
}
