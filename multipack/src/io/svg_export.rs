use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Definitions, Group, Path, Text, Title, Use};

use sheetpack::geometry::Transformation;
use sheetpack::geometry::primitives::{Point, RectSize, SPolygon};

use crate::io::import::Instance;
use crate::opt::PackSolution;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the buffered bounding rectangle around each item
    #[serde(default)]
    pub draw_rectangles: bool,
    ///Draw the full sheet instead of only the consumed region
    #[serde(default)]
    pub draw_sheet: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            draw_rectangles: true,
            draw_sheet: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub sheet_fill: Color,
    pub consumed_fill: Color,
    pub item_fill: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xE6, 0xC6, 0xA5),
        consumed_fill: Color(0xCC, 0x82, 0x4A),
        item_fill: Color(0xFF, 0xC8, 0x79),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        sheet_fill: Color(0xEE, 0xEE, 0xEE),
        consumed_fill: Color(0xD3, 0xD3, 0xD3),
        item_fill: Color(0x7A, 0x7A, 0x7A),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("expected a color in the form #RRGGBB, got {s:?}");
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Draws every placed item of `solution` in its packed position.
pub fn solution_to_svg(
    instance: &Instance,
    solution: &PackSolution,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let consumed = solution.consumed;
    let drawn_region = match options.draw_sheet {
        true => solution.sheet_size,
        false => consumed,
    };
    let margin = 0.05 * f64::max(drawn_region.width, drawn_region.height);
    let vbox = (
        -margin,
        -margin,
        drawn_region.width + 2.0 * margin,
        drawn_region.height + 2.0 * margin,
    );

    let theme = &options.theme;
    let stroke_width = f64::min(vbox.2, vbox.3) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        let font_size = 0.025 * f64::min(drawn_region.width, drawn_region.height);
        let label_content = format!(
            "width: {:.3} | height: {:.3} | rect density: {:.3}% | poly density: {:.3}% | {}",
            consumed.width,
            consumed.height,
            solution.rect_density * 100.0,
            solution.poly_density * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let sheet_group = {
        let mut sheet_group = Group::new().set("id", "sheet");
        if options.draw_sheet {
            sheet_group = sheet_group.add(data_to_path(
                rect_data(Point(0.0, 0.0), solution.sheet_size),
                &[
                    ("fill", &*theme.sheet_fill.to_string()),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", stroke_width)),
                ],
            ));
        }
        sheet_group
            .add(data_to_path(
                rect_data(Point(0.0, 0.0), consumed),
                &[
                    ("fill", &*theme.consumed_fill.to_string()),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(Title::new(format!(
                "consumed region, width: {:.3}, height: {:.3}",
                consumed.width, consumed.height
            )))
    };

    let rect_group = {
        let mut rect_group = Group::new().set("id", "rectangles");
        if options.draw_rectangles {
            let style = [
                ("fill", "none"),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                ("stroke-opacity", "0.5"),
                ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
            ];
            for (offset, size) in solution.offsets.iter().zip(&solution.sizes) {
                if let Some(offset) = offset {
                    let inflated = size.inflate(solution.buffer_distance);
                    rect_group = rect_group.add(data_to_path(rect_data(*offset, inflated), &style));
                }
            }
        }
        rect_group
    };

    let items_group = {
        let mut item_defs = Definitions::new();
        //copies of an item share a single definition
        let unique_shapes = instance
            .copies
            .iter()
            .zip(&instance.shapes)
            .unique_by(|(copy, _)| copy.item_id);
        for (copy, shape) in unique_shapes {
            item_defs = item_defs.add(
                data_to_path(
                    simple_polygon_data(shape),
                    &[
                        ("fill", &*theme.item_fill.to_string()),
                        ("stroke-width", &*format!("{}", stroke_width)),
                        ("fill-rule", "nonzero"),
                        ("stroke", "black"),
                        ("fill-opacity", "0.5"),
                    ],
                )
                .set("id", format!("item_{}", copy.item_id)),
            );
        }
        let mut items_group = Group::new().set("id", "items").add(item_defs);
        for (copy, placement) in instance.copies.iter().zip(&solution.placements) {
            if let Some(t) = placement {
                let title = Title::new(format!("item, id: {}, copy: {}", copy.item_id, copy.copy));
                let item_ref = Use::new()
                    .set("transform", transform_to_svg(t))
                    .set("xlink:href", format!("#item_{}", copy.item_id))
                    .add(title);
                items_group = items_group.add(item_ref);
            }
        }
        items_group
    };

    Document::new()
        .set("viewBox", vbox)
        .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
        .add(sheet_group)
        .add(rect_group)
        .add(items_group)
        .add(label)
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn simple_polygon_data(s_poly: &SPolygon) -> Data {
    let mut data = Data::new().move_to::<(f64, f64)>(s_poly.vertex(0).into());
    for i in 1..s_poly.n_vertices() {
        data = data.line_to::<(f64, f64)>(s_poly.vertex(i).into());
    }
    data.close()
}

pub fn rect_data(Point(x, y): Point, size: RectSize) -> Data {
    Data::new()
        .move_to((x, y))
        .line_to((x + size.width, y))
        .line_to((x + size.width, y + size.height))
        .line_to((x, y + size.height))
        .close()
}

fn transform_to_svg(t: &Transformation) -> String {
    //https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/transform#matrix
    let [[a, c, e], [b, d, f], _] = t.to_array();
    format!("matrix({a} {b} {c} {d} {e} {f})")
}
