//! SVG backend for the drawing port

use std::fmt::Write as _;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::text::text_width;
use super::{Canvas, DrawState, Font, StateStack, TextAlign, TextBaseline, TextMetrics, arc_sweep};
use crate::angle::{FULL_TURN, HALF_TURN};
use crate::log::warn;
use crate::types::{BoundingBox, Point, Size, Vector};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// One drawn element, serialized when the document is finished
#[derive(Debug, Clone)]
struct SvgElement {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
}

impl SvgElement {
    fn empty(name: &'static str, attrs: Vec<(&'static str, String)>) -> Self {
        SvgElement { name, attrs, text: None }
    }

    fn write(&self, writer: &mut Writer<Vec<u8>>) {
        let mut start = BytesStart::new(self.name);
        for (key, value) in &self.attrs {
            start.push_attribute((*key, value.as_str()));
        }
        match &self.text {
            None => write_event(writer, Event::Empty(start)),
            Some(text) => {
                write_event(writer, Event::Start(start));
                write_event(writer, Event::Text(BytesText::new(text)));
                write_event(writer, Event::End(BytesEnd::new(self.name)));
            }
        }
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) {
    if let Err(e) = writer.write_event(event) {
        warn!("svg: failed to write element: {}", e);
    }
}

/// Canvas that serializes every stroke, fill and label as SVG elements
#[derive(Debug, Clone, Default)]
pub struct SvgCanvas {
    elements: Vec<SvgElement>,
    path: String,
    has_current_point: bool,
    state: StateStack,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap everything drawn so far in an `<svg>` root sized to `size`
    pub fn finish(self, size: Size) -> String {
        let w = fmt_num(size.width);
        let h = fmt_num(size.height);
        let view_box = format!("0 0 {w} {h}");

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        let mut root = BytesStart::new("svg");
        root.push_attribute(("xmlns", SVG_NS));
        root.push_attribute(("width", w.as_str()));
        root.push_attribute(("height", h.as_str()));
        root.push_attribute(("viewBox", view_box.as_str()));
        write_event(&mut writer, Event::Start(root));
        for element in &self.elements {
            element.write(&mut writer);
        }
        write_event(&mut writer, Event::End(BytesEnd::new("svg")));

        let mut out = String::from_utf8_lossy(&writer.into_inner()).into_owned();
        out.push('\n');
        out
    }

    fn device(&self, p: Point) -> Point {
        p + self.state.current().translation
    }

    fn push_point(&mut self, cmd: char, p: Point) {
        let p = self.device(p);
        let _ = write!(self.path, "{cmd}{},{}", fmt_num(p.x), fmt_num(p.y));
        self.has_current_point = true;
    }

    fn push_arc_to(&mut self, radius: f64, large_arc: bool, sweep_positive: bool, to: Point) {
        let to = self.device(to);
        let r = fmt_num(radius);
        let _ = write!(
            self.path,
            "A{r},{r} 0 {} {} {},{}",
            u8::from(large_arc),
            u8::from(sweep_positive),
            fmt_num(to.x),
            fmt_num(to.y)
        );
    }

    fn stroke_attrs(state: &DrawState) -> String {
        let mut style = format!(
            "stroke:{};stroke-width:{}",
            state.stroke_style,
            fmt_num(state.line_width)
        );
        if !state.line_dash.is_empty() {
            let dash: Vec<String> = state.line_dash.iter().map(|d| fmt_num(*d)).collect();
            let _ = write!(style, ";stroke-dasharray:{}", dash.join(","));
        }
        style
    }

    fn rect_element(&mut self, rect: BoundingBox, style: String) {
        let origin = self.device(Point::new(rect.x, rect.y));
        self.elements.push(SvgElement::empty(
            "rect",
            vec![
                ("x", fmt_num(origin.x)),
                ("y", fmt_num(origin.y)),
                ("width", fmt_num(rect.width)),
                ("height", fmt_num(rect.height)),
                ("style", style),
            ],
        ));
    }

    fn path_element(&mut self, style: String) {
        if self.path.is_empty() {
            return;
        }
        let d = self.path.clone();
        self.elements
            .push(SvgElement::empty("path", vec![("d", d), ("style", style)]));
    }
}

impl Canvas for SvgCanvas {
    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.state.current_mut().stroke_style = color.to_string();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.state.current_mut().fill_style = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.current_mut().line_width = width;
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        self.state.current_mut().line_dash = dash.to_vec();
    }

    fn set_font(&mut self, font: Font) {
        self.state.current_mut().font = font;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.current_mut().text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.current_mut().text_baseline = baseline;
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let t = &mut self.state.current_mut().translation;
        t.dx += dx;
        t.dy += dy;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.has_current_point = false;
    }

    fn move_to(&mut self, p: Point) {
        self.push_point('M', p);
    }

    fn line_to(&mut self, p: Point) {
        self.push_point('L', p);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, counter_clockwise: bool) {
        let start = center + Vector::from_polar(radius, start_angle);
        let cmd = if self.has_current_point { 'L' } else { 'M' };
        self.push_point(cmd, start);

        let sweep = arc_sweep(start_angle, end_angle, counter_clockwise);
        if sweep == 0.0 {
            return;
        }
        let positive = sweep > 0.0;
        if sweep.abs() >= FULL_TURN {
            // a full circle needs two half arcs, SVG cannot end where it starts
            let opposite = center + Vector::from_polar(radius, start_angle + HALF_TURN);
            self.push_arc_to(radius, false, positive, opposite);
            self.push_arc_to(radius, false, positive, start);
            return;
        }
        let end = center + Vector::from_polar(radius, start_angle + sweep);
        self.push_arc_to(radius, sweep.abs() > HALF_TURN, positive, end);
    }

    fn close_path(&mut self) {
        self.path.push('Z');
    }

    fn stroke(&mut self) {
        let style = format!("fill:none;{}", Self::stroke_attrs(self.state.current()));
        self.path_element(style);
    }

    fn fill(&mut self) {
        let style = format!("fill:{}", self.state.current().fill_style);
        self.path_element(style);
    }

    fn stroke_rect(&mut self, rect: BoundingBox) {
        let style = format!("fill:none;{}", Self::stroke_attrs(self.state.current()));
        self.rect_element(rect, style);
    }

    fn fill_rect(&mut self, rect: BoundingBox) {
        let style = format!("fill:{}", self.state.current().fill_style);
        self.rect_element(rect, style);
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        let at = self.device(at);
        let state = self.state.current();
        let anchor = match state.text_align {
            TextAlign::Start => "start",
            TextAlign::Center => "middle",
        };
        let baseline = match state.text_baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
        };
        let style = format!(
            "font-size:{}px;font-family:{};fill:{}",
            fmt_num(state.font.size),
            state.font.family,
            state.fill_style
        );
        self.elements.push(SvgElement {
            name: "text",
            attrs: vec![
                ("x", fmt_num(at.x)),
                ("y", fmt_num(at.y)),
                ("text-anchor", anchor.to_string()),
                ("dominant-baseline", baseline.to_string()),
                ("style", style),
            ],
            text: Some(text.to_string()),
        });
    }

    fn measure_text(&self, text: &str) -> TextMetrics {
        TextMetrics {
            width: text_width(text, self.state.current().font.size),
        }
    }
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    // trig noise such as sin(π) prints as zero
    if value.abs() < 1e-9 || !value.is_finite() {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(800.0), "800");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
        assert_eq!(fmt_num(-0.0000001), "-0.0000001");
        assert_eq!(fmt_num(1234567.0), "1234570");
    }

    #[test]
    fn single_line_document() {
        let mut canvas = SvgCanvas::new();
        canvas.begin_path();
        canvas.move_to(Point::new(0.0, 0.0));
        canvas.line_to(Point::new(10.0, 0.0));
        canvas.stroke();
        let svg = canvas.finish(Size::new(10.0, 10.0));
        insta::assert_snapshot!(svg.trim_end(), @r#"
        <svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10">
          <path d="M0,0L10,0" style="fill:none;stroke:#000;stroke-width:1"/>
        </svg>
        "#);
    }

    #[test]
    fn dashed_rect_and_text() {
        let mut canvas = SvgCanvas::new();
        canvas.translate(5.0, 5.0);
        canvas.set_line_dash(&[10.0, 8.0]);
        canvas.stroke_rect(BoundingBox { x: 0.0, y: 0.0, width: 20.0, height: 4.0 });
        canvas.set_text_align(TextAlign::Center);
        canvas.fill_text("a<b", Point::new(1.0, 2.0));
        let svg = canvas.finish(Size::new(30.0, 30.0));
        assert!(svg.contains(r#"<rect x="5" y="5" width="20" height="4" style="fill:none;stroke:#000;stroke-width:1;stroke-dasharray:10,8"/>"#));
        assert!(svg.contains(r#"x="6" y="7" text-anchor="middle""#));
        assert!(svg.contains(">a&lt;b</text>"));
    }

    #[test]
    fn styles_and_labels_are_escaped() {
        let mut canvas = SvgCanvas::new();
        canvas.set_stroke_style("\"/><x");
        canvas.begin_path();
        canvas.move_to(Point::new(0.0, 0.0));
        canvas.line_to(Point::new(10.0, 0.0));
        canvas.stroke();
        canvas.fill_text("\"Leg\" & <arc>", Point::new(1.0, 2.0));
        let svg = canvas.finish(Size::new(10.0, 10.0));
        assert!(!svg.contains("<x"), "{svg}");
        assert!(svg.contains("stroke:&quot;/&gt;&lt;x;"), "{svg}");
        assert!(svg.contains(">&quot;Leg&quot; &amp; &lt;arc&gt;</text>"), "{svg}");
        assert_eq!(svg.matches("<path").count(), 1);
        assert_eq!(svg.matches("<text").count(), 1);
    }

    #[test]
    fn arcs_become_elliptical_arc_commands() {
        let mut canvas = SvgCanvas::new();
        canvas.begin_path();
        canvas.arc(Point::ORIGIN, 10.0, 0.0, HALF_TURN, false);
        canvas.stroke();
        canvas.begin_path();
        canvas.arc(Point::ORIGIN, 10.0, 0.0, FULL_TURN, false);
        canvas.stroke();
        let svg = canvas.finish(Size::new(20.0, 20.0));
        assert!(svg.contains(r#"d="M10,0A10,10 0 0 1 -10,0""#), "{svg}");
        assert!(svg.contains(r#"d="M10,0A10,10 0 0 1 -10,0A10,10 0 0 1 10,0""#), "{svg}");
    }
}
