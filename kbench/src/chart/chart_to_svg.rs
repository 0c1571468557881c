use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Rectangle, Text, Title};

use crate::chart::svg_util::{ChartOptions, Color, data_to_path};

const MARGIN_LEFT: f32 = 90.0;
const MARGIN_RIGHT: f32 = 30.0;
const MARGIN_TOP: f32 = 50.0;
const MARGIN_BOTTOM: f32 = 70.0;

/// Maximum number of labelled ticks on the horizontal axis of the line chart
const MAX_X_LABELS: usize = 10;

pub const X_LABEL: &str = "Test Case Number";
pub const Y_LABEL: &str = "Execution Time (milliseconds)";

/// Draws the execution time of every test case as a connected line.
pub fn line_chart(times: &[f64], title: &str, color: Color, options: ChartOptions) -> Document {
    let area = PlotArea::new(options.line_width, options.height, times);
    let stroke_width = options.theme.stroke_width;

    let x_of = |i: usize| match times.len() {
        0 | 1 => area.x_min + 0.5 * area.width,
        n => area.x_min + area.width * i as f32 / (n - 1) as f32,
    };

    let series = {
        let mut group = Group::new().set("id", "series");
        let mut points = times.iter().enumerate().map(|(i, &t)| (x_of(i), area.y(t)));
        if let Some(first) = points.next() {
            let data = points.fold(Data::new().move_to(first), |data, p| data.line_to(p));
            group = group.add(data_to_path(
                data,
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{color}")),
                    ("stroke-width", &*format!("{stroke_width}")),
                    ("stroke-linejoin", "round"),
                ],
            ));
        }
        for (i, &t) in times.iter().enumerate() {
            group = group.add(
                Circle::new()
                    .set("cx", x_of(i))
                    .set("cy", area.y(t))
                    .set("r", 1.5 * stroke_width)
                    .set("fill", format!("{color}"))
                    .add(Title::new(format!("test case {i}: {t:.3}ms"))),
            );
        }
        group
    };

    let x_ticks = {
        let mut group = Group::new().set("id", "x_ticks");
        let step = times.len().div_ceil(MAX_X_LABELS).max(1);
        for i in (0..times.len()).step_by(step) {
            group = group
                .add(tick_mark(x_of(i), area.bottom(), &options))
                .add(tick_label(x_of(i), area.bottom(), &i.to_string(), &options));
        }
        group
    };

    frame(&area, &options, title)
        .add(x_ticks)
        .add(series)
}

/// Draws the execution time of every test case as a separate bar, without labels on the horizontal axis.
pub fn column_chart(times: &[f64], title: &str, color: Color, options: ChartOptions) -> Document {
    let area = PlotArea::new(options.column_width, options.height, times);
    let slot = area.width / times.len().max(1) as f32;

    let mut bars = Group::new().set("id", "series");
    for (i, &t) in times.iter().enumerate() {
        let x = area.x_min + i as f32 * slot;
        let y = area.y(t);
        bars = bars
            .add(
                Rectangle::new()
                    .set("x", x + 0.1 * slot)
                    .set("y", y)
                    .set("width", 0.8 * slot)
                    .set("height", area.bottom() - y)
                    .set("fill", format!("{color}"))
                    .add(Title::new(format!("test case {i}: {t:.3}ms"))),
            )
            .add(tick_mark(x + 0.5 * slot, area.bottom(), &options));
    }

    frame(&area, &options, &format!("Execution Time for {title}")).add(bars)
}

/// Region of the chart in which the data is drawn
struct PlotArea {
    x_min: f32,
    y_min: f32,
    width: f32,
    height: f32,
    /// Value drawn at the top of the vertical axis
    y_max_value: f64,
}

impl PlotArea {
    fn new(chart_width: f32, chart_height: f32, times: &[f64]) -> Self {
        let max = times.iter().copied().fold(0.0, f64::max);
        PlotArea {
            x_min: MARGIN_LEFT,
            y_min: MARGIN_TOP,
            width: f32::max(chart_width - MARGIN_LEFT - MARGIN_RIGHT, 1.0),
            height: f32::max(chart_height - MARGIN_TOP - MARGIN_BOTTOM, 1.0),
            //an empty or all-zero series still gets a unit axis
            y_max_value: if max > 0.0 { max } else { 1.0 },
        }
    }

    fn bottom(&self) -> f32 {
        self.y_min + self.height
    }

    fn right(&self) -> f32 {
        self.x_min + self.width
    }

    fn y(&self, value: f64) -> f32 {
        let frac = (value / self.y_max_value).clamp(0.0, 1.0) as f32;
        self.bottom() - frac * self.height
    }
}

/// Background, title, axes, axis labels and horizontal grid lines
fn frame(area: &PlotArea, options: &ChartOptions, title: &str) -> Document {
    let theme = &options.theme;
    let chart_width = area.right() + MARGIN_RIGHT;
    let chart_height = area.bottom() + MARGIN_BOTTOM;

    let background = Rectangle::new()
        .set("width", chart_width)
        .set("height", chart_height)
        .set("fill", format!("{}", theme.background));

    let title = Text::new(title)
        .set("x", area.x_min + 0.5 * area.width)
        .set("y", 0.5 * MARGIN_TOP)
        .set("text-anchor", "middle")
        .set("font-size", 1.2 * theme.font_size)
        .set("font-family", "sans-serif");

    let mut grid = Group::new().set("id", "y_ticks");
    let n_ticks = options.n_y_ticks.max(1);
    for k in 0..=n_ticks {
        let value = area.y_max_value * k as f64 / n_ticks as f64;
        let y = area.y(value);
        grid = grid
            .add(
                Line::new()
                    .set("x1", area.x_min)
                    .set("y1", y)
                    .set("x2", area.right())
                    .set("y2", y)
                    .set("stroke", format!("{}", theme.grid_color))
                    .set("stroke-width", 0.5 * theme.stroke_width),
            )
            .add(
                Text::new(format!("{value:.3}"))
                    .set("x", area.x_min - 8.0)
                    .set("y", y + 0.35 * theme.font_size)
                    .set("text-anchor", "end")
                    .set("font-size", theme.font_size)
                    .set("font-family", "monospace"),
            );
    }

    let axes = {
        let data = Data::new()
            .move_to((area.x_min, area.y_min))
            .line_to((area.x_min, area.bottom()))
            .line_to((area.right(), area.bottom()));
        data_to_path(
            data,
            &[
                ("fill", "none"),
                ("stroke", &*format!("{}", theme.axis_color)),
                ("stroke-width", &*format!("{}", theme.stroke_width)),
            ],
        )
    };

    let x_label = Text::new(X_LABEL)
        .set("x", area.x_min + 0.5 * area.width)
        .set("y", chart_height - 0.3 * MARGIN_BOTTOM)
        .set("text-anchor", "middle")
        .set("font-size", theme.font_size)
        .set("font-family", "sans-serif");

    let y_label = {
        let (x, y) = (0.25 * MARGIN_LEFT, area.y_min + 0.5 * area.height);
        Text::new(Y_LABEL)
            .set("x", x)
            .set("y", y)
            .set("text-anchor", "middle")
            .set("transform", format!("rotate(-90 {x} {y})"))
            .set("font-size", theme.font_size)
            .set("font-family", "sans-serif")
    };

    Document::new()
        .set("viewBox", (0.0, 0.0, chart_width, chart_height))
        .set("width", chart_width)
        .set("height", chart_height)
        .add(background)
        .add(title)
        .add(grid)
        .add(axes)
        .add(x_label)
        .add(y_label)
}

fn tick_mark(x: f32, y: f32, options: &ChartOptions) -> Line {
    Line::new()
        .set("x1", x)
        .set("y1", y)
        .set("x2", x)
        .set("y2", y + 5.0)
        .set("stroke", format!("{}", options.theme.axis_color))
        .set("stroke-width", options.theme.stroke_width)
}

fn tick_label(x: f32, y: f32, label: &str, options: &ChartOptions) -> Text {
    Text::new(label)
        .set("x", x)
        .set("y", y + 8.0 + options.theme.font_size)
        .set("text-anchor", "middle")
        .set("font-size", options.theme.font_size)
        .set("font-family", "monospace")
}
