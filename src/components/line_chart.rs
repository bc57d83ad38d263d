//! Line Chart Component
//!
//! Single-series line chart drawn on an HTML5 canvas, used for telemetry
//! traces (speed over lap distance).

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas size and plot margins
const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Default series color (F1 red)
const DEFAULT_COLOR: &str = "#FF1801";

/// Data bounds for the plot area, y padded so the trace never touches the
/// frame
#[derive(Clone, Copy, Debug, PartialEq)]
struct PlotBounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl PlotBounds {
    /// Compute bounds from a series; `None` when there is nothing to plot
    fn from_series(series: &[(f64, f64)]) -> Option<Self> {
        if series.is_empty() {
            return None;
        }

        let mut bounds = Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };

        for &(x, y) in series {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }

        // Pad the y range; degenerate ranges get a unit of headroom
        let y_range = bounds.max_y - bounds.min_y;
        let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
        bounds.min_y -= y_padding;
        bounds.max_y += y_padding;

        if bounds.min_x == bounds.max_x {
            bounds.min_x -= 1.0;
            bounds.max_x += 1.0;
        }

        Some(bounds)
    }

    /// Map a data point into canvas coordinates (canvas y grows downward)
    fn scale(&self, x: f64, y: f64) -> (f64, f64) {
        let chart_width = CANVAS_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let chart_height = CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

        let px = MARGIN_LEFT + (x - self.min_x) / (self.max_x - self.min_x) * chart_width;
        let py = MARGIN_TOP + (self.max_y - y) / (self.max_y - self.min_y) * chart_height;

        (px, py)
    }
}

/// Single-series canvas line chart
#[component]
pub fn LineChart(
    /// (x, y) pairs, assumed ordered by x
    series: Vec<(f64, f64)>,
    /// Chart heading
    #[prop(optional, into)]
    title: String,
    /// Series color
    #[prop(default = DEFAULT_COLOR)]
    color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_series(&canvas, &series, color);
        }
    });

    view! {
        <div>
            {(!title.is_empty()).then(|| view! {
                <h4 class="text-lg font-medium text-gray-200 mb-4">{title.clone()}</h4>
            })}
            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="w-full h-64 rounded-lg"
            />
        </div>
    }
}

/// Draw the series on canvas
fn draw_series(canvas: &HtmlCanvasElement, series: &[(f64, f64)], color: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    let Some(bounds) = PlotBounds::from_series(series) else {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", CANVAS_WIDTH / 2.0 - 30.0, CANVAS_HEIGHT / 2.0);
        return;
    };

    let chart_width = CANVAS_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    // Grid lines and y-axis labels (5 divisions)
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(CANVAS_WIDTH - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = bounds.max_y - (i as f64 / 5.0) * (bounds.max_y - bounds.min_y);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // The series line
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, &(x, y)) in series.iter().enumerate() {
        let (px, py) = bounds.scale(x, y);
        if i == 0 {
            ctx.move_to(px, py);
        } else {
            ctx.line_to(px, py);
        }
    }

    ctx.stroke();

    // X-axis labels (5 divisions)
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let value = bounds.min_x + (i as f64 / 5.0) * (bounds.max_x - bounds.min_x);
        let x = MARGIN_LEFT + (i as f64 / 5.0) * chart_width;
        let _ = ctx.fill_text(&format!("{:.0}", value), x - 15.0, CANVAS_HEIGHT - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_empty_series() {
        assert_eq!(PlotBounds::from_series(&[]), None);
    }

    #[test]
    fn test_bounds_pad_y_range() {
        let bounds = PlotBounds::from_series(&[(0.0, 100.0), (500.0, 300.0)]).unwrap();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 500.0);
        // 10% padding on a 200-unit range
        assert_eq!(bounds.min_y, 80.0);
        assert_eq!(bounds.max_y, 320.0);
    }

    #[test]
    fn test_bounds_degenerate_ranges_get_headroom() {
        let bounds = PlotBounds::from_series(&[(50.0, 7.0)]).unwrap();
        assert!(bounds.min_x < 50.0 && bounds.max_x > 50.0);
        assert!(bounds.min_y < 7.0 && bounds.max_y > 7.0);
    }

    #[test]
    fn test_scale_maps_corners_into_plot_rectangle() {
        let bounds = PlotBounds {
            min_x: 0.0,
            max_x: 100.0,
            min_y: 0.0,
            max_y: 200.0,
        };

        let (left, bottom) = bounds.scale(0.0, 0.0);
        assert_eq!(left, MARGIN_LEFT);
        assert_eq!(bottom, CANVAS_HEIGHT - MARGIN_BOTTOM);

        let (right, top) = bounds.scale(100.0, 200.0);
        assert_eq!(right, CANVAS_WIDTH - MARGIN_RIGHT);
        assert_eq!(top, MARGIN_TOP);
    }
}
