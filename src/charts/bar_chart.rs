use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use plotters::prelude::*;
use std::fmt::Display;

use crate::charts::errors::ChartError;

pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub const SALMON: RGBColor = RGBColor(250, 128, 114);

const SVG_MIME_TYPE: &str = "image/svg+xml";
const HEADROOM: f64 = 1.1;

/// A single bar chart, described by value and rendered on demand.
///
/// Nothing is shared between charts: every render builds its own backend and buffer.
#[derive(Debug, Clone)]
pub struct BarChart {
    title: String,
    x_label: String,
    y_label: String,
    color: RGBColor,
    bars: Vec<(String, f64)>
}

/// A rendered chart encoded as base64, ready to inline in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedChart {
    pub mime_type: &'static str,
    pub base64: String
}

impl EncodedChart {
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            color: SKY_BLUE,
            bars: Vec::new()
        }
    }

    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_bars<I, L>(mut self, bars: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>
    {
        self.bars = bars.into_iter().map(|(label, value)| (label.into(), value)).collect();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bars(&self) -> &[(String, f64)] {
        &self.bars
    }

    /// Draws the chart as an SVG document.
    ///
    /// # Errors
    /// Returns `ChartError::EmptySeries` when there are no bars, or `ChartError::Render`
    /// if the drawing backend fails.
    pub fn render_svg(&self, size: (u32, u32)) -> Result<String, ChartError> {
        if self.bars.is_empty() {
            return Err(ChartError::EmptySeries(self.title.clone()));
        }

        let (floor, ceiling) = self.value_range();
        let bar_count = self.bars.len() as u32;
        let label_formatter = |segment: &SegmentValue<u32>| match segment {
            SegmentValue::CenterOf(index) => self.bars.get(*index as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new()
        };

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", 24))
                .margin(20)
                .x_label_area_size(160)
                .y_label_area_size(80)
                .build_cartesian_2d((0u32..bar_count).into_segmented(), floor..ceiling)
                .map_err(render_error)?;

            chart.configure_mesh()
                .disable_x_mesh()
                .x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .x_labels(self.bars.len())
                .x_label_style(("sans-serif", 13).into_font().transform(FontTransform::Rotate90))
                .x_label_formatter(&label_formatter)
                .draw()
                .map_err(render_error)?;

            chart.draw_series(
                Histogram::vertical(&chart)
                    .style(self.color.filled())
                    .margin(6)
                    .data(self.bars.iter().enumerate().map(|(index, (_, value))| (index as u32, *value)))
            ).map_err(render_error)?;

            root.present().map_err(render_error)?;
        }

        Ok(svg)
    }

    pub fn render_base64(&self, size: (u32, u32)) -> Result<EncodedChart, ChartError> {
        let svg = self.render_svg(size)?;

        Ok(EncodedChart {
            mime_type: SVG_MIME_TYPE,
            base64: STANDARD.encode(svg.as_bytes())
        })
    }

    // The range always includes zero.
    fn value_range(&self) -> (f64, f64) {
        let values = self.bars.iter().map(|(_, value)| *value).filter(|value| value.is_finite());
        let (minimum, maximum) = values.fold((0f64, 0f64), |(low, high), value| (low.min(value), high.max(value)));

        if maximum <= minimum {
            return (minimum, minimum + 1.0);
        }

        (minimum * HEADROOM, maximum * HEADROOM)
    }
}

fn render_error<E: Display>(error: E) -> ChartError {
    ChartError::Render(error.to_string())
}
