// File: crates/tsplot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.
// Notes:
// - Every render call builds its own text shaper, surfaces and paints; they
//   are dropped on every exit path, early errors included.
// - File output is staged next to the target and renamed into place only
//   after the whole image has been encoded and written.

use std::io::Write;
use std::path::Path;

use skia_safe as skia;

use crate::config::{Marker, PlotConfig, PlotMetadata};
use crate::error::{PlotError, Result};
use crate::layout::{Layout, LayoutEngine};
use crate::scale::{ScaleGroup, Scales};
use crate::series::DataSeries;
use crate::text::{TextMeasure, TextShaper};
use crate::types::{
    FOOTER_OFFSET, LEGEND_ROW_GAP, LEGEND_SWATCH_LEN, LEGEND_TEXT_OFFSET, MARKER_HALF_HEIGHT,
    TICK_LABEL_OFFSET, TICK_MARK_LEN, VERTICAL_GRID_STEP,
};

#[derive(Clone, Debug, Default)]
pub struct Chart {
    series: Vec<DataSeries>,
    bounds: Option<(f64, f64)>,
    markers: Vec<Marker>,
    metadata: PlotMetadata,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a series. Series registered first are drawn on top.
    ///
    /// Fails when its length differs from the series already registered.
    pub fn add_series(&mut self, series: DataSeries) -> Result<()> {
        if let Some(first) = self.series.first() {
            check_shape(&series, first.len())?;
        }
        self.series.push(series);
        Ok(())
    }

    pub fn with_series(series: impl IntoIterator<Item = DataSeries>) -> Result<Self> {
        let mut chart = Self::new();
        for s in series {
            chart.add_series(s)?;
        }
        Ok(chart)
    }

    pub fn series(&self) -> &[DataSeries] {
        &self.series
    }

    pub fn sample_count(&self) -> usize {
        self.series.first().map(DataSeries::len).unwrap_or(0)
    }

    /// Join all scales and force the shared range to cover `[y_min, y_max]`,
    /// regardless of the config's join flag.
    pub fn join_with_bounds(&mut self, y_min: f64, y_max: f64) {
        self.bounds = Some((y_min, y_max));
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn with_metadata(mut self, metadata: PlotMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn set_metadata(&mut self, metadata: PlotMetadata) {
        self.metadata = metadata;
    }

    pub fn metadata(&self) -> &PlotMetadata {
        &self.metadata
    }

    /// Effective scale for every series under `cfg`.
    pub fn scales(&self, cfg: &PlotConfig) -> Scales {
        let visible = self.series.iter().filter(|s| s.is_visible());
        match self.bounds {
            Some((lo, hi)) => Scales::Joined(ScaleGroup::join_with_bounds(visible, lo, hi)),
            None if cfg.join_scales => ScaleGroup::join(visible).map_or(Scales::Independent, Scales::Joined),
            None => Scales::Independent,
        }
    }

    /// Check everything a render would reject, before any drawing.
    pub fn validate(&self, cfg: &PlotConfig) -> Result<()> {
        cfg.validate()?;
        if let Some((lo, hi)) = self.bounds {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(PlotError::InvalidConfig(format!(
                    "forced bounds must be finite, got [{lo}, {hi}]"
                )));
            }
        }
        let first = self.series.first().ok_or(PlotError::NoSeries)?;
        for s in &self.series {
            check_shape(s, first.len())?;
        }
        for m in &self.markers {
            if m.series >= self.series.len() || m.index >= first.len() {
                return Err(PlotError::MarkerOutOfRange { series: m.series, index: m.index });
            }
        }
        Ok(())
    }

    /// Compute the layout the renderer would use, measuring text with `metrics`.
    pub fn layout<M: TextMeasure + ?Sized>(&self, cfg: &PlotConfig, metrics: &M) -> Result<Layout> {
        self.prepare(cfg, metrics).map(|(_, layout)| layout)
    }

    fn prepare<M: TextMeasure + ?Sized>(&self, cfg: &PlotConfig, metrics: &M) -> Result<(Scales, Layout)> {
        self.validate(cfg)?;
        let scales = self.scales(cfg);
        let layout = LayoutEngine::new(cfg, metrics).compute(&self.series, &scales, self.metadata.appendix.as_ref());
        Ok((scales, layout))
    }

    /// Render the chart into an in-memory Skia image.
    pub fn render_image(&self, cfg: &PlotConfig) -> Result<skia::Image> {
        let shaper = TextShaper::new();
        let (scales, layout) = self.prepare(cfg, &shaper)?;

        let mut surface = new_surface(layout.width, layout.height)?;
        let canvas = surface.canvas();
        canvas.clear(cfg.background);

        if cfg.draw_labels {
            draw_header(canvas, cfg, &layout, &self.series, &self.metadata, &shaper);
            draw_footer(canvas, cfg, &self.metadata, &shaper);
        }
        draw_grid(canvas, cfg, &layout);
        draw_series(canvas, &layout, &self.series, &scales);
        draw_markers(canvas, &layout, &self.series, &self.markers, &scales);
        draw_frame(canvas, cfg, &layout);
        draw_scales(canvas, cfg, &layout, &shaper);
        draw_rule(canvas, cfg, &layout);
        draw_legend(canvas, cfg, &layout, &self.series, &shaper);

        let image = surface.image_snapshot();
        if layout.appendix_lines.is_empty() {
            return Ok(image);
        }
        rehost_with_appendix(&image, cfg, &layout, &shaper)
    }

    /// Render the chart to PNG bytes.
    pub fn render_to_png_bytes(&self, cfg: &PlotConfig) -> Result<Vec<u8>> {
        let image = self.render_image(cfg)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(PlotError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    ///
    /// The image is written to a temporary file in the target directory and
    /// renamed over the target only once complete, so a failed render never
    /// leaves a partial file behind.
    pub fn render_to_png(&self, cfg: &PlotConfig, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(cfg)?;

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;
        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        staged.write_all(&bytes)?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|e| PlotError::Io(e.error))?;
        log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

fn check_shape(series: &DataSeries, expected: usize) -> Result<()> {
    if series.len() != expected {
        return Err(PlotError::ShapeMismatch {
            description: series.description().to_string(),
            expected,
            actual: series.len(),
        });
    }
    Ok(())
}

/// Header summary for a tracked series: first, last, delta and percent change.
pub fn summary_line(label: &str, first: f64, last: f64, unit: &str) -> String {
    let delta = last - first;
    let pct = if first != 0.0 {
        format!("{:7.2}", delta / first * 100.0)
    } else {
        format!("{:>7}", "n/a")
    };
    format!("{label}: {first:8.2}{unit} ---> {last:8.2}{unit}  ({delta:8.2}{unit} or {pct} %)")
}

/// Left header block: sample count and title, then one summary per tracked series.
pub fn header_text(sample_count: usize, series: &[DataSeries], meta: &PlotMetadata) -> String {
    let mut lines = vec![match &meta.title {
        Some(title) => format!("{sample_count} data points, {title}"),
        None => format!("{sample_count} data points"),
    }];
    lines.extend(series.iter().filter_map(|s| {
        s.summary_label().map(|label| summary_line(label, s.first(), s.last(), &meta.unit))
    }));
    lines.join("\n")
}

/// Right header: when and where the plot was generated.
pub fn generation_text(meta: &PlotMetadata) -> Option<String> {
    let at = meta
        .generated_at
        .map(|t| t.format("%A, %Y-%b-%d %H:%M:%S%.6f").to_string());
    match (at, meta.environment.as_deref()) {
        (Some(at), Some(env)) => Some(format!("Generated on {at} by {env}")),
        (Some(at), None) => Some(format!("Generated on {at}")),
        (None, Some(env)) => Some(format!("Generated by {env}")),
        (None, None) => None,
    }
}

/// Footer block: caller lines followed by the provenance line.
pub fn footer_text(meta: &PlotMetadata) -> Option<String> {
    let mut lines = meta.footer.clone();
    if let Some(p) = &meta.provenance {
        lines.push(format!("source> {p}"));
    }
    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

// ---- helpers ----------------------------------------------------------------

fn new_surface(width: i32, height: i32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width, height)).ok_or(PlotError::Surface { width, height })
}

fn pen(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint
}

fn draw_header(
    canvas: &skia::Canvas,
    cfg: &PlotConfig,
    layout: &Layout,
    series: &[DataSeries],
    meta: &PlotMetadata,
    text: &TextShaper,
) {
    let left = header_text(layout.sample_count, series, meta);
    text.draw_top_left(canvas, &left, 0.0, 0.0, cfg.font_height, cfg.text_color);
    if let Some(right) = generation_text(meta) {
        let x = cfg.border as f32 + text.text_width(&left, cfg.font_height);
        text.draw_top_left(canvas, &right, x, 0.0, cfg.font_height, cfg.text_color);
    }
}

fn draw_footer(canvas: &skia::Canvas, cfg: &PlotConfig, meta: &PlotMetadata, text: &TextShaper) {
    if let Some(footer) = footer_text(meta) {
        let y = (cfg.height - cfg.border as i32) as f32 + FOOTER_OFFSET;
        text.draw_top_left(canvas, &footer, 0.0, y, cfg.font_height, cfg.text_color);
    }
}

fn draw_grid(canvas: &skia::Canvas, cfg: &PlotConfig, layout: &Layout) {
    let paint = pen(cfg.grid_color);
    let plot = layout.mapper.plot_rect();

    // horizontals, one per interior tick row
    for i in 1..layout.tick_count {
        let y = plot.top + i as f32 * plot.height() / layout.tick_count as f32;
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
    // verticals
    for i in (1..layout.sample_count).step_by(VERTICAL_GRID_STEP) {
        let x = plot.left + (i as f64 * cfg.width_factor) as f32;
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
}

fn draw_series(canvas: &skia::Canvas, layout: &Layout, series: &[DataSeries], scales: &Scales) {
    let count = layout.sample_count;
    let mapper = &layout.mapper;
    // Reverse registration order: the first series ends up on top.
    let pens: Vec<(&DataSeries, skia::Paint)> = series
        .iter()
        .rev()
        .filter(|s| s.is_visible())
        .map(|s| (s, pen(s.color())))
        .collect();

    for i in 1..count {
        let px = (i - 1) as f64 / count as f64;
        let cx = i as f64 / count as f64;
        for (s, paint) in &pens {
            let p1 = mapper.map(px, scales.transform(s, s.get(i - 1)));
            let p2 = mapper.map(cx, scales.transform(s, s.get(i)));
            if let (Some(p1), Some(p2)) = (p1, p2) {
                canvas.draw_line(p1, p2, paint);
            }
        }
    }
}

fn draw_markers(canvas: &skia::Canvas, layout: &Layout, series: &[DataSeries], markers: &[Marker], scales: &Scales) {
    let count = layout.sample_count.max(1) as f64;
    for m in markers {
        let Some(s) = series.get(m.series) else { continue };
        let fx = m.index as f64 / count;
        let fy = scales.transform(s, s.get(m.index));
        let lo = layout.mapper.map(fx, fy - MARKER_HALF_HEIGHT);
        let hi = layout.mapper.map(fx, fy + MARKER_HALF_HEIGHT);
        if let (Some(lo), Some(hi)) = (lo, hi) {
            canvas.draw_line(lo, hi, &pen(m.color));
        }
    }
}

fn draw_frame(canvas: &skia::Canvas, cfg: &PlotConfig, layout: &Layout) {
    let plot = layout.mapper.plot_rect();
    let rect = skia::Rect::from_xywh(plot.left - 1.0, plot.top - 1.0, plot.width() + 2.0, plot.height() + 2.0);
    canvas.draw_rect(rect, &pen(cfg.text_color));
}

fn draw_scales(canvas: &skia::Canvas, cfg: &PlotConfig, layout: &Layout, text: &TextShaper) {
    let plot = layout.mapper.plot_rect();
    let step = plot.height() / layout.tick_count as f32;
    for column in &layout.columns {
        let paint = pen(column.color);
        for (i, label) in column.labels.iter().enumerate() {
            let y = plot.top + i as f32 * step;
            canvas.draw_line((column.left, y), (column.left + TICK_MARK_LEN, y), &paint);
            if cfg.draw_labels {
                let ty = y - cfg.font_height / 2.0;
                text.draw_top_left(canvas, &label.text, column.left + TICK_LABEL_OFFSET, ty, cfg.font_height, column.color);
            }
        }
    }
}

fn draw_rule(canvas: &skia::Canvas, cfg: &PlotConfig, layout: &Layout) {
    let plot = layout.mapper.plot_rect();
    let x = layout.rule_x();
    canvas.draw_line((x, plot.top), (x, plot.bottom), &pen(cfg.text_color));
}

fn draw_legend(canvas: &skia::Canvas, cfg: &PlotConfig, layout: &Layout, series: &[DataSeries], text: &TextShaper) {
    let x = layout.legend_x();
    let mut y = layout.mapper.plot_rect().top;
    for s in series.iter().filter(|s| s.is_visible()) {
        let swatch_y = y + cfg.font_height / 1.7;
        canvas.draw_line((x, swatch_y), (x + LEGEND_SWATCH_LEN, swatch_y), &pen(s.color()));
        if cfg.draw_labels {
            text.draw_top_left(canvas, s.description(), x + LEGEND_TEXT_OFFSET, y, cfg.font_height, cfg.text_color);
        }
        y += cfg.font_height + LEGEND_ROW_GAP;
    }
}

/// Copy the finished plot into a taller canvas and print the appendix beneath it.
fn rehost_with_appendix(plot: &skia::Image, cfg: &PlotConfig, layout: &Layout, text: &TextShaper) -> Result<skia::Image> {
    let mut surface = new_surface(layout.width, layout.total_height)?;
    let canvas = surface.canvas();
    canvas.clear(cfg.background);
    canvas.draw_image(plot, (0.0, 0.0), None);
    if cfg.draw_labels {
        let body = layout.appendix_lines.join("\n");
        text.draw_top_left(canvas, &body, 0.0, layout.height as f32 + 1.0, cfg.font_height, cfg.text_color);
    }
    Ok(surface.image_snapshot())
}
