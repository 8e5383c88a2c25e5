// File: crates/barchart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::error::ChartError;
use crate::grid::{format_tick, ticks};
use crate::palette::Palette;
use crate::scale::{BandScale, ValueScale};
use crate::series::BarSeries;
use crate::text::TextShaper;
use crate::types::{
    Insets, BAR_FILL_FRACTION, HEIGHT, LARGE_FONT_SCALE, TICK_ROTATION_DEGREES, WIDTH,
    Y_MARGIN_FRAC,
};
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    /// Disable all text for byte-deterministic output across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::from_argb(255, 234, 234, 242), // light gray plot ground
            draw_labels: true,
        }
    }
}

/// One single-row bar chart: validated bar data, a title, a palette, and the
/// two presentation flags. Built once, rendered, discarded.
pub struct Chart {
    pub bars: BarSeries,
    pub title: String,
    pub palette: Palette,
    pub y_axis: Axis,
    /// Rotate x tick labels by 45 degrees.
    pub rotate_labels: bool,
    /// Scale all text by 1.4x.
    pub large_font: bool,
}

impl Chart {
    pub fn new(bars: BarSeries, title: impl Into<String>, palette: Palette) -> Self {
        let y_axis = autoscaled_axis(&bars);
        Self {
            bars,
            title: title.into(),
            palette,
            y_axis,
            rotate_labels: false,
            large_font: false,
        }
    }

    /// Recompute the y-axis range from the bar values.
    pub fn autoscale_y(&mut self) {
        self.y_axis = autoscaled_axis(&self.bars);
    }

    fn font_scale(&self) -> f32 {
        if self.large_font { LARGE_FONT_SCALE } else { 1.0 }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_artifact(output_png_path.as_ref(), &bytes)
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut surface = raster_surface(opts)?;
        self.draw(surface.canvas(), opts);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Backend("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart and return `(pixels, width, height, stride)` as RGBA8888.
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), ChartError> {
        let mut surface = raster_surface(opts)?;
        self.draw(surface.canvas(), opts);
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Backend("read RGBA pixels failed".into()));
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render the chart to an SVG file via the Skia SVG canvas.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let bounds = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
        let mut canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, opts);
        let data = canvas.end();
        write_artifact(output_svg_path.as_ref(), data.as_bytes())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        // Background
        canvas.clear(opts.background);

        // Paddings & plot rect
        let plot_left = opts.insets.left as i32;
        let plot_right = opts.width - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = opts.height - opts.insets.bottom as i32;

        let yscale = ValueScale::new_linear(
            plot_top as f32,
            plot_bottom as f32,
            self.y_axis.min,
            self.y_axis.max,
        );
        let bands = BandScale::new(plot_left as f32, plot_right as f32, self.bars.len());
        let tick_values = ticks(self.y_axis.min, self.y_axis.max, 6);

        draw_grid(canvas, plot_left, plot_right, &yscale, &tick_values);
        draw_bars(canvas, &bands, &yscale, &self.bars, &self.palette);
        draw_frame(canvas, plot_left, plot_top, plot_right, plot_bottom, &yscale);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            let fs = self.font_scale();
            draw_title(canvas, &shaper, &self.title, opts, fs);
            draw_y_ticks(canvas, &shaper, plot_left, &yscale, &tick_values, fs);
            draw_x_ticks(
                canvas,
                &shaper,
                plot_bottom,
                &bands,
                &self.bars,
                self.rotate_labels,
                fs,
            );
            if !self.y_axis.label.is_empty() {
                shaper.draw_left(
                    canvas,
                    &self.y_axis.label,
                    plot_left as f32 - 56.0,
                    plot_top as f32 + 14.0,
                    12.0 * fs,
                    skia::Color::from_argb(255, 38, 38, 38),
                    false,
                );
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn raster_surface(opts: &RenderOptions) -> Result<skia::Surface, ChartError> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| ChartError::Backend("failed to create raster surface".into()))
}

fn write_artifact(path: &std::path::Path, bytes: &[u8]) -> Result<(), ChartError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

fn autoscaled_axis(bars: &BarSeries) -> Axis {
    let (lo, hi) = bars.value_range();
    let lo = lo.min(0.0);
    let hi = hi.max(0.0);
    if lo == 0.0 && hi == 0.0 {
        return Axis::new("", 0.0, 1.0);
    }
    // Pad only the data-bearing ends; the zero baseline stays at zero.
    let margin = (hi - lo) * Y_MARGIN_FRAC;
    let min = if lo < 0.0 { lo - margin } else { 0.0 };
    let max = if hi > 0.0 { hi + margin } else { 0.0 };
    Axis::new("", min, max)
}

fn draw_grid(canvas: &skia::Canvas, l: i32, r: i32, yscale: &ValueScale, tick_values: &[f64]) {
    let mut paint = skia::Paint::default();
    paint.set_color(skia::Color::from_argb(255, 255, 255, 255));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for &v in tick_values {
        let y = yscale.to_px(v);
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
    }
}

fn draw_bars(
    canvas: &skia::Canvas,
    bands: &BandScale,
    yscale: &ValueScale,
    bars: &BarSeries,
    palette: &Palette,
) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let y0 = yscale.to_px(0.0);
    let half = bands.bar_width(BAR_FILL_FRACTION) * 0.5;

    for (i, bar) in bars.iter().enumerate() {
        let x = bands.center(i);
        let y = yscale.to_px(bar.value);

        fill.set_color(palette.color(i));

        // signed extent from the zero baseline; sub-pixel bars stay visible
        let top = y.min(y0);
        let bot = y.max(y0);
        let rect = skia::Rect::from_ltrb(x - half, top, x + half, bot.max(top + 1.0));
        canvas.draw_rect(rect, &fill);
    }
}

fn draw_frame(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, yscale: &ValueScale) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(skia::Color::from_argb(255, 70, 70, 80));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);

    // The zero baseline sits inside the plot when negative bars are present
    if yscale.vmin < 0.0 && yscale.vmax > 0.0 {
        let y0 = yscale.to_px(0.0);
        axis_paint.set_stroke_width(1.0);
        canvas.draw_line((l as f32, y0), (r as f32, y0), &axis_paint);
    }
}

fn draw_title(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    title: &str,
    opts: &RenderOptions,
    fs: f32,
) {
    if title.is_empty() {
        return;
    }
    let size = 16.0 * fs;
    shaper.draw_center(
        canvas,
        title,
        opts.width as f32 * 0.5,
        opts.insets.top as f32 - 10.0,
        size,
        skia::Color::from_argb(255, 25, 25, 30),
        false,
    );
}

fn draw_y_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    l: i32,
    yscale: &ValueScale,
    tick_values: &[f64],
    fs: f32,
) {
    let size = 11.0 * fs;
    for &v in tick_values {
        let y = yscale.to_px(v);
        shaper.draw_right(
            canvas,
            &format_tick(v),
            l as f32 - 8.0,
            y + size * 0.4,
            size,
            skia::Color::from_argb(255, 60, 60, 70),
            true,
        );
    }
}

fn draw_x_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    b: i32,
    bands: &BandScale,
    bars: &BarSeries,
    rotate: bool,
    fs: f32,
) {
    let size = 12.0 * fs;
    let color = skia::Color::from_argb(255, 38, 38, 38);
    for (i, bar) in bars.iter().enumerate() {
        let x = bands.center(i);
        if rotate {
            // canvas rotation is clockwise; slant the labels counter-clockwise
            shaper.draw_rotated_right(
                canvas,
                &bar.label,
                x,
                b as f32 + 10.0 + size,
                -TICK_ROTATION_DEGREES,
                size,
                color,
                false,
            );
        } else {
            shaper.draw_center(canvas, &bar.label, x, b as f32 + 8.0 + size, size, color, false);
        }
    }
}
