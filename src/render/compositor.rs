use crate::foundation::error::{TextcardError, TextcardResult};
use crate::foundation::math::lerp_u8;
use crate::geometry::shape::ShapeDescriptor;
use crate::layout::wrap::wrap;
use crate::render::blur::blur_rgba8_premul;
use crate::scene::config::RenderConfig;
use crate::scene::palette::Rgba8;
use crate::text::styler::{TextBrushRgba8, TextStyler};
use std::sync::Arc;

// Base font size is min(width, height) / 10 before the shape's scale applies.
const BASE_FONT_DIVISOR: f64 = 10.0;
const LINE_HEIGHT_FACTOR: f64 = 1.2;

const SHADOW_OFFSET: f64 = 2.0;
const SHADOW_BLUR_RADIUS: u32 = 4;
const SHADOW_SIGMA: f32 = 2.0;
const SHADOW_ALPHA: u8 = 128;

/// One composited frame in straight-alpha RGBA8, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

/// CPU compositor backed by `vello_cpu`.
///
/// Holds the render context across calls so repeated renders at the same
/// dimensions reuse its internal buffers. No state leaks between renders: the
/// context is reset at the start of every pass.
pub(crate) struct Compositor {
    ctx: Option<vello_cpu::RenderContext>,
}

impl Compositor {
    pub(crate) fn new() -> Self {
        Self { ctx: None }
    }

    /// Compose one frame: clip, gradient fill, shadowed centered text.
    ///
    /// `config` must already be validated; `desc` is the resolved shape.
    pub(crate) fn compose(
        &mut self,
        config: &RenderConfig,
        desc: &ShapeDescriptor,
        styler: &mut TextStyler,
    ) -> TextcardResult<FrameRgba> {
        let (width, height) = (config.width, config.height);
        let w16: u16 = width
            .try_into()
            .map_err(|_| TextcardError::render("canvas width exceeds u16"))?;
        let h16: u16 = height
            .try_into()
            .map_err(|_| TextcardError::render("canvas height exceeds u16"))?;
        let (w, h) = (f64::from(width), f64::from(height));
        let scheme = config.colors();

        let font_size = (w.min(h) / BASE_FONT_DIVISOR) * desc.safe_area.font_scale;
        let font_px = font_size as f32;

        let text = config.text.trim();
        let lines = wrap(
            text,
            |candidate| styler.measure(candidate, font_px),
            desc.safe_area.width,
        );
        tracing::debug!(lines = lines.len(), font_size, "laid out text block");

        let brush = TextBrushRgba8 {
            r: scheme.text.r,
            g: scheme.text.g,
            b: scheme.text.b,
            a: scheme.text.a,
        };
        let layouts: Vec<parley::Layout<TextBrushRgba8>> = lines
            .iter()
            .map(|line| styler.layout_line(line, font_px, brush))
            .collect();

        // The block is centered on the safe area's center; each line is then
        // anchored at the visual center of its own bounding box.
        let line_height = font_size * LINE_HEIGHT_FACTOR;
        let block_height = layouts.len() as f64 * line_height;
        let center_x = w / 2.0 + desc.safe_area.offset_x;
        let first_center_y =
            h / 2.0 + desc.safe_area.offset_y - block_height / 2.0 + line_height / 2.0;
        let centers: Vec<f64> = (0..layouts.len())
            .map(|i| first_center_y + i as f64 * line_height)
            .collect();

        let font = styler.font().cloned();

        // Shadow pass: glyphs alone on a transparent surface, blurred, then
        // composited under the crisp text inside the clip.
        let shadow_img = match &font {
            Some(font) => {
                let raw = self.render_glyph_surface(
                    w16,
                    h16,
                    &layouts,
                    &centers,
                    font,
                    shadow_color(scheme.text),
                    center_x + SHADOW_OFFSET,
                    SHADOW_OFFSET,
                )?;
                let blurred =
                    blur_rgba8_premul(&raw, width, height, SHADOW_BLUR_RADIUS, SHADOW_SIGMA)?;
                Some(rgba_premul_to_image(&blurred, width, height)?)
            }
            None => None,
        };

        let gradient =
            linear_gradient_image(scheme.background[0], scheme.background[1], width, height)?;
        let text_paint = vello_cpu::peniko::Color::from_rgba8(
            scheme.text.r,
            scheme.text.g,
            scheme.text.b,
            scheme.text.a,
        );

        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        self.with_ctx_mut(w16, h16, |ctx| {
            let clip = desc.clip.as_ref().map(bezpath_to_cpu);
            if let Some(clip) = &clip {
                ctx.push_clip_layer(clip);
            }

            // Gradient across the full canvas; the clip keeps paint inside
            // the shape.
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(gradient);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));

            if let Some(img) = shadow_img {
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(img);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
            }

            if let Some(font) = &font {
                for (layout, &cy) in layouts.iter().zip(&centers) {
                    ctx.set_paint(text_paint);
                    draw_line_glyphs(ctx, font, layout, center_x, cy);
                }
            }

            if clip.is_some() {
                ctx.pop_layer();
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        Ok(FrameRgba {
            width,
            height,
            data,
        })
    }

    /// Render the line glyphs alone onto a transparent surface and return its
    /// premultiplied bytes.
    #[allow(clippy::too_many_arguments)]
    fn render_glyph_surface(
        &mut self,
        w16: u16,
        h16: u16,
        layouts: &[parley::Layout<TextBrushRgba8>],
        centers: &[f64],
        font: &vello_cpu::peniko::FontData,
        paint: vello_cpu::peniko::Color,
        center_x: f64,
        offset_y: f64,
    ) -> TextcardResult<Vec<u8>> {
        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        self.with_ctx_mut(w16, h16, |ctx| {
            for (layout, &cy) in layouts.iter().zip(centers) {
                ctx.set_paint(paint);
                draw_line_glyphs(ctx, font, layout, center_x, cy + offset_y);
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;
        Ok(pixmap.data_as_u8_slice().to_vec())
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> TextcardResult<R>,
    ) -> TextcardResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

/// Draw one shaped line with its anchor at the visual center of the line's
/// bounding box.
fn draw_line_glyphs(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrushRgba8>,
    center_x: f64,
    center_y: f64,
) {
    let line_w = f64::from(layout.width());
    let line_h = f64::from(layout.height());
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        center_x - line_w / 2.0,
        center_y - line_h / 2.0,
    )));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

// White text gets a dark shadow, anything else a light one, so the text stays
// legible against both ends of the gradient.
fn shadow_color(text: Rgba8) -> vello_cpu::peniko::Color {
    if text.is_white() {
        vello_cpu::peniko::Color::from_rgba8(0, 0, 0, SHADOW_ALPHA)
    } else {
        vello_cpu::peniko::Color::from_rgba8(255, 255, 255, SHADOW_ALPHA)
    }
}

/// Rasterize the corner-to-corner linear gradient as an image paint.
///
/// `t` for each pixel is its projection onto the (0,0)→(w,h) diagonal. Both
/// stops are opaque, so straight and premultiplied bytes coincide.
fn linear_gradient_image(
    start: Rgba8,
    end: Rgba8,
    width: u32,
    height: u32,
) -> TextcardResult<vello_cpu::Image> {
    let mut bytes = vec![0u8; (width as usize).saturating_mul(height as usize).saturating_mul(4)];
    let dx = width as f32;
    let dy = height as f32;
    let denom = dx * dx + dy * dy;
    for y in 0..height {
        for x in 0..width {
            let t = if denom <= 0.0 {
                0.0
            } else {
                (((x as f32) + 0.5) * dx + ((y as f32) + 0.5) * dy) / denom
            };
            let t = t.clamp(0.0, 1.0);
            let idx = ((y as usize) * (width as usize) + (x as usize)) * 4;
            bytes[idx] = lerp_u8(start.r, end.r, t);
            bytes[idx + 1] = lerp_u8(start.g, end.g, t);
            bytes[idx + 2] = lerp_u8(start.b, end.b, t);
            bytes[idx + 3] = lerp_u8(start.a, end.a, t);
        }
    }
    rgba_premul_to_image(&bytes, width, height)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> TextcardResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| TextcardError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| TextcardError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(TextcardError::render("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> TextcardResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in 0..3 {
            px[c] = ((u16::from(px[c]) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
