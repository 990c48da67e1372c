use crate::{
    assets::decode::PreparedImage,
    foundation::error::{DailyJokeError, DailyJokeResult},
    render::{composite::over_in_place, place::PlacedLine},
    text::measure::{TextBrushRgba8, TextLayoutEngine},
};

/// Rendered image in RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

/// Draws placed lines with `vello_cpu` and composites them over a background.
pub struct CpuTextRenderer {
    font: vello_cpu::peniko::FontData,
}

impl CpuTextRenderer {
    /// Use the same font bytes the engine measures with.
    pub fn new(engine: &TextLayoutEngine) -> Self {
        let font_bytes = engine.font_bytes().as_ref().clone();
        Self {
            font: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0),
        }
    }

    #[tracing::instrument(skip_all, fields(lines = lines.len()))]
    pub fn render(
        &self,
        engine: &mut TextLayoutEngine,
        background: &PreparedImage,
        lines: &[PlacedLine],
        color: TextBrushRgba8,
    ) -> DailyJokeResult<FrameRGBA> {
        let width_u16: u16 = background
            .width
            .try_into()
            .map_err(|_| DailyJokeError::render("background width exceeds u16"))?;
        let height_u16: u16 = background
            .height
            .try_into()
            .map_err(|_| DailyJokeError::render("background height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        for line in lines {
            self.draw_line(&mut ctx, engine, line, color)?;
        }
        ctx.flush();

        let mut text_layer = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.render_to_pixmap(&mut text_layer);

        let mut data = background.rgba8_premul.clone();
        over_in_place(&mut data, text_layer.data_as_u8_slice())?;

        Ok(FrameRGBA {
            width: background.width,
            height: background.height,
            data,
            premultiplied: true,
        })
    }

    fn draw_line(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        engine: &mut TextLayoutEngine,
        line: &PlacedLine,
        color: TextBrushRgba8,
    ) -> DailyJokeResult<()> {
        let layout = engine.layout_line(&line.text, line.size, color)?;
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(line.x),
            f64::from(line.y),
        )));

        for layout_line in layout.lines() {
            for item in layout_line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                // Pen advance and baseline applied; `glyphs()` only yields cluster offsets.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }
}
