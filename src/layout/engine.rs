//! Block layout: turns parsed blocks into positioned page primitives.

use crate::blocks::Block;
use crate::config::LayoutConfig;
use crate::document::Document;
use crate::elements::TextContent;
use crate::error::Result;
use crate::layout::context::LayoutContext;
use crate::layout::table::{TableLayout, TableStyle};
use crate::layout::wrap::wrap;
use crate::layout::FontWeight;
use crate::sanitize::sanitize;
use crate::writer::font_manager::FontPair;
use crate::writer::page_template::PageTemplate;
use crate::writer::table_renderer::TableRenderer;

/// Lays out blocks onto pages.
#[derive(Debug)]
pub struct LayoutEngine<'a> {
    config: &'a LayoutConfig,
    fonts: FontPair<'a>,
    table_style: TableStyle,
    table_renderer: TableRenderer,
}

impl<'a> LayoutEngine<'a> {
    /// Create an engine measuring text with `fonts`.
    pub fn new(config: &'a LayoutConfig, fonts: FontPair<'a>) -> Self {
        Self {
            config,
            fonts,
            table_style: TableStyle::from_config(config),
            table_renderer: TableRenderer::from_config(config),
        }
    }

    /// Lay out all blocks into a new document.
    pub fn layout(&self, blocks: &[Block]) -> Result<Document> {
        let mut ctx = LayoutContext::new(self.config, PageTemplate::from_config(self.config));
        for block in blocks {
            self.emit_block(&mut ctx, block)?;
        }
        Ok(ctx.finish())
    }

    /// Emit one block at the context's cursor.
    pub fn emit_block(&self, ctx: &mut LayoutContext, block: &Block) -> Result<()> {
        match block {
            Block::Heading { level, text } => self.emit_heading(ctx, *level, text),
            Block::Paragraph { text } => self.emit_paragraph(ctx, text),
            Block::Blank => {
                ctx.advance(self.config.line_height / 2.0);
                Ok(())
            },
            Block::Table { header, rows } => self.emit_table(ctx, header, rows),
        }
    }

    fn emit_heading(&self, ctx: &mut LayoutContext, level: u8, text: &str) -> Result<()> {
        let size = self.config.heading_size(level);
        let required = self.config.line_height + self.config.heading_spacing;
        let advance = self.config.heading_advance(level);
        if sanitize(text).trim().is_empty() {
            ctx.ensure(required);
            ctx.advance(advance);
            return Ok(());
        }
        self.emit_lines(ctx, text, FontWeight::Bold, size, required, advance)
    }

    fn emit_paragraph(&self, ctx: &mut LayoutContext, text: &str) -> Result<()> {
        let line_height = self.config.line_height;
        self.emit_lines(ctx, text, FontWeight::Normal, self.config.body_size, line_height, line_height)
    }

    /// Wrap `text` at the usable width and emit each line as an atomic unit.
    fn emit_lines(
        &self,
        ctx: &mut LayoutContext,
        text: &str,
        weight: FontWeight,
        size: f32,
        required: f32,
        advance: f32,
    ) -> Result<()> {
        let lines = wrap(
            text,
            self.fonts.get(weight),
            size,
            self.config.usable_width(),
            self.config.padding_x,
        )?;
        for line in lines {
            ctx.ensure(required);
            let y = ctx.cursor_y();
            ctx.page()?.push(
                TextContent::new(line, self.config.margin_left, y, size)
                    .with_weight(weight)
                    .with_color(self.config.text_color),
            );
            ctx.advance(advance);
        }
        Ok(())
    }

    fn emit_table(
        &self,
        ctx: &mut LayoutContext,
        header: &[String],
        rows: &[Vec<String>],
    ) -> Result<()> {
        let layout = TableLayout::calculate(
            header,
            rows,
            self.config.usable_width(),
            self.fonts,
            &self.table_style,
        )?;
        if layout.is_empty() {
            log::debug!("skipping table without columns");
            return Ok(());
        }

        let reserve = self.config.table_reserve;
        if layout.total_height + reserve > ctx.capacity() {
            let chunks = layout.split_rows(ctx.capacity() - reserve);
            log::warn!(
                "table of {:.1}pt exceeds page capacity {:.1}pt; splitting into {} parts",
                layout.total_height,
                ctx.capacity(),
                chunks.len()
            );
            for chunk in &chunks {
                self.place_table(ctx, chunk)?;
            }
        } else {
            self.place_table(ctx, &layout)?;
        }

        if ctx.take_legend() {
            self.emit_legend(ctx)?;
        }
        Ok(())
    }

    /// Place a table as one unit, moving it to a new page when it does not fit.
    fn place_table(&self, ctx: &mut LayoutContext, layout: &TableLayout) -> Result<()> {
        ctx.ensure(layout.total_height + self.config.table_reserve);
        ctx.advance(self.config.table_space_before);
        let top = ctx.cursor_y();
        self.table_renderer
            .render(ctx.page()?, layout, self.config.margin_left, top);
        ctx.set_cursor(top - layout.total_height - self.config.table_space_after);
        Ok(())
    }

    fn emit_legend(&self, ctx: &mut LayoutContext) -> Result<()> {
        for line in &self.config.legend {
            self.emit_paragraph(ctx, line)?;
        }
        ctx.advance(self.config.legend_spacing);
        Ok(())
    }
}
