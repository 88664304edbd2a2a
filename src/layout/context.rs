//! Pagination controller.
//!
//! [`LayoutContext`] owns the document under construction together with the
//! vertical write cursor, and decides when a new page is needed. Every atomic
//! unit (a wrapped text line or a whole table) calls [`LayoutContext::ensure`]
//! with its height before it is drawn.

use crate::config::LayoutConfig;
use crate::document::{Document, Page};
use crate::error::{Error, Result};
use crate::writer::page_template::PageTemplate;

/// Whether the controller is writing on a page or between pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// Cursor is on the current page
    OnPage,
    /// Current page is finalized and the next one has not been set up yet
    AwaitingNewPage,
}

/// One-shot flag for the legend printed after the first table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendState {
    /// No table has been rendered yet
    LegendPending,
    /// The legend has been printed
    LegendEmitted,
}

/// Layout state threaded through a single render call.
#[derive(Debug)]
pub struct LayoutContext {
    document: Document,
    template: PageTemplate,
    cursor_y: f32,
    content_top: f32,
    content_floor: f32,
    state: PageState,
    legend: LegendState,
}

impl LayoutContext {
    /// Start a document with its first page and chrome already drawn.
    pub fn new(config: &LayoutConfig, template: PageTemplate) -> Self {
        let mut context = Self {
            document: Document::new(),
            template,
            cursor_y: config.content_top(),
            content_top: config.content_top(),
            content_floor: config.content_floor(),
            state: PageState::AwaitingNewPage,
            legend: LegendState::LegendPending,
        };
        context.start_page();
        context
    }

    fn start_page(&mut self) {
        debug_assert_eq!(self.state, PageState::AwaitingNewPage);
        let page = self.document.add_page();
        self.template.apply(page);
        self.cursor_y = self.content_top;
        self.state = PageState::OnPage;
    }

    /// Make sure `required` points fit below the cursor, breaking the page if not.
    ///
    /// Returns `true` when a new page was started. A fresh page is never broken
    /// again, so an oversized unit is placed at the top of a new page and allowed
    /// to run past the bottom margin.
    pub fn ensure(&mut self, required: f32) -> bool {
        if self.cursor_y - required >= self.content_floor {
            return false;
        }
        if self.is_at_page_top() {
            log::warn!(
                "unit of {:.1}pt exceeds page capacity {:.1}pt; placing it anyway",
                required,
                self.capacity()
            );
            return false;
        }

        self.state = PageState::AwaitingNewPage;
        log::debug!(
            "page break before {:.1}pt at y={:.1} (page {})",
            required,
            self.cursor_y,
            self.document.page_count()
        );
        self.start_page();
        true
    }

    /// Move the cursor down.
    pub fn advance(&mut self, dy: f32) {
        self.cursor_y -= dy;
    }

    /// Put the cursor at an absolute position on the current page.
    pub fn set_cursor(&mut self, y: f32) {
        self.cursor_y = y;
    }

    /// Current cursor position.
    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    /// Space left above the page floor.
    pub fn remaining(&self) -> f32 {
        self.cursor_y - self.content_floor
    }

    /// Largest unit a fresh page can hold.
    pub fn capacity(&self) -> f32 {
        self.content_top - self.content_floor
    }

    /// Whether nothing has been written on the current page yet.
    pub fn is_at_page_top(&self) -> bool {
        self.cursor_y >= self.content_top
    }

    /// Current page state.
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Legend state.
    pub fn legend(&self) -> LegendState {
        self.legend
    }

    /// Mark the legend as printed. Returns `true` if it was still pending.
    pub fn take_legend(&mut self) -> bool {
        match self.legend {
            LegendState::LegendPending => {
                self.legend = LegendState::LegendEmitted;
                true
            },
            LegendState::LegendEmitted => false,
        }
    }

    /// Page receiving new elements.
    pub fn page(&mut self) -> Result<&mut Page> {
        if self.state != PageState::OnPage {
            return Err(Error::Layout("no page is open for drawing".to_string()));
        }
        self.document
            .current_page_mut()
            .ok_or_else(|| Error::Layout("document has no pages".to_string()))
    }

    /// Pages written so far.
    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Finish layout and hand over the document.
    pub fn finish(self) -> Document {
        log::debug!("layout finished with {} pages", self.document.page_count());
        self.document
    }
}
