//! Break sheet PDF: a title and one plain text line per break, in the same
//! `<name> <type> <start> <end> <date>` shape that `import` reads back.

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::break_entry::BreakEntry;
use crate::ui::messages::info;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const LINE_H: f32 = 20.0;
const FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 14.0;

pub struct BreakSheet {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl Default for BreakSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakSheet {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Lines that fit on one page below the title.
    fn lines_per_page() -> usize {
        ((PAGE_H - 2.0 * MARGIN - 2.0 * LINE_H) / LINE_H) as usize
    }

    fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn add_page(&mut self, title: &str, lines: &[String], page_no: usize) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        let mut content = Content::new();
        let mut y = PAGE_H - MARGIN;

        Self::draw_text(
            &mut content,
            MARGIN,
            y,
            TITLE_FONT_SIZE,
            &format!("{title} - page {page_no}"),
        );
        y -= 2.0 * LINE_H;

        for line in lines {
            Self::draw_text(&mut content, MARGIN, y, FONT_SIZE, line);
            y -= LINE_H;
        }

        self.pdf.stream(content_id, &content.finish());
    }

    /// Lay the lines out over as many pages as needed (at least one).
    pub fn write_lines(&mut self, title: &str, lines: &[String]) {
        if lines.is_empty() {
            self.add_page(title, &[], 1);
            return;
        }

        for (i, chunk) in lines.chunks(Self::lines_per_page()).enumerate() {
            self.add_page(title, chunk, i + 1);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        {
            let mut pages = self.pdf.pages(self.pages_id);
            pages.count(self.page_refs.len() as i32);
            pages.kids(self.page_refs.iter().copied());
        }

        fs::write(path, self.pdf.finish())
    }
}

/// Export a break sheet PDF.
pub(crate) fn export_pdf(entries: &[BreakEntry], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let lines: Vec<String> = entries.iter().map(BreakEntry::roster_line).collect();

    let mut sheet = BreakSheet::new();
    sheet.write_lines(title, &lines);
    sheet.save(path)?;

    notify_export_success("PDF", path, entries.len());
    Ok(())
}
