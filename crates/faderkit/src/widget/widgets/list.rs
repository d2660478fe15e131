//! List widget implementation.
//!
//! A [`List`] shows a column of strings and selects the row under the
//! pointer. It pairs naturally with [`directory_contents`](crate::file::directory_contents)
//! for sample browsers.

use crate::theme::Theme;
use crate::widget::{ClickMode, Rect, Surface, Widget, WidgetBase};

/// A selectable column of text rows.
///
/// The value is the press position mapped into `[0.0, 1.0]`; [`selected`](Self::selected)
/// turns it back into a row index.
pub struct List {
    base: WidgetBase,
    items: Vec<String>,
}

impl List {
    /// Create an empty list.
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        let mut base = WidgetBase::new(rect, label);
        base.set_click_mode(ClickMode::ValueFromY);
        base.set_scroll_disable(true);
        Self {
            base,
            items: Vec::new(),
        }
    }

    /// Set the rows using builder pattern.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_items(items);
        self
    }

    /// Replace the rows.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self.base.request_redraw();
    }

    /// The rows.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Height of a single row in pixels.
    pub fn row_height(&self) -> i32 {
        match self.items.len() {
            0 => 0,
            n => self.rect().h / n as i32,
        }
    }

    /// Index of the selected row, if the list has any rows.
    pub fn selected(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        let index = (self.value().clamp(0.0, 1.0) * self.items.len() as f32) as usize;
        Some(index.min(last))
    }

    /// Text of the selected row.
    pub fn selected_item(&self) -> Option<&str> {
        self.selected().map(|i| self.items[i].as_str())
    }
}

impl Widget for List {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw(&self, surface: &mut dyn Surface, theme: &Theme) {
        let palette = &theme.palette;
        let rect = self.rect();
        let row_height = self.row_height();
        let selected = self.selected();

        surface.fill_rect(rect, palette.background);
        for (i, item) in self.items.iter().enumerate() {
            let y = rect.y + row_height * i as i32;
            if selected == Some(i) {
                surface.fill_rect(Rect::new(rect.x, y, rect.w, row_height), palette.highlight);
            }
            surface.text(rect.x + 2, y, item, palette.text);
        }
    }
}

// Ensure List is Send + Sync
static_assertions::assert_impl_all!(List: Send, Sync);
