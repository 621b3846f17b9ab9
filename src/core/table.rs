//! # Table Model
//!
//! UI-agnostic state behind the alias table: columns, rows, filter text,
//! highlighted row, and the pagination window.
//!
//! ```text
//! rows ──filter──▶ visible ──page_size──▶ page_rows
//!                     ▲
//!                highlighted (index into visible)
//! ```
//!
//! Rows are generic over a payload `P`, which is the typed back-reference a
//! row carries to the record it was built from. The payload is never
//! rendered. Rendering lives in `tui::components::alias_table`.

/// How a column claims horizontal space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Exactly this many cells.
    Fixed(u16),
    /// A share of whatever the fixed columns leave over, weighted by factor.
    Flex(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    pub width: ColumnWidth,
    /// Whether the filter text is matched against this column.
    pub filterable: bool,
}

impl Column {
    pub fn fixed(title: &str, width: u16) -> Self {
        Self {
            title: title.to_string(),
            width: ColumnWidth::Fixed(width),
            filterable: false,
        }
    }

    pub fn flex(title: &str, factor: u16) -> Self {
        Self {
            title: title.to_string(),
            width: ColumnWidth::Flex(factor),
            filterable: false,
        }
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }
}

/// Presentation hint for a row. The TUI maps it to a concrete style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyle {
    #[default]
    Default,
    Active,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row<P> {
    /// One value per column, in column order.
    pub cells: Vec<String>,
    pub style: RowStyle,
    /// Back-reference to the source record. Never rendered.
    pub payload: Option<P>,
}

impl<P> Row<P> {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            style: RowStyle::Default,
            payload: None,
        }
    }

    pub fn with_style(mut self, style: RowStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Column separator width used when splitting space between columns.
pub const COLUMN_SPACING: u16 = 1;
/// Left + right border of the table block.
const BORDER_WIDTH: u16 = 2;

#[derive(Debug, Clone)]
pub struct TableModel<P> {
    columns: Vec<Column>,
    rows: Vec<Row<P>>,
    filter: String,
    filtering: bool,
    /// Indices into `rows` that pass the current filter, in row order.
    visible: Vec<usize>,
    /// Index into `visible`. Meaningless while `visible` is empty.
    highlighted: usize,
    /// Rows per page; 0 disables paging.
    page_size: usize,
    target_width: u16,
}

impl<P> TableModel<P> {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            filter: String::new(),
            filtering: false,
            visible: Vec::new(),
            highlighted: 0,
            page_size: 0,
            target_width: 0,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.refilter();
    }

    /// All rows, ignoring the filter.
    pub fn rows(&self) -> &[Row<P>] {
        &self.rows
    }

    /// Replaces every row. The highlight keeps its position, clamped to the
    /// new row count.
    pub fn set_rows(&mut self, rows: Vec<Row<P>>) {
        self.rows = rows;
        self.refilter();
    }

    /// Rows passing the current filter.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row<P>> {
        self.visible.iter().map(move |&i| &self.rows[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn highlighted_row(&self) -> Option<&Row<P>> {
        self.visible.get(self.highlighted).map(|&i| &self.rows[i])
    }

    /// Position of the highlight within the visible rows.
    pub fn highlighted_index(&self) -> Option<usize> {
        (self.highlighted < self.visible.len()).then_some(self.highlighted)
    }

    pub fn cursor_down(&mut self) {
        let len = self.visible.len();
        if len > 0 {
            self.highlighted = (self.highlighted + 1) % len;
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.visible.len();
        if len > 0 {
            self.highlighted = (self.highlighted + len - 1) % len;
        }
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
    }

    pub fn page_count(&self) -> usize {
        if self.page_size == 0 || self.visible.is_empty() {
            1
        } else {
            self.visible.len().div_ceil(self.page_size)
        }
    }

    /// Zero-based page holding the highlighted row.
    pub fn current_page(&self) -> usize {
        if self.page_size == 0 || self.visible.is_empty() {
            0
        } else {
            self.highlighted / self.page_size
        }
    }

    /// Index into the visible rows of the first row on the current page.
    pub fn page_start(&self) -> usize {
        self.current_page() * self.page_size
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> impl Iterator<Item = &Row<P>> {
        let (start, len) = if self.page_size == 0 {
            (0, self.visible.len())
        } else {
            (self.page_start(), self.page_size)
        };
        self.visible
            .iter()
            .skip(start)
            .take(len)
            .map(move |&i| &self.rows[i])
    }

    /// Moves to the first row of the next page, wrapping past the last.
    pub fn page_forward(&mut self) {
        if self.page_size == 0 || self.visible.is_empty() {
            return;
        }
        let next = (self.current_page() + 1) % self.page_count();
        self.highlighted = next * self.page_size;
    }

    /// Moves to the first row of the previous page, wrapping past the first.
    pub fn page_backward(&mut self) {
        if self.page_size == 0 || self.visible.is_empty() {
            return;
        }
        let pages = self.page_count();
        let prev = (self.current_page() + pages - 1) % pages;
        self.highlighted = prev * self.page_size;
    }

    // ------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// True while the filter text is being typed.
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub fn start_filter(&mut self) {
        self.filtering = true;
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.highlighted = 0;
        self.refilter();
    }

    pub fn pop_filter_char(&mut self) {
        if self.filter.pop().is_some() {
            self.highlighted = 0;
            self.refilter();
        }
    }

    /// Stops editing but keeps the filter applied.
    pub fn finish_filter(&mut self) {
        self.filtering = false;
    }

    pub fn clear_filter(&mut self) {
        self.filtering = false;
        if !self.filter.is_empty() {
            self.filter.clear();
            self.highlighted = 0;
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| needle.is_empty() || self.row_matches(row, &needle))
            .map(|(i, _)| i)
            .collect();
        self.highlighted = self.highlighted.min(self.visible.len().saturating_sub(1));
    }

    fn row_matches(&self, row: &Row<P>, needle: &str) -> bool {
        self.columns
            .iter()
            .zip(&row.cells)
            .any(|(column, cell)| column.filterable && cell.to_lowercase().contains(needle))
    }

    // ------------------------------------------------------------------
    // Width
    // ------------------------------------------------------------------

    pub fn target_width(&self) -> u16 {
        self.target_width
    }

    pub fn set_target_width(&mut self, width: u16) {
        self.target_width = width;
    }

    /// Splits `total` cells (borders included) across the columns.
    ///
    /// Fixed columns get their width; flex columns share the remainder in
    /// proportion to their factor, with rounding slack going to the last
    /// flex column.
    pub fn column_widths(&self, total: u16) -> Vec<u16> {
        let spacing = COLUMN_SPACING * (self.columns.len() as u16).saturating_sub(1);
        let fixed: u16 = self
            .columns
            .iter()
            .filter_map(|c| match c.width {
                ColumnWidth::Fixed(w) => Some(w),
                ColumnWidth::Flex(_) => None,
            })
            .sum();
        let remaining = total
            .saturating_sub(BORDER_WIDTH)
            .saturating_sub(spacing)
            .saturating_sub(fixed);
        let flex_total: u32 = self
            .columns
            .iter()
            .filter_map(|c| match c.width {
                ColumnWidth::Flex(f) => Some(u32::from(f)),
                ColumnWidth::Fixed(_) => None,
            })
            .sum();
        let last_flex = self
            .columns
            .iter()
            .rposition(|c| matches!(c.width, ColumnWidth::Flex(_)));

        let mut handed_out: u16 = 0;
        let mut widths: Vec<u16> = self
            .columns
            .iter()
            .map(|c| match c.width {
                ColumnWidth::Fixed(w) => w,
                ColumnWidth::Flex(f) if flex_total > 0 => {
                    let share = (u32::from(remaining) * u32::from(f) / flex_total) as u16;
                    handed_out += share;
                    share
                }
                ColumnWidth::Flex(_) => 0,
            })
            .collect();
        if let Some(idx) = last_flex {
            widths[idx] += remaining.saturating_sub(handed_out);
        }
        widths
    }
}
