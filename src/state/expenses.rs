//! Expense list state: filters, pagination, and load lifecycle.
//!
//! DESIGN
//! ======
//! The filter panel edits `form`; only `apply_filters` copies it into the
//! applied `filters` that drive queries, so typing never triggers a fetch.

#[cfg(test)]
#[path = "expenses_test.rs"]
mod expenses_test;

use crate::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::net::types::{Expense, ExpenseFilters, ExpenseQuery, Page};

pub const DELETE_EXPENSE_CONFIRMATION: &str = "Are you sure you want to delete this expense?";
pub const LOAD_EXPENSES_FAILED: &str = "Failed to load expenses";
pub const DELETE_EXPENSE_FAILED: &str = "Failed to delete expense";

/// Raw filter-panel input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub from_date: String,
    pub to_date: String,
    pub category_id: String,
    pub min_amount: String,
    pub max_amount: String,
    pub q: String,
    pub currency: String,
    pub tag: String,
}

/// One input of the filter panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    FromDate,
    ToDate,
    CategoryId,
    MinAmount,
    MaxAmount,
    Q,
    Currency,
    Tag,
}

fn text(raw: &str) -> Option<String> {
    Some(raw.trim()).filter(|s| !s.is_empty()).map(str::to_owned)
}

fn amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl FilterForm {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::FromDate => &self.from_date,
            FilterField::ToDate => &self.to_date,
            FilterField::CategoryId => &self.category_id,
            FilterField::MinAmount => &self.min_amount,
            FilterField::MaxAmount => &self.max_amount,
            FilterField::Q => &self.q,
            FilterField::Currency => &self.currency,
            FilterField::Tag => &self.tag,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        let slot = match field {
            FilterField::FromDate => &mut self.from_date,
            FilterField::ToDate => &mut self.to_date,
            FilterField::CategoryId => &mut self.category_id,
            FilterField::MinAmount => &mut self.min_amount,
            FilterField::MaxAmount => &mut self.max_amount,
            FilterField::Q => &mut self.q,
            FilterField::Currency => &mut self.currency,
            FilterField::Tag => &mut self.tag,
        };
        *slot = value;
    }

    /// Typed filters; blank or unparseable entries are dropped.
    pub fn to_filters(&self) -> ExpenseFilters {
        ExpenseFilters {
            from_date: text(&self.from_date),
            to_date: text(&self.to_date),
            category_id: self.category_id.trim().parse().ok(),
            min_amount: amount(&self.min_amount),
            max_amount: amount(&self.max_amount),
            q: text(&self.q),
            currency: text(&self.currency),
            tag: text(&self.tag),
        }
    }
}

/// State behind the expenses table.
#[derive(Clone, Debug)]
pub struct ExpenseListState {
    pub items: Vec<Expense>,
    pub loading: bool,
    pub error: Option<String>,
    /// Zero-based.
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub form: FilterForm,
    pub filters: ExpenseFilters,
}

impl Default for ExpenseListState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ExpenseListState {
    pub fn with_page_size(size: u32) -> Self {
        let size = if PAGE_SIZE_OPTIONS.contains(&size) { size } else { DEFAULT_PAGE_SIZE };
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            page: 0,
            size,
            total_pages: 0,
            total_elements: 0,
            form: FilterForm::default(),
            filters: ExpenseFilters::default(),
        }
    }

    pub fn apply_filters(&mut self) {
        self.filters = self.form.to_filters();
        self.page = 0;
    }

    pub fn clear_filters(&mut self) {
        self.form = FilterForm::default();
        self.filters = ExpenseFilters::default();
        self.page = 0;
    }

    /// Switch rows per page. Returns whether the size changed.
    pub fn set_page_size(&mut self, size: u32) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) || size == self.size {
            return false;
        }
        self.size = size;
        self.page = 0;
        true
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Returns whether the page moved.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Returns whether the page moved.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn query(&self) -> ExpenseQuery {
        ExpenseQuery::new(self.filters.clone(), self.page, self.size)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, page: Page<Expense>) {
        self.items = page.content;
        self.total_pages = page.total_pages;
        self.total_elements = page.total_elements;
        self.loading = false;
        self.error = None;
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// `Showing 11 - 20 of 42 expenses`
    pub fn range_label(&self) -> String {
        let start = u64::from(self.page) * u64::from(self.size);
        let first = if self.items.is_empty() { 0 } else { start + 1 };
        let last = (start + u64::from(self.size)).min(self.total_elements);
        format!("Showing {first} - {last} of {} expenses", self.total_elements)
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }
}
