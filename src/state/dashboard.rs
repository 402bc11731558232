//! Dashboard aggregation: monthly totals, category breakdown, top expenses,
//! and chart geometry.
//!
//! DESIGN
//! ======
//! The dashboard pulls every expense of the last 12 months once and derives
//! all widgets client-side. Aggregation functions take `today` explicitly so
//! month windows are deterministic under test.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Expense, ExpenseFilters};
use crate::util::dates::{self, YearMonth};
use crate::util::format::round_cents;

pub const WINDOW_MONTHS: u32 = 12;
pub const TOP_EXPENSES: usize = 5;
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const LOAD_DASHBOARD_FAILED: &str = "Failed to load dashboard data";

pub const CHART_COLORS: [&str; 8] =
    ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D", "#FFC658", "#FF6B9D"];

#[derive(Clone, Debug)]
pub struct DashboardState {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_month: YearMonth,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::for_month(YearMonth::of(dates::today()))
    }
}

impl DashboardState {
    pub fn for_month(selected_month: YearMonth) -> Self {
        Self { expenses: Vec::new(), loading: false, error: None, selected_month }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
        self.loading = false;
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Select a month from its `yyyy-MM` key; unknown keys are ignored.
    pub fn select_month(&mut self, key: &str) -> bool {
        match YearMonth::parse(key) {
            Some(month) => {
                self.selected_month = month;
                true
            }
            None => false,
        }
    }
}

/// Filters covering the dashboard window: twelve months back through today.
pub fn fetch_window(today: time::Date) -> ExpenseFilters {
    ExpenseFilters {
        from_date: Some(dates::to_iso(dates::shift_months(today, -12))),
        to_date: Some(dates::to_iso(today)),
        ..ExpenseFilters::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    /// `Jan 2026`
    pub label: String,
    pub amount: f64,
}

/// Spend per month for the 12 months ending with `today`'s month, oldest first.
pub fn monthly_totals(expenses: &[Expense], today: time::Date) -> Vec<MonthlyTotal> {
    let current = YearMonth::of(today);
    let months: Vec<YearMonth> = (0..WINDOW_MONTHS).rev().map(|n| current.minus_months(n)).collect();
    let mut sums = vec![0.0_f64; months.len()];

    for expense in expenses {
        let Some(date) = dates::parse_iso_date(&expense.date) else {
            continue;
        };
        if let Some(i) = months.iter().position(|m| *m == YearMonth::of(date)) {
            sums[i] += expense.amount;
        }
    }

    months
        .into_iter()
        .zip(sums)
        .map(|(month, sum)| MonthlyTotal { month, label: month.short_label(), amount: round_cents(sum) })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    pub value: f64,
}

/// Per-category spend within `month`, largest first, plus the month total.
pub fn category_breakdown(expenses: &[Expense], month: YearMonth) -> (Vec<CategoryTotal>, f64) {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut total = 0.0;

    for expense in expenses.iter().filter(|e| month.contains(&e.date)) {
        let name = expense
            .category_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(UNCATEGORIZED);
        match totals.iter_mut().find(|t| t.name == name) {
            Some(entry) => entry.value += expense.amount,
            None => totals.push(CategoryTotal { name: name.to_owned(), value: expense.amount }),
        }
        total += expense.amount;
    }

    for entry in &mut totals {
        entry.value = round_cents(entry.value);
    }
    totals.sort_by(|a, b| b.value.total_cmp(&a.value));
    (totals, round_cents(total))
}

/// The `n` largest expenses; equal amounts keep their input order.
pub fn top_expenses(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    sorted.truncate(n);
    sorted
}

pub fn average_per_month(monthly: &[MonthlyTotal]) -> f64 {
    if monthly.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = monthly.len() as f64;
    monthly.iter().map(|m| m.amount).sum::<f64>() / count
}

/// Month selector entries, newest first: (`yyyy-MM`, `January 2026`).
pub fn month_options(today: time::Date) -> Vec<(String, String)> {
    let current = YearMonth::of(today);
    (0..WINDOW_MONTHS)
        .map(|n| current.minus_months(n))
        .map(|m| (m.to_string(), m.long_label()))
        .collect()
}

pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Bar heights in pixels, scaled so the largest month fills `max_px`.
pub fn bar_heights(monthly: &[MonthlyTotal], max_px: f64) -> Vec<f64> {
    let max = monthly.iter().map(|m| m.amount).fold(0.0_f64, f64::max);
    monthly
        .iter()
        .map(|m| if max > 0.0 { (m.amount.max(0.0) / max) * max_px } else { 0.0 })
        .collect()
}

/// A pie wedge in degrees, clockwise from twelve o'clock.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub color: &'static str,
}

impl PieSlice {
    pub fn is_full_circle(&self) -> bool {
        self.sweep_deg >= 359.999
    }

    /// SVG path for this wedge on a circle centred at (`cx`, `cy`).
    pub fn path(&self, cx: f64, cy: f64, r: f64) -> String {
        let point = |deg: f64| {
            let rad = (deg - 90.0).to_radians();
            (cx + r * rad.cos(), cy + r * rad.sin())
        };
        let (x0, y0) = point(self.start_deg);
        let (x1, y1) = point(self.start_deg + self.sweep_deg);
        let large_arc = u8::from(self.sweep_deg > 180.0);
        format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
    }
}

/// Wedges proportional to each category's value. Zero or negative values
/// get no wedge but keep their palette slot.
pub fn pie_slices(categories: &[CategoryTotal]) -> Vec<PieSlice> {
    let total: f64 = categories.iter().map(|c| c.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    let mut slices = Vec::new();
    for (i, category) in categories.iter().enumerate() {
        if category.value <= 0.0 {
            continue;
        }
        let sweep = category.value / total * 360.0;
        slices.push(PieSlice {
            name: category.name.clone(),
            value: category.value,
            start_deg: start,
            sweep_deg: sweep,
            color: chart_color(i),
        });
        start += sweep;
    }
    slices
}
