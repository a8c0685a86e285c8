//! Bid list pipeline: filter → sort → paginate.
//!
//! All user-chosen state lives in one [`ViewState`] value that is only ever
//! replaced through [`reduce`]. The rows to display are recomputed from the
//! bid collection and the state by [`derive`]; nothing derived is stored.

use std::cmp::Ordering;

use chrono::NaiveDate;
use tracing::debug;

use crate::model::{Bid, BidStatus};

/// Number of bids shown per page.
pub const PAGE_SIZE: usize = 5;

// ===========================================================================
// Filter state
// ===========================================================================

/// Status filter choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn matches(&self, status: BidStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == BidStatus::Active,
            StatusFilter::Completed => status == BidStatus::Completed,
        }
    }

    /// Cycles All → Active → Completed → All.
    pub fn next(&self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }
}

/// One side of the amount range filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountBound {
    Value(f64),
    /// The user entered something that is not a number. Matches nothing.
    Malformed,
}

/// User-chosen filters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub status: StatusFilter,
    /// Case-insensitive substring of the project name. Blank = no filter.
    pub project_query: String,
    pub amount_min: Option<AmountBound>,
    pub amount_max: Option<AmountBound>,
    /// Inclusive start; the date filter applies only when both ends are set.
    pub date_start: Option<NaiveDate>,
    /// Inclusive end.
    pub date_end: Option<NaiveDate>,
}

impl FilterState {
    /// Returns true if any filter narrows the collection.
    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All
            || !self.project_query.trim().is_empty()
            || self.amount_min.is_some()
            || self.amount_max.is_some()
            || (self.date_start.is_some() && self.date_end.is_some())
    }

    /// Returns true if the bid passes every active filter.
    pub fn matches(&self, bid: &Bid) -> bool {
        self.status.matches(bid.status)
            && self.matches_project(bid)
            && self.matches_amount(bid)
            && self.matches_date(bid)
    }

    fn matches_project(&self, bid: &Bid) -> bool {
        if self.project_query.trim().is_empty() {
            return true;
        }
        bid.project
            .to_lowercase()
            .contains(&self.project_query.to_lowercase())
    }

    fn matches_amount(&self, bid: &Bid) -> bool {
        if self.amount_min.is_none() && self.amount_max.is_none() {
            return true;
        }
        let Some(amount) = bid.amount_value() else {
            return false;
        };
        // Unset bounds span every finite amount, negatives included.
        let min = match self.amount_min {
            None => f64::MIN,
            Some(AmountBound::Value(v)) => v,
            Some(AmountBound::Malformed) => return false,
        };
        let max = match self.amount_max {
            None => f64::MAX,
            Some(AmountBound::Value(v)) => v,
            Some(AmountBound::Malformed) => return false,
        };
        amount >= min && amount <= max
    }

    fn matches_date(&self, bid: &Bid) -> bool {
        let (Some(start), Some(end)) = (self.date_start, self.date_end) else {
            return true;
        };
        match bid.parsed_date() {
            Some(date) => start <= date && date <= end,
            None => false,
        }
    }

    /// Short descriptions of the active filters, e.g. `status: active`.
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if self.status != StatusFilter::All {
            parts.push(format!("status: {}", self.status.name()));
        }
        if !self.project_query.trim().is_empty() {
            parts.push(format!("project: {}", self.project_query));
        }
        if self.amount_min.is_some() || self.amount_max.is_some() {
            parts.push(format!(
                "amount: {}..{}",
                describe_bound(self.amount_min),
                describe_bound(self.amount_max)
            ));
        }
        match (self.date_start, self.date_end) {
            (Some(start), Some(end)) => parts.push(format!("date: {}..{}", start, end)),
            (Some(start), None) => parts.push(format!("date: {}..? (inactive)", start)),
            (None, Some(end)) => parts.push(format!("date: ?..{} (inactive)", end)),
            (None, None) => {}
        }
        parts
    }
}

fn describe_bound(bound: Option<AmountBound>) -> String {
    match bound {
        None => String::new(),
        Some(AmountBound::Value(v)) => format!("{}", v),
        Some(AmountBound::Malformed) => "NaN".to_string(),
    }
}

// ===========================================================================
// Sort state
// ===========================================================================

/// Sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    Project,
    Date,
    Amount,
    Status,
}

impl SortKey {
    /// Cycles None → Project → Date → Amount → Status → None.
    pub fn next(&self) -> SortKey {
        match self {
            SortKey::None => SortKey::Project,
            SortKey::Project => SortKey::Date,
            SortKey::Date => SortKey::Amount,
            SortKey::Amount => SortKey::Status,
            SortKey::Status => SortKey::None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Project => "project",
            SortKey::Date => "date",
            SortKey::Amount => "amount",
            SortKey::Status => "status",
        }
    }

    /// Table column index of this key (PROJECT, DATE, STATUS, AMOUNT).
    pub fn column(&self) -> Option<usize> {
        match self {
            SortKey::None => None,
            SortKey::Project => Some(0),
            SortKey::Date => Some(1),
            SortKey::Status => Some(2),
            SortKey::Amount => Some(3),
        }
    }

    /// Inverse of [`SortKey::column`].
    pub fn from_column(column: usize) -> SortKey {
        match column {
            0 => SortKey::Project,
            1 => SortKey::Date,
            2 => SortKey::Status,
            3 => SortKey::Amount,
            _ => SortKey::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

// ===========================================================================
// View state and reducer
// ===========================================================================

/// Complete user-chosen state of the bid list.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub filters: FilterState,
    pub sort: SortState,
    /// Current page, 1-indexed.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            sort: SortState::default(),
            page: 1,
        }
    }
}

impl ViewState {
    /// Clamps `page` into `[1, max(total_pages, 1)]`.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }
}

/// State transitions of the bid list.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetStatus(StatusFilter),
    SetProjectQuery(String),
    SetAmountMin(Option<AmountBound>),
    SetAmountMax(Option<AmountBound>),
    SetDateStart(Option<NaiveDate>),
    SetDateEnd(Option<NaiveDate>),
    /// Column-header click: the same key while ascending flips to
    /// descending, anything else sorts ascending by `key`.
    RequestSort(SortKey),
    SetSort(SortState),
    CycleSortKey,
    ToggleSortDirection,
    SetPage(usize),
    NextPage,
    PrevPage,
    ResetFilters,
}

/// Computes the next state. Pure; page clamping against the filtered
/// collection happens in [`BidListViewModel::dispatch`].
pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    let mut next = state.clone();
    match action {
        Action::SetStatus(status) => next.filters.status = status,
        Action::SetProjectQuery(query) => next.filters.project_query = query,
        Action::SetAmountMin(bound) => next.filters.amount_min = bound,
        Action::SetAmountMax(bound) => next.filters.amount_max = bound,
        Action::SetDateStart(date) => next.filters.date_start = date,
        Action::SetDateEnd(date) => next.filters.date_end = date,
        Action::RequestSort(key) => {
            let direction = if state.sort.key == key
                && state.sort.direction == SortDirection::Ascending
            {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            next.sort = SortState { key, direction };
        }
        Action::SetSort(sort) => next.sort = sort,
        Action::CycleSortKey => next.sort.key = state.sort.key.next(),
        Action::ToggleSortDirection => next.sort.direction = state.sort.direction.toggled(),
        Action::SetPage(page) => next.page = page.max(1),
        Action::NextPage => next.page = state.page.saturating_add(1),
        Action::PrevPage => next.page = state.page.saturating_sub(1).max(1),
        Action::ResetFilters => next = ViewState::default(),
    }
    next
}

// ===========================================================================
// Pipeline
// ===========================================================================

/// Keeps the bids that pass every active filter, in input order.
pub fn apply_filters<'a>(bids: &'a [Bid], filters: &FilterState) -> Vec<&'a Bid> {
    bids.iter().filter(|bid| filters.matches(bid)).collect()
}

/// Stable sort by the chosen key. `SortKey::None` keeps the input order.
pub fn sort_data<'a>(bids: &[&'a Bid], sort: SortState) -> Vec<&'a Bid> {
    let mut sorted = bids.to_vec();
    if sort.key == SortKey::None {
        return sorted;
    }
    // `sort_by` is stable: equal keys keep their relative order.
    sorted.sort_by(|a, b| {
        let cmp = compare_bids(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
    sorted
}

fn compare_bids(a: &Bid, b: &Bid, key: SortKey) -> Ordering {
    match key {
        SortKey::None => Ordering::Equal,
        SortKey::Project => a.project.cmp(&b.project),
        SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        SortKey::Date => compare_parsed(a.parsed_date(), b.parsed_date(), |x, y| x.cmp(y)),
        SortKey::Amount => {
            compare_parsed(a.amount_value(), b.amount_value(), |x, y| x.total_cmp(y))
        }
    }
}

/// Unparseable values compare greater than every parsed value.
fn compare_parsed<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Number of pages needed for `count` items; 0 when there are no items.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Returns the items of the 1-indexed `page`. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Rows to render for a given state.
#[derive(Debug, Clone, PartialEq)]
pub struct BidListView<'a> {
    /// Bids on the current page, sorted.
    pub rows: Vec<&'a Bid>,
    /// Bids passing the filters (all pages).
    pub filtered_count: usize,
    /// Size of the whole collection.
    pub total_count: usize,
    pub total_pages: usize,
    /// Page the rows belong to.
    pub page: usize,
}

impl BidListView<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Derives the displayed rows: filter, then sort, then paginate.
pub fn derive<'a>(bids: &'a [Bid], state: &ViewState) -> BidListView<'a> {
    let filtered = apply_filters(bids, &state.filters);
    let sorted = sort_data(&filtered, state.sort);
    let pages = total_pages(sorted.len(), PAGE_SIZE);
    let rows = paginate(&sorted, PAGE_SIZE, state.page).to_vec();
    BidListView {
        rows,
        filtered_count: sorted.len(),
        total_count: bids.len(),
        total_pages: pages,
        page: state.page,
    }
}

// ===========================================================================
// View model
// ===========================================================================

/// Static bid collection plus the current [`ViewState`].
#[derive(Debug, Clone)]
pub struct BidListViewModel {
    bids: Vec<Bid>,
    state: ViewState,
}

impl BidListViewModel {
    pub fn new(bids: Vec<Bid>) -> Self {
        Self {
            bids,
            state: ViewState::default(),
        }
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Applies an action and clamps the page against the new filtered count.
    pub fn dispatch(&mut self, action: Action) -> &ViewState {
        debug!(?action, "bid list action");
        let mut next = reduce(&self.state, action);
        let filtered = self.bids.iter().filter(|b| next.filters.matches(b)).count();
        next.clamp_page(total_pages(filtered, PAGE_SIZE));
        self.state = next;
        &self.state
    }

    /// Restores every filter, the sort and the page to their defaults.
    pub fn reset_filters(&mut self) {
        self.dispatch(Action::ResetFilters);
    }

    /// Rows for the current state.
    pub fn view(&self) -> BidListView<'_> {
        derive(&self.bids, &self.state)
    }

    /// Looks up a bid by id.
    pub fn bid(&self, id: u32) -> Option<&Bid> {
        self.bids.iter().find(|b| b.id == id)
    }
}
