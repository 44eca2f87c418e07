pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;

/// A normalized page request. Query strings are accepted raw so that a
/// garbage `page` falls back to the first page instead of rejecting the
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// The page is capped so that the offset still fits a SQLite integer.
    /// Past the last row the listing is simply empty.
    pub fn new(page: Option<&str>, limit: Option<&str>) -> Self {
        let per_page = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .map(|l| l.clamp(1, MAX_PER_PAGE as i64) as u64)
            .unwrap_or(DEFAULT_PER_PAGE);

        let page = page
            .and_then(|p| p.trim().parse::<u64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| p.min(Self::max_page(per_page)))
            .unwrap_or(1);

        Self { page, per_page }
    }

    fn max_page(per_page: u64) -> u64 {
        i64::MAX as u64 / per_page.max(1)
    }

    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub first_page: u64,
    pub last_page: u64,
}

impl PageMeta {
    pub fn new(total: u64, req: PageRequest) -> Self {
        let last_page = total.div_ceil(req.per_page).max(1);

        Self {
            total,
            per_page: req.per_page,
            current_page: req.page,
            first_page: 1,
            last_page,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > self.first_page
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    pub fn previous_page(&self) -> u64 {
        self.current_page.saturating_sub(1).max(self.first_page)
    }

    pub fn next_page(&self) -> u64 {
        self.current_page.saturating_add(1)
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, req: PageRequest) -> Self {
        Self {
            data,
            meta: PageMeta::new(total, req),
        }
    }
}
