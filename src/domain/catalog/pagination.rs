// src/domain/catalog/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

/// A validated, 1-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::Validation("page must be at least 1".into()));
        }
        if limit == 0 {
            return Err(DomainError::Validation("limit must be at least 1".into()));
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    pub fn new(request: PageRequest, total: u64) -> Self {
        let limit = u64::from(request.limit);
        let total_pages = total.div_ceil(limit);
        let end = request.offset() + limit;
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
            has_next: end < total,
            has_prev: request.page > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

/// Slices one page out of `items`. A page past the end yields no data.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let data = items
        .iter()
        .skip(start)
        .take(request.limit as usize)
        .cloned()
        .collect();

    Page {
        data,
        pagination: PageInfo::new(request, total),
    }
}
