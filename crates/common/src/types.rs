//! 通用类型定义

use serde::{Deserialize, Serialize};

/// 分页参数
///
/// `page` 从 1 开始计数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// 页码和每页数量都至少为 1
    pub fn is_valid(&self) -> bool {
        self.page >= 1 && self.page_size >= 1
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// 当前页对应的排名窗口
    pub fn window(&self) -> PageWindow {
        let first_rank = self.offset() + 1;
        let last_rank = u64::from(self.page) * u64::from(self.page_size);
        PageWindow {
            first_rank,
            last_rank,
        }
    }
}

/// 排名窗口（闭区间，排名从 1 开始）
///
/// 第 `page` 页包含排名 `r` 满足 `(page-1)*size + 1 <= r <= page*size` 的行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub first_rank: u64,
    pub last_rank: u64,
}

impl PageWindow {
    pub fn contains(&self, rank: u64) -> bool {
        self.first_rank <= rank && rank <= self.last_rank
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: &Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }

    /// 总页数，`ceil(total / page_size)`
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, self.page_size)
    }
}

/// 计算总页数，`page_size` 为 0 时返回 0
pub fn total_pages(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size))
}
