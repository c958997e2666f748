/// One page of a list operation, together with the pagination numbers the
/// upstream reported for it.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page_no: u32,
    pub num_of_rows: u32,
    pub total_count: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when a further page can be requested.
    pub fn has_more(&self) -> bool {
        self.page_no.saturating_mul(self.num_of_rows) < self.total_count
    }
}
