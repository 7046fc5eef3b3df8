use crate::deals::Deal;

/// The `limit` most recently dated deals, newest first.
///
/// The input order need not be sorted. Deals with identical timestamps keep
/// their relative input order.
pub fn recent_deals(deals: &[Deal], limit: usize) -> Vec<Deal> {
    let mut sorted = deals.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}
