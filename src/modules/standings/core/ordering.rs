use std::cmp::Ordering;

use crate::modules::standings::core::member::Member;

/// Ascending, with absent values after every present one.
pub fn by_number<T: Ord>(left: Option<T>, right: Option<T>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(l), Some(r)) => l.cmp(&r),
    }
}

/// Exact reverse of [`by_number`], so absent values come first.
pub fn by_number_reverse<T: Ord>(left: Option<T>, right: Option<T>) -> Ordering {
    by_number(left, right).reverse()
}

/// Highest local score first.
pub fn members_by_total_score(left: &Member, right: &Member) -> Ordering {
    right.score.cmp(&left.score)
}
