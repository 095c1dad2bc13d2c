pub mod buckets;
pub mod clusters;
pub mod database_users;
pub mod projects;
pub mod users;

/// Used by the list options to leave unset page numbers out of the query.
pub(crate) fn is_zero(n: &u32) -> bool {
    *n == 0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(&0));
        assert!(!is_zero(&7));
    }
}
