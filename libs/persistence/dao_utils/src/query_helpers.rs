/// Map the first row of a result set, or fail with the supplied error.
///
/// DAOs treat "the first returned row is the record" as a contract, not a
/// bare index: an empty result set is always the caller's not-found error,
/// never a panic.
pub fn first_row_or_not_found<R, T, E, F>(
    rows: &[R], mapper: F, not_found_error: E,
) -> Result<T, E>
where
    F: FnOnce(&R) -> T,
{
    rows.first().map(mapper).ok_or(not_found_error)
}
