/// Number for the next round of a match: one past the highest existing number, starting at 1.
pub fn next_round_number<I>(existing: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    existing.into_iter().max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_round_is_one() {
        assert_eq!(next_round_number(Vec::new()), 1);
    }

    #[test]
    fn test_follows_highest_number() {
        assert_eq!(next_round_number(vec![1, 2, 3]), 4);
        assert_eq!(next_round_number(vec![3, 1]), 4);
    }
}
