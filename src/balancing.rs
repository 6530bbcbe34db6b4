/// Depth left open after scanning `s`, or `None` once a `)` has no matching `(`.
pub fn open_depth(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            _ => {},
        }
    }
    Some(depth)
}

pub fn is_balanced(s: &str) -> bool {
    open_depth(s) == Some(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_groups() {
        assert!(is_balanced(""));
        assert!(is_balanced("(1+(2*3))"));
        assert!(is_balanced("(1)(2)"));
        assert!(is_balanced("42"));
    }

    #[test]
    fn unbalanced_groups() {
        assert!(!is_balanced("(1+2)*(3"));
        assert!(!is_balanced("1+2)"));
        assert!(!is_balanced(")("));
    }

    #[test]
    fn depth_stops_at_first_unmatched_close() {
        assert_eq!(open_depth("((1"), Some(2));
        assert_eq!(open_depth("(1))(("), None);
    }
}
