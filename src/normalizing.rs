//! Rewrites keypad text into the plain arithmetic the scanner reads.

use crate::formatting::format_number;
use crate::keys::ANSWER_TOKEN;

/// Resolves `ANS`, swaps the keypad glyphs for `*` and `/`, then makes the
/// implied multiplications explicit: `2(`, `)2` and `)(`.
///
/// The steps run in this order so that a resolved answer takes part in the
/// implicit multiplication like any typed number. A negative answer is
/// parenthesized so it stays a single operand.
pub fn normalize(expression: &str, answer: f64) -> String {
    let resolved = expression
        .replace(ANSWER_TOKEN, &answer_operand(answer))
        .replace('×', "*")
        .replace('÷', "/");

    let resolved = insert_between(&resolved, |before, after| before.is_ascii_digit() && after == '(');
    let resolved = insert_between(&resolved, |before, after| before == ')' && after.is_ascii_digit());
    insert_between(&resolved, |before, after| before == ')' && after == '(')
}

fn answer_operand(answer: f64) -> String {
    let formatted = format_number(answer);
    if formatted.starts_with('-') {
        format!("({formatted})")
    } else {
        formatted
    }
}

fn insert_between<P: Fn(char, char) -> bool>(s: &str, needs_times: P) -> String {
    let mut result = String::with_capacity(s.len());
    let mut previous = None;
    for c in s.chars() {
        if previous.filter(|&before| needs_times(before, c)).is_some() {
            result.push('*');
        }
        result.push(c);
        previous = Some(c);
    }
    result
}
