//! Edit acceptance rules.
//!
//! Every accepted key keeps the expression a prefix of some well-formed
//! arithmetic expression, which is what lets the live preview get away with
//! trimming a dangling tail instead of recovering from arbitrary errors.

use crate::balancing::open_depth;
use crate::editing::Mode;
use crate::expression::Expression;
use crate::keys::{Key, Operation};
use tracing::debug;

/// The keys around the caret for a proposed insertion.
pub struct Context<'a> {
    pub left: &'a [Key],
    pub right: &'a [Key],
    pub before: Option<Key>,
    pub after: Option<Key>,
    pub candidate: Key,
}

impl<'a> Context<'a> {
    pub fn new(left: &'a [Key], right: &'a [Key], candidate: Key) -> Self {
        Self {
            left,
            right,
            before: left.last().copied(),
            after: right.first().copied(),
            candidate,
        }
    }
}

/// `Some(verdict)` settles the question, `None` defers to the next rule.
pub type Rule = fn(&Context) -> Option<bool>;

pub const RULES: &[(&str, Rule)] = &[
    ("leading_token", leading_token),
    ("after_open_paren", after_open_paren),
    ("adjacent_operators", adjacent_operators),
    ("close_paren", close_paren),
    ("answer_adjacency", answer_adjacency),
    ("decimal_point", decimal_point),
    ("open_paren_placement", open_paren_placement),
];

const MINUS: Key = Key::operator(Operation::minus);

fn is_operator(key: Option<Key>) -> bool {
    key.is_some_and(|key| key.is_operator())
}

pub fn leading_token(context: &Context) -> Option<bool> {
    if !context.left.is_empty() {
        return None;
    }
    if !context.candidate.can_lead() {
        return Some(false);
    }
    context.right.is_empty().then_some(true)
}

pub fn after_open_paren(context: &Context) -> Option<bool> {
    let misplaced = context.before == Some(Key::open_paren)
        && context.candidate.is_operator()
        && context.candidate != MINUS;
    misplaced.then_some(false)
}

pub fn adjacent_operators(context: &Context) -> Option<bool> {
    let doubled = context.candidate.is_operator()
        && (is_operator(context.before) || is_operator(context.after));
    doubled.then_some(false)
}

pub fn close_paren(context: &Context) -> Option<bool> {
    if context.candidate == Key::close_paren {
        let dangling = match context.before {
            None | Some(Key::open_paren) | Some(Key::point) => true,
            Some(key) => key.is_operator(),
        };
        // The whole expression, with the new `)` in place, must never close more than it opened.
        let text: String = context.left.iter()
            .chain([Key::close_paren].iter())
            .chain(context.right.iter())
            .map(Key::to_string)
            .collect();
        let matched = open_depth(&text).is_some();
        return (dangling || !matched).then_some(false);
    }

    let opens_before_close = context.after == Some(Key::close_paren)
        && (context.candidate.is_operator() || context.candidate == Key::open_paren);
    opens_before_close.then_some(false)
}

pub fn answer_adjacency(context: &Context) -> Option<bool> {
    let touches = |key: Option<Key>, kinds: fn(&Key) -> bool| key.is_some_and(|key| kinds(&key));
    let clash = match context.candidate {
        Key::answer => touches(context.before, Key::is_operand) || touches(context.after, Key::is_operand),
        Key::digit(_) | Key::point => context.before == Some(Key::answer) || context.after == Some(Key::answer),
        _ => false,
    };
    clash.then_some(false)
}

pub fn decimal_point(context: &Context) -> Option<bool> {
    if context.candidate != Key::point {
        return None;
    }
    if !context.before.is_some_and(|key| key.is_digit()) {
        return Some(false);
    }
    if matches!(context.after, Some(Key::open_paren) | Some(Key::answer)) {
        return Some(false);
    }

    let number_before = context.left.iter().rev().take_while(|key| key.is_digit() || **key == Key::point);
    let number_after = context.right.iter().take_while(|key| key.is_digit() || **key == Key::point);
    number_before.chain(number_after).any(|key| *key == Key::point).then_some(false)
}

pub fn open_paren_placement(context: &Context) -> Option<bool> {
    if context.candidate != Key::open_paren {
        return None;
    }
    let misplaced = context.before == Some(Key::point)
        || (is_operator(context.after) && context.after != Some(MINUS));
    misplaced.then_some(false)
}

/// Whether `candidate` may be inserted between `left` and `right`.
pub fn can_accept(left: &[Key], right: &[Key], candidate: Key) -> bool {
    let context = Context::new(left, right, candidate);
    for (name, rule) in RULES {
        if let Some(verdict) = rule(&context) {
            if !verdict {
                debug!(rule = name, key = %candidate, "edit rejected");
            }
            return verdict;
        }
    }
    true
}

/// What an accepted key does to the expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Admission {
    rejected,
    /// Insert at the caret.
    insert,
    /// Replace the whole expression.
    restart(Vec<Key>),
}

/// Applies the session mode on top of [`can_accept`].
///
/// After a result, an operator continues from `ANS`, `)` is refused and any
/// other key starts a new expression, which stays empty if the key cannot
/// lead. After an error, every key clears.
pub fn admit(mode: Mode, expression: &Expression, candidate: Key) -> Admission {
    let fresh = can_accept(&[], &[], candidate);
    match mode {
        Mode::editing => {
            if can_accept(expression.left(), expression.right(), candidate) {
                Admission::insert
            } else {
                Admission::rejected
            }
        },
        Mode::result_shown => match candidate {
            Key::close_paren => Admission::rejected,
            Key::operator(_) => Admission::restart(vec![Key::answer, candidate]),
            _ if fresh => Admission::restart(vec![candidate]),
            _ => Admission::restart(Vec::new()),
        },
        Mode::error_shown => {
            if fresh {
                Admission::restart(vec![candidate])
            } else {
                Admission::restart(Vec::new())
            }
        },
    }
}
