//! Locale-style string ordering for display names.
//!
//! An approximation of the root collation order, without locale tailoring.
//! Strings are decomposed (NFD) into elements, each a base letter plus the
//! combining marks that follow it. Comparison runs in four levels:
//!
//! 1. base characters, case-folded and with marks removed; punctuation and
//!    symbols sort before digits, digits before letters
//! 2. accents, per base character (unaccented first)
//! 3. case, per base character (lower case first)
//! 4. raw code points, so distinct strings never compare equal
//!
//! Letters NFD cannot split (`đ`, `ł`, `ø`) are given a base letter and a
//! stroke mark, and ligatures (`ß`, `æ`, `œ`) expand to two base letters.
//! Symbols keep code point order among themselves and contractions such as
//! the Spanish `ch` are not handled.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Symbol,
    Digit,
    Letter,
}

fn class_of(c: char) -> Class {
    if c.is_alphabetic() {
        Class::Letter
    } else if c.is_numeric() {
        Class::Digit
    } else {
        Class::Symbol
    }
}

/// Letters without a canonical decomposition: their base letters and, when
/// they read as an accented form, the mark standing in for the stroke.
fn unsplittable(c: char) -> Option<(&'static str, Option<char>)> {
    let folded = match c {
        'đ' | 'Đ' => ("d", Some('\u{335}')),
        'ħ' | 'Ħ' => ("h", Some('\u{335}')),
        'ł' | 'Ł' => ("l", Some('\u{337}')),
        'ø' | 'Ø' => ("o", Some('\u{338}')),
        'ß' | 'ẞ' => ("ss", None),
        'æ' | 'Æ' => ("ae", None),
        'œ' | 'Œ' => ("oe", None),
        _ => return None,
    };
    Some(folded)
}

#[derive(Debug, Default)]
struct Element {
    base: Vec<char>,
    marks: Vec<char>,
    upper: bool,
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            match out.last_mut() {
                Some(element) => element.marks.push(c),
                None => out.push(Element {
                    marks: vec![c],
                    ..Element::default()
                }),
            }
            continue;
        }

        let upper = c.is_uppercase();
        let element = match unsplittable(c) {
            Some((base, mark)) => Element {
                base: base.chars().collect(),
                marks: mark.into_iter().collect(),
                upper,
            },
            None => Element {
                base: c.to_lowercase().collect(),
                marks: Vec::new(),
                upper,
            },
        };
        out.push(element);
    }
    out
}

fn primary(elements: &[Element]) -> impl Iterator<Item = (Class, char)> + '_ {
    elements
        .iter()
        .flat_map(|e| e.base.iter().map(|&c| (class_of(c), c)))
}

/// Accent and case weights, one per base character so that an expanded
/// ligature lines up with its spelled-out form. The element's marks go on its
/// first base character.
fn weights(elements: &[Element]) -> (Vec<&[char]>, Vec<bool>) {
    let unmarked: &[char] = &[];
    let mut marks: Vec<&[char]> = Vec::new();
    let mut upper = Vec::new();
    for element in elements {
        if element.base.is_empty() {
            marks.push(element.marks.as_slice());
            upper.push(false);
            continue;
        }
        for i in 0..element.base.len() {
            marks.push(if i == 0 { element.marks.as_slice() } else { unmarked });
            upper.push(element.upper);
        }
    }
    (marks, upper)
}

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let (left, right) = (elements(a), elements(b));
    primary(&left).cmp(primary(&right)).then_with(|| {
        let (left_marks, left_upper) = weights(&left);
        let (right_marks, right_upper) = weights(&right);
        left_marks
            .cmp(&right_marks)
            .then_with(|| left_upper.cmp(&right_upper))
            .then_with(|| a.cmp(b))
    })
}
