use pretty_assertions::assert_eq;
use proptest::prelude::*;
use regex_explode::{
    alternate, concatenate, config, literal, range, repeat, set, Error, Index, Regex, Repeat,
    Result,
};
use std::collections::HashSet;

#[ctor::ctor]
fn init() {
    env_logger::init();
}

fn outputs(r: &Regex) -> Vec<String> {
    r.iter().collect::<Result<_>>().unwrap()
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn literal_repeated_between() {
    let r = repeat(literal("a"), Repeat::between(3, 5).unwrap());
    assert_eq!(r.cardinality().unwrap(), 3);
    assert_eq!(outputs(&r), vec!["aaa", "aaaa", "aaaaa"]);
}

#[test]
fn alternation_then_literal() {
    let r = concatenate(alternate(literal("a"), literal("b")), literal("c"));
    assert_eq!(r.cardinality().unwrap(), 2);
    assert_eq!(sorted(outputs(&r)), vec!["ac", "bc"]);
}

#[test]
fn concatenation_or_literal() {
    let r = alternate(concatenate(literal("a"), literal("b")), literal("c"));
    assert_eq!(r.cardinality().unwrap(), 2);
    assert_eq!(sorted(outputs(&r)), vec!["ab", "c"]);
}

#[test]
fn any_count_is_capped() {
    assert_eq!(
        config::max_repeat(),
        config::DEFAULT_MAX_REPEAT,
        "{} must be unset for this test",
        config::MAX_REPEAT_ENV
    );

    let r = repeat(literal("a"), Repeat::any_count());
    assert_eq!(r.cardinality().unwrap(), 6);
    assert_eq!(outputs(&r), vec!["", "a", "aa", "aaa", "aaaa", "aaaaa"]);
    assert_eq!(r.render(), "(a)*");

    let r = repeat(literal("a"), Repeat::at_least(100));
    assert_eq!(r.cardinality().unwrap(), 1);
}

#[test]
fn range_out_of_order() {
    assert_eq!(
        range('z', 'a'),
        Err(Error::InvalidRange {
            start: 'z',
            end: 'a'
        })
    );
}

#[test]
fn fixture_style_pattern() {
    // identifiers like `ab_1`, `b2`, ...
    let ident = range('a', 'b')
        .unwrap()
        .repeat(Repeat::between(1, 2).unwrap())
        .then(alternate("_", ""))
        .then(range('1', '2').unwrap());

    assert_eq!(ident.render(), "([a-b]{1,2}((_)|())[1-2])");
    assert_eq!(ident.cardinality().unwrap(), 4 * 2 * 2);

    let all = outputs(&ident);
    assert_eq!(all.len(), 16);
    assert_eq!(&all[..4], ["a_1", "b_1", "ab_1", "bb_1"]);
    assert_eq!(all, outputs(&ident));
}

fn small_range() -> impl Strategy<Value = (char, char)> {
    (0x20u32..0x7f, 0u32..4).prop_map(|(start, len)| {
        let start = char::from_u32(start).unwrap();
        let end = char::from_u32(u32::from(start) + len).unwrap();
        (start, end)
    })
}

proptest! {
    #[test]
    fn range_covers_its_span(start in 0x20u32..0xd000, len in 0u32..300) {
        let (start, end) = (char::from_u32(start).unwrap(), char::from_u32(start + len).unwrap());
        let r = range(start, end).unwrap();

        prop_assert_eq!(r.cardinality().unwrap(), Index::from(len) + 1);
        let expected: Vec<String> = (start..=end).map(String::from).collect();
        prop_assert_eq!(outputs(&r), expected);
    }

    #[test]
    fn set_holds_distinct_chars(chars in proptest::collection::vec(any::<char>(), 0..20)) {
        let r = set(chars.iter().copied());
        let distinct: HashSet<char> = chars.iter().copied().collect();

        prop_assert_eq!(r.cardinality().unwrap(), distinct.len() as Index);
        let members: HashSet<String> = outputs(&r).into_iter().collect();
        prop_assert_eq!(members, distinct.iter().map(|c| c.to_string()).collect::<HashSet<_>>());

        let rendered = r.render();
        prop_assert!(rendered.starts_with('['));
        prop_assert!(rendered.ends_with(']'));
        let inner = &rendered[1..rendered.len() - 1];
        let is_meta = |c: char| c == '^' || c == '-';
        let head = inner.trim_end_matches(is_meta);
        prop_assert!(!head.contains(is_meta));
    }

    #[test]
    fn product_is_cartesian(ranges in proptest::collection::vec(small_range(), 0..4)) {
        let r = Regex::product(ranges.iter().map(|&(s, e)| range(s, e).unwrap()));

        let mut expected = vec![String::new()];
        for &(s, e) in &ranges {
            expected = expected
                .iter()
                .flat_map(|prefix| (s..=e).map(move |c| format!("{prefix}{c}")))
                .collect();
        }

        let cardinality: Index = ranges
            .iter()
            .map(|&(s, e)| Index::from(u32::from(e) - u32::from(s)) + 1)
            .product();
        prop_assert_eq!(r.cardinality().unwrap(), cardinality);

        let all = outputs(&r);
        let distinct: HashSet<_> = all.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), all.len());
        prop_assert_eq!(sorted(all), sorted(expected));
    }

    #[test]
    fn sum_is_union_with_multiplicity(ranges in proptest::collection::vec(small_range(), 0..4)) {
        let children: Vec<Regex> = ranges.iter().map(|&(s, e)| range(s, e).unwrap()).collect();
        let r = Regex::sum(children.clone());

        let cardinality: Index = children.iter().map(|c| c.cardinality().unwrap()).sum();
        prop_assert_eq!(r.cardinality().unwrap(), cardinality);

        let expected: Vec<String> = children.iter().flat_map(outputs).collect();
        prop_assert_eq!(outputs(&r), expected);
    }

    #[test]
    fn at_is_deterministic(
        ranges in proptest::collection::vec(small_range(), 1..4),
        index in 0u128..64
    ) {
        let r = Regex::product(ranges.iter().map(|&(s, e)| range(s, e).unwrap()));
        let index = index % r.cardinality().unwrap();
        prop_assert_eq!(r.at(index), r.at(index));
    }
}
