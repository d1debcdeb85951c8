use std::collections::HashSet;

use sws_pattern::Siteswap;

#[test]
fn rotations_compare_equal() {
    let a = Siteswap::new(vec![4, 4, 1]);
    let b = Siteswap::new(vec![1, 4, 4]);
    let c = Siteswap::new(vec![4, 1, 4, 4, 1, 4]);
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(c.throws(), &[4, 4, 1]);
    assert_eq!(c.raw(), Some(&[4, 1, 4, 4, 1, 4][..]));
}

#[test]
fn invalid_sequences_form_one_class() {
    let a = Siteswap::new(vec![4, 1]);
    let b = Siteswap::new(vec![3, 2, 1]);
    let c = Siteswap::parse("not a siteswap");
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_ne!(a, Siteswap::new(vec![3]));
}

#[test]
fn sets_deduplicate_by_canonical_form() {
    let patterns: HashSet<Siteswap> = ["531", "315", "153", "52", "51", "15", "3", "33", "!"]
        .iter()
        .map(|text| Siteswap::parse(text))
        .collect();
    // 531, 51, 3 and one invalid class member ("52", "!").
    assert_eq!(patterns.len(), 4);
}

#[test]
fn display_uses_canonical_notation() {
    assert_eq!(Siteswap::parse("315").to_string(), "531");
    assert_eq!(Siteswap::parse("B97531").to_string(), "b97531");
    assert_eq!(Siteswap::new(vec![12, 0, 0]).to_string(), "c00");
}

#[test]
fn invalid_and_unencodable_render_empty() {
    assert_eq!(Siteswap::new(vec![4, 1]).to_string(), "");
    assert_eq!(Siteswap::parse("3?3").to_string(), "");
    let huge = Siteswap::new(vec![36]);
    assert!(huge.is_valid());
    assert_eq!(huge.notation(), None);
    assert_eq!(huge.to_string(), "");
}

#[test]
fn strict_parse_reports_bad_characters() {
    let err = "5x1?".parse::<Siteswap>().unwrap_err();
    assert_eq!(err.info().code, "invalid-char");
    let lenient = Siteswap::parse("5x1?");
    assert!(!lenient.is_valid());
    assert_eq!(lenient.raw(), None);
    assert_eq!(lenient.period(), 0);
}

#[test]
fn exposes_balls_period_and_contents() {
    let shower = Siteswap::parse("15");
    assert_eq!(shower.balls(), Some(3));
    assert_eq!(shower.period(), 2);
    assert!(shower.contains(1));
    assert!(!shower.contains(3));
    assert_eq!(Siteswap::parse("41").balls(), None);
}
