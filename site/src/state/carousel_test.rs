use super::*;

#[test]
fn carousel_starts_at_first_image() {
    let c = Carousel::new(3);
    assert_eq!(c.index(), 0);
    assert_eq!(c.slide_count(), 3);
}

#[test]
fn carousel_zero_len_is_clamped_to_one() {
    let mut c = Carousel::new(0);
    assert_eq!(c.slide_count(), 1);
    c.next();
    assert_eq!(c.index(), 0);
    c.previous();
    assert_eq!(c.index(), 0);
}

#[test]
fn next_n_times_returns_to_start() {
    for n in 1..=5 {
        let mut c = Carousel::new(n);
        for _ in 0..n {
            c.next();
        }
        assert_eq!(c.index(), 0, "n = {n}");
    }
}

#[test]
fn previous_from_zero_wraps_to_last() {
    let mut c = Carousel::new(3);
    c.previous();
    assert_eq!(c.index(), 2);
}

#[test]
fn previous_undoes_next() {
    let mut c = Carousel::new(4);
    c.next();
    c.next();
    c.previous();
    assert_eq!(c.index(), 1);
}

#[test]
fn advance_matches_next() {
    let mut a = Carousel::new(3);
    let mut b = Carousel::new(3);
    for _ in 0..7 {
        a.advance();
        b.next();
        assert_eq!(a, b);
    }
}

#[test]
fn only_current_slide_is_opaque() {
    let mut c = Carousel::new(3);
    c.next();
    assert_eq!(c.opacity(0), "0");
    assert_eq!(c.opacity(1), "1");
    assert_eq!(c.opacity(2), "0");
}
