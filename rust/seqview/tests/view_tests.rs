use std::cell::Cell;

use itertools::Itertools;
use seqview::{
    Sequence, SequenceExt, all, any, collect, concatenate, filter, find_if, flatten, fold, iterate,
    size, slice, take, take_while, transform, zip, zip3,
};

fn one_to_ten() -> Vec<i32> {
    (1..=10).collect()
}

#[test]
fn test_slice_windows_on_one_to_ten() {
    let window = |from, until| -> Vec<i32> { collect(slice(1..=10i32, from, until).unwrap()) };
    assert_eq!(window(1, 3), vec![2, 3]);
    assert_eq!(window(4, 15), (5..=10).collect_vec());
    assert_eq!(window(12, 14), Vec::<i32>::new());
    assert_eq!(window(11, 15), Vec::<i32>::new());

    let err = slice(1..=10i32, 4, 2).err().unwrap();
    assert!(err.is_precondition_violation());
}

#[test]
fn test_take_on_one_to_ten() {
    let taken = |n| -> Vec<i32> { collect(take(1..=10i32, n)) };
    assert_eq!(taken(1), vec![1]);
    assert_eq!(taken(10), one_to_ten());
    assert_eq!(taken(15), one_to_ten());
}

#[test]
fn test_take_while_on_one_to_ten() {
    let below_five: Vec<i32> = collect(take_while(1..=10i32, |x| *x < 5));
    assert_eq!(below_five, vec![1, 2, 3, 4]);

    let above_five: Vec<i32> = collect(take_while(1..=10i32, |x| *x > 5));
    assert!(above_five.is_empty());

    let below_fifteen: Vec<i32> = collect(take_while(1..=10i32, |x| *x < 15));
    assert_eq!(below_fifteen, one_to_ten());
}

#[test]
fn test_concatenate_identities() {
    let x = vec![4, 8, 15];
    let empty: Vec<i32> = Vec::new();
    assert_eq!(collect::<Vec<_>, _>(concatenate(&empty, &x)), x);
    assert_eq!(collect::<Vec<_>, _>(concatenate(&x, &empty)), x);
    assert_eq!(size(concatenate(&empty, &empty)), 0);
}

#[test]
fn test_zip_length_is_shortest() {
    for (la, lb) in [(0, 3), (3, 0), (2, 5), (5, 2), (4, 4)] {
        let a = (0..la).collect_vec();
        let b = (0..lb).map(|i| i * 10).collect_vec();
        assert_eq!(size(zip(&a, &b)), la.min(lb) as usize);
    }
}

#[test]
fn test_zip_never_reads_past_shorter_input() {
    let reads = Cell::new(0);
    let short = vec![1, 2];
    let counted = transform(&short, |x| {
        reads.set(reads.get() + 1);
        x
    });
    let pairs: Vec<(i32, char)> = collect(zip(&counted, vec!['a', 'b', 'c', 'd']));
    assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    assert_eq!(reads.get(), 2);
}

#[test]
fn test_zip3_with_infinite_source() {
    let names = vec!["a", "b", "c"];
    let triples: Vec<(usize, &str, u32)> =
        collect(zip3(iterate(0usize, |i| i + 1), &names, iterate(1u32, |p| p * 2)));
    assert_eq!(triples, vec![(0, "a", 1), (1, "b", 2), (2, "c", 4)]);
}

#[test]
fn test_flatten_nested() {
    let nested = vec![vec![1, 2, 3], vec![], vec![], vec![4, 5, 6]];
    assert_eq!(collect::<Vec<_>, _>(flatten(&nested)), vec![1, 2, 3, 4, 5, 6]);

    let empty: Vec<Vec<i32>> = Vec::new();
    assert_eq!(collect::<Vec<_>, _>(flatten(&empty)), Vec::<i32>::new());
}

#[test]
fn test_views_are_lazy() {
    let calls = Cell::new(0);
    let v = one_to_ten();
    let mapped = transform(&v, |x| {
        calls.set(calls.get() + 1);
        x * 2
    });
    let kept = filter(mapped, |x| *x > 6);
    let window = slice(kept, 1, 3).unwrap();
    assert_eq!(calls.get(), 0);

    let out: Vec<i32> = collect(&window);
    assert_eq!(out, vec![10, 12]);
    assert!(calls.get() > 0);
}

#[test]
fn test_borrowed_view_observes_current_contents() {
    let cells: Vec<Cell<i32>> = (1..=3).map(Cell::new).collect();
    let doubled = transform(&cells, |c| c.get() * 2);
    assert_eq!(collect::<Vec<_>, _>(&doubled), vec![2, 4, 6]);

    cells[1].set(50);
    assert_eq!(collect::<Vec<_>, _>(&doubled), vec![2, 100, 6]);
}

#[test]
fn test_terminal_results_are_detached() {
    let cells: Vec<Cell<i32>> = (1..=3).map(Cell::new).collect();
    let values = || transform(&cells, |c| c.get());
    let snapshot: Vec<i32> = collect(values());
    let first_even = find_if(values(), |x| x % 2 == 0);
    let any_negative = any(values(), |x| *x < 0);
    let all_positive = all(values(), |x| *x > 0);
    let total = fold(values(), 0, |acc, x| acc + x);

    cells[0].set(-1);
    cells[1].set(7);

    assert_eq!(snapshot, vec![1, 2, 3]);
    assert_eq!(first_even, Some(2));
    assert!(!any_negative);
    assert!(all_positive);
    assert_eq!(total, 6);

    // A fresh evaluation sees the new contents.
    assert_eq!(find_if(values(), |x| x % 2 == 0), None);
    assert!(any(values(), |x| *x < 0));
    assert_eq!(fold(values(), 0, |acc, x| acc + x), 9);
}

#[test]
fn test_cursor_reads_through_chain() {
    let v = vec![5, 6, 7];
    let view = (&v).transform(|x| x + 1).filter(|x| x % 2 == 0);
    let mut cursor = view.begin();
    assert_eq!(cursor.get(), 6);
    cursor.advance();
    assert_eq!(cursor.get(), 8);
    cursor.advance();
    assert!(cursor == view.end());
}

#[test]
fn test_randomized_round_trip_against_scan() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..200 {
        let len = rng.usize(0..64);
        let source: Vec<i64> = (0..len).map(|_| rng.i64(-1000..1000)).collect();
        let modulus = rng.i64(1..7);
        let offset = rng.i64(-50..50);

        let mut expected = Vec::new();
        for &x in &source {
            if x.rem_euclid(modulus) == 0 {
                expected.push(x + offset);
            }
        }

        let kept = filter(&source, |x| x.rem_euclid(modulus) == 0);
        let actual: Vec<i64> = collect(transform(kept, |x| x + offset));
        assert_eq!(actual, expected);

        let from = rng.usize(0..=len + 2);
        let until = from + rng.usize(0..=len + 2);
        let window: Vec<i64> = collect(slice(&source, from, until).unwrap());
        let reference = source.iter().copied().skip(from).take(until - from).collect_vec();
        assert_eq!(window, reference);
    }
}

#[test]
fn test_nested_view_traversal_is_repeatable() {
    let words = vec!["sequence", "view", "lazy"];
    let lengths = (&words).transform(str::len);
    let first: Vec<usize> = collect(&lengths);
    let second: Vec<usize> = collect(&lengths);
    assert_eq!(first, second);
    assert_eq!(lengths.traverse().join("-"), "8-4-4");
}

#[test]
fn test_views_over_sub_slices() {
    let readings = vec![7, 3, 12, 5, 20];
    let tail = &readings[2..];
    let scaled: Vec<i32> = collect(transform(tail, |r| r * 10));
    assert_eq!(scaled, vec![120, 50, 200]);

    let chained: Vec<i32> = tail.filter(|r| *r > 6).transform(|r| r + 1).to();
    assert_eq!(chained, vec![13, 21]);
    assert_eq!(size(concatenate(&readings[..1], tail)), 4);
}
