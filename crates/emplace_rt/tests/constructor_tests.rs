#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! Generated constructors against the runtime.
//!
//! Exercises both families at their boundary arities and checks that the
//! byte accounting of `Handle` holds for generated call paths.

use std::mem;
use std::panic;

use emplace_rt::{
    memory_manager, new0, new1_m, new1_r, new3_rrm, new8_rrrrrrrr, unchecked_new0,
    unchecked_new1, unchecked_new19, unchecked_new2, Construct,
};
use parking_lot::{const_mutex, Mutex, MutexGuard};
use pretty_assertions::assert_eq;

static SERIAL: Mutex<()> = const_mutex(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock()
}

#[derive(Debug, Default, PartialEq)]
struct Point {
    x: i64,
    y: i64,
}

impl Construct<()> for Point {
    fn construct((): ()) -> Self {
        Point::default()
    }
}

impl Construct<(i64, i64)> for Point {
    fn construct((x, y): (i64, i64)) -> Self {
        Point { x, y }
    }
}

impl<'a> Construct<(&'a i64,)> for Point {
    fn construct((both,): (&'a i64,)) -> Self {
        Point { x: *both, y: *both }
    }
}

/// Writes `set` into `slot` on construction and `restore` on drop.
struct Recorder<'a> {
    slot: &'a mut usize,
    restore: usize,
}

impl<'a> Construct<(&'a usize, &'a usize, &'a mut usize)> for Recorder<'a> {
    fn construct((set, restore, slot): (&'a usize, &'a usize, &'a mut usize)) -> Self {
        *slot = *set;
        Recorder {
            slot,
            restore: *restore,
        }
    }
}

impl Drop for Recorder<'_> {
    fn drop(&mut self) {
        *self.slot = self.restore;
    }
}

/// Drains the source on construction.
struct Taken(Vec<u8>);

impl<'a> Construct<(&'a mut Vec<u8>,)> for Taken {
    fn construct((source,): (&'a mut Vec<u8>,)) -> Self {
        Taken(mem::take(source))
    }
}

/// Accepts a borrowed `str`, exercising unsized argument types.
struct Label(String);

impl<'a> Construct<(&'a str,)> for Label {
    fn construct((text,): (&'a str,)) -> Self {
        Label(text.to_uppercase())
    }
}

struct Sum(u32);

type Eight<'a> = (
    &'a u32,
    &'a u32,
    &'a u32,
    &'a u32,
    &'a u32,
    &'a u32,
    &'a u32,
    &'a u32,
);

impl<'a> Construct<Eight<'a>> for Sum {
    fn construct((a, b, c, d, e, f, g, h): Eight<'a>) -> Self {
        Sum(a + b + c + d + e + f + g + h)
    }
}

type Wide = (u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8);

struct Count(usize);

impl Construct<Wide> for Count {
    fn construct(args: Wide) -> Self {
        let (a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p, q, r, s) = args;
        let all = [a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p, q, r, s];
        Count(all.iter().filter(|&&v| v > 0).count())
    }
}

#[test]
fn zero_argument_constructors() {
    let _guard = serial();
    let p = unchecked_new0::<Point>();
    let q = new0::<Point>();
    assert_eq!(*p, Point::default());
    assert_eq!((q.x, q.y), (0, 0));
}

#[test]
fn unchecked_forwards_by_value() {
    let _guard = serial();
    let before = memory_manager().used();

    let p = unchecked_new2::<Point, i64, i64>(3, -4);
    assert_eq!((p.x, p.y), (3, -4));
    assert_eq!(memory_manager().used(), before + mem::size_of::<Point>());

    drop(p);
    assert_eq!(memory_manager().used(), before);
}

#[test]
fn shared_reference_argument() {
    let _guard = serial();
    let value = 9_i64;
    let p = new1_r::<Point, i64>(&value);
    assert_eq!(*p, Point { x: 9, y: 9 });
}

#[test]
fn mutable_reference_argument() {
    let _guard = serial();
    let mut source = vec![1, 2, 3];
    let taken = new1_m::<Taken, Vec<u8>>(&mut source);
    assert_eq!(taken.0, [1, 2, 3]);
    assert!(source.is_empty());
}

#[test]
fn references_reach_initializer_and_destructor() {
    let _guard = serial();
    let mut slot = 1_usize;

    let recorder = new3_rrm::<Recorder<'_>, usize, usize, usize>(&2, &3, &mut slot);
    assert_eq!(*recorder.slot, 2);
    drop(recorder);

    assert_eq!(slot, 3);
}

#[test]
fn unsized_argument_types() {
    let _guard = serial();
    let label = new1_r::<Label, str>("emplace");
    assert_eq!(label.0, "EMPLACE");

    let by_value = unchecked_new1::<Label, &str>("x");
    assert_eq!(by_value.0, "X");
}

#[test]
fn widest_qualified_constructor() {
    let _guard = serial();
    let v = [1_u32, 2, 3, 4, 5, 6, 7, 8];
    let sum = new8_rrrrrrrr::<Sum, u32, u32, u32, u32, u32, u32, u32, u32>(
        &v[0], &v[1], &v[2], &v[3], &v[4], &v[5], &v[6], &v[7],
    );
    assert_eq!(sum.0, 36);
}

#[test]
fn widest_unchecked_constructor() {
    let _guard = serial();
    let count = unchecked_new19::<
        Count,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
        u8,
    >(1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1);
    assert_eq!(count.0, 10);
}

#[test]
fn panicking_initializer_through_generated_path() {
    struct Refuses;

    impl Construct<(bool,)> for Refuses {
        fn construct((refuse,): (bool,)) -> Self {
            assert!(!refuse, "refused");
            Refuses
        }
    }

    let _guard = serial();
    let before = memory_manager().used();

    let result = panic::catch_unwind(|| unchecked_new1::<Refuses, bool>(true));
    assert!(result.is_err());
    assert_eq!(memory_manager().used(), before);
}
