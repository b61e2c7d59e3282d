use transduce_core::{
    comp,
    prelude::*,
    reducer::fold,
    transform::{filter, map, take_nth},
};

fn main() -> transduce_core::Result<()> {
    let xform = comp!(
        take_nth(2)?,
        map(|i: u64| i + 1),
        filter(|i: &u64| *i > 512)
    );
    let n = run(
        (0..2048).into_sequence(),
        fold(0, |acc: u64, item: u64| acc + item),
        &xform,
    );

    let expect = (0..2048u64)
        .step_by(2)
        .map(|i| i + 1)
        .filter(|i| *i > 512)
        .fold(0, |acc, item| acc + item);

    assert_eq!(n, expect);
    println!("{n}");
    Ok(())
}
