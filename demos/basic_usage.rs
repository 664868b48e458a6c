//! Basic usage: sums, minimums, and order-sensitive string joins.

use segfold::algebra::{Concat, Min};
use segfold::SegmentTree;

fn main() -> anyhow::Result<()> {
    let mut sums = SegmentTree::summing(&[1i64, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    println!("sum[0..=9]  = {}", sums.query(0, 9)?);
    println!("sum[1..=4]  = {}", sums.query(1, 4)?);
    println!("sum wrap 8,2 = {}", sums.query(8, 2)?);

    sums.update(5, -10)?;
    println!("after update(5, -10): sum[0..=9] = {}", sums.query(0, 9)?);

    let mut mins = SegmentTree::with_monoid(&[9i64, 3, 8, 6, 7, 4, 10], Min);
    println!("min = {}", mins.query_all());
    mins.update(1, 11)?;
    println!("min after update(1, 11) = {}", mins.query_all());

    let days: Vec<String> = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]
        .iter()
        .map(|d| d.to_string())
        .collect();
    let week = SegmentTree::with_monoid(&days, Concat::new(" "));
    // Wraparound merges the low segment first.
    println!("fri..tue = {}", week.query(4, 1)?);

    println!("\n{week}");
    Ok(())
}
