//! Kataforge Showcase
//!
//! Feeds the classic fixture inputs through every exercise in the library
//! and prints the results. Run with `RUST_LOG=kataforge=debug` to see the
//! library's tracing events.

use kataforge::{
    four_sum, generate_parentheses, is_balanced, letter_combinations, merge_sorted,
    remove_nth_from_end, three_sum, three_sum_closest, ListNode,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Kataforge Exercise Showcase");
    println!("===========================\n");

    let nums = [3, 0, -2, -1, 1, 2];
    println!("three_sum({nums:?}):");
    for triple in three_sum(&nums) {
        println!("  {:?}", triple.as_slice());
    }

    let nums = [1, 1, 1, 0];
    let target = 100;
    match three_sum_closest(&nums, target) {
        Ok(sum) => println!("\nthree_sum_closest({nums:?}, {target}) = {sum}"),
        Err(err) => println!("\nthree_sum_closest failed: {err}"),
    }

    let nums = [1, 0, -1, 0, -2, 2];
    println!("\nfour_sum({nums:?}, 0):");
    for quad in four_sum(&nums, 0) {
        println!("  {:?}", quad.as_slice());
    }

    let digits = "234";
    match letter_combinations(digits) {
        Ok(combos) => {
            println!("\nletter_combinations({digits:?}) -> {} strings:", combos.len());
            println!("  {}", combos.join(" "));
        }
        Err(err) => println!("\nletter_combinations failed: {err}"),
    }

    println!("\nbracket validation:");
    for input in ["()[]{}", "(]", "([)]", "{[]}"] {
        println!("  {input:<8} -> {}", is_balanced(input));
    }

    let list = ListNode::from_slice(&[1, 2, 3, 4, 5]);
    println!("\nremove_nth_from_end([1, 2, 3, 4, 5], 2):");
    match remove_nth_from_end(list, 2) {
        Ok(list) => println!("  {:?}", ListNode::to_vec(&list)),
        Err(err) => println!("  failed: {err}"),
    }

    let a = ListNode::from_slice(&[1, 2, 4]);
    let b = ListNode::from_slice(&[1, 3, 4]);
    let merged = merge_sorted(a, b);
    println!("\nmerge_sorted([1, 2, 4], [1, 3, 4]):");
    println!("  {:?}", ListNode::to_vec(&merged));

    println!("\ngenerate_parentheses(3):");
    for s in generate_parentheses(3) {
        println!("  {s}");
    }
}
