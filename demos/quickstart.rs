//! Ejes quick start example
//!
//! Run with: cargo run --example quickstart

use ejes::Vector;

fn main() {
    // Zero vector over two named axes. No component is materialized, so
    // every axis reads as zero.
    let z = Vector::<i64>::zero(["A", "B"]);

    println!("{}", z);
}
