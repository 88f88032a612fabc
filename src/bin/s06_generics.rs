//! Section 6: Generics and Closures
//!
//! Run with: cargo run --bin s06_generics

use std::fmt::Display;

fn identity<T>(value: T) -> T {
    value
}

fn largest<T: PartialOrd + Copy>(items: &[T]) -> Option<T> {
    let mut iter = items.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |best, item| if item > best { item } else { best }))
}

fn describe(item: impl Display) -> String {
    format!("<{}>", item)
}

fn make_adder(amount: i32) -> impl Fn(i32) -> i32 {
    move |x| x + amount
}

fn main() {
    println!("=== Generic functions ===");
    println!("identity(42) = {}", identity(42));
    println!("identity(\"str\") = {}", identity("str"));
    println!("largest = {:?}", largest(&[2.5, 9.1, 4.0]));
    assert_eq!(largest::<i32>(&[]), None);

    println!("\n=== impl Trait ===");
    println!("{}", describe(3.14));
    println!("{}", describe("anything printable"));

    println!("\n=== Closures ===");
    let add = |x: i32, y: i32| -> i32 { x + y };
    let square = |x: i32| x * x;
    println!("add(2, 3) = {}", add(2, 3));
    println!("square(7) = {}", square(7));

    let step = 10;
    let offset = move |x: i32| x + step; // captures step by value
    println!("offset(5) = {}", offset(5));

    let add_five = make_adder(5);
    println!("add_five(37) = {}", add_five(37));
    assert_eq!(add_five(37), 42);

    println!("\n=== Closures in iterator chains ===");
    let squares_of_evens: Vec<i32> = (1..=10)
        .filter(|n| n % 2 == 0)
        .map(|n| n * n)
        .collect();
    println!("squares of evens: {:?}", squares_of_evens);
}
