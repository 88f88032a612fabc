//! Section 5: Attributes
//!
//! Derives, conditional compilation, and a call-logging wrapper.
//!
//! Run with: cargo run --bin s05_attributes

use std::fmt::Debug;

use syntax_showcase::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
struct Point {
    x: i32,
    y: i32,
}

#[must_use]
fn translated(p: Point, dx: i32, dy: i32) -> Point {
    Point {
        x: p.x + dx,
        y: p.y + dy,
    }
}

#[inline]
fn dot(a: Point, b: Point) -> i32 {
    a.x * b.x + a.y * b.y
}

#[cfg(debug_assertions)]
fn build_profile() -> &'static str {
    "debug"
}

#[cfg(not(debug_assertions))]
fn build_profile() -> &'static str {
    "release"
}

/// Wrap `f` so every call logs its name and argument before delegating.
fn logged<A, R, F>(name: &'static str, f: F) -> impl Fn(A) -> R
where
    A: Debug + Copy,
    F: Fn(A) -> R,
{
    move |arg| {
        utils::log(&format!("Calling {} with {:?}", name, arg));
        f(arg)
    }
}

fn main() {
    println!("=== Derived impls ===");
    let origin = Point::default();
    let p = Point { x: 3, y: 4 };
    println!("origin = {:?}, p = {:?}", origin, p);
    assert_ne!(origin, p);

    println!("\n=== must_use and inline ===");
    let moved = translated(p, 1, -1);
    println!("translated: {:?}", moved);
    println!("dot(p, p) = {}", dot(p, p));
    assert_eq!(dot(p, p), 25);

    println!("\n=== Conditional compilation ===");
    println!("built in {} mode", build_profile());

    println!("\n=== Call-logging wrapper ===");
    let double = logged("double", |x: i32| x * 2);
    let shout = logged("shout", |s: &str| s.to_uppercase());
    println!("double(21) = {}", double(21));
    println!("shout(\"stick\") = {}", shout("stick"));
}
