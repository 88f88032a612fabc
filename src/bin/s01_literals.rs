//! Section 1: Primitive Types and Literals
//!
//! Run with: cargo run --bin s01_literals

use serde_json::json;

fn main() {
    let greeting: &str = "Hello, World!";
    let multiline: String = format!(
        "\n  This is a multi-line string\n  with an embedded expression: {}\n",
        1 + 1
    );
    let raw = r"C:\no\escapes\here";
    let raw_quoted = r#"She said "hi" and left"#;
    let byte_str: &[u8] = b"raw bytes";
    let escaped = "tab:\t newline:\n quote:\" unicode:\u{1F980}";

    println!("=== Strings ===");
    println!("str slice: {}", greeting);
    println!("owned, interpolated: {}", multiline);
    println!("raw: {}", raw);
    println!("raw with quotes: {}", raw_quoted);
    println!("byte string: {:?}", byte_str);
    println!("escapes: {}", escaped);

    // One literal per base
    let answer: i32 = 42;
    let hex = 0xFF;
    let bin = 0b1010;
    let oct = 0o744;
    let separated = 1_000_000;
    let big: u128 = 9_007_199_254_740_991;

    println!("\n=== Integers ===");
    println!("decimal: {}", answer);
    println!("hex 0xFF = {}", hex);
    println!("binary 0b1010 = {}", bin);
    println!("octal 0o744 = {}", oct);
    println!("with separators: {}", separated);
    println!("u128: {}", big);

    let pi: f64 = 3.14159;
    let avogadro = 6.022e23;
    let half: f32 = 0.5;

    println!("\n=== Floats ===");
    println!("pi = {}, avogadro = {}, half = {}", pi, avogadro, half);

    let yes: bool = true;
    let no = false;
    let letter: char = 'R';
    let snowman = '\u{2603}';
    let unit: () = ();
    let nothing: Option<i32> = None;
    let something = Some(42);

    println!("\n=== Bool, Char, Unit, Option ===");
    println!("{} / {} / {} / {} / {:?}", yes, no, letter, snowman, unit);
    println!("{:?} vs {:?}", nothing, something);

    // The one-liners every language has
    let largest = 1_i32.max(2).max(3);
    let json_line = json!({ "a": 1 }).to_string();

    println!("\n=== One-liners ===");
    println!("max(1, 2, 3) = {}", largest);
    println!("json: {}", json_line);
    assert_eq!(largest, 3);
    assert_eq!(json_line, "{\"a\":1}");
}
