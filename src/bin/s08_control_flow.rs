//! Section 8: Control Flow
//!
//! Run with: cargo run --bin s08_control_flow

fn classify(val: i32) -> &'static str {
    if val > 10 {
        "Big"
    } else if val < 5 {
        "Small"
    } else {
        "Medium"
    }
}

fn spell(val: i32) -> &'static str {
    match val {
        1 => "One",
        _ => "Other",
    }
}

fn main() {
    println!("=== if / else if / else ===");
    for val in [12, 3, 7] {
        println!("{} is {}", val, classify(val));
    }
    assert_eq!(classify(12), "Big");
    assert_eq!(classify(3), "Small");
    assert_eq!(classify(7), "Medium");

    println!("\n=== match with a default arm ===");
    for val in [1, 99] {
        println!("{} -> {}", val, spell(val));
    }

    println!("\n=== for with continue ===");
    for i in 0..5 {
        if i % 2 == 0 {
            continue;
        }
        println!("odd: {}", i);
    }

    println!("\n=== for with break ===");
    let list = [1, 2, 3];
    for item in list {
        if item == 2 {
            break;
        }
        println!("before the break: {}", item);
    }

    println!("\n=== while let ===");
    let mut stack = vec!["a", "b", "c"];
    while let Some(top) = stack.pop() {
        println!("popped {}", top);
    }

    println!("\n=== loop with a break value ===");
    let mut counter = 0;
    let total = loop {
        counter += 1;
        if counter == 10 {
            break counter * 2;
        }
    };
    println!("loop returned {}", total);
    assert_eq!(total, 20);
}
