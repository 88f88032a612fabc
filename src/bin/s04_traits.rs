//! Section 4: Traits and Inheritance
//!
//! Run with: cargo run --bin s04_traits

use syntax_showcase::animals::{Animal, Dog};
use syntax_showcase::utils;

fn main() {
    println!("=== Trait methods ===");
    let mut rex = match Dog::new("Rex", 3) {
        Ok(dog) => dog,
        Err(e) => {
            utils::error(&e.to_string());
            return;
        }
    };

    println!("species: {}", Dog::SPECIES);
    println!("{}", rex.introduce());
    println!("{}", rex.make_sound());

    println!("\n=== Getter and validating setter ===");
    println!("age: {}", rex.age());
    match rex.set_age(4) {
        Ok(()) => println!("birthday! age is now {}", rex.age()),
        Err(e) => utils::error(&e.to_string()),
    }
    if let Err(e) = rex.set_age(-1) {
        utils::warn(&format!("rejected: {}", e));
    }
    assert_eq!(rex.age(), 4);

    println!("\n=== Dynamic dispatch ===");
    let pack: Vec<Box<dyn Animal>> = vec![
        Box::new(Dog::new("Luna", 2).expect("valid fixture age")),
        Box::new(Dog::new("Bruno", 7).expect("valid fixture age")),
    ];
    for animal in &pack {
        println!("{}: {}", animal.name(), animal.make_sound());
    }
}
