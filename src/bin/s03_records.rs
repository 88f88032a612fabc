//! Section 3: Records and Type Aliases
//!
//! Run with: cargo run --bin s03_records

use syntax_showcase::model::{Id, Role, User};

fn main() {
    let admin = User::new(1, "Alice", Role::Admin)
        .with_email("alice@example.com")
        .with_tags(&["staff", "oncall"]);

    let guest = User::new(2, "Visitor", Role::Guest);

    println!("=== User records ===");
    println!("{:?}", admin);
    println!("{:?}", guest);
    assert_eq!(admin.id(), 1);
    assert!(guest.email.is_none());

    println!("\n=== As JSON ===");
    for user in [&admin, &guest] {
        match serde_json::to_string_pretty(user) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("serialize failed: {}", e),
        }
    }

    // Same field, two shapes
    println!("\n=== String-or-number ids ===");
    let ids = [Id::Num(42), Id::Text("usr_9f3k".to_string())];
    for id in &ids {
        println!("{:?} displays as {}", id, id);
    }

    let mixed: Vec<Id> = serde_json::from_str(r#"[7, "abc"]"#).expect("well-formed fixture");
    assert_eq!(mixed, vec![Id::Num(7), Id::Text("abc".to_string())]);
    println!("parsed back: {:?}", mixed);
}
