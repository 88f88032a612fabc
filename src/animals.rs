//! The trait/implementer pair used by the trait and async fixtures.

use std::time::Duration;

use crate::errors::ShowcaseError;

/// Something with a name that makes a sound.
pub trait Animal {
    fn name(&self) -> &str;

    fn make_sound(&self) -> String;

    /// Default method; implementers inherit it unchanged.
    fn introduce(&self) -> String {
        format!("I am {}", self.name())
    }
}

pub struct Dog {
    name: String,
    age: i32,
}

impl Dog {
    pub const SPECIES: &'static str = "Canis lupus familiaris";

    /// How long [`Dog::fetch`] takes to come back.
    pub const FETCH_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(name: impl Into<String>, age: i32) -> Result<Self, ShowcaseError> {
        let mut dog = Dog {
            name: name.into(),
            age: 0,
        };
        dog.set_age(age)?;
        Ok(dog)
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) -> Result<(), ShowcaseError> {
        if age < 0 {
            return Err(ShowcaseError::NegativeAge { age });
        }
        self.age = age;
        Ok(())
    }

    pub async fn fetch(&self) -> String {
        tokio::time::sleep(Self::FETCH_DELAY).await;
        "stick".to_string()
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> String {
        format!("{} barks!", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_barks() {
        let dog = Dog::new("Rex", 3).unwrap();
        assert_eq!(dog.make_sound(), "Rex barks!");
        assert_eq!(dog.introduce(), "I am Rex");
    }

    #[test]
    fn test_setter_rejects_negative_age() {
        let mut dog = Dog::new("Rex", 3).unwrap();
        assert_eq!(
            dog.set_age(-1),
            Err(ShowcaseError::NegativeAge { age: -1 })
        );
        assert_eq!(dog.age(), 3);
    }

    #[test]
    fn test_constructor_validates_age() {
        assert!(Dog::new("Rex", -5).is_err());
    }

    #[tokio::test]
    async fn test_fetch_brings_back_a_stick() {
        let dog = Dog::new("Rex", 3).unwrap();
        assert_eq!(dog.fetch().await, "stick");
    }
}
