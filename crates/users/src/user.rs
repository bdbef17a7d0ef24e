use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// A customer placing orders.
///
/// Equality and hashing cover both `name` and `age`. No validation is applied:
/// any age, including zero or negative values, is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    name: String,
    age: i32,
}

impl User {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl ValueObject for User {}

impl core::fmt::Display for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "User{{name='{}', age={}}}", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn users_with_same_name_and_age_are_equal() {
        assert_eq!(User::new("Alice", 32), User::new("Alice", 32));
        assert_ne!(User::new("Alice", 32), User::new("Alice", 33));
        assert_ne!(User::new("Alice", 32), User::new("Bob", 32));
    }

    #[test]
    fn equal_users_collapse_in_a_set() {
        let users: HashSet<User> = [
            User::new("Alice", 32),
            User::new("Alice", 32),
            User::new("Bob", 19),
        ]
        .into_iter()
        .collect();
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn any_age_is_accepted() {
        assert_eq!(User::new("Newborn", 0).age(), 0);
        assert_eq!(User::new("Typo", -4).age(), -4);
    }

    #[test]
    fn display_matches_report_format() {
        assert_eq!(
            User::new("Alice", 32).to_string(),
            "User{name='Alice', age=32}"
        );
    }

    #[test]
    fn serializes_as_plain_record() {
        let json = serde_json::to_value(User::new("Bob", 19)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Bob", "age": 19 }));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: construction keeps fields exactly as given.
            #[test]
            fn construction_preserves_fields(
                name in "[A-Za-z][A-Za-z ]{0,30}",
                age in any::<i32>()
            ) {
                let user = User::new(name.clone(), age);
                prop_assert_eq!(user.name(), name.as_str());
                prop_assert_eq!(user.age(), age);
                prop_assert_eq!(user.clone(), user);
            }
        }
    }
}
