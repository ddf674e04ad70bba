use crate::policy::{PolicyDescriptor, PolicyShape};

use std::collections::HashMap;
use std::sync::LazyLock;

pub const UNKNOWN_USER: &str = "Unknown user";
pub const ADMIN_USER: &str = "admin";

const UNKNOWN: PolicyDescriptor = PolicyDescriptor::unknown(UNKNOWN_USER);

// Declaration order is the order users are offered in the selection control.
const ENTRIES: &[(&str, &str, PolicyShape)] = &[
    // Single conditions
    ("john_usa", "country = 'USA'", PolicyShape::Equality),
    ("marie_france", "country = 'France'", PolicyShape::Equality),
    ("yuki_japan", "country = 'Japan'", PolicyShape::Equality),
    ("hans_germany", "country = 'Germany'", PolicyShape::Equality),
    ("sophia_spain", "country = 'Spain'", PolicyShape::Equality),
    ("manager_apac", "territory = 'APAC'", PolicyShape::Equality),
    ("manager_emea", "territory = 'EMEA'", PolicyShape::Equality),
    ("manager_japan", "territory = 'Japan'", PolicyShape::Equality),
    ("motorcycles_sales", "product_line = 'Motorcycles'", PolicyShape::Equality),
    ("classic_cars_sales", "product_line = 'Classic Cars'", PolicyShape::Equality),
    ("vintage_cars_sales", "product_line = 'Vintage Cars'", PolicyShape::Equality),
    ("trucks_buses_sales", "product_line = 'Trucks and Buses'", PolicyShape::Equality),
    ("planes_sales", "product_line = 'Planes'", PolicyShape::Equality),
    ("ships_sales", "product_line = 'Ships'", PolicyShape::Equality),
    ("trains_sales", "product_line = 'Trains'", PolicyShape::Equality),
    ("large_deals", "deal_size = 'Large'", PolicyShape::Equality),
    ("medium_deals", "deal_size = 'Medium'", PolicyShape::Equality),
    ("small_deals", "deal_size = 'Small'", PolicyShape::Equality),
    // AND
    (
        "japan_motorcycles",
        "country = 'Japan' AND product_line = 'Motorcycles'",
        PolicyShape::Conjunction,
    ),
    ("usa_large", "country = 'USA' AND deal_size = 'Large'", PolicyShape::Conjunction),
    (
        "emea_classic_cars",
        "territory = 'EMEA' AND product_line = 'Classic Cars'",
        PolicyShape::Conjunction,
    ),
    (
        "france_large",
        "country = 'France' AND deal_size = 'Large'",
        PolicyShape::Conjunction,
    ),
    // OR
    ("small_medium", "deal_size IN ('Small', 'Medium')", PolicyShape::Disjunction),
    (
        "vehicles_only",
        "product_line IN ('Motorcycles', 'Classic Cars', 'Vintage Cars', 'Trucks and Buses')",
        PolicyShape::Disjunction,
    ),
    (
        "transport_only",
        "product_line IN ('Planes', 'Ships', 'Trains')",
        PolicyShape::Disjunction,
    ),
    (ADMIN_USER, "No filters (All data)", PolicyShape::Unrestricted),
];

static TABLE: LazyLock<PolicyDescriptionTable> = LazyLock::new(PolicyDescriptionTable::build);

/// Fixed mapping from user identifier to its row-level-security description.
///
/// Built once on first use and never mutated afterwards.
#[derive(Debug)]
pub struct PolicyDescriptionTable {
    by_user: HashMap<&'static str, PolicyDescriptor>,
}

impl PolicyDescriptionTable {
    fn build() -> Self {
        let by_user = ENTRIES
            .iter()
            .map(|&(user, text, shape)| (user, PolicyDescriptor::new(text, shape)))
            .collect();

        Self { by_user }
    }

    /// Process-wide table.
    pub fn global() -> &'static Self {
        &TABLE
    }

    /// Description for `user`, or the "Unknown user" sentinel.
    ///
    /// Total over all inputs: lookups are exact and case-sensitive.
    pub fn describe(&self, user: impl AsRef<str>) -> PolicyDescriptor {
        self.by_user
            .get(user.as_ref())
            .copied()
            .unwrap_or(UNKNOWN)
    }

    pub fn contains(&self, user: impl AsRef<str>) -> bool {
        self.by_user.contains_key(user.as_ref())
    }

    /// Known users in selection-control order.
    pub fn known_users(&self) -> impl Iterator<Item = (&'static str, PolicyDescriptor)> + '_ {
        ENTRIES.iter().map(|&(user, _, _)| (user, self.describe(user)))
    }

    pub fn len(&self) -> usize {
        self.by_user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }
}

/// Shorthand for `PolicyDescriptionTable::global().describe(user)`.
pub fn describe(user: impl AsRef<str>) -> PolicyDescriptor {
    PolicyDescriptionTable::global().describe(user)
}
