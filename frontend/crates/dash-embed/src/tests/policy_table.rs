use crate::{ADMIN_USER, PolicyDescriptionTable, PolicyShape, UNKNOWN_USER, describe};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

const DOCUMENTED: &[(&str, &str)] = &[
    ("john_usa", "country = 'USA'"),
    ("marie_france", "country = 'France'"),
    ("yuki_japan", "country = 'Japan'"),
    ("hans_germany", "country = 'Germany'"),
    ("sophia_spain", "country = 'Spain'"),
    ("manager_apac", "territory = 'APAC'"),
    ("manager_emea", "territory = 'EMEA'"),
    ("manager_japan", "territory = 'Japan'"),
    ("motorcycles_sales", "product_line = 'Motorcycles'"),
    ("classic_cars_sales", "product_line = 'Classic Cars'"),
    ("vintage_cars_sales", "product_line = 'Vintage Cars'"),
    ("trucks_buses_sales", "product_line = 'Trucks and Buses'"),
    ("planes_sales", "product_line = 'Planes'"),
    ("ships_sales", "product_line = 'Ships'"),
    ("trains_sales", "product_line = 'Trains'"),
    ("large_deals", "deal_size = 'Large'"),
    ("medium_deals", "deal_size = 'Medium'"),
    ("small_deals", "deal_size = 'Small'"),
    (
        "japan_motorcycles",
        "country = 'Japan' AND product_line = 'Motorcycles'",
    ),
    ("usa_large", "country = 'USA' AND deal_size = 'Large'"),
    (
        "emea_classic_cars",
        "territory = 'EMEA' AND product_line = 'Classic Cars'",
    ),
    ("france_large", "country = 'France' AND deal_size = 'Large'"),
    ("small_medium", "deal_size IN ('Small', 'Medium')"),
    (
        "vehicles_only",
        "product_line IN ('Motorcycles', 'Classic Cars', 'Vintage Cars', 'Trucks and Buses')",
    ),
    ("transport_only", "product_line IN ('Planes', 'Ships', 'Trains')"),
    ("admin", "No filters (All data)"),
];

#[test]
fn given_every_documented_user_when_describe_then_exact_description() {
    for (user, expected) in DOCUMENTED {
        assert_eq!(describe(user).as_str(), *expected, "user {user}");
    }
}

#[test]
fn given_table_when_counted_then_matches_documented_users() {
    let table = PolicyDescriptionTable::global();

    assert_that!(table.len(), eq(DOCUMENTED.len()));
    assert!(!table.is_empty());
}

#[test]
fn given_unlisted_identifier_when_describe_then_unknown_user() {
    for user in ["ghost_user", "", " ", "Admin", "john_usa ", "manager_EMEA", "日本"] {
        let descriptor = describe(user);
        assert_eq!(descriptor.as_str(), UNKNOWN_USER, "user {user:?}");
        assert!(!descriptor.is_known());
    }
}

#[test]
fn given_unknown_descriptor_when_shape_then_none() {
    assert_that!(describe("ghost_user").shape(), none());
}

#[test]
fn given_entries_when_shape_then_matches_predicate_form() {
    assert_that!(describe("manager_emea").shape(), some(eq(PolicyShape::Equality)));
    assert_that!(describe("usa_large").shape(), some(eq(PolicyShape::Conjunction)));
    assert_that!(
        describe("transport_only").shape(),
        some(eq(PolicyShape::Disjunction))
    );
    assert_that!(describe(ADMIN_USER).shape(), some(eq(PolicyShape::Unrestricted)));
}

#[test]
fn given_shapes_when_checked_against_text_then_consistent() {
    for (user, descriptor) in PolicyDescriptionTable::global().known_users() {
        let text = descriptor.as_str();
        match descriptor.shape() {
            Some(PolicyShape::Conjunction) => assert!(text.contains(" AND "), "{user}"),
            Some(PolicyShape::Disjunction) => assert!(text.contains(" IN ("), "{user}"),
            Some(PolicyShape::Equality) => {
                assert!(text.contains(" = ") && !text.contains(" AND "), "{user}")
            }
            Some(PolicyShape::Unrestricted) => assert_eq!(user, ADMIN_USER),
            None => panic!("known user {user} has no shape"),
        }
    }
}

#[test]
fn given_known_users_when_listed_then_declaration_order() {
    let users: Vec<&str> = PolicyDescriptionTable::global()
        .known_users()
        .map(|(user, _)| user)
        .collect();
    let expected: Vec<&str> = DOCUMENTED.iter().map(|(user, _)| *user).collect();

    assert_that!(users, eq(&expected));
}

#[test]
fn given_descriptor_when_serialized_then_plain_string() {
    let json = serde_json::to_string(&describe("manager_emea")).unwrap();

    assert_that!(json.as_str(), eq(r#""territory = 'EMEA'""#));
}

#[test]
fn given_user_identity_when_describe_then_same_as_str() {
    let user = crate::UserIdentity::new("small_medium");

    assert_that!(describe(&user), eq(describe("small_medium")));
    assert!(PolicyDescriptionTable::global().contains(&user));
}
