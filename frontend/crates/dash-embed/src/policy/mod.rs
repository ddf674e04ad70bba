mod policy_descriptor;
mod policy_shape;
mod policy_table;

pub use policy_descriptor::PolicyDescriptor;
pub use policy_shape::PolicyShape;
pub use policy_table::{ADMIN_USER, PolicyDescriptionTable, UNKNOWN_USER, describe};
