pub mod props;
pub mod source;
pub mod types;

pub use props::{Diagnostic, PropError, users_from_values, validate_props, validate_user};
pub use types::{User, Users};
