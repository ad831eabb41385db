//! Built-in rule catalogue
//!
//! Each rule is a standalone building block with a default message that can
//! be replaced with `with_message`. None of them is wired into the chain
//! implicitly; a field lists exactly the rules it wants, in the order its
//! messages should be reported.

pub mod closure;
pub mod email;
pub mod length;
pub mod matches;
pub mod password;
pub mod pattern;
pub mod phone;
pub mod required;

pub use closure::{FnRule, rule_fn};
pub use email::EmailRule;
pub use length::{MinLengthRule, min_length};
pub use matches::{MatchesFieldRule, matches_field};
pub use password::PasswordStrengthRule;
pub use pattern::PatternRule;
pub use phone::PhoneRule;
pub use required::{RequiredRule, required};
