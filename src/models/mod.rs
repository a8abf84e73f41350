//! Data model module
//!
//! Request records and upstream projection types

pub mod card;
pub mod member;

pub use card::{CardRequest, CardRequestError};
pub use member::BoardMember;
