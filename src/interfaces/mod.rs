//! Stored forms of a [`Proof`](crate::Proof): pretty JSON and the
//! line-oriented text layout. Both keep leaf bytes exact.

pub mod json;
pub mod text;
