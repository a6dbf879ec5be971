//! Request helpers shared by controllers.

pub mod acting_user;
