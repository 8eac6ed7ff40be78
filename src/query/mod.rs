//! Non-persistent geometric queries.
//!
//! The only query needed by the broad phase is the exact circle-circle test used to confirm
//! the candidate pairs it reports: see [`contact_ball_ball`].

pub use self::contact::{contact_ball_ball, Penetration};

pub mod contact;
