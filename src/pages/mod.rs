//! Pages
//!
//! Top-level page components for each route.

pub mod chores;
pub mod dashboard;
pub mod join_group;
pub mod landing;
pub mod login;
pub mod signup;
pub mod verify_email;

pub use chores::Chores;
pub use dashboard::Dashboard;
pub use join_group::JoinGroup;
pub use landing::Landing;
pub use login::Login;
pub use signup::Signup;
pub use verify_email::VerifyEmail;
