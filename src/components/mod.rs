//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod footer;
pub mod form;
pub mod loading;
pub mod modal;
pub mod nav;
pub mod toast;

pub use footer::Footer;
pub use form::FormField;
pub use loading::{ListSkeleton, Loading};
pub use modal::Modal;
pub use nav::Nav;
pub use toast::Toast;
