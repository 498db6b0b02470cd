//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its local form state and talks to the session store only
//! through `login`, `signup` and `logout`. Shared chrome lives in
//! `components`.

pub(crate) mod auth_form;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod signup;
