//! Page Components
//!
//! Enhancers for the server-rendered page. Each module binds behavior to
//! existing markup rather than mounting markup of its own.

pub mod comment_form;
pub mod effects;
pub mod follow_button;
pub mod lazy_image;
pub mod like_button;
pub mod post_composer;
pub mod register_form;
pub mod toast;

pub use follow_button::FollowModel;
pub use like_button::LikeModel;
pub use toast::{Toast, ToastKind};
