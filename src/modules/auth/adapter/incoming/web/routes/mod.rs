mod fetch_me;
mod login_user;
mod register_user;
mod user_dto;

pub use fetch_me::{__path_fetch_me_handler, fetch_me_handler};
pub use login_user::{__path_login_user_handler, login_user_handler};
pub use register_user::{__path_register_user_handler, register_user_handler};
pub use user_dto::{PublicUser, UserProfile};
