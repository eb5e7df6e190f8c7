pub mod bootstrap_admin;
pub mod change_password;
pub mod login_user;
pub mod logout_user;
pub mod request_password_reset;
pub mod reset_password;
