pub mod change_password;
pub mod forgot_password;
pub mod login_user;
pub mod logout_user;
pub mod reset_password;

pub use change_password::{change_password_handler, ChangePasswordRequestDto};
pub use forgot_password::{forgot_password_handler, ForgotPasswordRequestDto};
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo};
pub use logout_user::{logout_user_handler, LogoutResponseBody};
pub use reset_password::{reset_password_handler, ResetPasswordRequestDto};
