pub mod forgot_password;
