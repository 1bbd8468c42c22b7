use thiserror::Error;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("Bạn chưa đăng nhập")]
pub struct NotLoggedInError;

/// Rejections of user input detected locally, before any request is sent.
///
/// The messages are shown to the user as is.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    #[error("Username không được để trống")]
    BlankUsername,
    #[error("Password không được để trống")]
    BlankPassword,
    #[error("Họ tên không được để trống")]
    BlankFullName,
    #[error("Email không hợp lệ")]
    InvalidEmail,
    #[error("Mật khẩu phải có ít nhất {min} ký tự")]
    PasswordTooShort { min: usize },
    #[error("Mật khẩu xác nhận không khớp")]
    PasswordMismatch,
}
