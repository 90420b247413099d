mod register;

pub use crate::{body_json, TestContextExt};
pub use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
pub use petpal::{
    model::user::{ChangePasswordDto, LoginDto, RegisterDto, ResetPasswordDto},
    server::{
        controller::auth::{
            change_password, get_user, login, logout, register, reset_password,
            RESET_RESPONSE_MESSAGE,
        },
        error::auth::AuthError,
        model::session::user::SessionUserId,
    },
};
pub use petpal_test_utils::prelude::*;
