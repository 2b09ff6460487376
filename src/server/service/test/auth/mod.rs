use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::auth::{LoginParams, SessionUser},
        service::auth::AuthService,
        util::password::hash_password,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod resolve;

fn credentials(username: &str, password: &str) -> LoginParams {
    LoginParams {
        username: username.to_string(),
        password: password.to_string(),
    }
}
