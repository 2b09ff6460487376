use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::auth::SessionUser,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;
