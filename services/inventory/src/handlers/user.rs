use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::types::{User, UserPatch};
use crate::error::InventoryError;
use crate::state::AppState;
use crate::usecase::user::{
    DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, LoginInput, LoginUseCase, SignUpInput,
    SignUpUseCase, UpdateUserUseCase,
};

/// User row as exposed by the API. The password hash never leaves the
/// service.
#[derive(Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            status: user.status,
            role: user.role,
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── GET /api/users ───────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, InventoryError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

// ── GET /api/users/{id} ──────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, InventoryError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&user_id).await?;
    Ok(Json(user.into()))
}

// ── POST /api/users/signup ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    pub message: &'static str,
    pub user_id: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), InventoryError> {
    let usecase = SignUpUseCase {
        repo: state.user_repo(),
    };
    let user_id = usecase
        .execute(SignUpInput {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            password: body.password,
            status: body.status,
            role: body.role,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "User registered",
            user_id,
        }),
    ))
}

// ── POST /api/users/login ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: UserResponse,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, InventoryError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        message: "Authentication successful",
        user: user.into(),
    }))
}

// ── PUT /api/users/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, InventoryError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(
            &user_id,
            UserPatch {
                first_name: body.first_name,
                last_name: body.last_name,
                email: body.email,
                status: body.status,
                role: body.role,
            },
        )
        .await?;
    Ok(Json(MessageResponse {
        message: "User updated",
    }))
}

// ── DELETE /api/users/{id} ───────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>, InventoryError> {
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(&user_id).await?;
    Ok(Json(MessageResponse {
        message: "User deleted",
    }))
}
