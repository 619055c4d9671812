use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Public projection of a user account. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub email: String,
    /// `YYYY-MM-DD`
    pub join_date: String,
    pub membership_status: String,
    /// `user` or `admin`
    pub role: String,
}

/// Registration and edit payload.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UserPayloadDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub contact: Option<Value>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// `YYYY-MM-DD`
    pub join_date: Option<String>,
    pub membership_status: Option<String>,
    #[serde(alias = "user_type")]
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub user: UserDto,
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}
