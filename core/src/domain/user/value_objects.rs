pub struct CreateUserInput {
    pub username: String,
    pub password: String,
}

pub struct GetUserInput {
    pub user_id: i32,
}
