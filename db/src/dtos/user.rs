/// Insert payload for a new user. `password` is already hashed by the time
/// it crosses this boundary.
#[derive(Debug)]
pub struct UserCreateRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}
