//! Domain entity representing a stored user record.

/// A user persisted in the `users` table.
///
/// `password` is kept on the entity so it round-trips through storage, but it
/// is never copied into an outward-facing representation
/// (see [`crate::api::dto::user::UserResponse`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub password: Option<String>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let user = User::new(
    ///     1,
    ///     "Jane".to_string(),
    ///     "Doe".to_string(),
    ///     30,
    ///     "jane@doe.com".to_string(),
    ///     Some("secret".to_string()),
    /// );
    /// ```
    pub fn new(
        id: i64,
        first_name: String,
        last_name: String,
        age: i32,
        email: String,
        password: Option<String>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            age,
            email,
            password,
        }
    }
}

/// Input data for saving a user.
///
/// When `id` is `None` the store assigns a fresh identifier. When it is set,
/// the record is written at that identifier, replacing any existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub password: Option<String>,
}

impl NewUser {
    /// Materializes the stored record once an identifier is known.
    pub fn into_user(self, id: i64) -> User {
        User::new(
            id,
            self.first_name,
            self.last_name,
            self.age,
            self.email,
            self.password,
        )
    }
}
