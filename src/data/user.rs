use serde::{Deserialize, Serialize};

pub type UserId = u32;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct User {
	pub id: UserId,
	pub name: String,
	pub email: String,
	pub username: String,
	// opaque text, not a security boundary; stored and displayed as-is
	pub password: String,
}

impl User {
	pub fn new(id: UserId, fields: UserFields) -> Self {
		Self {
			id,
			name: fields.name,
			email: fields.email,
			username: fields.username,
			password: fields.password,
		}
	}

	pub fn apply(&mut self, fields: UserFields) {
		self.name = fields.name;
		self.email = fields.email;
		self.username = fields.username;
		self.password = fields.password;
	}

	pub fn fields(&self) -> UserFields {
		UserFields {
			name: self.name.clone(),
			email: self.email.clone(),
			username: self.username.clone(),
			password: self.password.clone(),
		}
	}

	/// The built-in records used when no snapshot exists yet.
	pub fn seed() -> Vec<User> {
		[
			(1, "Leanne Graham", "kD2jW@example.com", "Bret"),
			(2, "Ervin Howell", "Tn2M9@example.com", "Antonette"),
			(3, "Clementine Bauch", "Tn2M9@example.com", "Samantha"),
			(4, "Patricia Lebsack", "Tn2M9@example.com", "Karianne"),
			(5, "Chelsey Dietrich", "Tn2M9@example.com", "Kamren"),
		]
		.into_iter()
		.map(|(id, name, email, username)| User {
			id,
			name: name.to_owned(),
			email: email.to_owned(),
			username: username.to_owned(),
			password: "password".to_owned(),
		})
		.collect()
	}
}

/// The four mutable fields of a record, as drafted in the form.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct UserFields {
	pub name: String,
	pub email: String,
	pub username: String,
	pub password: String,
}

impl UserFields {
	// mirrors the form's required-field gating
	pub fn is_complete(&self) -> bool {
		!self.name.is_empty()
			&& !self.email.is_empty()
			&& !self.username.is_empty()
			&& !self.password.is_empty()
	}
}
