use crate::data::{User, UserId};
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// A value stored whole under a fixed key in origin-scoped local storage,
/// overwritten on every save. Writes are fire-and-forget; reads treat
/// anything unusable as absent.
pub trait StoredValue {
	fn id() -> &'static str;

	fn load() -> Option<Self>
	where
		Self: Sized + for<'de> Deserialize<'de>,
	{
		LocalStorage::get::<Self>(Self::id()).ok()
	}

	fn store(&self)
	where
		Self: Serialize,
	{
		if let Err(err) = LocalStorage::set(Self::id(), self) {
			log::error!(target: "roster", "failed to persist {:?}: {err:?}", Self::id());
		}
	}
}

/// The persisted form of the whole collection: the ordered records plus the
/// id counter they were allocated from.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
	pub users: Vec<User>,
	pub next_id: UserId,
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
	#[error("snapshot is neither a roster object nor a user array: {0}")]
	Shape(serde_json::Error),
}

impl StoredValue for Snapshot {
	fn id() -> &'static str {
		"users"
	}

	fn load() -> Option<Self> {
		let raw = LocalStorage::raw().get_item(Self::id()).ok()??;
		match Self::decode(&raw) {
			Ok(snapshot) => Some(snapshot),
			Err(err) => {
				log::warn!(target: "roster", "discarding malformed snapshot: {err}");
				None
			}
		}
	}
}

impl Snapshot {
	/// Parses a persisted snapshot. An earlier build stored the bare user
	/// array under the same key, so that shape is still accepted, with the
	/// counter rebuilt from the highest id present.
	pub fn decode(raw: &str) -> Result<Self, DecodeError> {
		if let Ok(snapshot) = serde_json::from_str::<Self>(raw) {
			return Ok(snapshot);
		}
		match serde_json::from_str::<Vec<User>>(raw) {
			Ok(users) => {
				let next_id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
				Ok(Self { users, next_id })
			}
			Err(err) => Err(DecodeError::Shape(err)),
		}
	}
}
