use crate::data::{User, UserFields, UserId};
use crate::storage::Snapshot;
use yewdux::prelude::*;

/// The authoritative collection plus the form/mode controller state.
///
/// Mutated only through the intent methods below, all of which run inside
/// `Dispatch::reduce_mut` on the one UI thread. `loaded` flips exactly once,
/// when hydration completes; persistence is gated on it so the seed defaults
/// can never clobber a snapshot that simply hasn't been read yet.
#[derive(Clone, PartialEq, Debug, Store)]
pub struct Roster {
	users: Vec<User>,
	next_id: UserId,
	editing: Option<UserId>,
	draft: UserFields,
	loaded: bool,
}

impl Default for Roster {
	fn default() -> Self {
		let users = User::seed();
		let next_id = users.len() as UserId + 1;
		Self {
			users,
			next_id,
			editing: None,
			draft: UserFields::default(),
			loaded: false,
		}
	}
}

impl Roster {
	/// Replaces the seed defaults with a prior snapshot, if one exists, and
	/// marks hydration complete. Runs once, one microtask after mount.
	pub fn hydrate(&mut self, snapshot: Option<Snapshot>) {
		if let Some(snapshot) = snapshot {
			self.users = snapshot.users;
			self.next_id = snapshot.next_id;
		}
		self.loaded = true;
	}

	pub fn is_loaded(&self) -> bool {
		self.loaded
	}

	pub fn users(&self) -> &[User] {
		&self.users
	}

	pub fn snapshot(&self) -> Snapshot {
		Snapshot {
			users: self.users.clone(),
			next_id: self.next_id,
		}
	}

	/// The snapshot to persist, or `None` until hydration has completed.
	/// Gating here keeps the seed defaults from overwriting a snapshot that
	/// simply hasn't been read yet.
	pub fn writeback(&self) -> Option<Snapshot> {
		self.loaded.then(|| self.snapshot())
	}

	pub fn editing_id(&self) -> Option<UserId> {
		self.editing
	}

	pub fn editing_user(&self) -> Option<&User> {
		let id = self.editing?;
		self.users.iter().find(|user| user.id == id)
	}

	pub fn is_editing(&self) -> bool {
		self.editing.is_some()
	}

	pub fn draft(&self) -> &UserFields {
		&self.draft
	}

	pub fn edit_draft(&mut self, apply: impl FnOnce(&mut UserFields)) {
		apply(&mut self.draft);
	}

	/// Appends a new record built from the draft, under a fresh id from the
	/// monotonic counter. Ids are never reused, so a delete followed by a
	/// create cannot collide with a surviving record.
	pub fn submit_create(&mut self) {
		if !self.draft.is_complete() {
			return;
		}
		let fields = std::mem::take(&mut self.draft);
		let id = self.next_id;
		self.next_id += 1;
		self.users.push(User::new(id, fields));
	}

	/// Applies the draft to the current edit target in place, keeping its id
	/// and position, then returns to Add mode. If the target vanished this
	/// does nothing; the UI disables the paths that could get us here, so the
	/// branch is defensive only.
	pub fn submit_update(&mut self) {
		if !self.draft.is_complete() {
			return;
		}
		let Some(id) = self.editing else { return };
		if let Some(user) = self.users.iter_mut().find(|user| user.id == id) {
			user.apply(std::mem::take(&mut self.draft));
		}
		self.editing = None;
		self.draft = UserFields::default();
	}

	/// Removes the record with `id`, preserving the order of the remainder.
	/// Deleting the current edit target drops back to Add mode; deleting an
	/// unknown id is a no-op.
	pub fn delete(&mut self, id: UserId) {
		self.users.retain(|user| user.id != id);
		if self.editing == Some(id) {
			self.editing = None;
			self.draft = UserFields::default();
		}
	}

	/// Targets `id` for editing and fills the draft from its current values.
	/// Refused while another edit is in progress (at most one session) or if
	/// no such record exists.
	pub fn begin_edit(&mut self, id: UserId) {
		if self.editing.is_some() {
			return;
		}
		let Some(user) = self.users.iter().find(|user| user.id == id) else {
			return;
		};
		self.draft = user.fields();
		self.editing = Some(id);
	}

	pub fn cancel_edit(&mut self) {
		self.editing = None;
		self.draft = UserFields::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fields(name: &str) -> UserFields {
		UserFields {
			name: name.to_owned(),
			email: format!("{}@example.com", name.to_lowercase()),
			username: name.to_lowercase(),
			password: "pw".to_owned(),
		}
	}

	fn create(roster: &mut Roster, name: &str) {
		roster.draft = fields(name);
		roster.submit_create();
	}

	#[test]
	fn starts_from_seed_when_no_snapshot() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		let ids = roster.users().iter().map(|u| u.id).collect::<Vec<_>>();
		assert_eq!(ids, vec![1, 2, 3, 4, 5]);
		assert_eq!(roster.users()[0].name, "Leanne Graham");
		assert!(roster.is_loaded());
	}

	#[test]
	fn snapshot_takes_precedence_over_seed() {
		let mut roster = Roster::default();
		let prior = Snapshot {
			users: vec![User::new(9, fields("Solo"))],
			next_id: 10,
		};
		roster.hydrate(Some(prior.clone()));
		assert_eq!(roster.snapshot(), prior);
	}

	#[test]
	fn not_loaded_until_hydrated() {
		let roster = Roster::default();
		assert!(!roster.is_loaded());
	}

	#[test]
	fn no_writeback_offered_before_hydration() {
		let mut roster = Roster::default();
		create(&mut roster, "Ignored Before Load");
		assert_eq!(roster.writeback(), None);
		roster.hydrate(None);
		assert_eq!(roster.writeback(), Some(roster.snapshot()));
	}

	#[test]
	fn create_appends_at_end_with_fresh_id() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		create(&mut roster, "Newcomer");
		let last = roster.users().last().unwrap();
		assert_eq!(last.id, 6);
		assert_eq!(last.name, "Newcomer");
		assert_eq!(roster.users().len(), 6);
		// draft clears for the next Add
		assert_eq!(*roster.draft(), UserFields::default());
	}

	#[test]
	fn create_refuses_incomplete_draft() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.draft = UserFields {
			name: "No Email".to_owned(),
			..Default::default()
		};
		roster.submit_create();
		assert_eq!(roster.users().len(), 5);
	}

	#[test]
	fn ids_are_never_reused_after_delete() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.delete(2);
		create(&mut roster, "Replacement");
		// length+1 would have handed out 5 again; the counter keeps going
		assert_eq!(roster.users().last().unwrap().id, 6);
		let mut ids = roster.users().iter().map(|u| u.id).collect::<Vec<_>>();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), roster.users().len());
	}

	#[test]
	fn update_preserves_position_and_id() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.begin_edit(1);
		roster.edit_draft(|draft| draft.name = "Renamed".to_owned());
		roster.submit_update();
		assert_eq!(roster.users()[0].id, 1);
		assert_eq!(roster.users()[0].name, "Renamed");
		assert_eq!(roster.users()[1].name, "Ervin Howell");
		assert!(!roster.is_editing());
	}

	#[test]
	fn begin_edit_fills_draft_from_target() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.begin_edit(3);
		assert_eq!(roster.editing_id(), Some(3));
		assert_eq!(roster.draft().name, "Clementine Bauch");
		assert_eq!(roster.draft().username, "Samantha");
	}

	#[test]
	fn only_one_edit_session_at_a_time() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.begin_edit(2);
		roster.begin_edit(4);
		assert_eq!(roster.editing_id(), Some(2));
		assert_eq!(roster.draft().name, "Ervin Howell");
	}

	#[test]
	fn begin_edit_on_unknown_id_is_refused() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.begin_edit(42);
		assert_eq!(roster.editing_id(), None);
	}

	#[test]
	fn delete_clears_dangling_edit_target() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.begin_edit(2);
		roster.delete(2);
		assert!(!roster.is_editing());
		assert!(roster.users().iter().all(|u| u.id != 2));
		assert_eq!(*roster.draft(), UserFields::default());
	}

	#[test]
	fn delete_of_other_record_keeps_edit_session() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.begin_edit(2);
		roster.delete(4);
		assert_eq!(roster.editing_id(), Some(2));
	}

	#[test]
	fn delete_unknown_id_is_noop() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.delete(42);
		assert_eq!(roster.users().len(), 5);
	}

	#[test]
	fn stale_update_is_silent_noop() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.begin_edit(2);
		roster.delete(2);
		// mode already fell back to Add; a straggling update changes nothing
		let before = roster.users().to_vec();
		roster.submit_update();
		assert_eq!(roster.users(), &before[..]);
	}

	#[test]
	fn cancel_edit_discards_draft_without_mutation() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		roster.begin_edit(1);
		roster.edit_draft(|draft| draft.name = "Scratch".to_owned());
		roster.cancel_edit();
		assert!(!roster.is_editing());
		assert_eq!(*roster.draft(), UserFields::default());
		assert_eq!(roster.users()[0].name, "Leanne Graham");
	}

	#[test]
	fn snapshot_round_trips_the_collection() {
		let mut roster = Roster::default();
		roster.hydrate(None);
		create(&mut roster, "Appended");
		let snapshot = roster.snapshot();
		let mut restored = Roster::default();
		restored.hydrate(Some(snapshot));
		assert_eq!(restored.users(), roster.users());
		assert_eq!(restored.snapshot(), roster.snapshot());
	}
}
