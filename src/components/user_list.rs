use crate::data::User;
use crate::roster::Roster;
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn UserList() -> Html {
	let (roster, _) = use_store::<Roster>();
	let editing_name = roster.editing_user().map(|user| user.name.clone());

	html! {
		<div class="card p-4 shadow">
			<div class="d-flex justify-content-between align-items-center mb-3">
				<h2 class="card-title mb-0">{format!("Users ({})", roster.users().len())}</h2>
				<div class="d-flex align-items-center gap-2">
					{editing_name.map(|name| html! {
						<span class="badge bg-warning text-dark">{format!("Editing: {name}")}</span>
					})}
					<span class="badge bg-primary">{format!("Total: {}", roster.users().len())}</span>
				</div>
			</div>
			<div class="d-flex flex-column gap-3">
				{roster.users().iter().map(|user| html! {
					<UserCard key={user.id} user={user.clone()} />
				}).collect::<Html>()}
			</div>
			{roster.users().is_empty().then(|| html! {
				<div class="text-center py-5">
					<div class="text-muted fs-5">{"No users found"}</div>
					<div class="text-muted small mt-1">{"Add a new user to get started"}</div>
				</div>
			})}
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct UserCardProps {
	pub user: User,
}

#[function_component]
fn UserCard(UserCardProps { user }: &UserCardProps) -> Html {
	let (roster, dispatch) = use_store::<Roster>();
	let is_target = roster.editing_id() == Some(user.id);
	// one edit session at a time: everything else locks while editing
	let edit_locked = roster.is_editing() && !is_target;
	let delete_locked = roster.is_editing();

	let begin_edit = {
		let id = user.id;
		dispatch.reduce_mut_callback(move |roster| roster.begin_edit(id))
	};
	let delete = {
		let id = user.id;
		dispatch.reduce_mut_callback(move |roster| roster.delete(id))
	};

	let card_classes = if is_target {
		classes!("card", "p-3", "border-warning", "border-2")
	} else {
		classes!("card", "p-3")
	};
	html! {
		<div class={card_classes}>
			<div class="d-flex justify-content-between align-items-start gap-2">
				<div class="flex-fill">
					<div class="d-flex align-items-center gap-2 mb-2">
						<h3 class="h5 mb-0">{&user.name}</h3>
						<span class="badge bg-secondary">{format!("ID: {}", user.id)}</span>
						{is_target.then(|| html! {
							<span class="badge bg-warning text-dark">{"Editing..."}</span>
						})}
					</div>
					<div class="text-body-secondary small">{&user.email}</div>
					<div class="text-body-secondary small">{format!("@{}", user.username)}</div>
					<div class="text-body-secondary small font-monospace">{"••••••••"}</div>
				</div>
				<div class="d-flex flex-column gap-1">
					<button
						class="btn btn-sm btn-outline-secondary"
						onclick={begin_edit}
						disabled={edit_locked}
					>
						{if is_target { "Editing..." } else { "Edit" }}
					</button>
					<button
						class="btn btn-sm btn-outline-danger"
						onclick={delete}
						disabled={delete_locked}
					>
						{"Delete"}
					</button>
				</div>
			</div>
		</div>
	}
}
