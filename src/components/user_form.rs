use crate::data::UserFields;
use crate::roster::Roster;
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;
use yewdux::prelude::*;

fn draft_field(
	dispatch: &Dispatch<Roster>,
	apply: fn(&mut UserFields, String),
) -> Callback<InputEvent> {
	dispatch.reduce_mut_callback_with(move |roster, ev: InputEvent| {
		let input: web_sys::HtmlInputElement = ev
			.target_dyn_into()
			.expect_throw("event target should be an input");
		roster.edit_draft(|draft| apply(draft, input.value()));
	})
}

/// The one form, serving both Add and Edit mode. Field values are derived
/// from the store's draft on every render; begin-edit fills the draft, so no
/// post-render patching of the inputs is ever needed.
#[function_component]
pub fn UserForm() -> Html {
	let (roster, dispatch) = use_store::<Roster>();
	let editing = roster.is_editing();
	let draft = roster.draft();

	let onsubmit = dispatch.reduce_mut_callback_with(|roster, ev: SubmitEvent| {
		ev.prevent_default();
		if roster.is_editing() {
			roster.submit_update();
		} else {
			roster.submit_create();
		}
	});
	let cancel = dispatch.reduce_mut_callback(Roster::cancel_edit);

	html! {
		<form class="card p-4 shadow" {onsubmit}>
			<h2 class="card-title text-center mb-3">
				{if editing { "Edit User" } else { "Add New User" }}
			</h2>
			<div class="mb-3">
				<label class="form-label" for="name">{"Full Name"}</label>
				<input
					id="name" class="form-control" type="text"
					placeholder="Enter full name"
					autocomplete="name" required=true
					value={draft.name.clone()}
					oninput={draft_field(&dispatch, |draft, value| draft.name = value)}
				/>
			</div>
			<div class="mb-3">
				<label class="form-label" for="email">{"Email Address"}</label>
				<input
					id="email" class="form-control" type="email"
					placeholder="Enter email address"
					autocomplete="email" required=true
					value={draft.email.clone()}
					oninput={draft_field(&dispatch, |draft, value| draft.email = value)}
				/>
			</div>
			<div class="mb-3">
				<label class="form-label" for="username">{"Username"}</label>
				<input
					id="username" class="form-control" type="text"
					placeholder="Choose a username"
					autocomplete="username" required=true
					value={draft.username.clone()}
					oninput={draft_field(&dispatch, |draft, value| draft.username = value)}
				/>
			</div>
			<div class="mb-3">
				<label class="form-label" for="password">{"Password"}</label>
				<input
					id="password" class="form-control" type="password"
					placeholder={if editing { "Enter new password" } else { "Create a password" }}
					autocomplete="new-password" required=true
					value={draft.password.clone()}
					oninput={draft_field(&dispatch, |draft, value| draft.password = value)}
				/>
			</div>
			<div class="d-flex gap-2">
				{editing.then(|| html! {
					<button type="button" class="btn btn-secondary flex-fill" onclick={cancel}>
						{"Cancel"}
					</button>
				})}
				<button type="submit" class="btn btn-primary flex-fill">
					{if editing { "Update User" } else { "Add User" }}
				</button>
			</div>
		</form>
	}
}
