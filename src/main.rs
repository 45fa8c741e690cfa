use yew::prelude::*;
use yew_hooks::use_mount;
use yewdux::prelude::*;

mod components;
mod data;
mod roster;
mod storage;

use components::{UserForm, UserList};
use roster::Roster;
use storage::{Snapshot, StoredValue};

#[cfg(target_family = "wasm")]
fn main() {
	console_error_panic_hook::set_once();
	let _ = console_log::init_with_level(log::Level::Debug);
	yew::Renderer::<App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {}

#[function_component]
fn App() -> Html {
	let (roster, dispatch) = use_store::<Roster>();

	// Hydrate one microtask after mount, so the loading screen paints first.
	use_mount({
		let dispatch = dispatch.clone();
		move || {
			wasm_bindgen_futures::spawn_local(async move {
				let snapshot = Snapshot::load();
				log::debug!(target: "roster", "hydrating; prior snapshot: {}", snapshot.is_some());
				dispatch.reduce_mut(move |roster| roster.hydrate(snapshot));
			});
		}
	});

	// Write-through on every collection change; `writeback` stays `None`
	// until hydration completes.
	use_effect_with(roster.writeback(), |writeback| {
		if let Some(snapshot) = writeback {
			snapshot.store();
		}
	});

	if !roster.is_loaded() {
		return html! {
			<div class="min-vh-100 d-flex align-items-center justify-content-center bg-dark">
				<div class="text-center">
					<div class="spinner-border text-primary mb-3" role="status" />
					<div class="text-white fs-5">{"Loading users..."}</div>
				</div>
			</div>
		};
	}

	html! {
		<div class="min-vh-100 bg-dark py-4">
			<div class="container">
				<div class="text-center mb-4">
					<h1 class="text-white">{"User Management"}</h1>
					<p class="text-secondary fs-5">{"Add and manage users in the system"}</p>
				</div>
				<div class="row g-4">
					<div class="col-lg-6">
						<UserForm />
					</div>
					<div class="col-lg-6">
						<UserList />
					</div>
				</div>
			</div>
		</div>
	}
}
