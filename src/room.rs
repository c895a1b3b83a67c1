use crate::connection::sender::MessageSender;
use crate::message::broadcast_message::{LoadVideoBroadcast, ParticipantCountBroadcast, SyncBroadcast};
use crate::room::client::Client;
use crate::room::client_id::ClientId;
use crate::room::clients::Clients;
use crate::room::playback::{PlaybackState, ResumeSnapshot, SyncAction};
use crate::utils::time_source::TimeSource;
use std::sync::Arc;

pub mod client;
pub mod client_id;
pub mod client_id_sequence;
pub mod clients;
pub mod playback;

/// One shared watch session. Mediates between participant actions and the
/// playback state and decides what everybody gets told.
///
/// All mutation happens under a single lock and every operation enqueues its
/// broadcasts inside the same critical section, so updates are applied and
/// announced in server-arrival order. That order is the only ordering there
/// is; two participants racing each other are resolved by whoever the server
/// happens to see last.
#[derive(Clone)]
pub struct Room {
	inner: Arc<Inner>,
}

struct Inner {
	state: parking_lot::Mutex<State>,
	time_source: TimeSource,
}

#[derive(Default)]
struct State {
	clients: Clients,
	playback: PlaybackState,
}

impl Room {
	pub fn new(time_source: TimeSource) -> Room {
		Room {
			inner: Arc::new(Inner {
				state: parking_lot::Mutex::new(State::default()),
				time_source,
			}),
		}
	}

	/// Adds a new participant, brings it up to date with the current video
	/// and announces the new viewer count to everyone including the newcomer.
	pub fn join(&self, message_sender: MessageSender) -> Client {
		let mut state = self.inner.state.lock();
		let client = state.clients.add(message_sender);

		if let Some(video_id) = state.playback.loaded_video() {
			client.enqueue_broadcast(
				LoadVideoBroadcast {
					video_id: video_id.to_string(),
				}
				.into(),
			);

			let now = self.inner.time_source.now();
			if let Some(ResumeSnapshot::Playing { position }) = state.playback.resume_snapshot(now) {
				client.enqueue_broadcast(
					SyncBroadcast {
						action: SyncAction::Play,
						time: position,
						timestamp: now.timestamp_millis(),
					}
					.into(),
				);
			}
			// A paused video needs no sync push. Loading already initializes
			// the player paused at the announced position.
		}

		let count = state.clients.count();
		state.clients.broadcast(ParticipantCountBroadcast { count }.into());

		client
	}

	/// Removes a participant and announces the new viewer count to everyone
	/// still connected. Returns how many participants remain.
	pub fn leave(&self, client_id: ClientId) -> usize {
		let mut state = self.inner.state.lock();
		let remaining = state.clients.remove(client_id);
		state
			.clients
			.broadcast(ParticipantCountBroadcast { count: remaining }.into());
		remaining
	}

	/// Replaces the shared video and announces it to every participant,
	/// including the one who requested it.
	pub fn load_video(&self, video_id: String) -> LoadVideoBroadcast {
		let mut state = self.inner.state.lock();
		state.playback.load(video_id.clone(), self.inner.time_source.now());

		let broadcast = LoadVideoBroadcast { video_id };
		state.clients.broadcast(broadcast.clone().into());
		broadcast
	}

	/// Applies a play/pause/seek action and relays it verbatim to every
	/// participant, including the sender. Delay compensation is up to the
	/// receivers, based on the client timestamp embedded in the broadcast.
	pub fn apply_sync(&self, action: SyncAction, time: f64, timestamp: i64) {
		let mut state = self.inner.state.lock();
		state.playback.apply_sync(action, time, self.inner.time_source.now());

		state.clients.broadcast(SyncBroadcast { action, time, timestamp }.into());
	}

	pub fn viewer_count(&self) -> usize {
		self.inner.state.lock().clients.count()
	}
}
