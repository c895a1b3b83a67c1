use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a participant did to the player. Both `Pause` and `Seek` leave the
/// video paused, a seek is modeled as a pause at the new position.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SyncAction {
	Play,
	Pause,
	Seek,
}

/// The authoritative playback state of the shared video.
///
/// `position` is the position at the moment `last_update` was recorded and is
/// never extrapolated in storage. Projecting it forward only happens in
/// [`PlaybackState::resume_snapshot`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
	video_id: String,
	loaded: bool,
	playing: bool,
	position: f64,
	last_update: DateTime<Utc>,
}

impl Default for PlaybackState {
	fn default() -> Self {
		Self {
			video_id: String::new(),
			loaded: false,
			playing: false,
			position: 0.0,
			last_update: DateTime::<Utc>::UNIX_EPOCH,
		}
	}
}

/// What a newly joined participant needs to catch up with the room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResumeSnapshot {
	Playing { position: f64 },
	Paused { position: f64 },
}

impl PlaybackState {
	/// Unconditionally replaces the current video, paused at the start.
	/// The most recent load wins, there is no merging.
	pub fn load(&mut self, video_id: String, now: DateTime<Utc>) {
		self.video_id = video_id;
		self.loaded = true;
		self.playing = false;
		self.position = 0.0;
		self.last_update = now;
	}

	/// Applies a play/pause/seek transition at `now` (server-observed time,
	/// not the acting participant's clock).
	///
	/// The position is stored as-is. There is no validation and no ordering,
	/// a stale update arriving late overwrites a newer one; whatever write
	/// the server observes last wins.
	pub fn apply_sync(&mut self, action: SyncAction, position: f64, now: DateTime<Utc>) {
		self.position = position;
		self.last_update = now;
		self.playing = matches!(action, SyncAction::Play);
	}

	/// The id of the current video, or `None` as long as nothing has ever
	/// been loaded. A meaningless empty id must never reach participants.
	pub fn loaded_video(&self) -> Option<&str> {
		self.loaded.then_some(self.video_id.as_str())
	}

	/// The state as seen at `observer_now`. While playing, the stored
	/// position is projected forward by the time elapsed since the last
	/// update so a late joiner doesn't start behind everyone else.
	pub fn resume_snapshot(&self, observer_now: DateTime<Utc>) -> Option<ResumeSnapshot> {
		if !self.loaded {
			return None;
		}

		let snapshot = if self.playing {
			#[allow(clippy::cast_precision_loss)]
			let elapsed_seconds = (observer_now - self.last_update).num_milliseconds() as f64 / 1000.0;
			ResumeSnapshot::Playing {
				position: self.position + elapsed_seconds,
			}
		} else {
			ResumeSnapshot::Paused {
				position: self.position,
			}
		};
		Some(snapshot)
	}
}
