use crate::message::{
	Message, MessageError, WebSocketMessage, deserialize_message_from_str, serialize_message_to_websocket_message,
};
use crate::room::playback::SyncAction;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum BroadcastMessage {
	LoadVideo(LoadVideoBroadcast),
	Sync(SyncBroadcast),
	ParticipantCount(ParticipantCountBroadcast),
}

macro_rules! broadcast_from_struct {
	($enum_case: ident, $struct_type: ty) => {
		impl From<$struct_type> for BroadcastMessage {
			fn from(broadcast: $struct_type) -> BroadcastMessage {
				BroadcastMessage::$enum_case(broadcast)
			}
		}
	};
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LoadVideoBroadcast {
	pub video_id: String,
}

broadcast_from_struct!(LoadVideo, LoadVideoBroadcast);

/// Relayed playback action. The fields of a participant's sync request are
/// passed on untouched, receivers compensate for network delay themselves
/// using the embedded `timestamp`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SyncBroadcast {
	pub action: SyncAction,
	pub time: f64,
	pub timestamp: i64,
}

broadcast_from_struct!(Sync, SyncBroadcast);

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ParticipantCountBroadcast {
	pub count: usize,
}

broadcast_from_struct!(ParticipantCount, ParticipantCountBroadcast);

impl Message for BroadcastMessage {}

impl From<&BroadcastMessage> for WebSocketMessage {
	fn from(message: &BroadcastMessage) -> Self {
		serialize_message_to_websocket_message(message)
	}
}

impl TryFrom<&WebSocketMessage> for BroadcastMessage {
	type Error = MessageError;

	fn try_from(websocket_message: &WebSocketMessage) -> Result<Self, Self::Error> {
		match websocket_message {
			WebSocketMessage::Text(json) => deserialize_message_from_str(json.as_str()),
			_ => Err(MessageError::WrongMessageType(websocket_message.clone())),
		}
	}
}
