use crate::message::{
	Message, MessageError, WebSocketMessage, deserialize_message_from_str, serialize_message_to_websocket_message,
};
use crate::room::playback::SyncAction;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ClientRequest {
	LoadVideo(LoadVideoRequest),
	Sync(SyncRequest),
}

macro_rules! client_request_from_struct {
	($enum_case: ident, $struct_type: ty) => {
		impl From<$struct_type> for ClientRequest {
			fn from(request: $struct_type) -> ClientRequest {
				ClientRequest::$enum_case(request)
			}
		}
	};
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LoadVideoRequest {
	pub video_id: String,
}

client_request_from_struct!(LoadVideo, LoadVideoRequest);

/// A play/pause/seek action as observed by the acting participant.
/// `time` is the playback position in seconds, `timestamp` the participant's
/// wall clock in milliseconds since the unix epoch.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SyncRequest {
	pub action: SyncAction,
	pub time: f64,
	pub timestamp: i64,
}

client_request_from_struct!(Sync, SyncRequest);

impl Message for ClientRequest {}

impl From<&ClientRequest> for WebSocketMessage {
	fn from(request: &ClientRequest) -> Self {
		serialize_message_to_websocket_message(request)
	}
}

impl TryFrom<&str> for ClientRequest {
	type Error = MessageError;

	fn try_from(json: &str) -> Result<Self, Self::Error> {
		deserialize_message_from_str(json)
	}
}

impl TryFrom<&WebSocketMessage> for ClientRequest {
	type Error = MessageError;

	fn try_from(websocket_message: &WebSocketMessage) -> Result<Self, Self::Error> {
		match websocket_message {
			WebSocketMessage::Text(json) => json.as_str().try_into(),
			_ => Err(MessageError::WrongMessageType(websocket_message.clone())),
		}
	}
}
