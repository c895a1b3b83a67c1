use crate::connection::sender::MessageSender;
use crate::message::WebSocketMessage;
use crate::message::client_request::ClientRequest;
use async_trait::async_trait;
use futures_util::{Stream, StreamExt};
use std::pin::Pin;
use tracing::error;

pub type MessageReceiver = Pin<Box<dyn MessageReceiverTrait + Unpin + Send>>;

#[async_trait]
pub trait MessageReceiverTrait {
	/// Receive a request from the participant or `None` if the connection has
	/// been closed.
	async fn receive(&mut self) -> Option<ClientRequest>;
}

pub struct StreamMessageReceiver<RequestStream> {
	request_stream: RequestStream,
	message_sender: MessageSender,
}

#[async_trait]
impl<RequestStream> MessageReceiverTrait for StreamMessageReceiver<RequestStream>
where
	RequestStream: Stream<Item = WebSocketMessage> + Unpin + Send,
{
	async fn receive(&mut self) -> Option<ClientRequest> {
		const MAXIMUM_RETRIES: usize = 10;

		let mut failed_attempts = 0;
		while failed_attempts < MAXIMUM_RETRIES {
			let websocket_message = self.request_stream.next().await?;

			match &websocket_message {
				WebSocketMessage::Close(_) => {
					self.message_sender.close().await;
					return None;
				}
				// Pings and pongs are answered by the websocket layer.
				WebSocketMessage::Ping(_) | WebSocketMessage::Pong(_) => continue,
				_ => {}
			}

			match ClientRequest::try_from(&websocket_message) {
				Ok(client_request) => return Some(client_request),
				Err(message_error) => {
					error!("{}", message_error);
					failed_attempts += 1;
				}
			}
		}

		error!("Closing connection after too many undecodable messages.");
		self.message_sender.close().await;
		None
	}
}

impl<RequestStream> StreamMessageReceiver<RequestStream>
where
	RequestStream: Stream<Item = WebSocketMessage>,
{
	pub fn new(request_stream: RequestStream, message_sender: MessageSender) -> Self {
		Self {
			request_stream,
			message_sender,
		}
	}
}

impl<RequestStream> From<StreamMessageReceiver<RequestStream>> for MessageReceiver
where
	RequestStream: Stream<Item = WebSocketMessage> + Unpin + Send + 'static,
{
	fn from(stream_message_receiver: StreamMessageReceiver<RequestStream>) -> Self {
		Box::pin(stream_message_receiver)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::message::client_request::LoadVideoRequest;
	use crate::utils::test_client::TestClient;

	#[tokio::test]
	async fn receive_should_skip_undecodable_messages() {
		let (_message_sender, mut message_receiver, mut test_client) = TestClient::new();

		test_client
			.send_raw(WebSocketMessage::Text(r#"{"garbage":true}"#.to_string().into()))
			.await;
		test_client
			.send_request(LoadVideoRequest {
				video_id: "abc123".to_string(),
			})
			.await;

		assert_eq!(
			Some(ClientRequest::LoadVideo(LoadVideoRequest {
				video_id: "abc123".to_string(),
			})),
			message_receiver.receive().await
		);
	}

	#[tokio::test]
	async fn receive_should_finish_once_the_connection_is_closed() {
		let (_message_sender, mut message_receiver, test_client) = TestClient::new();

		drop(test_client);

		assert_eq!(None, message_receiver.receive().await);
	}

	#[tokio::test]
	async fn receive_should_answer_a_close_message_with_a_close() {
		let (_message_sender, mut message_receiver, mut test_client) = TestClient::new();

		test_client.send_raw(WebSocketMessage::Close(None)).await;

		assert_eq!(None, message_receiver.receive().await);
		assert!(matches!(test_client.receive_raw().await, WebSocketMessage::Close(_)));
	}
}
