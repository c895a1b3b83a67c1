use crate::connection::receiver::{MessageReceiver, StreamMessageReceiver};
use crate::connection::sender::{MessageSender, SinkMessageSender};
use crate::message::WebSocketMessage;
use crate::message::broadcast_message::BroadcastMessage;
use crate::message::client_request::ClientRequest;
use futures_util::{Sink, SinkExt, Stream, StreamExt};
use std::pin::Pin;

/// The client end of an in-memory connection, speaking the real wire format
/// through the real sender and receiver.
pub struct TestClient {
	sender: Pin<Box<dyn Sink<WebSocketMessage, Error = ()> + Unpin + Send>>,
	receiver: Pin<Box<dyn Stream<Item = WebSocketMessage> + Unpin + Send>>,
}

impl TestClient {
	pub fn new() -> (MessageSender, MessageReceiver, Self) {
		let (client_sender, server_receiver) = futures_channel::mpsc::unbounded();
		let (server_sender, client_receiver) = futures_channel::mpsc::unbounded();
		let client_sender = client_sender.sink_map_err(|_error| ());

		let sink_message_sender = SinkMessageSender::new(server_sender);
		let message_sender = MessageSender::from(sink_message_sender);
		let stream_message_receiver = StreamMessageReceiver::new(server_receiver, message_sender.clone());
		let message_receiver = MessageReceiver::from(stream_message_receiver);

		let test_client = Self {
			sender: Box::pin(client_sender),
			receiver: Box::pin(client_receiver),
		};

		(message_sender, message_receiver, test_client)
	}

	pub async fn send_raw(&mut self, message: WebSocketMessage) {
		self.sender
			.send(message)
			.await
			.expect("Failed to send message via TestClient.");
	}

	pub async fn receive_raw(&mut self) -> WebSocketMessage {
		self.receiver
			.next()
			.await
			.expect("Failed to receive message via TestClient")
	}

	pub async fn send_request(&mut self, request: impl Into<ClientRequest>) {
		let client_request = request.into();
		let websocket_message = WebSocketMessage::from(&client_request);
		self.send_raw(websocket_message).await;
	}

	pub async fn receive_broadcast_message(&mut self) -> BroadcastMessage {
		let websocket_message = self.receive_raw().await;
		BroadcastMessage::try_from(&websocket_message).expect("Failed to deserialize BroadcastMessage")
	}
}
