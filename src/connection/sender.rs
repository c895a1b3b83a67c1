use crate::message::WebSocketMessage;
use crate::message::broadcast_message::BroadcastMessage;
use async_trait::async_trait;
use futures_util::{Sink, SinkExt};
use std::fmt::Debug;
use std::pin::Pin;
use std::sync::Arc;
use tracing::error;

pub type MessageSender = Pin<Arc<dyn MessageSenderTrait + Send + Sync>>;

#[async_trait]
pub trait MessageSenderTrait {
	async fn send_broadcast_message(&self, message: BroadcastMessage) -> Result<(), ()>;
	async fn close(&self);
}

pub struct SinkMessageSender<ResponseSink> {
	inner: tokio::sync::Mutex<ResponseSink>,
}

#[async_trait]
impl<ResponseSink, SinkError> MessageSenderTrait for SinkMessageSender<ResponseSink>
where
	ResponseSink: Sink<WebSocketMessage, Error = SinkError> + Send + Unpin + 'static,
	SinkError: Debug + 'static,
{
	async fn send_broadcast_message(&self, message: BroadcastMessage) -> Result<(), ()> {
		let websocket_message = WebSocketMessage::from(&message);

		let mut response_sink = self.inner.lock().await;
		response_sink
			.send(websocket_message)
			.await
			.map_err(|error| error!("Error while sending broadcast message: {:?}", error))
	}

	async fn close(&self) {
		let mut response_sink = self.inner.lock().await;
		let _ = response_sink.send(WebSocketMessage::Close(None)).await;
	}
}

impl<ResponseSink, SinkError> SinkMessageSender<ResponseSink>
where
	ResponseSink: Sink<WebSocketMessage, Error = SinkError> + Unpin,
	SinkError: Debug + 'static,
{
	pub fn new(response_sink: ResponseSink) -> Self {
		Self {
			inner: tokio::sync::Mutex::new(response_sink),
		}
	}
}

impl<ResponseSink, SinkError> From<SinkMessageSender<ResponseSink>> for MessageSender
where
	ResponseSink: Sink<WebSocketMessage, Error = SinkError> + Send + Unpin + 'static,
	SinkError: Debug + 'static,
{
	fn from(sink_message_sender: SinkMessageSender<ResponseSink>) -> Self {
		Arc::pin(sink_message_sender)
	}
}
