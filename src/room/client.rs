use crate::connection::broadcast_buffer::BroadcastBuffer;
use crate::connection::sender::MessageSender;
use crate::message::broadcast_message::BroadcastMessage;
use crate::room::client_id::ClientId;
use std::sync::Arc;

/// Handle to one connected participant. Cloning is cheap and all clones refer
/// to the same connection and broadcast queue.
#[derive(Clone)]
pub struct Client {
	inner: Arc<Inner>,
}

struct Inner {
	id: ClientId,
	broadcast_buffer: BroadcastBuffer,
	message_sender: MessageSender,
}

impl Client {
	pub fn new(id: ClientId, message_sender: MessageSender) -> Self {
		Self {
			inner: Arc::new(Inner {
				id,
				broadcast_buffer: BroadcastBuffer::default(),
				message_sender,
			}),
		}
	}

	pub fn id(&self) -> ClientId {
		self.inner.id
	}

	pub fn enqueue_broadcast(&self, message: BroadcastMessage) {
		self.inner.broadcast_buffer.enqueue(message);
	}

	pub async fn wait_for_broadcast(&self) -> BroadcastMessage {
		self.inner.broadcast_buffer.wait_for_broadcast().await
	}

	/// Returns `false` once the connection is gone.
	pub async fn send_broadcast_message(&self, message: BroadcastMessage) -> bool {
		self.inner.message_sender.send_broadcast_message(message).await.is_ok()
	}
}
