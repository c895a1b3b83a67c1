use crate::connection::sender::{MessageSender, MessageSenderTrait};
use crate::message::broadcast_message::BroadcastMessage;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct FakeMessageSender {}

impl From<FakeMessageSender> for MessageSender {
	fn from(fake_message_sender: FakeMessageSender) -> Self {
		Arc::pin(fake_message_sender)
	}
}

#[async_trait]
impl MessageSenderTrait for FakeMessageSender {
	async fn send_broadcast_message(&self, _message: BroadcastMessage) -> Result<(), ()> {
		Ok(())
	}

	async fn close(&self) {}
}
