use crate::message::broadcast_message::BroadcastMessage;
use std::collections::VecDeque;
use tokio::sync::Notify;

/// Per-participant queue of outgoing broadcasts. Fan-out only ever enqueues,
/// the participant's own send task drains, so one broken connection can't
/// hold up the others.
#[derive(Default)]
pub struct BroadcastBuffer {
	messages: parking_lot::Mutex<VecDeque<BroadcastMessage>>,
	new_broadcast_available: Notify,
}

impl BroadcastBuffer {
	pub fn enqueue(&self, message: BroadcastMessage) {
		self.messages.lock().push_back(message);
		self.new_broadcast_available.notify_one();
	}

	pub fn dequeue(&self) -> Option<BroadcastMessage> {
		self.messages.lock().pop_front()
	}

	pub async fn wait_for_broadcast(&self) -> BroadcastMessage {
		loop {
			if let Some(broadcast) = self.dequeue() {
				return broadcast;
			}
			self.new_broadcast_available.notified().await;
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::message::broadcast_message::ParticipantCountBroadcast;

	fn message(count: usize) -> BroadcastMessage {
		ParticipantCountBroadcast { count }.into()
	}

	#[test]
	fn should_dequeue_in_first_in_first_out_order() {
		let buffer = BroadcastBuffer::default();
		buffer.enqueue(message(1));
		buffer.enqueue(message(2));
		buffer.enqueue(message(3));

		assert_eq!(Some(message(1)), buffer.dequeue());
		assert_eq!(Some(message(2)), buffer.dequeue());
		assert_eq!(Some(message(3)), buffer.dequeue());
		assert_eq!(None, buffer.dequeue());
	}

	#[tokio::test]
	async fn wait_for_broadcast_should_return_an_already_enqueued_message() {
		let buffer = BroadcastBuffer::default();
		buffer.enqueue(message(42));

		assert_eq!(message(42), buffer.wait_for_broadcast().await);
	}

	#[tokio::test]
	async fn wait_for_broadcast_should_wake_up_for_a_later_enqueue() {
		let buffer = std::sync::Arc::new(BroadcastBuffer::default());

		let waiter = tokio::spawn({
			let buffer = buffer.clone();
			async move { buffer.wait_for_broadcast().await }
		});

		tokio::task::yield_now().await;
		buffer.enqueue(message(7));

		assert_eq!(message(7), waiter.await.unwrap());
	}
}
