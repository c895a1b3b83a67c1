use crate::connection::sender::MessageSender;
use crate::message::broadcast_message::BroadcastMessage;
use crate::room::client::Client;
use crate::room::client_id::ClientId;
use crate::room::client_id_sequence::ClientIdSequence;
use std::collections::BTreeMap;

/// Registry of connected participants and the fan-out target for broadcasts.
/// Only its cardinality is ever shown to participants, as the viewer count.
#[derive(Default)]
pub struct Clients {
	client_id_sequence: ClientIdSequence,
	clients_by_id: BTreeMap<ClientId, Client>,
}

impl Clients {
	/// Adds a new participant, passing in a sender for sending messages to it.
	pub fn add(&mut self, message_sender: MessageSender) -> Client {
		let client_id = self.client_id_sequence.next();
		let client = Client::new(client_id, message_sender);

		if self.clients_by_id.insert(client_id, client.clone()).is_some() {
			unreachable!("There must never be two clients with the same id!");
		}

		client
	}

	/// Removes a participant and returns how many are left.
	pub fn remove(&mut self, client_id: ClientId) -> usize {
		self.clients_by_id.remove(&client_id);
		self.clients_by_id.len()
	}

	pub fn count(&self) -> usize {
		self.clients_by_id.len()
	}

	/// Enqueues the message for every participant. Queues are independent, a
	/// dead or slow connection only ever affects its own participant.
	pub fn broadcast(&self, message: BroadcastMessage) {
		for client in self.clients_by_id.values() {
			client.enqueue_broadcast(message.clone());
		}
	}
}
