use crate::connection::receiver::MessageReceiver;
use crate::connection::sender::MessageSender;
use crate::message::client_request::{ClientRequest, LoadVideoRequest, SyncRequest};
use crate::room::Room;
use crate::room::client::Client;
use tracing::{debug, info};

pub async fn run_client(room: Room, message_sender: MessageSender, mut message_receiver: MessageReceiver) {
	let client = room.join(message_sender);
	let client_id = client.id();
	info!("Participant {} joined, {} now watching.", client_id, room.viewer_count());

	tokio::select! {
		_ = handle_messages(&room, &client, &mut message_receiver) => {},
		_ = send_broadcasts(&client) => {},
	};

	let remaining = room.leave(client_id);
	info!("Participant {} left, {} still watching.", client_id, remaining);
}

async fn handle_messages(room: &Room, client: &Client, message_receiver: &mut MessageReceiver) {
	while let Some(request) = message_receiver.receive().await {
		debug!("Received {:?} from participant {}", request, client.id());
		handle_request(room, request);
	}
}

pub async fn send_broadcasts(client: &Client) {
	loop {
		let broadcast = client.wait_for_broadcast().await;
		if !client.send_broadcast_message(broadcast).await {
			break;
		}
	}
}

fn handle_request(room: &Room, request: ClientRequest) {
	use ClientRequest::*;
	match request {
		LoadVideo(LoadVideoRequest { video_id }) => {
			let broadcast = room.load_video(video_id);
			info!("Video loaded: {}", broadcast.video_id);
		}
		Sync(SyncRequest {
			action,
			time,
			timestamp,
		}) => {
			room.apply_sync(action, time, timestamp);
			debug!("Video sync: {:?} at {:.2}s", action, time);
		}
	}
}
