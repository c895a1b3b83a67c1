use crate::configuration::Configuration;
use crate::connection::receiver::{MessageReceiver, StreamMessageReceiver};
use crate::connection::sender::{MessageSender, SinkMessageSender};
use crate::context::ApplicationContext;
use crate::lifecycle::run_client;
use crate::room::Room;
use crate::utils::infallible_stream::InfallibleStream;
use axum::Router;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{FromRef, State};
use axum::http::{HeaderValue, Method};
use axum::response::Response;
use axum::routing::get;
use futures_util::StreamExt;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub async fn run_server(application_context: ApplicationContext) -> Result<(), std::io::Error> {
	let room = Room::new(application_context.time_source.clone());
	let address = application_context.configuration.address;
	let router = create_router(application_context, room);

	let listener = tokio::net::TcpListener::bind(address).await?;
	axum::serve(listener, router).await
}

pub fn create_router(application_context: ApplicationContext, room: Room) -> Router {
	let cors = cors_layer(&application_context.configuration);
	let state = ServerState {
		application_context,
		room,
	};

	Router::new()
		.route("/ws", get(websocket_handler))
		.layer(cors)
		.with_state(state)
}

#[derive(Clone, FromRef)]
struct ServerState {
	application_context: ApplicationContext,
	room: Room,
}

async fn websocket_handler(State(room): State<Room>, websocket_upgrade: WebSocketUpgrade) -> Response {
	websocket_upgrade.on_upgrade(move |websocket| {
		let (sink, stream) = websocket.split();

		let message_sender = MessageSender::from(SinkMessageSender::new(sink));
		let message_receiver = MessageReceiver::from(StreamMessageReceiver::new(
			InfallibleStream::from(stream),
			message_sender.clone(),
		));

		run_client(room, message_sender, message_receiver)
	})
}

fn cors_layer(configuration: &Configuration) -> CorsLayer {
	let allow_origin = match &configuration.allowed_origins {
		None => AllowOrigin::any(),
		Some(origins) => AllowOrigin::list(origins.iter().map(|origin| {
			origin
				.parse::<HeaderValue>()
				.expect("Invalid origin in configuration.")
		})),
	};

	CorsLayer::new()
		.allow_methods([Method::GET, Method::POST])
		.allow_origin(allow_origin)
}
