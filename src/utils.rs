pub mod infallible_stream;
pub mod time_source;

#[cfg(test)]
pub mod fake_message_sender;
#[cfg(test)]
pub mod test_client;
