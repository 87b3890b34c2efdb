use tokio::{
	io::{AsyncReadExt, AsyncWriteExt},
	net::TcpListener,
	task::JoinHandle,
};

/// Serves one canned HTTP response on a local port.
///
/// Returns the base URL and a handle yielding the request line received.
pub async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let base = format!("http://{}/", listener.local_addr().unwrap());
	let handle = tokio::spawn(async move {
		let (mut socket, _) = listener.accept().await.unwrap();
		let mut received = Vec::new();
		let mut chunk = [0u8; 1024];
		while !received.windows(4).any(|w| w == b"\r\n\r\n") {
			let n = socket.read(&mut chunk).await.unwrap();
			if n == 0 { break }
			received.extend_from_slice(&chunk[..n]);
		}
		let response = format!(
			"HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
			body.len(),
		);
		socket.write_all(response.as_bytes()).await.unwrap();
		socket.shutdown().await.unwrap();
		String::from_utf8_lossy(&received).lines().next().unwrap_or_default().to_owned()
	});
	(base, handle)
}

/// An HTTP client that ignores proxy settings, for talking to [`serve_once`].
pub fn local_http() -> reqwest::Client {
	reqwest::Client::builder().no_proxy().build().unwrap()
}
