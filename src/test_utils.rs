//! Test utilities and fixtures for pixel-cover tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{gradient_image, sample_lyrics, serve};
//!
//! let image = gradient_image(64, 64);
//! let prompt = build_prompt(&PromptInput { lyrics: Some(sample_lyrics()), .. });
//!
//! let server = serve(vec![("200 OK", r#"{"lyrics":"la"}"#)]);
//! let client = LyricsApiClient::with_base_url(server.url("/"))?;
//! ```

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use image::{Rgb, RgbImage};

/// A deterministic, colourful test raster.
///
/// Red follows x, green follows y, blue follows the diagonal, so every
/// neighbouring pixel differs.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 7 % 256) as u8,
        ])
    })
}

/// Multi-line lyrics with punctuation, stop words and more than five lines.
pub fn sample_lyrics() -> &'static str {
    "Neon rivers flowing through the midnight city,\n\
     Dragons sleeping in the towers made of glass!\n\
     We ride with thunder, then we fall from heaven...\n\
     (Oh-oh) this is the moment that we never pass\n\
     Golden castles burning in the distance\n\
     Whispered secrets hidden in the sixth line"
}

/// Local HTTP server answering a fixed sequence of requests.
///
/// Each connection gets the next `(status line, JSON body)` pair and is then
/// closed. The raw requests are returned by [`FakeServer::requests`].
pub struct FakeServer {
    base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl FakeServer {
    /// `base_url` + `path`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Wait for every response to be served and return the raw requests
    pub fn requests(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

/// Start a [`FakeServer`] on an ephemeral localhost port
pub fn serve(responses: Vec<(&str, &str)>) -> FakeServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let responses: Vec<String> = responses
        .into_iter()
        .map(|(status, body)| {
            format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
        })
        .collect();

    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for response in responses {
            let (mut stream, _) = listener.accept().unwrap();
            requests.push(read_request(&mut stream));
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        requests
    });

    FakeServer { base_url, handle }
}

/// Read one request: headers plus `Content-Length` bytes of body
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_dimensions() {
        let image = gradient_image(7, 5);
        assert_eq!(image.dimensions(), (7, 5));
        assert_ne!(image.get_pixel(0, 0), image.get_pixel(1, 0));
    }

    #[test]
    fn test_sample_lyrics_has_six_lines() {
        assert_eq!(sample_lyrics().lines().count(), 6);
    }

    #[test]
    fn test_fake_server_records_requests() {
        let server = serve(vec![("200 OK", "{}")]);
        let addr = server.base_url.trim_start_matches("http://").to_string();

        let mut stream = TcpStream::connect(addr).unwrap();
        stream
            .write_all(b"GET /ping HTTP/1.1\r\nHost: x\r\n\r\n")
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.ends_with("{}"));
        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("GET /ping"));
    }
}
