//! [`TerminalHost`] implementation backed by the host's control socket.
//!
//! One Unix stream connection is opened up front and reused for every
//! request.  Requests and responses are newline-delimited JSON, see
//! [`protocol`](super::protocol).

use super::protocol::{Request, Response};
use crate::model::{ColorPreset, Frame, GridSize, PartialProfile, Profile, TerminalWindow};
use crate::traits::TerminalHost;
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors that can occur when talking to the host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The host understood the request and refused it.
    #[error("host refused request: {0}")]
    Remote(String),
    #[error("host closed the connection")]
    Disconnected,
}

/// How to behave when the host is not running yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectPolicy {
    /// Keep retrying until the host accepts the connection.
    pub wait_for_app: bool,
    pub retry_interval: Duration,
}

impl Default for ConnectPolicy {
    fn default() -> Self {
        Self {
            wait_for_app: false,
            retry_interval: Duration::from_millis(500),
        }
    }
}

/// Host reached over its control socket.
pub struct SocketHost {
    path: PathBuf,
    conn: RefCell<BufReader<UnixStream>>,
}

impl SocketHost {
    /// Connect to the socket at `path`.
    ///
    /// With [`ConnectPolicy::wait_for_app`] set this blocks until the host
    /// is up; otherwise the first connection error is returned.
    pub fn connect(path: impl AsRef<Path>, policy: ConnectPolicy) -> Result<Self, HostError> {
        let path = path.as_ref().to_path_buf();
        let mut announced = false;
        let stream = loop {
            match UnixStream::connect(&path) {
                Ok(stream) => break stream,
                Err(e) if policy.wait_for_app => {
                    if !announced {
                        info!("waiting for host at {} ({})", path.display(), e);
                        announced = true;
                    }
                    std::thread::sleep(policy.retry_interval);
                }
                Err(e) => return Err(e.into()),
            }
        };
        debug!("connected to {}", path.display());
        Ok(Self {
            path,
            conn: RefCell::new(BufReader::new(stream)),
        })
    }

    /// The filesystem path of the socket.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Send one request and decode the `Ok` payload as `T`.
    fn request<T: DeserializeOwned>(&self, request: &Request) -> Result<T, HostError> {
        let mut conn = self.conn.borrow_mut();

        let mut line = serde_json::to_string(request)?;
        debug!("-> {}", line);
        line.push('\n');
        conn.get_mut().write_all(line.as_bytes())?;

        let mut reply = String::new();
        if conn.read_line(&mut reply)? == 0 {
            return Err(HostError::Disconnected);
        }
        debug!("<- {}", reply.trim_end());

        match serde_json::from_str::<Response>(&reply)? {
            Response::Ok(value) => Ok(serde_json::from_value(value)?),
            Response::Error(message) => Err(HostError::Remote(message)),
        }
    }
}

impl TerminalHost for SocketHost {
    type Error = HostError;

    fn color_preset(&self, name: &str) -> Result<ColorPreset, HostError> {
        self.request(&Request::ColorPreset { name: name.into() })
    }

    fn partial_profiles(&self) -> Result<Vec<PartialProfile>, HostError> {
        self.request(&Request::PartialProfiles)
    }

    fn full_profile(&self, partial: &PartialProfile) -> Result<Profile, HostError> {
        self.request(&Request::FullProfile {
            guid: partial.guid.clone(),
        })
    }

    fn set_color_preset(&self, profile: &Profile, preset: &ColorPreset) -> Result<(), HostError> {
        self.request(&Request::SetColorPreset {
            guid: profile.guid.clone(),
            preset: preset.name.clone(),
        })
    }

    fn terminal_windows(&self) -> Result<Vec<TerminalWindow>, HostError> {
        self.request(&Request::TerminalWindows)
    }

    fn window_frame(&self, window: &TerminalWindow) -> Result<Frame, HostError> {
        self.request(&Request::GetWindowFrame {
            window: window.id.clone(),
        })
    }

    fn set_window_frame(&self, window: &TerminalWindow, frame: Frame) -> Result<(), HostError> {
        self.request(&Request::SetWindowFrame {
            window: window.id.clone(),
            frame,
        })
    }

    fn set_preferred_size(&self, session: &str, grid: GridSize) -> Result<(), HostError> {
        self.request(&Request::SetPreferredSize {
            session: session.into(),
            grid,
        })
    }

    fn update_layout(&self, tab: &str) -> Result<(), HostError> {
        self.request(&Request::UpdateLayout { tab: tab.into() })
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::apply_color_preset;
    use std::os::unix::net::UnixListener;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::mpsc;
    use std::thread::JoinHandle;

    /// Monotonic counter to generate unique socket paths per test.
    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    fn tmp_socket_path() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "termstack-test-{}-{}.sock",
            std::process::id(),
            id
        ))
    }

    /// Serve one client, answering each request with `answer` and recording
    /// what was asked.
    fn fake_host(
        path: &Path,
        answer: fn(&Request) -> Response,
    ) -> (JoinHandle<()>, mpsc::Receiver<Request>) {
        let _ = std::fs::remove_file(path);
        let listener = UnixListener::bind(path).expect("bind");
        let (tx, rx) = mpsc::channel();
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut writer = stream.try_clone().expect("clone");
            for line in BufReader::new(stream).lines() {
                let Ok(line) = line else { break };
                let request: Request = serde_json::from_str(&line).expect("request");
                let response = answer(&request);
                let _ = tx.send(request);
                let mut out = serde_json::to_string(&response).unwrap();
                out.push('\n');
                if writer.write_all(out.as_bytes()).is_err() {
                    break;
                }
            }
        });
        (handle, rx)
    }

    fn presets_and_profiles(req: &Request) -> Response {
        match req {
            Request::ColorPreset { name } if name == "Solarized Dark" => {
                Response::Ok(serde_json::json!({ "name": name }))
            }
            Request::ColorPreset { name } => Response::Error(format!("no preset named {}", name)),
            Request::PartialProfiles => Response::Ok(serde_json::json!([
                { "guid": "g1", "name": "Default" },
                { "guid": "g2", "name": "Work" }
            ])),
            Request::FullProfile { guid } => {
                Response::Ok(serde_json::json!({ "guid": guid, "name": "full" }))
            }
            _ => Response::Ok(serde_json::Value::Null),
        }
    }

    #[test]
    fn theme_requests_go_out_in_order() {
        let path = tmp_socket_path();
        let (handle, rx) = fake_host(&path, presets_and_profiles);

        let host = SocketHost::connect(&path, ConnectPolicy::default()).unwrap();
        assert_eq!(apply_color_preset(&host, "Solarized Dark").unwrap(), 2);
        drop(host);
        handle.join().unwrap();

        let sent: Vec<Request> = rx.try_iter().collect();
        assert_eq!(
            sent,
            vec![
                Request::ColorPreset { name: "Solarized Dark".into() },
                Request::PartialProfiles,
                Request::FullProfile { guid: "g1".into() },
                Request::SetColorPreset { guid: "g1".into(), preset: "Solarized Dark".into() },
                Request::FullProfile { guid: "g2".into() },
                Request::SetColorPreset { guid: "g2".into(), preset: "Solarized Dark".into() },
            ]
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn remote_error_is_surfaced() {
        let path = tmp_socket_path();
        let (handle, _rx) = fake_host(&path, presets_and_profiles);

        let host = SocketHost::connect(&path, ConnectPolicy::default()).unwrap();
        let err = host.color_preset("Missing").unwrap_err();
        assert!(matches!(err, HostError::Remote(ref m) if m == "no preset named Missing"));
        drop(host);
        handle.join().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn frames_round_trip_through_the_socket() {
        fn frames(req: &Request) -> Response {
            match req {
                Request::GetWindowFrame { .. } => Response::Ok(serde_json::json!({
                    "origin": { "x": -560, "y": 780 },
                    "size": { "width": 600, "height": 300 }
                })),
                _ => Response::Ok(serde_json::Value::Null),
            }
        }
        let path = tmp_socket_path();
        let (handle, rx) = fake_host(&path, frames);

        let host = SocketHost::connect(&path, ConnectPolicy::default()).unwrap();
        let window = TerminalWindow {
            id: "w0".into(),
            number: 0,
            current_tab: Default::default(),
        };
        let frame = host.window_frame(&window).unwrap();
        assert_eq!(frame, Frame::new(-560, 780, 600, 300));
        host.set_window_frame(&window, Frame::new(0, 780, 600, 300))
            .unwrap();
        drop(host);
        handle.join().unwrap();

        let sent: Vec<Request> = rx.try_iter().collect();
        assert_eq!(
            sent[1],
            Request::SetWindowFrame {
                window: "w0".into(),
                frame: Frame::new(0, 780, 600, 300),
            }
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn connect_without_waiting_fails_fast() {
        let path = tmp_socket_path();
        let err = SocketHost::connect(&path, ConnectPolicy::default()).err();
        assert!(matches!(err, Some(HostError::Io(_))));
    }

    #[test]
    fn connect_waits_for_the_host_to_appear() {
        let path = tmp_socket_path();
        let path2 = path.clone();
        let server = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(150));
            fake_host(&path2, presets_and_profiles)
        });

        let policy = ConnectPolicy {
            wait_for_app: true,
            retry_interval: Duration::from_millis(20),
        };
        let host = SocketHost::connect(&path, policy).unwrap();
        assert_eq!(host.path(), path.as_path());
        drop(host);
        let (handle, _rx) = server.join().unwrap();
        handle.join().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn closed_connection_is_reported() {
        let path = tmp_socket_path();
        let _ = std::fs::remove_file(&path);
        let listener = UnixListener::bind(&path).unwrap();
        let server = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut line = String::new();
            BufReader::new(&stream).read_line(&mut line).unwrap();
            // Hang up without answering.
        });

        let host = SocketHost::connect(&path, ConnectPolicy::default()).unwrap();
        let err = host.terminal_windows().unwrap_err();
        assert!(matches!(err, HostError::Disconnected), "{err}");
        server.join().unwrap();
        let _ = std::fs::remove_file(&path);
    }
}
