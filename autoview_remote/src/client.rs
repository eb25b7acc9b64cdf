/// Blocking delegate client.
///
/// Connects once, then serves any number of verification batches over
/// the same stream. Every socket operation carries the configured
/// timeout; a delegate that stalls or disappears surfaces a typed
/// error instead of hanging the caller.

use std::io::{ErrorKind, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use autoview_core::autoview::RemoteConfig;
use autoview_core::geom::Pose;
use autoview_core::verify::VisibilityOracle;
use autoview_core::{autoview_bail, AutoviewError, AutoviewResult};

pub struct RemoteDelegate {
    stream: TcpStream,
}

impl RemoteDelegate {
    /// Connect to the delegate with a connect/read/write timeout.
    pub fn connect(host: &str, port: u16, timeout: Duration) -> AutoviewResult<Self> {
        let addrs = (host, port).to_socket_addrs().map_err(|e| {
            AutoviewError::DelegateUnavailable(format!(
                "failed to resolve {}:{}: {}",
                host, port, e
            ))
        })?;

        let mut last_error = None;
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => {
                    stream.set_read_timeout(Some(timeout)).map_err(|e| {
                        AutoviewError::DelegateUnavailable(e.to_string())
                    })?;
                    stream.set_write_timeout(Some(timeout)).map_err(|e| {
                        AutoviewError::DelegateUnavailable(e.to_string())
                    })?;
                    return Ok(Self { stream });
                }
                Err(e) => last_error = Some(e),
            }
        }
        autoview_bail!(
            "autoview_remote::Client",
            AutoviewError::DelegateUnavailable(match last_error {
                Some(e) => format!("failed to connect to {}:{}: {}", host, port, e),
                None => format!("{}:{} resolved to no addresses", host, port),
            })
        )
    }

    /// Connect using the endpoint from the session configuration.
    pub fn from_config(config: &RemoteConfig) -> AutoviewResult<Self> {
        Self::connect(
            &config.host,
            config.port,
            Duration::from_millis(config.timeout_ms),
        )
    }

    fn send(&mut self, bytes: &[u8]) -> AutoviewResult<()> {
        self.stream.write_all(bytes).map_err(|e| {
            AutoviewError::DelegateUnavailable(format!("send failed: {}", e))
        })
    }

    /// Read exactly `expected` verdict bytes, tolerating partial reads.
    fn read_verdicts(&mut self, expected: usize) -> AutoviewResult<Vec<u8>> {
        let mut buffer = vec![0u8; expected];
        let mut received = 0;
        while received < expected {
            match self.stream.read(&mut buffer[received..]) {
                Ok(0) => {
                    autoview_bail!(
                        "autoview_remote::Client",
                        AutoviewError::DelegateProtocol(format!(
                            "delegate closed after {} of {} verdicts",
                            received, expected
                        ))
                    );
                }
                Ok(n) => received += n,
                Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {
                    autoview_bail!(
                        "autoview_remote::Client",
                        AutoviewError::DelegateUnavailable(format!(
                            "verdict read timed out after {} of {} bytes",
                            received, expected
                        ))
                    );
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    autoview_bail!(
                        "autoview_remote::Client",
                        AutoviewError::DelegateUnavailable(format!("verdict read failed: {}", e))
                    );
                }
            }
        }
        Ok(buffer)
    }
}

impl VisibilityOracle for RemoteDelegate {
    /// One request/reply exchange per batch. `min_foreground` arrives
    /// as a percentage and crosses the wire scaled to `[0, 1]`.
    fn visibility(&mut self, poses: &[Pose], min_foreground: f32) -> AutoviewResult<Vec<bool>> {
        self.send(&super::wire::encode_pose_count(poses.len() as i32))?;
        self.send(&super::wire::encode_payload(min_foreground * 0.01, poses))?;
        let verdicts = self.read_verdicts(poses.len())?;
        Ok(verdicts.into_iter().map(|b| b != 0).collect())
    }
}
