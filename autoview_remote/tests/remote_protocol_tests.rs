//! Protocol tests against a real localhost TCP delegate.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use autoview_core::geom::Pose;
use autoview_core::verify::VisibilityOracle;
use autoview_core::AutoviewError;
use autoview_core::glam::Vec3;
use autoview_remote::{wire, RemoteDelegate};

const TIMEOUT: Duration = Duration::from_millis(500);

fn sample_poses() -> Vec<Pose> {
    vec![
        Pose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, -0.2, 0.3)),
        Pose::new(Vec3::new(-5.0, 0.25, 8.0), Vec3::new(0.0, 1.5, 0.0)),
        Pose::new(Vec3::ZERO, Vec3::new(0.0, 0.0, std::f32::consts::PI)),
    ]
}

/// Spawn a mock delegate that reads one request, checks it, and
/// replies with the given verdict bytes (optionally in chunks).
fn spawn_delegate(
    expected_poses: Vec<Pose>,
    expected_threshold: f32,
    reply: Vec<u8>,
    chunked: bool,
) -> (String, u16, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();

        let mut header = [0u8; 4];
        socket.read_exact(&mut header).unwrap();
        let count = wire::decode_pose_count(header);
        assert_eq!(count as usize, expected_poses.len());

        let mut payload = vec![0u8; 4 * (1 + wire::FLOATS_PER_POSE * count as usize)];
        socket.read_exact(&mut payload).unwrap();
        let (threshold, transforms) = wire::decode_payload(&payload).unwrap();
        assert_eq!(threshold, expected_threshold);
        for (pose, transform) in expected_poses.iter().zip(transforms.iter()) {
            // Bit-exact after the 32-bit round trip
            assert_eq!(pose.matrix().to_cols_array(), transform.to_cols_array());
        }

        if chunked {
            let split = reply.len() / 2;
            socket.write_all(&reply[..split]).unwrap();
            socket.flush().unwrap();
            thread::sleep(Duration::from_millis(20));
            socket.write_all(&reply[split..]).unwrap();
        } else {
            socket.write_all(&reply).unwrap();
        }
    });
    ("127.0.0.1".to_string(), port, handle)
}

#[test]
fn test_round_trip_with_chunked_reply() {
    let poses = sample_poses();
    let (host, port, handle) = spawn_delegate(poses.clone(), 15.0 * 0.01, vec![1, 0, 1], true);

    let mut delegate = RemoteDelegate::connect(&host, port, TIMEOUT).unwrap();
    let verdicts = delegate.visibility(&poses, 15.0).unwrap();
    assert_eq!(verdicts, vec![true, false, true]);
    handle.join().unwrap();
}

#[test]
fn test_short_reply_is_a_protocol_error() {
    let poses = sample_poses();
    let (host, port, handle) = spawn_delegate(poses.clone(), 15.0 * 0.01, vec![1], false);

    let mut delegate = RemoteDelegate::connect(&host, port, TIMEOUT).unwrap();
    let result = delegate.visibility(&poses, 15.0);
    assert!(matches!(result, Err(AutoviewError::DelegateProtocol(_))));
    handle.join().unwrap();
}

#[test]
fn test_silent_delegate_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        // Accept and read the request, then never answer
        let (mut socket, _) = listener.accept().unwrap();
        let mut sink = Vec::new();
        let _ = socket.set_read_timeout(Some(Duration::from_secs(2)));
        let _ = socket.read_to_end(&mut sink);
    });

    let poses = sample_poses();
    let mut delegate = RemoteDelegate::connect("127.0.0.1", port, TIMEOUT).unwrap();
    let result = delegate.visibility(&poses, 15.0);
    assert!(matches!(result, Err(AutoviewError::DelegateUnavailable(_))));
    drop(delegate);
    handle.join().unwrap();
}

#[test]
fn test_refused_connection_is_unavailable() {
    // Bind then drop to get a port with no listener
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let result = RemoteDelegate::connect("127.0.0.1", port, TIMEOUT);
    assert!(matches!(result, Err(AutoviewError::DelegateUnavailable(_))));
}

#[test]
fn test_threshold_scaled_to_unit_interval() {
    let poses = vec![Pose::new(Vec3::X, Vec3::ZERO)];
    // min_foreground of 40% crosses the wire as 0.4
    let (host, port, handle) = spawn_delegate(poses.clone(), 40.0 * 0.01, vec![1], false);

    let mut delegate = RemoteDelegate::connect(&host, port, TIMEOUT).unwrap();
    let verdicts = delegate.visibility(&poses, 40.0).unwrap();
    assert_eq!(verdicts, vec![true]);
    handle.join().unwrap();
}
