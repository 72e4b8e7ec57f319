//! Integration tests for the light-fixture wrapper.

use std::net::Ipv4Addr;
use std::time::Duration;

use glowlink_control::{gl1, LightFixture};
use tokio::net::UdpSocket;
use tokio::time::timeout;

const LOCALHOST: Ipv4Addr = Ipv4Addr::LOCALHOST;

async fn fixture_socket() -> (UdpSocket, u16) {
    let socket = UdpSocket::bind((LOCALHOST, 0)).await.unwrap();
    let port = socket.local_addr().unwrap().port();
    (socket, port)
}

async fn drain_frames(socket: &UdpSocket) -> Vec<Vec<u8>> {
    let mut frames = Vec::new();
    let mut buf = [0u8; 64];
    while let Ok(Ok((len, _))) =
        timeout(Duration::from_millis(100), socket.recv_from(&mut buf)).await
    {
        frames.push(buf[..len].to_vec());
    }
    frames
}

#[tokio::test]
async fn attach_turn_on_turn_off_detach() {
    let (device, port) = fixture_socket().await;
    let mut light = LightFixture::new("Studio Key", LOCALHOST, port);

    assert!(light.attach().await);
    assert!(light.available());

    // Full host brightness at the coldest supported temperature:
    // 255 -> device 100, 143 mireds -> 6993 K -> device 100.
    light.turn_on(Some(255), Some(143)).await.unwrap();
    assert!(light.is_on());
    assert_eq!(light.brightness(), 255);
    assert_eq!(light.color_temp_mireds(), 143);

    light.turn_off().await.unwrap();
    assert!(!light.is_on());

    light.detach().await;
    assert!(!light.available());

    let frames = drain_frames(&device).await;
    assert!(frames.iter().any(|f| f.as_slice() == gl1::POWER_ON));
    assert!(frames.iter().any(|f| hex::encode(f) == "80050302646484"));
    assert!(frames.iter().any(|f| f.as_slice() == gl1::POWER_OFF));
}

#[tokio::test]
async fn mireds_outside_supported_range_are_clamped() {
    let (device, port) = fixture_socket().await;
    let mut light = LightFixture::new("Studio Key", LOCALHOST, port);
    assert!(light.attach().await);

    // 500 mireds (2000 K) is warmer than the fixture supports.
    light.turn_on(Some(255), Some(500)).await.unwrap();
    assert_eq!(light.color_temp_mireds(), 345);
    light.detach().await;

    // 345 mireds -> 2898 K -> clamps to device 0.
    let frames = drain_frames(&device).await;
    assert!(frames.iter().any(|f| hex::encode(f) == "800503026400e0"));
}

#[tokio::test]
async fn turn_on_without_brightness_only_powers_on() {
    let (device, port) = fixture_socket().await;
    let mut light = LightFixture::new("Studio Key", LOCALHOST, port);
    assert!(light.attach().await);

    light.turn_on(None, None).await.unwrap();
    assert!(light.is_on());
    light.detach().await;

    let frames = drain_frames(&device).await;
    assert!(frames.iter().any(|f| f.as_slice() == gl1::POWER_ON));
    // No brightness/temperature frame was requested.
    assert!(!frames
        .iter()
        .any(|f| f.len() == 7 && f.starts_with(&[0x80, 0x05, 0x03, 0x02])));
}
