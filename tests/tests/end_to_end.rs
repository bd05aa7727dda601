use std::net::UdpSocket;
use std::time::Duration;

use wakr_common::config::WakeRequest;
use wakr_core::magic::MAGIC_PACKET_LEN;
use wakr_core::waker;
use wakr_integration_tests::bind_listener;

fn request(mac: &str, ip: Option<&str>, port: Option<u16>) -> WakeRequest {
    WakeRequest {
        mac: mac.to_string(),
        ip: ip.map(String::from),
        port,
    }
}

/*************************************************************
                   Happy path over loopback
**************************************************************/

#[test]
fn full_packet_arrives_at_a_loopback_listener() {
    let listener: UdpSocket = bind_listener().unwrap();
    let port: u16 = listener.local_addr().unwrap().port();

    let woke: bool = waker::wake(&request("AA:BB:CC:DD:EE:FF", Some("127.0.0.1"), Some(port)));
    assert!(woke);

    let mut buffer = [0u8; 256];
    let received: usize = listener.recv(&mut buffer).unwrap();
    assert_eq!(received, MAGIC_PACKET_LEN);

    assert_eq!(&buffer[..6], &[0xFF; 6]);
    for repetition in buffer[6..MAGIC_PACKET_LEN].chunks(6) {
        assert_eq!(repetition, [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }
}

#[test]
fn separator_style_does_not_change_the_payload() {
    let listener: UdpSocket = bind_listener().unwrap();
    let port: u16 = listener.local_addr().unwrap().port();

    assert!(waker::wake(&request(
        "aa-bb-cc-dd-ee-ff",
        Some("127.0.0.1"),
        Some(port)
    )));

    let mut buffer = [0u8; 256];
    let received: usize = listener.recv(&mut buffer).unwrap();
    assert_eq!(received, MAGIC_PACKET_LEN);
    assert_eq!(&buffer[6..12], [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
}

/*************************************************************
               Failure paths stay off the wire
**************************************************************/

#[test]
fn short_hardware_address_sends_nothing() {
    let listener: UdpSocket = bind_listener().unwrap();
    let port: u16 = listener.local_addr().unwrap().port();

    assert!(!waker::wake(&request("1234", Some("127.0.0.1"), Some(port))));

    listener
        .set_read_timeout(Some(Duration::from_millis(200)))
        .unwrap();
    let mut buffer = [0u8; 256];
    assert!(listener.recv(&mut buffer).is_err());
}

#[test]
fn malformed_destination_fails() {
    assert!(!waker::wake(&request(
        "AA:BB:CC:DD:EE:FF",
        Some("999.999.999.999"),
        None
    )));
}

#[test]
fn out_of_window_port_fails() {
    assert!(!waker::wake(&request(
        "AA:BB:CC:DD:EE:FF",
        Some("127.0.0.1"),
        Some(1023)
    )));
}
