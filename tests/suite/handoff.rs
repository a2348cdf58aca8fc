//! Handoff channel and relay tests

use tether_handoff::{
    HandoffError, channel, read_from_both, read_then_write, send_request, write_to_both,
};

use crate::common::ms;

#[tokio::test]
async fn ping_and_pong_are_combined() {
    let (tx_a, mut rx_a) = channel();
    let (tx_b, mut rx_b) = channel();
    tokio::spawn(async move { tx_a.send("ping".to_string()).await });
    tokio::spawn(async move { tx_b.send("pong".to_string()).await });

    let combined = read_from_both(&mut rx_a, &mut rx_b).await.unwrap();
    assert!(combined.contains("ping"));
    assert!(combined.contains("pong"));
}

#[tokio::test(start_paused = true)]
async fn read_from_both_waits_for_the_slower_channel() {
    let (tx_a, mut rx_a) = channel();
    let (tx_b, mut rx_b) = channel();
    tokio::spawn(async move { tx_a.send("fast".to_string()).await });
    tokio::spawn(async move {
        tokio::time::sleep(ms(200)).await;
        tx_b.send("slow".to_string()).await
    });

    let started = tokio::time::Instant::now();
    let combined = read_from_both(&mut rx_a, &mut rx_b).await.unwrap();
    assert_eq!(combined, "read: fast & slow");
    assert!(started.elapsed() >= ms(200));
}

#[tokio::test]
async fn relay_chain_applies_each_stage() {
    let (source_tx, mut stage1_rx) = channel();
    let (stage1_tx, mut stage2_rx) = channel();
    let (stage2_tx, mut sink_rx) = channel();

    let first = tokio::spawn(async move { read_then_write(&mut stage1_rx, &stage1_tx).await });
    let second = tokio::spawn(async move { read_then_write(&mut stage2_rx, &stage2_tx).await });

    source_tx.send("seed".to_string()).await.unwrap();
    assert_eq!(
        sink_rx.recv().await.unwrap(),
        "transform: transform: seed"
    );
    assert_eq!(first.await.unwrap(), Ok(()));
    assert_eq!(second.await.unwrap(), Ok(()));
}

#[tokio::test]
async fn fan_out_then_relay() {
    let (tx_a, mut rx_a) = channel();
    let (tx_b, mut rx_b) = channel();
    write_to_both(&tx_a, &tx_b, "hi");

    let (out_tx, mut out_rx) = channel();
    let relay = tokio::spawn(async move { read_then_write(&mut rx_a, &out_tx).await });

    assert_eq!(out_rx.recv().await.unwrap(), "transform: write: hi");
    assert_eq!(rx_b.recv().await.unwrap(), "write: hi");
    assert_eq!(relay.await.unwrap(), Ok(()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn request_round_trip_on_multi_thread_runtime() {
    assert_eq!(send_request("job-1").await.unwrap(), "processed: job-1");
}

#[tokio::test]
async fn relay_with_closed_input_reports_sender_dropped() {
    let (input_tx, mut input_rx) = channel::<String>();
    let (output_tx, _output_rx) = channel::<String>();
    drop(input_tx);

    assert_eq!(
        read_then_write(&mut input_rx, &output_tx).await,
        Err(HandoffError::SenderDropped)
    );
}
