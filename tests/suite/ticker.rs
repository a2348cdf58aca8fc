//! Periodic timer loop tests

use tether_ticker::{PeriodicSource, TickerSettings, run_ticker};

use crate::common::ms;

fn settings(short: u64, deadline: u64) -> TickerSettings {
    TickerSettings {
        short_interval: ms(short),
        long_interval: ms(short * 2),
        deadline: ms(deadline),
        ..TickerSettings::default()
    }
}

#[tokio::test(start_paused = true)]
async fn tick_counts_match_floor_of_deadline() {
    for (short, deadline) in [(50, 375), (100, 1000), (30, 31), (250, 3000)] {
        let mut lines: Vec<String> = Vec::new();
        let report = run_ticker(&settings(short, deadline), &mut lines)
            .await
            .unwrap();

        assert_eq!(report.short_ticks, deadline / short, "short={short} deadline={deadline}");
        assert_eq!(report.long_ticks, deadline / (short * 2), "short={short} deadline={deadline}");
        assert_eq!(lines.len() as u64, report.short_ticks + report.long_ticks);
        assert_eq!(report.elapsed, ms(deadline));
    }
}

#[tokio::test(start_paused = true)]
async fn every_long_tick_is_preceded_by_its_short_tick() {
    let mut lines: Vec<String> = Vec::new();
    run_ticker(&settings(10, 100), &mut lines).await.unwrap();

    for (i, line) in lines.iter().enumerate() {
        if line == "world" {
            assert_eq!(lines[i - 1], "hello");
        }
    }
}

#[tokio::test(start_paused = true)]
async fn stopped_source_reports_delivered_ticks() {
    let mut source = PeriodicSource::start("heartbeat", ms(20));
    for _ in 0..3 {
        source.tick().await;
    }
    assert_eq!(source.label(), "heartbeat");
    assert_eq!(source.stop(), 3);
}
