//! Ordered select tests

use tether_handoff::{DEFAULT_SELECT_DELAYS, SOURCE_COUNT, select_ordered};

use crate::common::ms;

#[tokio::test(start_paused = true)]
async fn five_sources_serviced_in_ascending_delay_order() {
    let mut lines: Vec<String> = Vec::new();
    let serviced = select_ordered([ms(1), ms(2), ms(3), ms(4), ms(5)], &mut lines)
        .await
        .unwrap();

    assert_eq!(serviced.len(), SOURCE_COUNT);
    assert_eq!(serviced.first().map(String::as_str), Some("from c1"));
    assert_eq!(serviced.last().map(String::as_str), Some("from c5"));
    assert_eq!(lines, serviced);
}

#[tokio::test(start_paused = true)]
async fn interleaved_delays_are_sorted_by_readiness() {
    let mut lines: Vec<String> = Vec::new();
    select_ordered(DEFAULT_SELECT_DELAYS, &mut lines)
        .await
        .unwrap();

    assert_eq!(
        lines,
        vec!["from c1", "from c4", "from c2", "from c5", "from c3"]
    );
}

#[tokio::test]
async fn real_clock_still_orders_well_separated_sources() {
    let mut lines: Vec<String> = Vec::new();
    select_ordered([ms(80), ms(20), ms(60), ms(0), ms(40)], &mut lines)
        .await
        .unwrap();

    assert_eq!(
        lines,
        vec!["from c4", "from c2", "from c5", "from c3", "from c1"]
    );
}
