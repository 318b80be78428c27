//! Completion-order scheduler properties, run on a paused clock.

use sleepsort_engine::{TimeUnit, join_values, sort_by_delay, sort_by_delay_quiet};

use crate::common::{assert_permutation, texts, values};

#[tokio::test(start_paused = true)]
async fn output_is_a_permutation_of_input() {
    let inputs: [&[&str]; 4] = [
        &["3", "1", "2"],
        &["0", "0", "0"],
        &["1", "1", "0.5", "2", "0.5"],
        &["0.001", "0", "0.0005", "10"],
    ];

    for input in inputs {
        let sorted = sort_by_delay_quiet(values(input), TimeUnit::Seconds)
            .await
            .unwrap();
        assert_eq!(sorted.len(), input.len());
        assert_permutation(input, &sorted);
    }
}

#[tokio::test(start_paused = true)]
async fn distinct_values_come_out_ascending() {
    let sorted = sort_by_delay_quiet(values(&["5", "0.25", "3", "1.5", "0"]), TimeUnit::Seconds)
        .await
        .unwrap();
    assert_eq!(join_values(&sorted), "0 0.25 1.5 3 5");
}

#[tokio::test(start_paused = true)]
async fn many_timers_in_reverse_order() {
    let input: Vec<String> = (1..=50).rev().map(|n| n.to_string()).collect();
    let refs: Vec<&str> = input.iter().map(String::as_str).collect();

    let sorted = sort_by_delay_quiet(values(&refs), TimeUnit::Milliseconds)
        .await
        .unwrap();

    let expected: Vec<String> = (1..=50).map(|n| n.to_string()).collect();
    assert_eq!(texts(&sorted), expected);
}

#[tokio::test(start_paused = true)]
async fn single_zero_is_kept() {
    let sorted = sort_by_delay_quiet(values(&["0"]), TimeUnit::Seconds)
        .await
        .unwrap();
    assert_eq!(texts(&sorted), ["0"]);
}

#[tokio::test(start_paused = true)]
async fn zero_fires_before_a_small_positive_delay() {
    let sorted = sort_by_delay_quiet(values(&["0.01", "0"]), TimeUnit::Seconds)
        .await
        .unwrap();
    assert_eq!(texts(&sorted), ["0", "0.01"]);
}

#[tokio::test(start_paused = true)]
async fn single_value_is_returned_unchanged() {
    for text in ["5", "0", "0.75", "1e-3"] {
        let sorted = sort_by_delay_quiet(values(&[text]), TimeUnit::Seconds)
            .await
            .unwrap();
        assert_eq!(texts(&sorted), [text]);
    }
}

#[tokio::test(start_paused = true)]
async fn original_text_is_preserved() {
    let sorted = sort_by_delay_quiet(values(&["2.0", "0.50", "1"]), TimeUnit::Seconds)
        .await
        .unwrap();
    assert_eq!(join_values(&sorted), "0.50 1 2.0");
}

#[tokio::test(start_paused = true)]
async fn live_hook_sees_the_final_order() {
    let input = ["4", "2", "0", "3", "1"];
    let mut live = Vec::new();

    let sorted = sort_by_delay(values(&input), TimeUnit::Seconds, |value| {
        live.push(value.text().to_owned());
    })
    .await
    .unwrap();

    assert_eq!(live, texts(&sorted));
}

#[tokio::test(start_paused = true)]
async fn live_hook_does_not_change_the_result() {
    let input = ["0.3", "0.1", "0.2", "0"];

    let quiet = sort_by_delay_quiet(values(&input), TimeUnit::Seconds)
        .await
        .unwrap();
    let mut calls = 0;
    let live = sort_by_delay(values(&input), TimeUnit::Seconds, |_| calls += 1)
        .await
        .unwrap();

    assert_eq!(quiet, live);
    assert_eq!(calls, input.len());
}

#[tokio::test(start_paused = true)]
async fn units_scale_the_delays() {
    let started = tokio::time::Instant::now();
    let sorted = sort_by_delay_quiet(values(&["20", "10"]), TimeUnit::Milliseconds)
        .await
        .unwrap();

    assert_eq!(texts(&sorted), ["10", "20"]);
    assert!(started.elapsed() < std::time::Duration::from_secs(1));
}
