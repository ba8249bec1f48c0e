//! Debug domain: tests for the trace recorder and overlay helpers.

use super::systems::pending_edges;
use super::trace::{MotionTrace, TickRecord};
use crate::motion::{Action, InputLatch};

fn record(time: f32) -> TickRecord {
    TickRecord {
        tick: 0,
        time,
        position: [0.0, 0.0],
        velocity: [1.0, -2.0],
        grounded: true,
        ended_jump_early: false,
        attached: false,
        tether_length: 0.0,
        boost_usable: false,
        boost_active: false,
    }
}

#[test]
fn test_trace_drops_oldest_past_capacity() {
    let mut trace = MotionTrace::with_capacity(3);
    for i in 0..5 {
        trace.push(record(i as f32));
    }

    assert_eq!(trace.records.len(), 3);
    let ticks: Vec<_> = trace.records.iter().map(|r| r.tick).collect();
    assert_eq!(ticks, vec![2, 3, 4]);
}

#[test]
fn test_trace_serializes_as_json_array() {
    let mut trace = MotionTrace::with_capacity(4);
    trace.push(record(0.5));

    let json = trace.to_json().expect("trace serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value[0]["time"], 0.5);
    assert_eq!(value[0]["velocity"][1], -2.0);
    assert_eq!(value[0]["grounded"], true);
}

#[test]
fn test_pending_edges_lists_latched_actions_in_order() {
    let mut latch = InputLatch::default();
    assert_eq!(pending_edges(&latch), "-");

    latch.latch(Action::BoostPress);
    latch.latch_jump(1.0);
    assert_eq!(pending_edges(&latch), "Jump BoostPress");

    latch.drain();
    assert_eq!(pending_edges(&latch), "-");
}
