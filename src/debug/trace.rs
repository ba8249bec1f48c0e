//! Debug domain: per-tick motion trace for offline inspection.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Serialize;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use crate::motion::{BoostState, GrappleState, MotionState, Player};

pub const TRACE_FILE: &str = "motion_trace.json";

/// One fixed tick as seen after the motion core ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickRecord {
    pub tick: u64,
    pub time: f32,
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub grounded: bool,
    pub ended_jump_early: bool,
    pub attached: bool,
    pub tether_length: f32,
    pub boost_usable: bool,
    pub boost_active: bool,
}

/// Ring buffer of the most recent tick records.
#[derive(Resource, Debug)]
pub struct MotionTrace {
    pub records: VecDeque<TickRecord>,
    pub capacity: usize,
    next_tick: u64,
}

impl Default for MotionTrace {
    fn default() -> Self {
        Self::with_capacity(600)
    }
}

impl MotionTrace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
            next_tick: 0,
        }
    }

    pub fn push(&mut self, mut record: TickRecord) {
        record.tick = self.next_tick;
        self.next_tick += 1;
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }

    pub fn write_to(&self, path: &Path) -> Result<usize, String> {
        let json = self.to_json().map_err(|e| format!("Serialize error: {}", e))?;
        fs::write(path, json).map_err(|e| format!("IO error: {}", e))?;
        Ok(self.records.len())
    }
}

pub(crate) fn record_motion_trace(
    time: Res<Time>,
    mut trace: ResMut<MotionTrace>,
    query: Query<(&Position, &MotionState, &GrappleState, &BoostState), With<Player>>,
) {
    for (position, motion, grapple, boost) in &query {
        trace.push(TickRecord {
            tick: 0,
            time: time.elapsed_secs(),
            position: position.0.to_array(),
            velocity: motion.velocity.to_array(),
            grounded: motion.grounded,
            ended_jump_early: motion.ended_jump_early,
            attached: grapple.attached,
            tether_length: grapple.tether_length(),
            boost_usable: boost.usable,
            boost_active: boost.active,
        });
    }
}

