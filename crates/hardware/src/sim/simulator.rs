//! Simulator: owns the pipeline state and its instruction source.
//!
//! One cycle runs Execute, Commit, Issue, Rename & Dispatch and Fetch in that
//! order, then clears the forwarding network. The run ends after the first cycle
//! that leaves the decode buffer and active list empty with no exception pending.

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::pipeline::stages::{
    commit_stage, execute_stage, fetch_stage, issue_stage, rename_stage,
};
use crate::core::pipeline::state::PipelineState;
use crate::core::pipeline::traits::InstructionSource;
use crate::stats::SimStats;

use super::trace::{StateSink, StateSnapshot};

/// Top-level simulator: pipeline state plus the program feeding it.
#[derive(Debug)]
pub struct Simulator<S> {
    state: PipelineState,
    source: S,
    config: Config,
}

impl<S: InstructionSource> Simulator<S> {
    /// Creates a simulator in the boot state after validating `config`.
    pub fn new(source: S, config: Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            state: PipelineState::new(&config.pipeline),
            source,
            config,
        })
    }

    /// Returns the current pipeline state.
    pub const fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Returns the configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the counters collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.state.stats
    }

    /// Captures the visible state.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(&self.state)
    }

    /// Returns true once the program has drained and no exception is pending.
    pub fn is_finished(&self) -> bool {
        self.state.is_drained()
    }

    /// Advances the pipeline by one clock cycle.
    pub fn step(&mut self) -> Result<(), SimError> {
        let pipeline = &self.config.pipeline;
        execute_stage(&mut self.state)?;
        commit_stage(&mut self.state, pipeline)?;
        issue_stage(&mut self.state, pipeline)?;
        rename_stage(&mut self.state, pipeline)?;
        fetch_stage(&mut self.state, &mut self.source, &self.config);
        self.state.forwarding.clear();
        self.state.stats.cycles += 1;

        tracing::trace!(
            cycle = self.state.stats.cycles,
            pc = self.state.pc,
            decoded = self.state.decode_buffer.len(),
            in_flight = self.state.active_list.len(),
            queued = self.state.integer_queue.len(),
            exception = self.state.exception,
            "cycle"
        );
        Ok(())
    }

    /// Runs to completion, reporting the boot snapshot and one snapshot per cycle.
    ///
    /// Returns the final counters. Fails with [`SimError::CycleLimit`] if
    /// `general.max_cycles` is set and the program has not drained by then.
    pub fn run<K>(&mut self, sink: &mut K) -> Result<SimStats, SimError>
    where
        K: StateSink + ?Sized,
    {
        sink.record(self.snapshot())?;
        loop {
            if let Some(limit) = self.config.general.max_cycles {
                if self.state.stats.cycles >= limit {
                    tracing::warn!(limit, "cycle limit reached before the pipeline drained");
                    return Err(SimError::CycleLimit(limit));
                }
            }
            self.step()?;
            sink.record(self.snapshot())?;
            if self.is_finished() {
                break;
            }
        }
        tracing::debug!(
            cycles = self.state.stats.cycles,
            committed = self.state.stats.instructions_committed,
            "simulation finished"
        );
        Ok(self.state.stats.clone())
    }
}
