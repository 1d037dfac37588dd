//! Advisor Runtime - segment agents, the jury and the LLM providers behind them
//!
//! This crate drives one analysis from a validated request to a verdict:
//! - Selects segments through the deterministic filter in `caradvisor-core`
//! - Fans one reasoning call per selected segment out concurrently (`dispatcher`)
//! - Drops the batch when every proposal falls outside the budget
//! - Asks a single jury call to pick the winner (`jury`)
//! - Restates prices for markets that reason on a reference budget
//!
//! # Key Types
//!
//! - `AdvisorRuntime` - Main orchestrator (see `runtime` module)
//! - `ReasoningService` - Prompting and decoding seam, faked in tests
//! - `LlmClient` - Pluggable trait for Anthropic/Gemini
//!
//! # Degradation
//!
//! A failed or garbled agent reply becomes an empty proposal and a failed jury
//! reply becomes the sentinel verdict. Only selection and validation reject.

pub mod dispatcher;
pub mod jury;
pub mod llm;
pub mod parse;
pub mod prompts;
pub mod providers;
pub mod reasoning;
pub mod runtime;

pub use llm::{ClientInfo, ImagePayload, LlmClient};
pub use parse::{AgentReply, JuryReply};
pub use reasoning::{LlmReasoningService, ReasoningService, SegmentBrief};
pub use runtime::AdvisorRuntime;
