//! Configuration system for the emulator.
//!
//! This module defines the structures that parameterize an emulator
//! instance. It provides:
//! 1. **Defaults:** Baseline memory-layout and execution constants.
//! 2. **Structures:** Hierarchical config for the memory layout and the
//!    execution policy.
//!
//! Configuration is per instance, not process-global: every `Cpu` owns the
//! values it was built with, so two emulators with different layouts can
//! coexist. Overrides are supplied as JSON; every field is individually
//! defaulted so partial documents work.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Base address of the code segment (64 KiB).
    ///
    /// The binary image is loaded here and the program counter starts here.
    pub const CODE_BASE: u32 = 0x0001_0000;

    /// Base address of the data segment (1 MiB).
    pub const DATA_BASE: u32 = 0x0010_0000;

    /// Base address of the heap segment (16 MiB).
    pub const HEAP_BASE: u32 = 0x0100_0000;

    /// Initial stack pointer; the stack grows toward lower addresses.
    pub const STACK_TOP: u32 = 0x7fff_0000;

    /// Initial capacity of the backing store (2 MiB), zero-filled.
    pub const INITIAL_CAPACITY: usize = 2 * 1024 * 1024;

    /// Ceiling on backing-store growth (2 GiB).
    ///
    /// The ceiling must cover the highest segment in use; with the default
    /// stack top just under 2 GiB, a smaller ceiling would fault the first
    /// stack access.
    pub const CAPACITY_LIMIT: usize = 0x8000_0000;

    /// Instruction budget per call (16 Mi instructions).
    ///
    /// Bounds adversarial or non-terminating input; generous for any
    /// function a front-end realistically feeds the emulator.
    pub const MAX_INSTRUCTIONS: u64 = 16 * 1024 * 1024;
}

/// Root configuration for one emulator instance.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rvcall_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.layout.code_base, 0x0001_0000);
/// assert_eq!(config.execution.trace, false);
/// ```
///
/// Deserializing a partial override:
///
/// ```
/// use rvcall_core::config::Config;
///
/// let json = r#"{ "layout": { "stack_top": 8388608 } }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.layout.stack_top, 0x0080_0000);
/// assert_eq!(config.layout.code_base, 0x0001_0000);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Memory segment layout and capacity policy.
    #[serde(default)]
    pub layout: MemoryLayout,
    /// Execution policy.
    #[serde(default)]
    pub execution: ExecutionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: MemoryLayout::default(),
            execution: ExecutionConfig::default(),
        }
    }
}

/// Memory segment base addresses and capacity policy.
///
/// The segment values are the conventional layout of the emulated address
/// space; only the code base and stack top are actively consumed (for
/// loading and the initial sp), the data and heap bases document the layout
/// for guests that address those regions directly.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryLayout {
    /// Code segment base; the image loads here and pc starts here.
    #[serde(default = "MemoryLayout::default_code_base")]
    pub code_base: u32,

    /// Data segment base.
    #[serde(default = "MemoryLayout::default_data_base")]
    pub data_base: u32,

    /// Heap segment base.
    #[serde(default = "MemoryLayout::default_heap_base")]
    pub heap_base: u32,

    /// Initial stack pointer (x2); the stack grows downward.
    #[serde(default = "MemoryLayout::default_stack_top")]
    pub stack_top: u32,

    /// Initial backing-store capacity in bytes.
    #[serde(default = "MemoryLayout::default_initial_capacity")]
    pub initial_capacity: usize,

    /// Backing-store growth ceiling in bytes.
    #[serde(default = "MemoryLayout::default_capacity_limit")]
    pub capacity_limit: usize,
}

impl MemoryLayout {
    /// Returns the default code segment base address.
    fn default_code_base() -> u32 {
        defaults::CODE_BASE
    }

    /// Returns the default data segment base address.
    fn default_data_base() -> u32 {
        defaults::DATA_BASE
    }

    /// Returns the default heap segment base address.
    fn default_heap_base() -> u32 {
        defaults::HEAP_BASE
    }

    /// Returns the default initial stack pointer.
    fn default_stack_top() -> u32 {
        defaults::STACK_TOP
    }

    /// Returns the default initial backing-store capacity.
    fn default_initial_capacity() -> usize {
        defaults::INITIAL_CAPACITY
    }

    /// Returns the default backing-store growth ceiling.
    fn default_capacity_limit() -> usize {
        defaults::CAPACITY_LIMIT
    }
}

impl Default for MemoryLayout {
    fn default() -> Self {
        Self {
            code_base: defaults::CODE_BASE,
            data_base: defaults::DATA_BASE,
            heap_base: defaults::HEAP_BASE,
            stack_top: defaults::STACK_TOP,
            initial_capacity: defaults::INITIAL_CAPACITY,
            capacity_limit: defaults::CAPACITY_LIMIT,
        }
    }
}

/// Execution policy for one call.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionConfig {
    /// Instruction budget; exceeding it is a fault.
    #[serde(default = "ExecutionConfig::default_max_instructions")]
    pub max_instructions: u64,

    /// Print one line per retired instruction to stderr.
    #[serde(default)]
    pub trace: bool,
}

impl ExecutionConfig {
    /// Returns the default instruction budget.
    fn default_max_instructions() -> u64 {
        defaults::MAX_INSTRUCTIONS
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_instructions: defaults::MAX_INSTRUCTIONS,
            trace: false,
        }
    }
}
