//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every flag only affects `log` output, never behaviour.

pub struct DebugFlags {
    /// Emit per-metric counts of rows dropped by the normalizer.
    pub print_row_drops: bool,
    /// Emit a line whenever a superseded generation's result is discarded.
    pub print_stale_generations: bool,
    /// Emit fetch timings and resource names.
    pub print_fetch_events: bool,
    /// Emit selector changes (year switches, generation numbers).
    pub print_selection_events: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_row_drops: false,
    print_stale_generations: true,
    print_fetch_events: false,
    print_selection_events: true,
};
