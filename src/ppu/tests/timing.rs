//! PPU Timing Tests
//!
//! Tests for cycle-accurate PPU timing including:
//! - Cycle and scanline tracking
//! - Frame completion

use super::*;

#[test]
fn step_advances_cycle_counter_by_three_times_cpu_cycles() {
    let mut ppu = ppu_with_mapper();
    ppu.step(1);
    assert_eq!(ppu.cycle(), 3);
}

#[test]
fn step_advances_scanline_after_341_dots() {
    let mut ppu = ppu_with_mapper();
    for _ in 0..114 {
        ppu.step(1);
    }
    assert_eq!(ppu.scanline(), 1);
}

#[test]
fn vblank_flag_sets_at_scanline_241() {
    let mut ppu = ppu_with_mapper();
    let cycles_per_line = CYCLES_PER_SCANLINE / 3 + 1;
    for _ in 0..(cycles_per_line * 241) {
        ppu.step(1);
    }
    assert_ne!(ppu.status & 0x80, 0);
}

#[test]
fn nmi_pending_only_when_ctrl_nmi_bit_set() {
    let mut ppu = ppu_with_mapper();
    let cycles_per_line = CYCLES_PER_SCANLINE / 3 + 1;
    for _ in 0..(cycles_per_line * 241) {
        ppu.step(1);
    }
    assert!(!ppu.nmi_pending());
}

#[test]
fn nmi_pending_when_ctrl_nmi_bit_set_at_vblank() {
    let mut ppu = ppu_with_mapper();
    crate::bus::MemoryMappedDevice::write(&mut ppu, PPUCTRL, 0x80);
    let cycles_per_line = CYCLES_PER_SCANLINE / 3 + 1;
    for _ in 0..(cycles_per_line * 241) {
        ppu.step(1);
    }
    assert!(ppu.nmi_pending());
}

#[test]
fn frame_completes_at_scanline_wrap_and_returns_frame() {
    let mut ppu = ppu_with_mapper();
    let total_cycles = (SCANLINES_PER_FRAME * CYCLES_PER_SCANLINE) / 3 + SCANLINES_PER_FRAME;
    let mut frame = None;
    for _ in 0..total_cycles {
        if let Some(f) = ppu.step(1) {
            frame = Some(f);
            break;
        }
    }
    assert!(frame.is_some());
    assert_eq!(ppu.scanline(), 0);
}

#[test]
fn frame_count_increments_once_per_completed_frame() {
    let mut ppu = ppu_with_mapper();
    let total_cycles = (SCANLINES_PER_FRAME * CYCLES_PER_SCANLINE) / 3 + SCANLINES_PER_FRAME;
    for _ in 0..total_cycles {
        ppu.step(1);
    }
    assert_eq!(ppu.frame_count(), 1);
}

#[test]
fn step_with_zero_cycles_does_not_advance_scanline() {
    let mut ppu = ppu_with_mapper();
    ppu.step(0);
    assert_eq!(ppu.scanline(), 0);
    assert_eq!(ppu.cycle(), 0);
}
