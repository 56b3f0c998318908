// Interrupt request lines shared between the PPU and the CPU.
//
// The 6502 in the NES exposes two external interrupt inputs: a level-sampled
// IRQ line and an edge-triggered NMI line. Neither carries any payload beyond
// "pending" — the CPU samples them once per instruction boundary and clears
// whichever one it services.

/// Latched IRQ/NMI request lines.
///
/// NMI is edge-triggered: the PPU asserts it exactly once per VBlank entry,
/// and the CPU must deassert it after servicing so that a second NMI cannot
/// fire until the next VBlank re-asserts the line. IRQ is level-sampled and
/// maskable via the CPU's INTERRUPT_DISABLE flag; nothing in this core drives
/// it today; it exists so mapper/APU IRQ sources have somewhere to signal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InterruptLines {
    nmi: bool,
    irq: bool,
}

impl InterruptLines {
    /// Create a new set of interrupt lines, both deasserted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the NMI line. Called by the PPU on VBlank entry.
    pub fn assert_nmi(&mut self) {
        self.nmi = true;
    }

    /// Lower the NMI line. Called by the CPU once it has serviced the NMI.
    pub fn deassert_nmi(&mut self) {
        self.nmi = false;
    }

    /// True if NMI is currently pending.
    pub fn sample_nmi(&self) -> bool {
        self.nmi
    }

    /// Raise the IRQ line. Held asserted until the source clears it.
    pub fn assert_irq(&mut self) {
        self.irq = true;
    }

    /// Lower the IRQ line.
    pub fn deassert_irq(&mut self) {
        self.irq = false;
    }

    /// True if IRQ is currently asserted (maskability is the CPU's concern).
    pub fn sample_irq(&self) -> bool {
        self.irq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nmi_starts_deasserted() {
        let lines = InterruptLines::new();
        assert!(!lines.sample_nmi());
    }

    #[test]
    fn nmi_assert_and_deassert() {
        let mut lines = InterruptLines::new();
        lines.assert_nmi();
        assert!(lines.sample_nmi());
        lines.deassert_nmi();
        assert!(!lines.sample_nmi());
    }

    #[test]
    fn irq_assert_and_deassert() {
        let mut lines = InterruptLines::new();
        lines.assert_irq();
        assert!(lines.sample_irq());
        lines.deassert_irq();
        assert!(!lines.sample_irq());
    }

    #[test]
    fn nmi_and_irq_are_independent() {
        let mut lines = InterruptLines::new();
        lines.assert_nmi();
        assert!(lines.sample_nmi());
        assert!(!lines.sample_irq());
    }
}
